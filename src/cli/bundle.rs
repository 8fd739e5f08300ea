//! `vigor bundle`: write every page bundle to a directory.
//!
//! Output layout:
//!
//! ```text
//! <out>/blog.json          listing
//! <out>/blog/<slug>.json   one per post
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use rayon::prelude::*;

use super::args::BundleArgs;
use super::load_catalog;
use super::output::to_json;
use crate::config::SiteConfig;
use crate::content::{PageBundle, PageContext, PostSource};
use crate::log;
use crate::utils::plural_count;

pub fn run_bundle(args: &BundleArgs, config: &SiteConfig) -> Result<()> {
    let store = load_catalog(&args.catalog, config)?;
    let written = write_bundles(&store, &PageContext::from_config(config), &args.out, args.pretty)?;
    log!("bundle"; "wrote {} to {}", plural_count(written, "bundle"), args.out.display());
    Ok(())
}

/// Write the listing and every post bundle, returning how many were written.
pub fn write_bundles(
    source: &dyn PostSource,
    ctx: &PageContext,
    out: &Path,
    pretty: bool,
) -> Result<usize> {
    let posts = source.all_posts();
    for post in &posts {
        check_slug(&post.slug)?;
    }

    let post_dir = out.join("blog");
    fs::create_dir_all(&post_dir)
        .with_context(|| format!("failed to create {}", post_dir.display()))?;

    write_bundle(&out.join("blog.json"), &ctx.blog_index(source), pretty)?;

    // Bundles share nothing, so each post is built and written independently.
    posts.par_iter().try_for_each(|post| {
        let detail = source
            .post_by_slug(&post.slug)
            .with_context(|| format!("post '{}' disappeared from the catalog", post.slug))?;
        let path = post_dir.join(format!("{}.json", post.slug));
        write_bundle(&path, &ctx.post_page(&detail), pretty)
    })?;

    Ok(posts.len() + 1)
}

fn write_bundle(path: &Path, bundle: &PageBundle, pretty: bool) -> Result<()> {
    let json = to_json(bundle, pretty)?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}

/// Slugs become file names; refuse anything that would escape `out`.
fn check_slug(slug: &str) -> Result<()> {
    if slug.is_empty() || slug.starts_with('.') || slug.contains(['/', '\\']) {
        bail!("post slug '{slug}' can't be used as a file name");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PostStore;

    const CATALOG: &str = r#"
[[post]]
title = "Understanding Heart Health After 40"
slug = "understanding-heart-health-after-40"
category = "Heart Health"
date = "March 15, 2025"

[[post]]
title = "Strength Training for Men Over 40"
slug = "strength-training-for-men-over-40"
category = "Fitness"
date = "March 10, 2025"

[[post]]
title = "Cardio Without the Gym"
slug = "cardio-without-the-gym"
category = "Fitness"
date = "2025-03-01"
"#;

    #[test]
    fn test_writes_listing_and_posts() {
        let dir = tempfile::tempdir().unwrap();
        let store = PostStore::from_toml_str(CATALOG).unwrap();
        let written = write_bundles(&store, &PageContext::default(), dir.path(), false).unwrap();
        assert_eq!(written, 4);

        let listing: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("blog.json")).unwrap())
                .unwrap();
        assert_eq!(
            listing["structuredData"][0]["mainEntity"]["itemListElement"]
                .as_array()
                .unwrap()
                .len(),
            3
        );

        let post = fs::read_to_string(
            dir.path()
                .join("blog")
                .join("strength-training-for-men-over-40.json"),
        )
        .unwrap();
        let post: serde_json::Value = serde_json::from_str(&post).unwrap();
        assert_eq!(post["metadata"]["title"], "Strength Training for Men Over 40");
        assert_eq!(post["related"][0]["path"], "/blog/cardio-without-the-gym");
        assert_eq!(post["related"].as_array().unwrap().len(), 1);

        let lone = fs::read_to_string(
            dir.path()
                .join("blog")
                .join("understanding-heart-health-after-40.json"),
        )
        .unwrap();
        let lone: serde_json::Value = serde_json::from_str(&lone).unwrap();
        assert!(lone.get("related").is_none());
    }

    #[test]
    fn test_empty_store_writes_listing_only() {
        let dir = tempfile::tempdir().unwrap();
        let written =
            write_bundles(&PostStore::default(), &PageContext::default(), dir.path(), true)
                .unwrap();
        assert_eq!(written, 1);
        assert!(dir.path().join("blog.json").exists());
    }

    #[test]
    fn test_check_slug() {
        assert!(check_slug("heart-health").is_ok());
        assert!(check_slug("../etc").is_err());
        assert!(check_slug("a/b").is_err());
        assert!(check_slug("").is_err());
    }
}
