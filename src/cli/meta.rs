//! `vigor meta`: compose metadata for an arbitrary page.

use anyhow::Result;

use super::args::{MetaArgs, OutputFormat};
use super::output::{emit, write_json};
use crate::config::SiteConfig;
use crate::log;
use crate::seo::{
    ArticleOverrides, MetadataOverrides, PageKind, SiteDefaults, compose, render_head,
};
use crate::utils::date;

pub fn run_meta(args: &MetaArgs, config: &SiteConfig) -> Result<()> {
    let defaults = SiteDefaults::from_config(&config.site);
    let meta = compose(&overrides(args), &defaults);

    match args.format {
        OutputFormat::Json => write_json(&meta, &args.output),
        OutputFormat::Html => emit(&render_head(&meta), &args.output),
    }
}

fn overrides(args: &MetaArgs) -> MetadataOverrides {
    let kind = if args.article {
        PageKind::Article(ArticleOverrides {
            published_time: args.published.as_deref().map(timestamp),
            modified_time: args.modified.as_deref().map(timestamp),
            authors: (!args.authors.is_empty()).then(|| args.authors.clone()),
            section: args.section.clone(),
            tags: args.tags.clone(),
        })
    } else {
        PageKind::Website
    };

    MetadataOverrides {
        title: args.title.clone(),
        description: args.description.clone(),
        keywords: args.keywords.clone(),
        image: args.image.clone(),
        kind,
        path: args.path.clone(),
    }
}

/// Normalize a recognized date to RFC 3339; pass anything else through.
fn timestamp(raw: &str) -> String {
    date::normalize(raw).unwrap_or_else(|| {
        log!("warning"; "'{}' is not a recognized date, using it verbatim", raw);
        raw.to_owned()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_website_by_default() {
        let args = MetaArgs {
            title: Some("Members".into()),
            path: "/members".into(),
            ..Default::default()
        };
        let o = overrides(&args);
        assert_eq!(o.kind, PageKind::Website);
        assert_eq!(o.title.as_deref(), Some("Members"));
        assert_eq!(o.path, "/members");
    }

    #[test]
    fn test_article_dates_normalized() {
        let args = MetaArgs {
            article: true,
            published: Some("March 15, 2025".into()),
            modified: Some("2025-03-20".into()),
            ..Default::default()
        };
        let PageKind::Article(article) = overrides(&args).kind else {
            panic!("expected article");
        };
        assert_eq!(article.published_time.as_deref(), Some("2025-03-15T00:00:00Z"));
        assert_eq!(article.modified_time.as_deref(), Some("2025-03-20T00:00:00Z"));
        assert!(article.authors.is_none());
    }

    #[test]
    fn test_unrecognized_date_kept() {
        assert_eq!(timestamp("last tuesday"), "last tuesday");
    }

    #[test]
    fn test_explicit_authors() {
        let args = MetaArgs {
            article: true,
            authors: vec!["Dr. Lee".into()],
            ..Default::default()
        };
        let PageKind::Article(article) = overrides(&args).kind else {
            panic!("expected article");
        };
        assert_eq!(article.authors, Some(vec!["Dr. Lee".to_owned()]));
    }
}
