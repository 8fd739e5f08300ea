//! `vigor check`: report config and catalog problems.

use std::path::Path;

use anyhow::{Context, Result, bail};

use super::args::CatalogArgs;
use super::load_catalog;
use crate::config::{ConfigDiagnostics, SiteConfig, find_config_file};
use crate::content::{PostSource, PostStore};
use crate::log;
use crate::seo::is_absolute_url;
use crate::utils::plural_count;

pub fn run_check(config_name: &Path, catalog: &CatalogArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let config = match find_config_file(&cwd, config_name) {
        Some(path) => SiteConfig::from_path(&path)?,
        None => {
            log!("config"; "no {} found, checking built-in defaults", config_name.display());
            SiteConfig {
                root: cwd,
                ..Default::default()
            }
        }
    };

    let diag = config.diagnose();
    report(&diag);

    let store = load_catalog(catalog, &config)?;
    for warning in catalog_warnings(&store) {
        log!("warning"; "{}", warning);
    }

    if !diag.is_empty() {
        bail!("found {}", plural_count(diag.len(), "config error"));
    }
    log!(
        "check";
        "ok: {}, categories: {}",
        plural_count(store.len(), "post"),
        store.categories().len()
    );
    Ok(())
}

fn report(diag: &ConfigDiagnostics) {
    for error in diag.errors() {
        log!("error"; "{}", error);
    }
}

/// Problems that don't stop a build but degrade its output.
fn catalog_warnings(store: &PostStore) -> Vec<String> {
    let mut warnings = Vec::new();
    for post in store.all_posts() {
        if post.excerpt.is_empty() {
            warnings.push(format!(
                "post '{}' has no excerpt, its description falls back to the site's",
                post.slug
            ));
        }
        if let Some(image) = post.main_image.as_deref()
            && !is_absolute_url(image)
        {
            warnings.push(format!(
                "post '{}' image '{}' is not absolute, social cards will use the placeholder",
                post.slug, image
            ));
        }
    }
    warnings
}
