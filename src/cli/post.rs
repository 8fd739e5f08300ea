//! `vigor post`: the page bundle of one post.

use anyhow::Result;

use super::args::{CatalogArgs, OutputArgs};
use super::load_catalog;
use super::output::write_json;
use crate::config::SiteConfig;
use crate::content::{PageContext, PostSource};
use crate::log;

pub fn run_post(
    slug: &str,
    catalog: &CatalogArgs,
    output: &OutputArgs,
    config: &SiteConfig,
) -> Result<()> {
    let store = load_catalog(catalog, config)?;
    if store.post_by_slug(slug).is_none() {
        log!("warning"; "no post '{}', emitting the not-found page", slug);
    }
    let bundle = PageContext::from_config(config).post(&store, slug);
    write_json(&bundle, output)
}
