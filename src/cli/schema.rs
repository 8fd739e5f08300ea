//! `vigor schema`: print a site-level JSON-LD record.

use anyhow::{Context, Result};

use super::args::{CatalogArgs, OutputArgs, SchemaKind};
use super::load_catalog;
use super::output::write_json;
use crate::config::SiteConfig;
use crate::content::PageContext;
use crate::schema::{OrganizationSchema, Schema, WebSiteSchema};

pub fn run_schema(kind: SchemaKind, output: &OutputArgs, config: &SiteConfig) -> Result<()> {
    let schema = build(kind, config)?;
    write_json(&schema, output)
}

fn build(kind: SchemaKind, config: &SiteConfig) -> Result<Schema> {
    let ctx = PageContext::from_config(config);
    let schema = match kind {
        SchemaKind::Website => Schema::WebSite(WebSiteSchema::new(&ctx.defaults, &ctx.search)),
        SchemaKind::Organization => {
            Schema::Organization(OrganizationSchema::new(&ctx.defaults, &ctx.organization))
        }
        SchemaKind::Blog => {
            let store = load_catalog(&CatalogArgs::default(), config)?;
            ctx.blog_index(&store)
                .structured_data
                .into_iter()
                .next()
                .context("blog listing produced no structured data")?
        }
    };
    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_kind() {
        let config = SiteConfig::default();
        assert_eq!(build(SchemaKind::Website, &config).unwrap().kind(), "WebSite");
        assert_eq!(
            build(SchemaKind::Organization, &config).unwrap().kind(),
            "Organization"
        );
        assert_eq!(build(SchemaKind::Blog, &config).unwrap().kind(), "CollectionPage");
    }
}
