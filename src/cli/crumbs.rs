//! `vigor crumbs`: resolve a breadcrumb trail.

use anyhow::Result;

use super::args::CrumbsArgs;
use super::output::write_json;
use crate::config::SiteConfig;
use crate::seo::resolve;

pub fn run_crumbs(args: &CrumbsArgs, config: &SiteConfig) -> Result<()> {
    let home_label = args
        .home_label
        .as_deref()
        .unwrap_or(&config.blog.home_label);
    let crumbs = resolve(&args.items, &args.path, home_label, config.site.base_url());
    write_json(&crumbs, &args.output)
}
