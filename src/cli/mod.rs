//! Command-line interface module.

mod args;
pub mod bundle;
pub mod check;
pub mod crumbs;
pub mod meta;
mod output;
pub mod post;
pub mod schema;

pub use args::{
    BundleArgs, CatalogArgs, Cli, Commands, CrumbsArgs, MetaArgs, OutputArgs, OutputFormat,
    SchemaKind,
};

use anyhow::{Context, Result};
use clap::ColorChoice;

use crate::config::SiteConfig;
use crate::content::PostStore;
use crate::utils::plural_count;
use crate::{debug, log, logger};

/// Apply global flags and dispatch to the subcommand.
pub fn run(cli: &Cli) -> Result<()> {
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = || SiteConfig::load(&cli.config);

    match &cli.command {
        Commands::Meta { args } => meta::run_meta(args, &config()?),
        Commands::Crumbs { args } => crumbs::run_crumbs(args, &config()?),
        Commands::Schema { kind, output } => schema::run_schema(*kind, output, &config()?),
        Commands::Post {
            slug,
            catalog,
            output,
        } => post::run_post(slug, catalog, output, &config()?),
        Commands::Bundle { args } => bundle::run_bundle(args, &config()?),
        // Reports config problems instead of failing on the first one.
        Commands::Check { catalog } => check::run_check(&cli.config, catalog),
    }
}

/// Load the post catalog named on the command line or in `[blog].posts`.
///
/// With neither, the store is empty: every post lookup is a not-found.
pub(crate) fn load_catalog(args: &CatalogArgs, config: &SiteConfig) -> Result<PostStore> {
    let Some(path) = args.posts.clone().or_else(|| config.posts_path()) else {
        log!("warning"; "no post catalog configured, using an empty one");
        return Ok(PostStore::default());
    };

    let store = PostStore::load(&path)
        .with_context(|| format!("failed to load post catalog {}", path.display()))?;
    debug!("catalog"; "loaded {} from {}", plural_count(store.len(), "post"), path.display());
    Ok(store)
}
