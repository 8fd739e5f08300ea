//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::seo::BreadcrumbEntry;

/// Page metadata and JSON-LD generator for the VigorForMen site
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: vigor.toml)
    #[arg(short = 'C', long, global = true, default_value = "vigor.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Compose metadata for a page
    #[command(visible_alias = "m")]
    Meta {
        #[command(flatten)]
        args: MetaArgs,
    },

    /// Resolve a breadcrumb trail and its BreadcrumbList
    #[command(visible_alias = "c")]
    Crumbs {
        #[command(flatten)]
        args: CrumbsArgs,
    },

    /// Print a site-level JSON-LD record
    #[command(visible_alias = "s")]
    Schema {
        #[arg(value_enum)]
        kind: SchemaKind,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Build the page bundle of one post
    #[command(visible_alias = "p")]
    Post {
        /// Post slug, as in /blog/<SLUG>
        slug: String,

        #[command(flatten)]
        catalog: CatalogArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Write page bundles for every post and the listing
    #[command(visible_alias = "b")]
    Bundle {
        #[command(flatten)]
        args: BundleArgs,
    },

    /// Validate the config file and post catalog
    Check {
        #[command(flatten)]
        catalog: CatalogArgs,
    },
}

/// Output format for `meta`.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The metadata record as JSON
    #[default]
    Json,
    /// `<head>` tags
    Html,
}

/// Records `schema` can print.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    /// WebSite with search action
    Website,
    /// Publisher Organization
    Organization,
    /// CollectionPage of the blog listing
    Blog,
}

/// Meta command arguments.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct MetaArgs {
    /// Page title (default: site title)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Page description (default: site description)
    #[arg(short, long)]
    pub description: Option<String>,

    /// Extra keyword, appended after the site keywords (repeatable)
    #[arg(short, long = "keyword", value_name = "KEYWORD")]
    pub keywords: Vec<String>,

    /// Social image URL (non-absolute values use the placeholder)
    #[arg(short, long)]
    pub image: Option<String>,

    /// Site-relative page path
    #[arg(short, long, default_value = "")]
    pub path: String,

    /// Mark the page as an article
    #[arg(short, long)]
    pub article: bool,

    /// Article publish time (ISO 8601)
    #[arg(long, requires = "article")]
    pub published: Option<String>,

    /// Article modify time (ISO 8601)
    #[arg(long, requires = "article")]
    pub modified: Option<String>,

    /// Article section
    #[arg(long, requires = "article")]
    pub section: Option<String>,

    /// Article tag (repeatable)
    #[arg(long = "tag", value_name = "TAG", requires = "article")]
    pub tags: Vec<String>,

    /// Article author (repeatable, default: site authors)
    #[arg(long = "author", value_name = "AUTHOR", requires = "article")]
    pub authors: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Crumbs command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct CrumbsArgs {
    /// Route path to derive the trail from
    #[arg(default_value = "/")]
    pub path: String,

    /// Explicit trail entry as NAME=PATH (repeatable, replaces derivation)
    #[arg(short, long = "item", value_name = "NAME=PATH", value_parser = parse_entry)]
    pub items: Vec<BreadcrumbEntry>,

    /// Label of the root entry (default: [blog].home_label)
    #[arg(long)]
    pub home_label: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Post catalog override.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct CatalogArgs {
    /// Post catalog TOML (default: [blog].posts)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub posts: Option<PathBuf>,
}

/// Bundle command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct BundleArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Directory to write bundles into
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub out: PathBuf,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Shared JSON output arguments.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

/// Parse `NAME=PATH`; the name may itself contain `=`, the path may not.
fn parse_entry(s: &str) -> Result<BreadcrumbEntry, String> {
    let Some((name, path)) = s.rsplit_once('=') else {
        return Err(format!("expected NAME=PATH, got '{s}'"));
    };
    if name.is_empty() {
        return Err("entry name is empty".into());
    }
    Ok(BreadcrumbEntry::new(name, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("vigor").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_entry() {
        assert_eq!(
            parse_entry("Heart Health=/blog/category/heart-health").unwrap(),
            BreadcrumbEntry::new("Heart Health", "/blog/category/heart-health")
        );
        assert_eq!(
            parse_entry("a=b=/c").unwrap(),
            BreadcrumbEntry::new("a=b", "/c")
        );
        assert!(parse_entry("no-separator").is_err());
        assert!(parse_entry("=/x").is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = parse(&["check", "-C", "site.toml", "--verbose"]);
        assert_eq!(cli.config, PathBuf::from("site.toml"));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Check { .. }));
    }

    #[test]
    fn test_meta_article_flags() {
        let cli = parse(&[
            "meta", "--article", "--published", "2025-03-15", "--tag", "a", "--tag", "b",
        ]);
        let Commands::Meta { args } = cli.command else {
            panic!("expected meta");
        };
        assert!(args.article);
        assert_eq!(args.tags, ["a", "b"]);
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn test_article_fields_require_article() {
        let result = Cli::try_parse_from(["vigor", "meta", "--section", "Fitness"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_crumbs_items() {
        let cli = parse(&["crumbs", "/x", "-i", "Home=/", "-i", "X=/x"]);
        let Commands::Crumbs { args } = cli.command else {
            panic!("expected crumbs");
        };
        assert_eq!(args.items.len(), 2);
        assert_eq!(args.path, "/x");
    }

    #[test]
    fn test_schema_kind() {
        let cli = parse(&["schema", "organization"]);
        assert!(matches!(
            cli.command,
            Commands::Schema {
                kind: SchemaKind::Organization,
                ..
            }
        ));
    }
}
