//! Vigor - page metadata, breadcrumbs and JSON-LD for the VigorForMen site.
//!
//! Every page gets its `<head>` metadata, breadcrumb trail and structured
//! data from here:
//!
//! - [`seo::compose`] merges per-page overrides with site defaults
//! - [`seo::resolve`] turns a route (or an explicit list) into a trail
//! - [`schema`] builds the schema.org records pages embed
//! - [`content::PageContext`] ties them together for blog pages
//!
//! All of it is deterministic and side-effect free; the `vigor` binary is
//! a thin layer that reads `vigor.toml` and a post catalog.

pub mod cli;
pub mod config;
pub mod content;
pub mod logger;
pub mod schema;
pub mod seo;
pub mod utils;
