//! schema.org JSON-LD structured data.
//!
//! | Module         | `@type`          | Used on               |
//! |----------------|------------------|-----------------------|
//! | `breadcrumb`   | `BreadcrumbList` | every page with crumbs|
//! | `article`      | `Article`        | blog posts            |
//! | `website`      | `WebSite`        | home page             |
//! | `organization` | `Organization`   | home page             |
//! | `collection`   | `CollectionPage` | blog listing          |
//!
//! Every record is a plain typed tree deriving `Serialize`, so anything
//! that compiles can be serialized; `to_script_tag` additionally keeps the
//! payload from closing its `<script>` element early.

mod article;
mod breadcrumb;
mod collection;
mod organization;
mod website;

pub use article::{ArticleDetails, ArticleSchema, Person, Publisher};
pub use breadcrumb::{BreadcrumbItem, BreadcrumbList};
pub use collection::{CollectionPageSchema, ItemList, ListingEntry, ListingItem};
pub use organization::{ContactPoint, OrganizationSchema};
pub use website::{SearchAction, WebSiteSchema};

use serde::Serialize;
use thiserror::Error;

use crate::utils::html::escape_script_json;

/// `@context` of every top-level record.
pub const CONTEXT: &str = "https://schema.org";

pub(crate) const LIST_ITEM: &str = "ListItem";

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("failed to serialize structured data")]
    Json(#[from] serde_json::Error),
}

/// Any structured-data record a page can embed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Schema {
    Article(ArticleSchema),
    BreadcrumbList(BreadcrumbList),
    CollectionPage(CollectionPageSchema),
    Organization(OrganizationSchema),
    WebSite(WebSiteSchema),
}

impl Schema {
    /// The record's `@type`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Article(s) => s.kind,
            Self::BreadcrumbList(s) => s.kind,
            Self::CollectionPage(s) => s.kind,
            Self::Organization(s) => s.kind,
            Self::WebSite(s) => s.kind,
        }
    }
}

/// `{"@type": "ImageObject", "url": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageObject {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub url: String,
}

impl ImageObject {
    pub fn new(url: String) -> Self {
        Self {
            kind: "ImageObject",
            url,
        }
    }
}

/// A node referenced by `@id`, e.g. `mainEntityOfPage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Thing {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
}

impl Thing {
    pub fn web_page(id: String) -> Self {
        Self {
            kind: "WebPage",
            id,
        }
    }
}

/// Compact JSON.
pub fn to_json<T: Serialize>(schema: &T) -> Result<String, SchemaError> {
    Ok(serde_json::to_string(schema)?)
}

/// `<script type="application/ld+json">` element ready for `<head>`.
pub fn to_script_tag<T: Serialize>(schema: &T) -> Result<String, SchemaError> {
    let json = to_json(schema)?;
    Ok(format!(
        r#"<script type="application/ld+json">{}</script>"#,
        escape_script_json(&json)
    ))
}
