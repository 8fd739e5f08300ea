//! `Article` structured data for blog posts.

use serde::Serialize;

use super::{CONTEXT, ImageObject, Thing};
use crate::seo::SiteDefaults;

/// What the article schema needs to know about a post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleDetails {
    pub title: String,
    pub description: String,
    /// Absolute URL or site-relative path.
    pub image: String,
    /// RFC 3339.
    pub published_time: String,
    /// Falls back to `published_time`.
    pub modified_time: Option<String>,
    pub author_name: String,
    /// Falls back to the base URL.
    pub author_url: Option<String>,
    /// Site-relative path of the post page.
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub headline: String,
    pub description: String,
    pub image: String,
    pub author: Person,
    pub publisher: Publisher,
    pub date_published: String,
    pub date_modified: String,
    pub main_entity_of_page: Thing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Publisher {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub logo: ImageObject,
}

impl ArticleSchema {
    /// Build the schema for a post.
    ///
    /// Unlike social images, a site-relative article image is joined onto
    /// the base URL rather than swapped for the placeholder.
    pub fn new(details: &ArticleDetails, defaults: &SiteDefaults) -> Self {
        Self {
            context: CONTEXT,
            kind: "Article",
            headline: details.title.clone(),
            description: details.description.clone(),
            image: defaults.asset_url(&details.image),
            author: Person {
                kind: "Person",
                name: details.author_name.clone(),
                url: details
                    .author_url
                    .clone()
                    .unwrap_or_else(|| defaults.base_url.clone()),
            },
            publisher: Publisher {
                kind: "Organization",
                name: defaults.site_name.clone(),
                logo: ImageObject::new(defaults.asset_url(&defaults.logo)),
            },
            date_published: details.published_time.clone(),
            date_modified: details
                .modified_time
                .clone()
                .unwrap_or_else(|| details.published_time.clone()),
            main_entity_of_page: Thing::web_page(defaults.url_for(&details.path)),
        }
    }
}
