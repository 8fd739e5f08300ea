//! Open Graph and Twitter Card data.
//!
//! Pure data structures; `seo::head` turns them into `<meta>` tags.

use serde::Serialize;

use super::defaults::{SiteDefaults, is_absolute_url};

/// Social image width every page advertises.
pub const IMAGE_WIDTH: u32 = 1200;
/// Social image height every page advertises.
pub const IMAGE_HEIGHT: u32 = 630;
/// The only Twitter card type the site uses.
pub const TWITTER_CARD: &str = "summary_large_image";

/// Open Graph block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    pub site_name: String,
    pub locale: String,
    /// `type` plus, for articles only, the nested `article` block.
    #[serde(flatten)]
    pub kind: OgKind,
    pub images: [OgImage; 1],
}

/// `og:type`, carrying article fields only where they make sense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "article", rename_all = "lowercase")]
pub enum OgKind {
    Website,
    Article(OgArticle),
}

impl OgKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Article(_) => "article",
        }
    }

    pub fn article(&self) -> Option<&OgArticle> {
        match self {
            Self::Website => None,
            Self::Article(article) => Some(article),
        }
    }
}

/// `article:*` properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OgArticle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_time: Option<String>,
    pub authors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    pub tags: Vec<String>,
}

/// Image descriptor with fixed social dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OgImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

impl OgImage {
    pub fn new(url: String, alt: String) -> Self {
        Self {
            url,
            width: IMAGE_WIDTH,
            height: IMAGE_HEIGHT,
            alt,
        }
    }
}

/// Twitter card block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: String,
    pub description: String,
    pub creator: String,
    pub images: [String; 1],
}

/// Resolve a social image URL.
///
/// Absolute URLs pass through verbatim. Anything else is replaced by the
/// placeholder, not joined onto the base URL: site-relative social images
/// aren't hosted yet.
pub fn resolve_image(image: &str, defaults: &SiteDefaults) -> String {
    if is_absolute_url(image) {
        image.to_owned()
    } else {
        defaults.placeholder_image.clone()
    }
}
