//! Site-wide metadata defaults.

use crate::config::SiteSectionConfig;

/// Values every page falls back to when it doesn't override them.
///
/// Built once from `[site]` and passed explicitly into the composer and
/// resolver, so two sites can be rendered side by side in one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteDefaults {
    /// Base URL without trailing slash.
    pub base_url: String,
    pub site_name: String,
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    /// Default social image (may be site-relative).
    pub image: String,
    /// Absolute image used whenever a social image isn't absolute.
    pub placeholder_image: String,
    pub authors: Vec<String>,
    pub twitter: String,
    pub locale: String,
    /// Site-relative logo path.
    pub logo: String,
}

impl SiteDefaults {
    /// Create defaults from the `[site]` section.
    pub fn from_config(site: &SiteSectionConfig) -> Self {
        Self {
            base_url: site.base_url().to_owned(),
            site_name: site.name.clone(),
            title: site.title.clone(),
            description: site.description.clone(),
            keywords: site.keywords.clone(),
            image: site.image.clone(),
            placeholder_image: site.placeholder_image.clone(),
            authors: site.authors.clone(),
            twitter: site.twitter.clone(),
            locale: site.locale.clone(),
            logo: site.logo.clone(),
        }
    }

    /// Absolute URL for a site-relative path (`""` yields the bare base URL).
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Absolute URL for an asset: absolute inputs pass through, anything
    /// else is joined onto the base URL.
    pub fn asset_url(&self, src: &str) -> String {
        if is_absolute_url(src) {
            src.to_owned()
        } else {
            self.url_for(src)
        }
    }

    /// Author to credit when a post doesn't name one.
    pub fn primary_author(&self) -> &str {
        self.authors.first().unwrap_or(&self.site_name)
    }
}

impl Default for SiteDefaults {
    fn default() -> Self {
        Self::from_config(&SiteSectionConfig::default())
    }
}

/// Whether a URL carries an http(s) scheme.
#[inline]
pub fn is_absolute_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}
