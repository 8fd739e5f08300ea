//! `[site]` section configuration.
//!
//! Site-wide defaults every page's metadata falls back to.
//!
//! # Example
//!
//! ```toml
//! [site]
//! url = "https://vigorformen.com"
//! name = "VigorForMen"
//! title = "VigorForMen - Health & Wellness for Middle-Aged Men"
//! description = "Evidence-based health and wellness information tailored for middle-aged men."
//! keywords = ["men's health", "fitness after 40", "wellness"]
//! image = "/images/og-image.jpg"
//! twitter = "@vigorformen"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

const URL: FieldPath = FieldPath::new("site.url");
const TWITTER: FieldPath = FieldPath::new("site.twitter");
const PLACEHOLDER_IMAGE: FieldPath = FieldPath::new("site.placeholder_image");

/// `[site]` section: brand identity and metadata defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Base URL, without trailing slash (e.g., "https://vigorformen.com").
    pub url: String,

    /// Brand name, used for `og:site_name` and publisher records.
    pub name: String,

    /// Default page title.
    pub title: String,

    /// Default page description.
    pub description: String,

    /// Keywords every page starts with.
    pub keywords: Vec<String>,

    /// Default social image (absolute or site-relative).
    pub image: String,

    /// Absolute image substituted for any non-absolute social image.
    pub placeholder_image: String,

    /// Default article authors.
    pub authors: Vec<String>,

    /// Twitter handle used as `twitter:creator`.
    pub twitter: String,

    /// Open Graph locale.
    pub locale: String,

    /// Site-relative logo path.
    pub logo: String,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            url: "https://vigorformen.com".into(),
            name: "VigorForMen".into(),
            title: "VigorForMen - Health & Wellness for Middle-Aged Men".into(),
            description:
                "Evidence-based health and wellness information tailored for middle-aged men."
                    .into(),
            keywords: vec![
                "men's health".into(),
                "fitness after 40".into(),
                "wellness".into(),
                "middle-aged men".into(),
                "health advice".into(),
            ],
            image: "/images/og-image.jpg".into(),
            placeholder_image: "https://placehold.co/1200x630/0f172a/ffffff?text=VigorForMen"
                .into(),
            authors: vec!["VigorForMen Team".into()],
            twitter: "@vigorformen".into(),
            locale: "en_US".into(),
            logo: "/images/logo.png".into(),
        }
    }
}

impl SiteSectionConfig {
    /// Base URL with any trailing slash removed, so `base + "/path"` never doubles up.
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `url` must be a valid http(s) URL with a host
    /// - `twitter` must be an `@handle` when set
    /// - `placeholder_image` must be absolute
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        match url::Url::parse(&self.url) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        URL,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://vigorformen.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        URL,
                        "URL must have a valid host",
                        "use format like https://vigorformen.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    URL,
                    format!("invalid URL: {e}"),
                    "use format like https://vigorformen.com",
                );
            }
        }

        if !self.twitter.is_empty() && !self.twitter.starts_with('@') {
            diag.error_with_hint(
                TWITTER,
                format!("'{}' is not a handle", self.twitter),
                format!("use \"@{}\"", self.twitter),
            );
        }

        if !self.placeholder_image.starts_with("http") {
            diag.error(PLACEHOLDER_IMAGE, "placeholder image must be an absolute URL");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn errors_for(site: &SiteSectionConfig) -> usize {
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        diag.len()
    }

    #[test]
    fn test_default_is_valid() {
        assert_eq!(errors_for(&SiteSectionConfig::default()), 0);
    }

    #[test]
    fn test_base_url_trims_trailing_slash() {
        let site = SiteSectionConfig {
            url: "https://example.test/".into(),
            ..Default::default()
        };
        assert_eq!(site.base_url(), "https://example.test");
    }

    #[test]
    fn test_rejects_bad_scheme() {
        let site = SiteSectionConfig {
            url: "ftp://example.test".into(),
            ..Default::default()
        };
        assert_eq!(errors_for(&site), 1);
    }

    #[test]
    fn test_rejects_unparsable_url() {
        let site = SiteSectionConfig {
            url: "vigorformen.com".into(),
            ..Default::default()
        };
        assert_eq!(errors_for(&site), 1);
    }

    #[test]
    fn test_rejects_handle_without_at() {
        let site = SiteSectionConfig {
            twitter: "vigorformen".into(),
            ..Default::default()
        };
        assert_eq!(errors_for(&site), 1);
    }

    #[test]
    fn test_empty_handle_allowed() {
        let site = SiteSectionConfig {
            twitter: String::new(),
            ..Default::default()
        };
        assert_eq!(errors_for(&site), 0);
    }

    #[test]
    fn test_rejects_relative_placeholder() {
        let site = SiteSectionConfig {
            placeholder_image: "/placeholder.png".into(),
            ..Default::default()
        };
        assert_eq!(errors_for(&site), 1);
    }
}
