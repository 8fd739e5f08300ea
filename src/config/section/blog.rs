//! `[blog]` section configuration.
//!
//! ```toml
//! [blog]
//! path = "/blog"
//! label = "Blog"
//! home_label = "Home"
//! posts = "posts.toml"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const PATH: FieldPath = FieldPath::new("blog.path");

/// Blog listing and post page settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    /// Site-relative listing path.
    pub path: String,

    /// Breadcrumb label for the listing.
    pub label: String,

    /// Breadcrumb label for the home entry.
    pub home_label: String,

    /// Listing page title.
    pub title: String,

    /// Listing page description.
    pub description: String,

    /// Extra keywords for the listing page.
    pub keywords: Vec<String>,

    /// Post catalog, relative to the config file.
    pub posts: Option<PathBuf>,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            path: "/blog".into(),
            label: "Blog".into(),
            home_label: "Home".into(),
            title: "Blog - Health & Wellness Articles for Middle-Aged Men".into(),
            description: "Evidence-based articles on fitness, nutrition, mental health, and wellness specifically for men over 40.".into(),
            keywords: ["blog", "men's health", "fitness", "nutrition", "wellness", "mental health"]
                .map(String::from)
                .to_vec(),
            posts: None,
        }
    }
}

impl BlogConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.path.starts_with('/') {
            diag.error_with_hint(
                PATH,
                format!("'{}' is not site-relative", self.path),
                format!("use \"/{}\"", self.path.trim_start_matches('/')),
            );
        }
    }

    /// Path of a post page under the listing.
    pub fn post_path(&self, slug: &str) -> String {
        format!("{}/{slug}", self.path.trim_end_matches('/'))
    }

    /// Path of a category archive under the listing.
    pub fn category_path(&self, category_slug: &str) -> String {
        format!("{}/category/{category_slug}", self.path.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_and_category_paths() {
        let blog = BlogConfig::default();
        assert_eq!(blog.post_path("strength-training"), "/blog/strength-training");
        assert_eq!(blog.category_path("fitness"), "/blog/category/fitness");
    }

    #[test]
    fn test_trailing_slash_tolerated() {
        let blog = BlogConfig {
            path: "/articles/".into(),
            ..Default::default()
        };
        assert_eq!(blog.post_path("a"), "/articles/a");
    }

    #[test]
    fn test_relative_path_rejected() {
        let blog = BlogConfig {
            path: "blog".into(),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        blog.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }
}
