//! Page metadata composition.
//!
//! Merges per-page overrides with [`SiteDefaults`] into a complete
//! [`PageMetadata`] record. Total and deterministic: missing fields fall
//! back to defaults and nothing is ever rejected.
//!
//! ```ignore
//! let meta = compose(&MetadataOverrides {
//!     title: Some("Strength Training for Men Over 40".into()),
//!     path: "/blog/strength-training-for-men-over-40".into(),
//!     ..Default::default()
//! }, &defaults);
//! assert_eq!(meta.canonical, "https://vigorformen.com/blog/strength-training-for-men-over-40");
//! ```

use rustc_hash::FxHashSet;
use serde::Serialize;

use super::defaults::SiteDefaults;
use super::og::{OgArticle, OgImage, OgKind, OpenGraph, TWITTER_CARD, TwitterCard, resolve_image};

// ============================================================================
// input
// ============================================================================

/// Per-page overrides. Every field is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataOverrides {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Appended after the default keywords.
    pub keywords: Vec<String>,
    /// Absolute URL or site-relative path.
    pub image: Option<String>,
    pub kind: PageKind,
    /// Site-relative path; empty for the bare base URL.
    pub path: String,
}

/// Content type. Article fields only exist on the article variant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PageKind {
    #[default]
    Website,
    Article(ArticleOverrides),
}

/// Article-only overrides.
///
/// Timestamps are taken as pre-formatted ISO-8601 strings; the composer
/// never invents them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleOverrides {
    pub published_time: Option<String>,
    pub modified_time: Option<String>,
    /// `None` means the site's default authors.
    pub authors: Option<Vec<String>>,
    pub section: Option<String>,
    pub tags: Vec<String>,
}

// ============================================================================
// output
// ============================================================================

/// Complete metadata for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub canonical: String,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
}

// ============================================================================
// composer
// ============================================================================

/// Compose page metadata from overrides and site defaults.
pub fn compose(overrides: &MetadataOverrides, defaults: &SiteDefaults) -> PageMetadata {
    let title = or_default(overrides.title.as_deref(), &defaults.title);
    let description = or_default(overrides.description.as_deref(), &defaults.description);
    let keywords = merge_keywords(&defaults.keywords, &overrides.keywords);
    let canonical = defaults.url_for(&overrides.path);
    let image = resolve_image(
        overrides.image.as_deref().unwrap_or(&defaults.image),
        defaults,
    );

    let kind = match &overrides.kind {
        PageKind::Website => OgKind::Website,
        PageKind::Article(article) => OgKind::Article(OgArticle {
            published_time: article.published_time.clone(),
            modified_time: article.modified_time.clone(),
            authors: article
                .authors
                .clone()
                .unwrap_or_else(|| defaults.authors.clone()),
            section: article.section.clone(),
            tags: article.tags.clone(),
        }),
    };

    let open_graph = OpenGraph {
        title: title.clone(),
        description: description.clone(),
        url: canonical.clone(),
        site_name: defaults.site_name.clone(),
        locale: defaults.locale.clone(),
        kind,
        images: [OgImage::new(image.clone(), title.clone())],
    };

    let twitter = TwitterCard {
        card: TWITTER_CARD,
        title: title.clone(),
        description: description.clone(),
        creator: defaults.twitter.clone(),
        images: [image],
    };

    PageMetadata {
        title,
        description,
        keywords,
        canonical,
        open_graph,
        twitter,
    }
}

/// An empty override counts as missing.
fn or_default(value: Option<&str>, default: &str) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or(default).to_owned()
}

/// Defaults followed by extras, first occurrence wins.
///
/// Comparison is exact: no case folding, no trimming.
pub fn merge_keywords(defaults: &[String], extra: &[String]) -> Vec<String> {
    let mut seen = FxHashSet::default();
    let mut merged = Vec::with_capacity(defaults.len() + extra.len());
    for keyword in defaults.iter().chain(extra) {
        if seen.insert(keyword.as_str()) {
            merged.push(keyword.clone());
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn defaults() -> SiteDefaults {
        SiteDefaults::default()
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    mod defaulting {
        use super::*;

        #[test]
        fn empty_overrides_use_defaults() {
            let d = defaults();
            let meta = compose(&MetadataOverrides::default(), &d);
            assert_eq!(meta.title, d.title);
            assert_eq!(meta.description, d.description);
            assert_eq!(meta.keywords, d.keywords);
            assert_eq!(meta.open_graph.title, d.title);
            assert_eq!(meta.twitter.description, d.description);
        }

        #[test]
        fn no_path_canonical_is_base_url() {
            let d = defaults();
            let meta = compose(&MetadataOverrides::default(), &d);
            assert_eq!(meta.canonical, d.base_url);
            assert_eq!(meta.open_graph.url, d.base_url);
        }

        #[test]
        fn path_appended_to_base_url() {
            let meta = compose(
                &MetadataOverrides {
                    path: "/blog".into(),
                    ..Default::default()
                },
                &defaults(),
            );
            assert_eq!(meta.canonical, "https://vigorformen.com/blog");
        }

        #[test]
        fn long_overrides_taken_verbatim() {
            let d = defaults();
            let long = "x".repeat(500);
            let meta = compose(
                &MetadataOverrides {
                    title: Some(long.clone()),
                    description: Some(String::new()),
                    ..Default::default()
                },
                &d,
            );
            assert_eq!(meta.title, long);
            assert_eq!(meta.description, d.description);
            assert_eq!(meta.open_graph.images[0].alt, long);
        }

        #[test]
        fn empty_overrides_fall_back() {
            let d = defaults();
            let meta = compose(
                &MetadataOverrides {
                    title: Some(String::new()),
                    description: Some(String::new()),
                    ..Default::default()
                },
                &d,
            );
            assert_eq!(meta.title, d.title);
            assert_eq!(meta.description, d.description);
            assert_eq!(meta.open_graph.title, d.title);
            assert_eq!(meta.twitter.description, d.description);
            assert_eq!(meta.open_graph.images[0].alt, d.title);
        }
    }

    mod keywords {
        use super::*;

        #[test]
        fn duplicates_within_overrides() {
            let d = SiteDefaults {
                keywords: Vec::new(),
                ..defaults()
            };
            let meta = compose(
                &MetadataOverrides {
                    keywords: strings(&["a", "b", "a"]),
                    ..Default::default()
                },
                &d,
            );
            assert_eq!(meta.keywords, strings(&["a", "b"]));
        }

        #[test]
        fn defaults_first_and_deduplicated() {
            let merged = merge_keywords(
                &strings(&["men's health", "wellness"]),
                &strings(&["nutrition", "wellness", "men's health", "sleep"]),
            );
            assert_eq!(
                merged,
                strings(&["men's health", "wellness", "nutrition", "sleep"])
            );
        }

        #[test]
        fn exact_match_only() {
            let merged = merge_keywords(
                &strings(&["Wellness"]),
                &strings(&["wellness", " wellness"]),
            );
            assert_eq!(merged, strings(&["Wellness", "wellness", " wellness"]));
        }

        #[test]
        fn every_input_keyword_present() {
            let d = defaults();
            let extra = strings(&["blog", "fitness", "wellness"]);
            let merged = merge_keywords(&d.keywords, &extra);
            for keyword in d.keywords.iter().chain(&extra) {
                assert_eq!(merged.iter().filter(|k| *k == keyword).count(), 1);
            }
        }
    }

    mod images {
        use super::*;

        #[test]
        fn absolute_image_preserved() {
            let meta = compose(
                &MetadataOverrides {
                    image: Some("https://x.test/a.png".into()),
                    ..Default::default()
                },
                &defaults(),
            );
            assert_eq!(meta.open_graph.images[0].url, "https://x.test/a.png");
            assert_eq!(meta.twitter.images, ["https://x.test/a.png".to_string()]);
        }

        #[test]
        fn relative_image_replaced_by_placeholder() {
            let d = defaults();
            let meta = compose(
                &MetadataOverrides {
                    image: Some("/local.png".into()),
                    ..Default::default()
                },
                &d,
            );
            assert_eq!(meta.open_graph.images[0].url, d.placeholder_image);
            assert_eq!(meta.twitter.images[0], d.placeholder_image);
        }

        #[test]
        fn default_image_goes_through_same_rule() {
            let d = defaults();
            let meta = compose(&MetadataOverrides::default(), &d);
            // the default "/images/og-image.jpg" is site-relative
            assert_eq!(meta.open_graph.images[0].url, d.placeholder_image);
        }

        #[test]
        fn alt_is_resolved_title() {
            let d = defaults();
            let meta = compose(&MetadataOverrides::default(), &d);
            assert_eq!(meta.open_graph.images[0].alt, d.title);
            assert_eq!(meta.open_graph.images[0].width, 1200);
            assert_eq!(meta.open_graph.images[0].height, 630);
        }
    }

    mod article {
        use super::*;

        #[test]
        fn article_block_present_for_articles() {
            let meta = compose(
                &MetadataOverrides {
                    kind: PageKind::Article(ArticleOverrides {
                        published_time: Some("2025-01-01T00:00:00Z".into()),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
                &defaults(),
            );
            let article = meta.open_graph.kind.article().unwrap();
            assert_eq!(
                article.published_time.as_deref(),
                Some("2025-01-01T00:00:00Z")
            );
            assert_eq!(article.modified_time, None);
        }

        #[test]
        fn website_has_no_article_block() {
            let meta = compose(&MetadataOverrides::default(), &defaults());
            assert!(meta.open_graph.kind.article().is_none());
            let value = serde_json::to_value(&meta).unwrap();
            assert!(value["openGraph"].get("article").is_none());
            assert_eq!(value["openGraph"]["type"], "website");
        }

        #[test]
        fn authors_default_to_site_authors() {
            let d = defaults();
            let meta = compose(
                &MetadataOverrides {
                    kind: PageKind::Article(ArticleOverrides::default()),
                    ..Default::default()
                },
                &d,
            );
            assert_eq!(meta.open_graph.kind.article().unwrap().authors, d.authors);
        }

        #[test]
        fn explicit_authors_kept() {
            let meta = compose(
                &MetadataOverrides {
                    kind: PageKind::Article(ArticleOverrides {
                        authors: Some(strings(&["Dr. Lee"])),
                        section: Some("Fitness".into()),
                        tags: strings(&["health"]),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
                &defaults(),
            );
            let article = meta.open_graph.kind.article().unwrap();
            assert_eq!(article.authors, strings(&["Dr. Lee"]));
            assert_eq!(article.section.as_deref(), Some("Fitness"));
            assert_eq!(article.tags, strings(&["health"]));
        }
    }

    #[test]
    fn test_twitter_block() {
        let d = defaults();
        let meta = compose(&MetadataOverrides::default(), &d);
        assert_eq!(meta.twitter.card, "summary_large_image");
        assert_eq!(meta.twitter.creator, "@vigorformen");
        assert_eq!(meta.twitter.images.len(), 1);
    }

    #[test]
    fn test_deterministic() {
        let overrides = MetadataOverrides {
            title: Some("T".into()),
            keywords: strings(&["k"]),
            path: "/p".into(),
            ..Default::default()
        };
        let d = defaults();
        assert_eq!(compose(&overrides, &d), compose(&overrides, &d));
    }

    #[test]
    fn test_serialized_shape() {
        let meta = compose(
            &MetadataOverrides {
                title: Some("Blog".into()),
                description: Some("Articles".into()),
                image: Some("https://x.test/a.png".into()),
                path: "/blog".into(),
                ..Default::default()
            },
            &SiteDefaults {
                keywords: strings(&["wellness"]),
                ..defaults()
            },
        );
        assert_eq!(
            serde_json::to_value(&meta).unwrap(),
            json!({
                "title": "Blog",
                "description": "Articles",
                "keywords": ["wellness"],
                "canonical": "https://vigorformen.com/blog",
                "openGraph": {
                    "title": "Blog",
                    "description": "Articles",
                    "url": "https://vigorformen.com/blog",
                    "siteName": "VigorForMen",
                    "locale": "en_US",
                    "type": "website",
                    "images": [{
                        "url": "https://x.test/a.png",
                        "width": 1200,
                        "height": 630,
                        "alt": "Blog"
                    }]
                },
                "twitter": {
                    "card": "summary_large_image",
                    "title": "Blog",
                    "description": "Articles",
                    "creator": "@vigorformen",
                    "images": ["https://x.test/a.png"]
                }
            })
        );
    }
}
