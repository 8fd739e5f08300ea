//! Breadcrumb trail resolution.
//!
//! A trail is either given explicitly by the page or derived from the
//! route path:
//!
//! ```text
//! /blog/understanding-heart-health-after-40
//!   -> Home (/)
//!   -> Blog (/blog)
//!   -> Understanding Heart Health After 40 (/blog/understanding-heart-health-after-40)
//! ```
//!
//! The last entry is always the current page, which is what lets the
//! renderer show it without a link.

use serde::{Deserialize, Serialize};

use crate::schema::BreadcrumbList;

/// One waypoint: display name and site-relative path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbEntry {
    pub name: String,
    pub path: String,
}

impl BreadcrumbEntry {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Resolved trail plus its structured-data projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Breadcrumbs {
    pub trail: Vec<BreadcrumbEntry>,
    pub schema: BreadcrumbList,
}

/// Resolve a breadcrumb trail.
///
/// A non-empty `explicit` list is used verbatim and `current_path` is
/// ignored; no prefix consistency is checked. Otherwise the trail is
/// derived from `current_path`, seeded with `home_label` at `/`.
pub fn resolve(
    explicit: &[BreadcrumbEntry],
    current_path: &str,
    home_label: &str,
    base_url: &str,
) -> Breadcrumbs {
    let trail = if explicit.is_empty() {
        trail_from_path(current_path, home_label)
    } else {
        explicit.to_vec()
    };
    let schema = BreadcrumbList::from_trail(&trail, base_url);
    Breadcrumbs { trail, schema }
}

/// Derive a trail from a route path, one entry per non-empty segment.
pub fn trail_from_path(path: &str, home_label: &str) -> Vec<BreadcrumbEntry> {
    let mut trail = vec![BreadcrumbEntry::new(home_label, "/")];
    let mut current = String::new();

    for segment in path.split('/').filter(|s| !s.is_empty()) {
        current.push('/');
        current.push_str(segment);
        trail.push(BreadcrumbEntry::new(segment_label(segment), current.clone()));
    }

    trail
}

/// Title-case a dash-separated slug segment.
///
/// Empty words from leading, trailing or doubled dashes are skipped. A
/// segment with no words at all (`"---"`) keeps its raw text.
pub fn segment_label(segment: &str) -> String {
    let label = segment
        .split('-')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");

    if label.is_empty() {
        segment.to_owned()
    } else {
        label
    }
}

/// Uppercase the first character, leave the rest untouched.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
