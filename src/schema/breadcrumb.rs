//! `BreadcrumbList` structured data.

use serde::Serialize;

use super::{CONTEXT, LIST_ITEM};
use crate::seo::BreadcrumbEntry;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreadcrumbList {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "itemListElement")]
    pub items: Vec<BreadcrumbItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreadcrumbItem {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    /// 1-based.
    pub position: usize,
    pub name: String,
    /// Absolute URL.
    pub item: String,
}

impl BreadcrumbList {
    /// Project a trail, prefixing every path with `base_url`.
    pub fn from_trail(trail: &[BreadcrumbEntry], base_url: &str) -> Self {
        let items = trail
            .iter()
            .enumerate()
            .map(|(i, entry)| BreadcrumbItem {
                kind: LIST_ITEM,
                position: i + 1,
                name: entry.name.clone(),
                item: format!("{base_url}{}", entry.path),
            })
            .collect();

        Self {
            context: CONTEXT,
            kind: "BreadcrumbList",
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_trail_shape() {
        let trail = [
            BreadcrumbEntry::new("Home", "/"),
            BreadcrumbEntry::new("Blog", "/blog"),
        ];
        let list = BreadcrumbList::from_trail(&trail, "https://vigorformen.com");
        assert_eq!(
            serde_json::to_value(&list).unwrap(),
            json!({
                "@context": "https://schema.org",
                "@type": "BreadcrumbList",
                "itemListElement": [
                    {"@type": "ListItem", "position": 1, "name": "Home", "item": "https://vigorformen.com/"},
                    {"@type": "ListItem", "position": 2, "name": "Blog", "item": "https://vigorformen.com/blog"}
                ]
            })
        );
    }

    #[test]
    fn test_empty_trail_still_has_envelope() {
        let list = BreadcrumbList::from_trail(&[], "https://vigorformen.com");
        assert!(list.items.is_empty());
        assert_eq!(list.kind, "BreadcrumbList");
    }
}
