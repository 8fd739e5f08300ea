//! `CollectionPage` structured data for listing pages.

use serde::Serialize;

use super::{CONTEXT, LIST_ITEM};
use crate::seo::SiteDefaults;

/// One listed page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub name: String,
    pub description: String,
    /// Site-relative path.
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionPageSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub headline: String,
    pub description: String,
    pub url: String,
    pub main_entity: ItemList,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemList {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "itemListElement")]
    pub items: Vec<ListingItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingItem {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub position: usize,
    pub url: String,
    pub name: String,
    pub description: String,
}

impl CollectionPageSchema {
    pub fn new(
        headline: &str,
        description: &str,
        path: &str,
        entries: &[ListingEntry],
        defaults: &SiteDefaults,
    ) -> Self {
        let items = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| ListingItem {
                kind: LIST_ITEM,
                position: i + 1,
                url: defaults.url_for(&entry.path),
                name: entry.name.clone(),
                description: entry.description.clone(),
            })
            .collect();

        Self {
            context: CONTEXT,
            kind: "CollectionPage",
            headline: headline.to_owned(),
            description: description.to_owned(),
            url: defaults.url_for(path),
            main_entity: ItemList {
                kind: "ItemList",
                items,
            },
        }
    }
}
