//! `WebSite` structured data with a sitelinks search action.

use serde::Serialize;

use super::CONTEXT;
use crate::config::SearchConfig;
use crate::seo::SiteDefaults;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSiteSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub url: String,
    pub description: String,
    pub potential_action: SearchAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchAction {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub target: String,
    #[serde(rename = "query-input")]
    pub query_input: String,
}

impl WebSiteSchema {
    pub fn new(defaults: &SiteDefaults, search: &SearchConfig) -> Self {
        Self {
            context: CONTEXT,
            kind: "WebSite",
            name: defaults.site_name.clone(),
            url: defaults.base_url.clone(),
            description: defaults.description.clone(),
            potential_action: SearchAction {
                kind: "SearchAction",
                target: defaults.url_for(&search.path),
                query_input: search.query_input.clone(),
            },
        }
    }
}
