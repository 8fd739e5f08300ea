//! `[search]` section configuration (sitelinks search box).

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

const PATH: FieldPath = FieldPath::new("search.path");

/// Search endpoint advertised through `WebSite.potentialAction`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Site-relative URL template containing `{search_term_string}`.
    pub path: String,

    /// schema.org `query-input` value.
    pub query_input: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            path: "/search?q={search_term_string}".into(),
            query_input: "required name=search_term_string".into(),
        }
    }
}

impl SearchConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.path.contains("{search_term_string}") {
            diag.error_with_hint(
                PATH,
                "search template has no placeholder",
                "include {search_term_string}, e.g. \"/search?q={search_term_string}\"",
            );
        }
    }
}
