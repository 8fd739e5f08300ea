//! `[organization]` section configuration.
//!
//! ```toml
//! [organization]
//! same_as = ["https://twitter.com/vigorformen"]
//!
//! [organization.contact]
//! telephone = "+1-555-123-4567"
//! kind = "customer service"
//! email = "contact@vigorformen.com"
//! ```

use serde::{Deserialize, Serialize};

/// Publisher identity beyond what `[site]` already carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationConfig {
    /// Social profile URLs (`sameAs`).
    pub same_as: Vec<String>,

    /// Customer contact point; omitted from structured data when absent.
    pub contact: Option<ContactConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub telephone: String,
    /// schema.org `contactType`.
    pub kind: String,
    pub email: String,
}

impl Default for OrganizationConfig {
    fn default() -> Self {
        Self {
            same_as: vec![
                "https://twitter.com/vigorformen".into(),
                "https://facebook.com/vigorformen".into(),
                "https://instagram.com/vigorformen".into(),
            ],
            contact: Some(ContactConfig {
                telephone: "+1-555-123-4567".into(),
                kind: "customer service".into(),
                email: "contact@vigorformen.com".into(),
            }),
        }
    }
}
