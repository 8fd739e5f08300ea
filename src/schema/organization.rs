//! `Organization` structured data for the publisher.

use serde::Serialize;

use super::CONTEXT;
use crate::config::{ContactConfig, OrganizationConfig};
use crate::seo::SiteDefaults;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub url: String,
    pub logo: String,
    pub same_as: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_point: Option<ContactPoint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPoint {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub telephone: String,
    pub contact_type: String,
    pub email: String,
}

impl From<&ContactConfig> for ContactPoint {
    fn from(contact: &ContactConfig) -> Self {
        Self {
            kind: "ContactPoint",
            telephone: contact.telephone.clone(),
            contact_type: contact.kind.clone(),
            email: contact.email.clone(),
        }
    }
}

impl OrganizationSchema {
    pub fn new(defaults: &SiteDefaults, org: &OrganizationConfig) -> Self {
        Self {
            context: CONTEXT,
            kind: "Organization",
            name: defaults.site_name.clone(),
            url: defaults.base_url.clone(),
            logo: defaults.asset_url(&defaults.logo),
            same_as: org.same_as.clone(),
            contact_point: org.contact.as_ref().map(ContactPoint::from),
        }
    }
}
