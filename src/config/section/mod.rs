//! Configuration section definitions.
//!
//! Each module corresponds to a section in `vigor.toml`:
//!
//! | Module         | TOML Section     | Purpose                              |
//! |----------------|------------------|--------------------------------------|
//! | `site`         | `[site]`         | Base URL, brand, metadata defaults   |
//! | `organization` | `[organization]` | Publisher profiles and contact point |
//! | `search`       | `[search]`       | Sitelinks search action              |
//! | `blog`         | `[blog]`         | Listing path, labels, post catalog   |

mod blog;
mod organization;
mod search;
mod site;

pub use blog::BlogConfig;
pub use organization::{ContactConfig, OrganizationConfig};
pub use search::SearchConfig;
pub use site::SiteSectionConfig;
