//! Site configuration management for `vigor.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   ├── organization # [organization]
//! │   ├── search     # [search]
//! │   └── blog       # [blog]
//! ├── types/         # ConfigError, diagnostics, field paths
//! ├── util.rs        # config file discovery
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! A missing config file is not an error: every section defaults to the
//! live site's values, so the binary works out of the box.

pub mod section;
pub mod types;
mod util;

pub use section::{
    BlogConfig, ContactConfig, OrganizationConfig, SearchConfig, SiteSectionConfig,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};
pub use util::find_config_file;

use crate::debug;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing vigor.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file, empty when running on defaults
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Directory relative paths in the config resolve against
    #[serde(skip)]
    pub root: PathBuf,

    /// Base URL, brand and metadata defaults
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Publisher profiles and contact point
    #[serde(default)]
    pub organization: OrganizationConfig,

    /// Sitelinks search action
    #[serde(default)]
    pub search: SearchConfig,

    /// Blog listing and post catalog
    #[serde(default)]
    pub blog: BlogConfig,
}

impl SiteConfig {
    /// Load configuration, searching upward from cwd for `config_name`.
    ///
    /// Falls back to built-in defaults when no file is found.
    pub fn load(config_name: &Path) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let Some(path) = find_config_file(&cwd, config_name) else {
            debug!("config"; "no {} found, using built-in defaults", config_name.display());
            return Ok(Self {
                root: cwd,
                ..Self::default()
            });
        };

        let config = Self::from_path(&path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file path, warning about unknown fields.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;

        let mut diag = ConfigDiagnostics::new();
        diag.unknown_fields(ignored);
        diag.print_warnings();

        config.config_path = path.to_path_buf();
        config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        debug!("config"; "loaded {}", path.display());
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Run every section's checks, collecting all problems.
    pub fn diagnose(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        self.site.validate(&mut diag);
        self.search.validate(&mut diag);
        self.blog.validate(&mut diag);
        diag
    }

    /// Validate configuration, returning all collected errors at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.diagnose()
            .into_result()
            .map_err(ConfigError::Diagnostics)
    }

    /// Resolved path of the post catalog, if one is configured.
    pub fn posts_path(&self) -> Option<PathBuf> {
        self.blog.posts.as_ref().map(|p| self.root.join(p))
    }
}

// ============================================================================
// tests
// ============================================================================
