//! Navigation configuration module.
//!
//! Handles loading, validating, and merging `portal-nav.toml`. Stock defaults
//! are serialized to a TOML value, the user file is merged on top of them, and
//! the result is deserialized and validated.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [pagination]
//! page_size = 10            # Items per page (must be > 0)
//! sibling_count = 1         # Pages shown on each side of the current page
//!
//! [title_case]
//! acronyms = ["FAQ", "HSA", "FSA", "ID", "SSN"]
//!
//! [routes]
//! "/members/[memberId]" = "Member Detail"
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse: override just the values you want. The `routes`
//! table is merged key by key, so a file adds labels rather than replacing
//! the whole table.
//!
//! Unknown keys are rejected to catch typos early.

use crate::breadcrumbs::NavContext;
use crate::route::{RouteError, RouteLabels};
use crate::title_case::{Acronyms, DEFAULT_ACRONYMS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// File name looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "portal-nav.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
    #[error("Route error: {0}")]
    Route(#[from] RouteError),
}

/// Navigation configuration loaded from `portal-nav.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavConfig {
    /// Pager defaults.
    pub pagination: PaginationConfig,
    /// Label derivation settings.
    pub title_case: TitleCaseConfig,
    /// Route pattern → breadcrumb label.
    pub routes: BTreeMap<String, String>,
}

/// Pager defaults used when the caller does not specify them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaginationConfig {
    pub page_size: usize,
    pub sibling_count: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            sibling_count: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TitleCaseConfig {
    /// Words always rendered fully uppercase in labels.
    pub acronyms: Vec<String>,
}

impl Default for TitleCaseConfig {
    fn default() -> Self {
        Self {
            acronyms: DEFAULT_ACRONYMS.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl NavConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pagination.page_size == 0 {
            return Err(ConfigError::Validation(
                "pagination.page_size must be greater than zero".into(),
            ));
        }
        for acronym in &self.title_case.acronyms {
            if acronym.is_empty() || !acronym.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(ConfigError::Validation(format!(
                    "title_case.acronyms entries must be non-empty ASCII letters or digits, got {acronym:?}"
                )));
            }
        }
        for (pattern, label) in &self.routes {
            if label.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "routes.{pattern:?} must have a non-empty label"
                )));
            }
        }
        self.route_labels()?;
        Ok(())
    }

    /// Compile the `routes` table.
    pub fn route_labels(&self) -> Result<RouteLabels, ConfigError> {
        Ok(RouteLabels::from_pairs(
            self.routes.iter().map(|(p, l)| (p.as_str(), l.as_str())),
        )?)
    }

    pub fn acronyms(&self) -> Acronyms {
        Acronyms::new(&self.title_case.acronyms)
    }

    /// Build the breadcrumb context described by this config.
    pub fn context(&self) -> Result<NavContext, ConfigError> {
        Ok(NavContext::new(self.route_labels()?, self.acronyms()))
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(NavConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file");
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    debug!(path = %path.display(), "loaded config file");
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<NavConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: NavConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `path`, merged over stock defaults and validated.
///
/// A missing file yields the stock defaults.
pub fn load_config(path: &Path) -> Result<NavConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(path)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `portal-nav.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# portal-nav Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Pagination
# ---------------------------------------------------------------------------
[pagination]
# Items per page when the caller does not pass one. Must be greater than 0.
page_size = 10

# Page numbers shown on each side of the current page before the pager
# collapses the rest into an ellipsis.
sibling_count = 1

# ---------------------------------------------------------------------------
# Breadcrumb labels
# ---------------------------------------------------------------------------
[title_case]
# Words kept fully uppercase when a path segment is turned into a label.
# Matching ignores case: "faq-page" -> "FAQ Page", "dependent-ids" -> "Dependent IDs".
acronyms = ["FAQ", "HSA", "FSA", "ID", "SSN"]

# Fixed labels for route patterns. `[name]` matches one segment,
# `[...name]` matches the rest of the path.
[routes]
# "/members/[memberId]" = "Member Detail"
"##
}
