//! Configuration file support for pkgfacts.
//!
//! Provides YAML-based configuration through `pkgfacts.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::package_listing::domain::ListingDialect;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "pkgfacts.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    /// Dialects collected when `collect` is run without `--dialect`
    pub dialects: Option<Vec<String>>,
    pub command_timeout_secs: Option<u64>,
    pub custom_dialects: Option<Vec<CustomDialect>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// A user-defined dialect; overrides a built-in one with the same id.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomDialect {
    pub id: String,
    pub command: String,
    pub pattern: String,
    #[serde(default)]
    pub lowercase_names: bool,
    pub description: Option<String>,
}

impl CustomDialect {
    pub fn to_listing_dialect(&self) -> ListingDialect {
        ListingDialect::new(
            self.id.trim(),
            self.command.as_str(),
            self.pattern.as_str(),
            self.description.clone().unwrap_or_default(),
        )
        .with_lowercase_names(self.lowercase_names)
    }
}

impl ConfigFile {
    /// Custom dialects converted to domain objects; patterns are compiled later
    pub fn custom_listing_dialects(&self) -> Vec<ListingDialect> {
        self.custom_dialects
            .iter()
            .flatten()
            .map(CustomDialect::to_listing_dialect)
            .collect()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
///
/// Pattern syntax is not checked here: an invalid pattern is reported
/// against its dialect id when that dialect is used.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(custom_dialects) = &config.custom_dialects {
        for (i, entry) in custom_dialects.iter().enumerate() {
            if entry.id.trim().is_empty() {
                bail!(
                    "Invalid config: custom_dialects[{}].id must not be empty.\n\n\
                     💡 Hint: Each custom dialect needs an id such as \"yarn\".",
                    i
                );
            }
            if entry.command.trim().is_empty() {
                bail!(
                    "Invalid config: custom_dialects[{}].command must not be empty (dialect '{}').",
                    i,
                    entry.id
                );
            }
        }
    }

    if let Some(dialects) = &config.dialects {
        if dialects.iter().any(|d| d.trim().is_empty()) {
            bail!("Invalid config: dialects must not contain empty entries.");
        }
    }

    if config.command_timeout_secs == Some(0) {
        bail!("Invalid config: command_timeout_secs must be greater than 0.");
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
