//! Access-check configuration.
//!
//! Configuration is loaded from environment variables with defaults that
//! match production behavior.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue {
        /// Configuration key.
        key: String,
        /// Error message.
        message: String,
    },
}

/// Environment variable for [`AccessConfig::legacy_volunteers`].
pub const ENV_LEGACY_VOLUNTEERS: &str = "HUB_ACCESS_LEGACY_VOLUNTEERS";

/// Environment variable for [`AccessConfig::org_owner_sees_product_drafts`].
pub const ENV_ORG_OWNER_SEES_PRODUCT_DRAFTS: &str = "HUB_ACCESS_ORG_OWNER_SEES_PRODUCT_DRAFTS";

/// Toggles for the access checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessConfig {
    /// Accepted volunteer applications grant todo participation.
    pub legacy_volunteers: bool,

    /// Organization OWNERs may view drafts of the organization's products.
    pub org_owner_sees_product_drafts: bool,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            legacy_volunteers: true,
            org_owner_sees_product_drafts: true,
        }
    }
}

impl AccessConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `HUB_ACCESS_LEGACY_VOLUNTEERS` (default: true)
    /// - `HUB_ACCESS_ORG_OWNER_SEES_PRODUCT_DRAFTS` (default: true)
    ///
    /// Unset variables fall back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();

        Ok(Self {
            legacy_volunteers: parse_flag(
                ENV_LEGACY_VOLUNTEERS,
                lookup(ENV_LEGACY_VOLUNTEERS),
                default.legacy_volunteers,
            )?,
            org_owner_sees_product_drafts: parse_flag(
                ENV_ORG_OWNER_SEES_PRODUCT_DRAFTS,
                lookup(ENV_ORG_OWNER_SEES_PRODUCT_DRAFTS),
                default.org_owner_sees_product_drafts,
            )?,
        })
    }
}

fn parse_flag(key: &str, value: Option<String>, default: bool) -> Result<bool, ConfigError> {
    let Some(value) = value else {
        return Ok(default);
    };

    match value.trim().to_lowercase().as_str() {
        "" => Ok(default),
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("expected a boolean, got {other:?}"),
        }),
    }
}
