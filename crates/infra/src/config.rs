//! Configuration loading and representation.
//!
//! Configuration is a JSON document; every field is optional and falls back to
//! the built-in price list and ticket limit.
//!
//! ```json
//! { "prices": { "adult": 20, "child": 10, "infant": 0 }, "limits": { "max_tickets": 20 } }
//! ```

use std::env::VarError;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use cinema_core::{DomainError, DomainResult};
use cinema_tickets::{PriceTable, PurchaseLimits, PurchaseValidator};

/// Path of a JSON config file, used when no explicit path is given.
pub const CONFIG_PATH_ENV: &str = "CINEMA_CONFIG";
/// Overrides `limits.max_tickets`.
pub const MAX_TICKETS_ENV: &str = "CINEMA_MAX_TICKETS";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CinemaConfig {
    pub prices: PriceTable,
    pub limits: PurchaseLimits,
}

impl CinemaConfig {
    /// Load configuration from `path`, else from `$CINEMA_CONFIG`, else defaults,
    /// then apply environment overrides and validate.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from));

        let mut config = match path {
            Some(path) => Self::from_file(&path)?,
            None => {
                tracing::debug!("no config file given; using defaults");
                Self::default()
            }
        };

        match std::env::var(MAX_TICKETS_ENV) {
            Ok(raw) => {
                config.limits.max_tickets = raw.trim().parse().with_context(|| {
                    format!("{MAX_TICKETS_ENV} must be a whole number, got {raw:?}")
                })?;
            }
            Err(VarError::NotPresent) => {}
            Err(err @ VarError::NotUnicode(_)) => {
                return Err(err).with_context(|| format!("reading {MAX_TICKETS_ENV}"));
            }
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config = Self::from_json(&raw)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.limits.max_tickets == 0 {
            return Err(DomainError::validation(
                "limits.max_tickets must be at least 1",
            ));
        }
        Ok(())
    }

    pub fn validator(&self) -> PurchaseValidator {
        PurchaseValidator::new(self.limits)
    }
}
