//! Strongly-typed identifiers used across the domain.

use core::num::NonZeroU64;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Identifier of a customer account making a purchase.
///
/// Always a positive integer. Account ids arrive from callers as raw (possibly
/// absent or non-positive) integers; [`AccountId::parse`] is the only way in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u64")]
pub struct AccountId(NonZeroU64);

impl AccountId {
    /// Parse a raw account id, rejecting absent and non-positive values.
    pub fn parse(raw: Option<i64>) -> DomainResult<Self> {
        let Some(value) = raw else {
            return Err(DomainError::invalid_id("AccountId: null"));
        };
        u64::try_from(value)
            .ok()
            .and_then(NonZeroU64::new)
            .map(Self)
            .ok_or_else(|| DomainError::invalid_id(format!("AccountId: {value}")))
    }

    pub fn get(&self) -> u64 {
        self.0.get()
    }
}

impl core::fmt::Display for AccountId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<i64> for AccountId {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::parse(Some(value))
    }
}

impl From<AccountId> for u64 {
    fn from(value: AccountId) -> Self {
        value.get()
    }
}

impl FromStr for AccountId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = i64::from_str(s.trim())
            .map_err(|e| DomainError::invalid_id(format!("AccountId: {e}")))?;
        Self::parse(Some(value))
    }
}
