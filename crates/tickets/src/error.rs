use thiserror::Error;

/// Header line of a [`PurchaseError::InvalidItems`] message.
pub const INVALID_ITEMS_HEADER: &str =
    "Expected ticket type requests to be valid but got the following errors:";

/// Why a purchase was rejected.
///
/// Every variant is final for the current call: nothing has been reserved or
/// charged, and retrying the same order gives the same answer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PurchaseError {
    #[error("Expected a valid account ID but got {received}")]
    InvalidAccount { received: String },

    #[error("Expected at least one ticket type request")]
    EmptyRequest,

    #[error("{}", render_violations(.0))]
    InvalidItems(Vec<ItemViolation>),

    #[error("Expected total number of tickets to be between 1 and {max}")]
    TotalOutOfRange { total: u64, max: u32 },

    #[error("Expected at least one adult ticket to be requested")]
    NoAdult,

    #[error(
        "Expected number of infant tickets to be less than or equal to the number of adult tickets requested"
    )]
    TooManyInfants { infants: u64, adults: u64 },
}

impl PurchaseError {
    /// Build an `InvalidAccount` error echoing the raw id, or `null` when absent.
    pub fn invalid_account(raw: Option<i64>) -> Self {
        Self::InvalidAccount {
            received: raw.map_or_else(|| "null".to_string(), |id| id.to_string()),
        }
    }

    /// Per-item violations, if this is an `InvalidItems` error.
    pub fn violations(&self) -> &[ItemViolation] {
        match self {
            PurchaseError::InvalidItems(violations) => violations,
            _ => &[],
        }
    }
}

/// A problem with a single request, tagged with its 1-based position.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Request #{position} {kind}")]
pub struct ItemViolation {
    pub position: usize,
    pub kind: ViolationKind,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    #[error("is missing")]
    Missing,

    #[error("has no number of tickets")]
    MissingCount,

    #[error("has invalid number of tickets: {0}")]
    NegativeCount(i64),

    #[error("has NULL type")]
    MissingType,

    #[error("has invalid ticket type: {0}")]
    UnrecognizedType(String),
}

fn render_violations(violations: &[ItemViolation]) -> String {
    let mut lines = Vec::with_capacity(violations.len() + 1);
    lines.push(INVALID_ITEMS_HEADER.to_string());
    lines.extend(violations.iter().map(ToString::to_string));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_account_echoes_raw_value() {
        assert_eq!(
            PurchaseError::invalid_account(None).to_string(),
            "Expected a valid account ID but got null"
        );
        assert_eq!(
            PurchaseError::invalid_account(Some(0)).to_string(),
            "Expected a valid account ID but got 0"
        );
        assert_eq!(
            PurchaseError::invalid_account(Some(-5)).to_string(),
            "Expected a valid account ID but got -5"
        );
    }

    #[test]
    fn invalid_items_lists_every_violation_under_the_header() {
        let err = PurchaseError::InvalidItems(vec![
            ItemViolation {
                position: 1,
                kind: ViolationKind::NegativeCount(-1),
            },
            ItemViolation {
                position: 3,
                kind: ViolationKind::UnrecognizedType("SENIOR".to_string()),
            },
            ItemViolation {
                position: 4,
                kind: ViolationKind::Missing,
            },
        ]);

        assert_eq!(
            err.to_string(),
            "Expected ticket type requests to be valid but got the following errors:\n\
             Request #1 has invalid number of tickets: -1\n\
             Request #3 has invalid ticket type: SENIOR\n\
             Request #4 is missing"
        );
        assert_eq!(err.violations().len(), 3);
        assert!(PurchaseError::NoAdult.violations().is_empty());
    }

    #[test]
    fn total_out_of_range_names_the_limit() {
        let err = PurchaseError::TotalOutOfRange { total: 21, max: 20 };
        assert_eq!(
            err.to_string(),
            "Expected total number of tickets to be between 1 and 20"
        );
    }
}
