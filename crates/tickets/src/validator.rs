//! Purchase rules.
//!
//! Validation is a pure function of the order and the configured limits: no IO,
//! no logging, no state carried between calls.

use serde::{Deserialize, Serialize};

use cinema_core::AccountId;

use crate::counts::TicketCounts;
use crate::error::{ItemViolation, PurchaseError, ViolationKind};
use crate::ticket::{PurchaseOrder, RequestedType, TicketTypeRequest};

pub const DEFAULT_MAX_TICKETS: u32 = 20;

/// Per-purchase ticket limits. The lower bound is always one ticket.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PurchaseLimits {
    pub max_tickets: u32,
}

impl Default for PurchaseLimits {
    fn default() -> Self {
        Self {
            max_tickets: DEFAULT_MAX_TICKETS,
        }
    }
}

/// An order that passed every rule.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ValidatedPurchase {
    account_id: AccountId,
    counts: TicketCounts,
}

impl ValidatedPurchase {
    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    pub fn counts(&self) -> &TicketCounts {
        &self.counts
    }
}

#[derive(Debug, Clone, Default)]
pub struct PurchaseValidator {
    limits: PurchaseLimits,
}

impl PurchaseValidator {
    pub fn new(limits: PurchaseLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> PurchaseLimits {
        self.limits
    }

    /// Check an order against the purchase rules and aggregate its tickets.
    ///
    /// Account and request-list problems fail immediately. Per-request problems
    /// are collected across the whole list and reported together. The ticket
    /// mix rules run only on a well-formed list.
    pub fn validate(&self, order: &PurchaseOrder) -> Result<ValidatedPurchase, PurchaseError> {
        let account_id = AccountId::parse(order.account_id)
            .map_err(|_| PurchaseError::invalid_account(order.account_id))?;

        let requests = match order.requests.as_deref() {
            Some(requests) if !requests.is_empty() => requests,
            _ => return Err(PurchaseError::EmptyRequest),
        };

        let violations = collect_violations(requests);
        if !violations.is_empty() {
            return Err(PurchaseError::InvalidItems(violations));
        }

        let counts = aggregate(requests.iter().flatten());
        self.check_mix(&counts)?;

        Ok(ValidatedPurchase { account_id, counts })
    }

    fn check_mix(&self, counts: &TicketCounts) -> Result<(), PurchaseError> {
        let total = counts.total();
        let max = self.limits.max_tickets;
        if total == 0 || total > u64::from(max) {
            return Err(PurchaseError::TotalOutOfRange { total, max });
        }
        if counts.adult == 0 {
            return Err(PurchaseError::NoAdult);
        }
        if counts.infant > counts.adult {
            return Err(PurchaseError::TooManyInfants {
                infants: counts.infant,
                adults: counts.adult,
            });
        }
        Ok(())
    }
}

fn collect_violations(requests: &[Option<TicketTypeRequest>]) -> Vec<ItemViolation> {
    let mut violations = Vec::new();
    for (index, request) in requests.iter().enumerate() {
        let position = index + 1;
        let mut push = |kind| violations.push(ItemViolation { position, kind });

        let Some(request) = request else {
            push(ViolationKind::Missing);
            continue;
        };
        match request.count() {
            None => push(ViolationKind::MissingCount),
            Some(count) if count < 0 => push(ViolationKind::NegativeCount(count)),
            Some(_) => {}
        }
        match request.ticket_type() {
            None => push(ViolationKind::MissingType),
            Some(RequestedType::Unrecognized(name)) => {
                push(ViolationKind::UnrecognizedType(name.clone()))
            }
            Some(RequestedType::Known(_)) => {}
        }
    }
    violations
}

// Callers only pass requests that produced no violations; anything else is skipped.
fn aggregate<'a>(requests: impl Iterator<Item = &'a TicketTypeRequest>) -> TicketCounts {
    requests
        .filter_map(|request| {
            let ticket_type = request.ticket_type()?.known()?;
            let count = u64::try_from(request.count()?).ok()?;
            Some((ticket_type, count))
        })
        .collect()
}
