//! Ticket purchase workflow: validate, reserve seats, take payment.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use cinema_core::AccountId;

use crate::counts::TicketCounts;
use crate::error::PurchaseError;
use crate::prices::PriceTable;
use crate::ticket::{PurchaseOrder, TicketTypeRequest};
use crate::validator::PurchaseValidator;

/// External seat booking system.
pub trait SeatReservationService: Send + Sync {
    fn reserve_seat(&self, account_id: AccountId, seats: u64) -> anyhow::Result<()>;
}

/// External payment gateway.
pub trait TicketPaymentService: Send + Sync {
    fn make_payment(&self, account_id: AccountId, amount: u64) -> anyhow::Result<()>;
}

/// What a completed purchase did.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseSummary {
    pub account_id: AccountId,
    pub counts: TicketCounts,
    pub seats_reserved: u64,
    pub amount_paid: u64,
}

#[derive(Debug, Error)]
pub enum PurchaseTicketsError {
    #[error(transparent)]
    Invalid(#[from] PurchaseError),

    #[error("seat reservation failed: {0}")]
    SeatReservation(#[source] anyhow::Error),

    #[error("payment failed: {0}")]
    Payment(#[source] anyhow::Error),
}

impl PurchaseTicketsError {
    /// The rule violation, if the order itself was rejected.
    pub fn as_invalid(&self) -> Option<&PurchaseError> {
        match self {
            PurchaseTicketsError::Invalid(err) => Some(err),
            _ => None,
        }
    }
}

/// Runs purchases against a seat reservation and a payment collaborator.
///
/// Seats are reserved before payment is taken. There is no compensation: if
/// payment fails after a reservation, the error is returned as is.
pub struct TicketService<R, P> {
    validator: PurchaseValidator,
    prices: PriceTable,
    seats: R,
    payments: P,
}

impl<R, P> TicketService<R, P>
where
    R: SeatReservationService,
    P: TicketPaymentService,
{
    pub fn new(validator: PurchaseValidator, prices: PriceTable, seats: R, payments: P) -> Self {
        Self {
            validator,
            prices,
            seats,
            payments,
        }
    }

    /// Convenience wrapper for callers holding a plain account id and requests.
    pub fn purchase(
        &self,
        account_id: i64,
        requests: &[TicketTypeRequest],
    ) -> Result<PurchaseSummary, PurchaseTicketsError> {
        self.purchase_tickets(&PurchaseOrder::new(account_id, requests.iter().cloned()))
    }

    pub fn purchase_tickets(
        &self,
        order: &PurchaseOrder,
    ) -> Result<PurchaseSummary, PurchaseTicketsError> {
        tracing::debug!(account_id = ?order.account_id, "validating ticket purchase");

        let purchase = self.validator.validate(order).inspect_err(|err| {
            tracing::warn!(account_id = ?order.account_id, error = %err, "ticket purchase rejected");
        })?;

        let account_id = purchase.account_id();
        let counts = *purchase.counts();
        let seats_reserved = counts.seats_to_reserve();
        let amount_paid = self.prices.amount_for(&counts);

        self.seats
            .reserve_seat(account_id, seats_reserved)
            .map_err(PurchaseTicketsError::SeatReservation)?;
        self.payments
            .make_payment(account_id, amount_paid)
            .map_err(PurchaseTicketsError::Payment)?;

        tracing::info!(
            account_id = account_id.get(),
            seats = seats_reserved,
            amount = amount_paid,
            "tickets purchased"
        );

        Ok(PurchaseSummary {
            account_id,
            counts,
            seats_reserved,
            amount_paid,
        })
    }
}
