//! Cinema ticket purchasing domain.
//!
//! This crate contains the purchase rules and the purchase workflow, implemented
//! as deterministic domain logic. Seat booking and payment are reached only
//! through the [`SeatReservationService`] and [`TicketPaymentService`] traits.

pub mod counts;
pub mod error;
pub mod prices;
pub mod service;
pub mod ticket;
pub mod validator;

pub use counts::TicketCounts;
pub use error::{ItemViolation, PurchaseError, ViolationKind};
pub use prices::PriceTable;
pub use service::{
    PurchaseSummary, PurchaseTicketsError, SeatReservationService, TicketPaymentService,
    TicketService,
};
pub use ticket::{PurchaseOrder, RequestedType, TicketType, TicketTypeRequest, UnknownTicketType};
pub use validator::{PurchaseLimits, PurchaseValidator, ValidatedPurchase};
