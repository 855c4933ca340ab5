//! External service adapters.
//!
//! The real seat booking system and payment gateway live outside this
//! codebase. These stand-ins accept every call and record it in the log.

pub mod payment;
pub mod seat_reservation;

pub use payment::LoggingTicketPaymentService;
pub use seat_reservation::LoggingSeatReservationService;
