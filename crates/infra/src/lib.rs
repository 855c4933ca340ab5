//! Infrastructure layer: configuration and external service adapters.

pub mod config;
pub mod external;

pub use config::CinemaConfig;
pub use external::{LoggingSeatReservationService, LoggingTicketPaymentService};
