use cinema_core::AccountId;
use cinema_tickets::SeatReservationService;

/// Seat booking stand-in: always succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSeatReservationService;

impl SeatReservationService for LoggingSeatReservationService {
    fn reserve_seat(&self, account_id: AccountId, seats: u64) -> anyhow::Result<()> {
        tracing::info!(account_id = account_id.get(), seats, "seats reserved");
        Ok(())
    }
}
