use cinema_core::AccountId;
use cinema_tickets::TicketPaymentService;

/// Payment gateway stand-in: always succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingTicketPaymentService;

impl TicketPaymentService for LoggingTicketPaymentService {
    fn make_payment(&self, account_id: AccountId, amount: u64) -> anyhow::Result<()> {
        tracing::info!(account_id = account_id.get(), amount, "payment taken");
        Ok(())
    }
}
