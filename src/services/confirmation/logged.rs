use async_trait::async_trait;

use super::ConfirmationSender;
use crate::models::availability::format_long_date;
use crate::models::ConfirmedBooking;

/// Stands in for the confirmation email: no mail leaves the process, the
/// message is written to the log instead.
pub struct LogConfirmationSender {
    business_name: String,
}

impl LogConfirmationSender {
    pub fn new(business_name: String) -> Self {
        Self { business_name }
    }
}

#[async_trait]
impl ConfirmationSender for LogConfirmationSender {
    async fn send_confirmation(&self, booking: &ConfirmedBooking) -> anyhow::Result<()> {
        tracing::info!(
            to = %booking.contact.email,
            from = %self.business_name,
            service_id = booking.service.id,
            date = %format_long_date(booking.date),
            time = %booking.time,
            "simulated confirmation email"
        );
        Ok(())
    }
}
