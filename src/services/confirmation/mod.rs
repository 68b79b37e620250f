pub mod logged;

use async_trait::async_trait;

use crate::models::ConfirmedBooking;

/// Delivers the "your appointment is booked" message to the customer.
#[async_trait]
pub trait ConfirmationSender: Send + Sync {
    async fn send_confirmation(&self, booking: &ConfirmedBooking) -> anyhow::Result<()>;
}
