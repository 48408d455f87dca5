use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::models::{BookingRequest, ContactMessage};

// Accepted leads end here. Nothing is persisted or forwarded yet.
#[async_trait]
pub trait LeadSink: Send + Sync {
    async fn booking_received(&self, reference: Uuid, booking: &BookingRequest)
        -> anyhow::Result<()>;

    async fn contact_received(&self, reference: Uuid, contact: &ContactMessage)
        -> anyhow::Result<()>;
}

pub struct LoggingLeadSink;

#[async_trait]
impl LeadSink for LoggingLeadSink {
    async fn booking_received(
        &self,
        reference: Uuid,
        booking: &BookingRequest,
    ) -> anyhow::Result<()> {
        tracing::info!(
            reference = %reference,
            name = %booking.contact_name,
            email = %booking.email,
            phone = %booking.phone,
            service = %booking.service_id,
            date = %booking.date,
            time = %booking.time,
            guests = booking.guest_count,
            total = %booking.total().label(),
            notes = %booking.notes,
            received_at = %Utc::now().to_rfc3339(),
            "booking received"
        );
        Ok(())
    }

    async fn contact_received(
        &self,
        reference: Uuid,
        contact: &ContactMessage,
    ) -> anyhow::Result<()> {
        tracing::info!(
            reference = %reference,
            name = %contact.name,
            email = %contact.email,
            phone = contact.phone.as_deref().unwrap_or(""),
            subject = %contact.subject,
            body = %contact.message,
            received_at = %Utc::now().to_rfc3339(),
            "contact message received"
        );
        Ok(())
    }
}
