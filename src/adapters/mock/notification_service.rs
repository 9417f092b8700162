use crate::domain::{BookingConfirmation, value_objects::UserId};
use crate::ports::notification_service::{NotificationService as NotificationServiceTrait, Result};
use async_trait::async_trait;
use std::sync::Mutex;

/// Mock implementation of NotificationService
///
/// Does not deliver anything. Logs the confirmation and keeps it
/// so tests can inspect what would have been sent.
#[allow(dead_code)]
pub struct NotificationService {
    sent: Mutex<Vec<(UserId, BookingConfirmation)>>,
}

#[allow(dead_code)]
impl NotificationService {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Booking confirmations sent so far, in order
    pub fn sent(&self) -> Vec<(UserId, BookingConfirmation)> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationServiceTrait for NotificationService {
    async fn send_booking_confirmation(
        &self,
        user_id: UserId,
        confirmation: BookingConfirmation,
    ) -> Result<()> {
        tracing::info!(
            user_id = %user_id.value(),
            visit_id = %confirmation.visit_id.value(),
            date = %confirmation.start,
            car = %confirmation.licence_plate,
            "booking confirmation"
        );
        self.sent.lock().unwrap().push((user_id, confirmation));
        Ok(())
    }
}
