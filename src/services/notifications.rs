use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use tokio::sync::broadcast;

use crate::models::availability::format_long_date;
use crate::models::{ConfirmedBooking, Notification};

const HISTORY_LIMIT: usize = 100;
const CHANNEL_CAPACITY: usize = 256;

pub const CONFIRMED_TITLE: &str = "Appointment Confirmed!";

/// Fan-out for booking notifications: a broadcast channel for live SSE
/// subscribers plus a short history for clients catching up.
pub struct NotificationHub {
    tx: broadcast::Sender<Notification>,
    history: Mutex<VecDeque<Notification>>,
    next_id: AtomicU64,
}

impl Default for NotificationHub {
    fn default() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            tx,
            history: Mutex::new(VecDeque::new()),
            next_id: AtomicU64::new(1),
        }
    }
}

impl NotificationHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }

    /// Records the success toast for a confirmed booking and broadcasts it.
    pub fn booking_confirmed(&self, session_id: &str, booking: &ConfirmedBooking) -> Notification {
        let notification = Notification {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            session_id: session_id.to_string(),
            title: CONFIRMED_TITLE.to_string(),
            description: confirmed_description(booking),
            service_id: booking.service.id.to_string(),
            date: booking.date,
            time: booking.time.clone(),
            created_at: chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        };

        {
            let mut history = self.history.lock().unwrap_or_else(|e| e.into_inner());
            if history.len() == HISTORY_LIMIT {
                history.pop_front();
            }
            history.push_back(notification.clone());
        }

        // Ignore if no receivers
        let _ = self.tx.send(notification.clone());
        notification
    }

    /// Notifications for one session with an id greater than `last_id`,
    /// oldest first.
    pub fn since(&self, session_id: &str, last_id: u64) -> Vec<Notification> {
        self.history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|n| n.session_id == session_id && n.id > last_id)
            .cloned()
            .collect()
    }
}

pub fn confirmed_description(booking: &ConfirmedBooking) -> String {
    format!(
        "We look forward to seeing you for your {} on {} at {}.",
        booking.service.name.to_lowercase(),
        format_long_date(booking.date),
        booking.time
    )
}
