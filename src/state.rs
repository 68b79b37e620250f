use crate::config::AppConfig;
use crate::services::confirmation::ConfirmationSender;
use crate::services::notifications::NotificationHub;
use crate::services::sessions::BookingSessions;

pub struct AppState {
    pub config: AppConfig,
    pub sessions: BookingSessions,
    pub notifications: NotificationHub,
    pub confirmations: Box<dyn ConfirmationSender>,
}

impl AppState {
    pub fn new(config: AppConfig, confirmations: Box<dyn ConfirmationSender>) -> Self {
        Self {
            config,
            sessions: BookingSessions::new(),
            notifications: NotificationHub::new(),
            confirmations,
        }
    }
}
