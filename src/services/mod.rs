pub mod booking;
pub mod calendar;
pub mod confirmation;
pub mod notifications;
pub mod sessions;
pub mod validation;
pub mod wizard;
