pub mod bookings;
pub mod calendar;
pub mod catalog;
pub mod health;
pub mod home;
pub mod notifications;
