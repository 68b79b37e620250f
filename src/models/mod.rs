pub mod availability;
pub mod booking;
pub mod notification;
pub mod service;

pub use availability::{available_times, TimeSlot};
pub use booking::{BookingStep, ConfirmedBooking, ContactDetails};
pub use notification::Notification;
pub use service::{catalog, find_service, Service};
