use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::availability::format_long_date;
use super::Service;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BookingStep {
    Date,
    Time,
    Details,
    Confirmed,
}

impl BookingStep {
    pub const ALL: [BookingStep; 4] = [
        BookingStep::Date,
        BookingStep::Time,
        BookingStep::Details,
        BookingStep::Confirmed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStep::Date => "date",
            BookingStep::Time => "time",
            BookingStep::Details => "details",
            BookingStep::Confirmed => "confirmed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

/// The summary a draft yields once it reaches the confirmed step.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ConfirmedBooking {
    pub service: Service,
    pub date: NaiveDate,
    pub time: String,
    pub contact: ContactDetails,
}

impl ConfirmedBooking {
    pub fn summary(&self) -> String {
        format!(
            "Your appointment for a {} on {} at {} has been successfully booked.",
            self.service.name,
            format_long_date(self.date),
            self.time
        )
    }
}
