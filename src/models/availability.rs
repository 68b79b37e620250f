use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};

/// A display label for a bookable start time, e.g. `"09:00 AM"`.
pub type TimeSlot = String;

const WEEKDAY_SLOTS: [&str; 14] = [
    "09:00 AM", "09:30 AM", "10:00 AM", "10:30 AM", "11:00 AM", "11:30 AM",
    "01:00 PM", "01:30 PM", "02:00 PM", "02:30 PM", "03:00 PM", "03:30 PM",
    "04:00 PM", "04:30 PM",
];

const SATURDAY_SLOT_COUNT: usize = 8;

/// Start times offered on `date`. Closed on Sundays, short hours on Saturdays.
pub fn available_times(date: NaiveDate) -> Vec<TimeSlot> {
    let slots: &[&str] = match date.weekday() {
        Weekday::Sun => &[],
        Weekday::Sat => &WEEKDAY_SLOTS[..SATURDAY_SLOT_COUNT],
        _ => &WEEKDAY_SLOTS,
    };
    slots.iter().map(|s| s.to_string()).collect()
}

pub fn is_offered(date: NaiveDate, time: &str) -> bool {
    available_times(date).iter().any(|t| t == time)
}

/// Whether the date picker lets a customer choose `date`: no past days, no Sundays.
pub fn is_bookable_date(date: NaiveDate, today: NaiveDate) -> bool {
    date >= today && date.weekday() != Weekday::Sun
}

pub fn slot_start(label: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(label, "%I:%M %p").ok()
}

/// Long date as the booking dialog shows it, e.g. `October 19th, 2026`.
pub fn format_long_date(date: NaiveDate) -> String {
    let day = date.day();
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{} {day}{suffix}, {}", date.format("%B"), date.year())
}
