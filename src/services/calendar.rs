use chrono::{Duration, NaiveDateTime, Utc};

use crate::models::availability::slot_start;
use crate::models::ConfirmedBooking;

/// Renders a confirmed booking as a single-event iCalendar document.
///
/// Returns `None` if the booked slot label cannot be read as a clock time.
pub fn generate_ics(
    booking: &ConfirmedBooking,
    session_id: &str,
    business_name: &str,
    business_address: &str,
) -> Option<String> {
    let start = NaiveDateTime::new(booking.date, slot_start(&booking.time)?);
    let end = start + Duration::minutes(i64::from(booking.service.duration_minutes));

    let dtstart = start.format("%Y%m%dT%H%M%S");
    let dtend = end.format("%Y%m%dT%H%M%S");
    let dtstamp = Utc::now().format("%Y%m%dT%H%M%SZ");
    let uid = format!("{session_id}@serenity-scheduler");
    let summary = escape_text(&format!("{} at {}", booking.service.name, business_name));
    let location = escape_text(business_address);
    let description = escape_text(&format!(
        "Booked for {}. {}",
        booking.contact.name, booking.service.description
    ));

    Some(format!(
        "BEGIN:VCALENDAR\r\n\
         VERSION:2.0\r\n\
         PRODID:-//SerenityScheduler//Booking Widget//EN\r\n\
         BEGIN:VEVENT\r\n\
         UID:{uid}\r\n\
         DTSTAMP:{dtstamp}\r\n\
         DTSTART:{dtstart}\r\n\
         DTEND:{dtend}\r\n\
         SUMMARY:{summary}\r\n\
         LOCATION:{location}\r\n\
         DESCRIPTION:{description}\r\n\
         END:VEVENT\r\n\
         END:VCALENDAR\r\n"
    ))
}

fn escape_text(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{find_service, ContactDetails};
    use chrono::NaiveDate;

    fn booking(service_id: &str, time: &str) -> ConfirmedBooking {
        ConfirmedBooking {
            service: *find_service(service_id).unwrap(),
            date: NaiveDate::from_ymd_opt(2026, 10, 26).unwrap(),
            time: time.to_string(),
            contact: ContactDetails {
                name: "Jane Doe".to_string(),
                email: "jane@example.com".to_string(),
                phone: None,
            },
        }
    }

    #[test]
    fn test_generate_ics() {
        let ics = generate_ics(
            &booking("svc_01", "09:00 AM"),
            "abc-123",
            "SerenityScheduler",
            "123 Beauty Lane, Serene City, 12345",
        )
        .unwrap();

        assert!(ics.contains("BEGIN:VCALENDAR"));
        assert!(ics.contains("BEGIN:VEVENT"));
        assert!(ics.contains("UID:abc-123@serenity-scheduler"));
        assert!(ics.contains("DTSTART:20261026T090000"));
        assert!(ics.contains("DTEND:20261026T100000"));
        assert!(ics.contains("SUMMARY:Signature Haircut at SerenityScheduler"));
        assert!(ics.contains("LOCATION:123 Beauty Lane\\, Serene City\\, 12345"));
        assert!(ics.contains("DESCRIPTION:Booked for Jane Doe."));
        assert!(ics.contains("END:VEVENT"));
        assert!(ics.ends_with("END:VCALENDAR\r\n"));
    }

    #[test]
    fn test_generate_ics_afternoon_slot_uses_service_duration() {
        let ics = generate_ics(&booking("svc_02", "01:30 PM"), "s", "Biz", "Here").unwrap();
        assert!(ics.contains("DTSTART:20261026T133000"));
        assert!(ics.contains("DTEND:20261026T163000"));
    }

    #[test]
    fn test_generate_ics_unreadable_slot() {
        assert!(generate_ics(&booking("svc_01", "soon"), "s", "Biz", "Here").is_none());
    }
}
