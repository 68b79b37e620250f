//! The booking wizard: a linear `date -> time -> details -> confirmed` flow
//! with two backward edges and a reset from anywhere.
//!
//! Every transition either applies or is ignored. An ignored transition leaves
//! the draft exactly as it was.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::availability::{is_bookable_date, is_offered};
use crate::models::{BookingStep, ConfirmedBooking, ContactDetails, Service};
use crate::services::validation::{validate_contact, ContactForm, FieldErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Applied,
    Ignored,
}

impl Transition {
    fn when(cond: bool) -> Self {
        if cond {
            Transition::Applied
        } else {
            Transition::Ignored
        }
    }

    pub fn applied(&self) -> bool {
        *self == Transition::Applied
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SubmitError {
    #[error("{0}")]
    Invalid(FieldErrors),

    #[error("contact details can only be submitted from the details step")]
    NotReady,

    #[error("a submission is already in progress")]
    InProgress,
}

/// Handle for one submission attempt. Completing with a stale ticket is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket(u64);

#[derive(Debug, Clone, Serialize)]
pub struct BookingDraft {
    dialog_open: bool,
    step: BookingStep,
    service: Option<Service>,
    date: Option<NaiveDate>,
    time: Option<String>,
    contact: Option<ContactDetails>,
    submitting: bool,
    #[serde(skip)]
    epoch: u64,
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self {
            dialog_open: false,
            step: BookingStep::Date,
            service: None,
            date: None,
            time: None,
            contact: None,
            submitting: false,
            epoch: 0,
        }
    }
}

impl BookingDraft {
    pub fn dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn step(&self) -> BookingStep {
        self.step
    }

    pub fn service(&self) -> Option<&Service> {
        self.service.as_ref()
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn time(&self) -> Option<&str> {
        self.time.as_deref()
    }

    pub fn contact(&self) -> Option<&ContactDetails> {
        self.contact.as_ref()
    }

    pub fn submitting(&self) -> bool {
        self.submitting
    }

    /// Opens the dialog on the date step for `service`, discarding any earlier draft.
    pub fn open(&mut self, service: &Service) -> Transition {
        let epoch = self.epoch + 1;
        *self = BookingDraft {
            dialog_open: true,
            service: Some(*service),
            epoch,
            ..BookingDraft::default()
        };
        Transition::Applied
    }

    pub fn select_date(&mut self, date: NaiveDate, today: NaiveDate) -> Transition {
        if !self.dialog_open || self.step != BookingStep::Date || !is_bookable_date(date, today) {
            return Transition::Ignored;
        }

        self.date = Some(date);
        if let Some(time) = &self.time {
            if !is_offered(date, time) {
                self.time = None;
            }
        }
        Transition::Applied
    }

    pub fn select_time(&mut self, time: &str) -> Transition {
        if !self.dialog_open || self.step != BookingStep::Time {
            return Transition::Ignored;
        }
        let Some(date) = self.date else {
            return Transition::Ignored;
        };
        if !is_offered(date, time) {
            return Transition::Ignored;
        }

        self.time = Some(time.to_string());
        Transition::Applied
    }

    /// Moves forward or back one step. `confirmed` is only reachable by submitting.
    pub fn go_to(&mut self, target: BookingStep) -> Transition {
        if !self.dialog_open {
            return Transition::Ignored;
        }

        let allowed = match (self.step, target) {
            (BookingStep::Date, BookingStep::Time) => self.date.is_some(),
            (BookingStep::Time, BookingStep::Details) => self.time.is_some(),
            (BookingStep::Time, BookingStep::Date) => true,
            (BookingStep::Details, BookingStep::Time) => !self.submitting,
            _ => false,
        };

        if allowed {
            self.step = target;
        }
        Transition::when(allowed)
    }

    /// Validates the contact form and, on success, marks the draft as submitting.
    pub fn begin_submission(&mut self, form: &ContactForm) -> Result<SubmissionTicket, SubmitError> {
        if !self.dialog_open || self.step != BookingStep::Details {
            return Err(SubmitError::NotReady);
        }
        if self.submitting {
            return Err(SubmitError::InProgress);
        }

        let contact = validate_contact(form).map_err(SubmitError::Invalid)?;
        self.contact = Some(contact);
        self.submitting = true;
        self.epoch += 1;
        Ok(SubmissionTicket(self.epoch))
    }

    /// Finishes the submission started with `ticket`.
    ///
    /// Returns the confirmed booking exactly once; a ticket invalidated by a
    /// reset or a re-open yields `None` and leaves the draft alone.
    pub fn complete_submission(&mut self, ticket: SubmissionTicket) -> Option<ConfirmedBooking> {
        if !self.submitting || ticket.0 != self.epoch {
            return None;
        }

        self.submitting = false;
        self.step = BookingStep::Confirmed;
        self.confirmed()
    }

    /// The confirmed booking, if the draft has reached the confirmed step.
    pub fn confirmed(&self) -> Option<ConfirmedBooking> {
        if self.step != BookingStep::Confirmed {
            return None;
        }
        Some(ConfirmedBooking {
            service: self.service?,
            date: self.date?,
            time: self.time.clone()?,
            contact: self.contact.clone()?,
        })
    }

    pub fn reset(&mut self) -> Transition {
        let epoch = self.epoch + 1;
        *self = BookingDraft {
            epoch,
            ..BookingDraft::default()
        };
        Transition::Applied
    }

    fn holds_invariants(&self) -> bool {
        let time_needs_date = self.time.is_none() || self.date.is_some();
        let time_is_offered = match (self.date, self.time.as_deref()) {
            (Some(date), Some(time)) => is_offered(date, time),
            _ => true,
        };
        let step_ok = match self.step {
            BookingStep::Date => true,
            BookingStep::Time => self.date.is_some(),
            BookingStep::Details => self.time.is_some(),
            BookingStep::Confirmed => self.contact.is_some() && self.time.is_some(),
        };
        time_needs_date && time_is_offered && step_ok
    }

    /// Checked by the session registry after every transition in debug builds.
    pub(crate) fn debug_assert_invariants(&self) {
        debug_assert!(self.holds_invariants(), "booking draft invariant broken: {self:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::find_service;
    use crate::services::validation::{ContactField, EMAIL_INVALID, NAME_TOO_SHORT};

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    // Tuesday
    fn today() -> NaiveDate {
        d("2026-10-20")
    }

    fn next_monday() -> NaiveDate {
        d("2026-10-26")
    }

    fn svc(id: &str) -> Service {
        *find_service(id).unwrap()
    }

    fn contact_form(name: &str, email: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            phone: None,
        }
    }

    fn at_step(step: BookingStep) -> BookingDraft {
        let mut draft = BookingDraft::default();
        draft.open(&svc("svc_01"));
        if step == BookingStep::Date {
            return draft;
        }
        draft.select_date(next_monday(), today());
        draft.go_to(BookingStep::Time);
        if step == BookingStep::Time {
            return draft;
        }
        draft.select_time("09:00 AM");
        draft.go_to(BookingStep::Details);
        if step == BookingStep::Details {
            return draft;
        }
        let ticket = draft
            .begin_submission(&contact_form("Jane Doe", "jane@example.com"))
            .unwrap();
        draft.complete_submission(ticket).unwrap();
        draft
    }

    #[test]
    fn test_default_draft_is_closed_and_empty() {
        let draft = BookingDraft::default();
        assert!(!draft.dialog_open());
        assert_eq!(draft.step(), BookingStep::Date);
        assert!(draft.service().is_none());
        assert!(draft.date().is_none());
        assert!(draft.time().is_none());
        assert!(draft.contact().is_none());
    }

    #[test]
    fn test_open_seeds_service() {
        let mut draft = BookingDraft::default();
        assert!(draft.open(&svc("svc_03")).applied());
        assert!(draft.dialog_open());
        assert_eq!(draft.step(), BookingStep::Date);
        assert_eq!(draft.service().unwrap().id, "svc_03");
    }

    #[test]
    fn test_open_starts_fresh_draft() {
        let mut draft = at_step(BookingStep::Details);
        draft.open(&svc("svc_02"));
        assert_eq!(draft.step(), BookingStep::Date);
        assert_eq!(draft.service().unwrap().id, "svc_02");
        assert!(draft.date().is_none());
        assert!(draft.time().is_none());
    }

    #[test]
    fn test_transitions_ignored_while_closed() {
        let mut draft = BookingDraft::default();
        assert_eq!(draft.select_date(next_monday(), today()), Transition::Ignored);
        assert_eq!(draft.go_to(BookingStep::Time), Transition::Ignored);
        assert!(draft.date().is_none());
    }

    #[test]
    fn test_select_date_rejects_past_and_sunday() {
        let mut draft = at_step(BookingStep::Date);
        assert_eq!(draft.select_date(d("2026-10-19"), today()), Transition::Ignored);
        assert_eq!(draft.select_date(d("2026-10-25"), today()), Transition::Ignored);
        assert!(draft.date().is_none());
        assert!(draft.select_date(today(), today()).applied());
        assert_eq!(draft.date(), Some(today()));
    }

    #[test]
    fn test_select_time_requires_date() {
        let mut draft = at_step(BookingStep::Date);
        assert_eq!(draft.select_time("09:00 AM"), Transition::Ignored);
        assert!(draft.time().is_none());
    }

    #[test]
    fn test_select_time_must_be_offered() {
        let mut draft = at_step(BookingStep::Time);
        assert_eq!(draft.select_time("12:00 PM"), Transition::Ignored);
        assert!(draft.select_time("04:30 PM").applied());
        assert_eq!(draft.time(), Some("04:30 PM"));
    }

    #[test]
    fn test_date_change_clears_unoffered_time() {
        let mut draft = at_step(BookingStep::Time);
        draft.select_time("04:30 PM");
        draft.go_to(BookingStep::Date);

        // Saturday only runs until 01:30 PM
        assert!(draft.select_date(d("2026-10-24"), today()).applied());
        assert!(draft.time().is_none());
    }

    #[test]
    fn test_date_change_keeps_offered_time() {
        let mut draft = at_step(BookingStep::Time);
        draft.select_time("10:00 AM");
        draft.go_to(BookingStep::Date);

        assert!(draft.select_date(d("2026-10-24"), today()).applied());
        assert_eq!(draft.time(), Some("10:00 AM"));
    }

    /// Like `at_step`, but the selection the current step asks for is already made.
    fn at_step_selected(step: BookingStep) -> BookingDraft {
        let mut draft = at_step(step);
        match step {
            BookingStep::Date => {
                draft.select_date(next_monday(), today());
            }
            BookingStep::Time => {
                draft.select_time("10:00 AM");
            }
            _ => {}
        }
        draft
    }

    #[test]
    fn test_step_transition_table_is_exhaustive() {
        for selected in [false, true] {
            for from in BookingStep::ALL {
                for to in BookingStep::ALL {
                    let mut draft = if selected { at_step_selected(from) } else { at_step(from) };
                    let outcome = draft.go_to(to);
                    let expected = match (from, to) {
                        (BookingStep::Time, BookingStep::Date)
                        | (BookingStep::Details, BookingStep::Time) => true,
                        (BookingStep::Date, BookingStep::Time)
                        | (BookingStep::Time, BookingStep::Details) => selected,
                        _ => false,
                    };
                    assert_eq!(outcome.applied(), expected, "{from:?} -> {to:?} (selected: {selected})");
                    let landed = if expected { to } else { from };
                    assert_eq!(draft.step(), landed);
                    assert!(draft.holds_invariants(), "{from:?} -> {to:?}: {draft:?}");
                }
            }
        }
    }

    #[test]
    fn test_forward_transitions_need_selection() {
        let mut draft = at_step(BookingStep::Date);
        assert_eq!(draft.go_to(BookingStep::Time), Transition::Ignored);

        let mut draft = at_step(BookingStep::Time);
        assert_eq!(draft.go_to(BookingStep::Details), Transition::Ignored);
        assert_eq!(draft.step(), BookingStep::Time);
    }

    #[test]
    fn test_confirmed_not_reachable_by_go_to() {
        let mut draft = at_step(BookingStep::Details);
        assert_eq!(draft.go_to(BookingStep::Confirmed), Transition::Ignored);
        assert_eq!(draft.step(), BookingStep::Details);
    }

    #[test]
    fn test_submit_minimum_name() {
        let mut draft = at_step(BookingStep::Details);
        let ticket = draft
            .begin_submission(&contact_form("Jo", "jo@example.com"))
            .unwrap();
        assert!(draft.submitting());
        let confirmed = draft.complete_submission(ticket).unwrap();
        assert_eq!(confirmed.contact.name, "Jo");
        assert_eq!(draft.step(), BookingStep::Confirmed);
        assert!(!draft.submitting());
    }

    #[test]
    fn test_submit_short_name_does_not_transition() {
        let mut draft = at_step(BookingStep::Details);
        let err = draft
            .begin_submission(&contact_form("J", "jo@example.com"))
            .unwrap_err();
        match err {
            SubmitError::Invalid(errors) => {
                assert_eq!(errors.get(ContactField::Name), Some(NAME_TOO_SHORT))
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(draft.step(), BookingStep::Details);
        assert!(!draft.submitting());
        assert!(draft.contact().is_none());
    }

    #[test]
    fn test_submit_bad_email() {
        let mut draft = at_step(BookingStep::Details);
        let err = draft
            .begin_submission(&contact_form("Jane Doe", "not-an-email"))
            .unwrap_err();
        match err {
            SubmitError::Invalid(errors) => {
                assert_eq!(errors.get(ContactField::Email), Some(EMAIL_INVALID))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_submit_outside_details_step() {
        let mut draft = at_step(BookingStep::Time);
        assert_eq!(
            draft.begin_submission(&contact_form("Jane Doe", "jane@example.com")),
            Err(SubmitError::NotReady)
        );
    }

    #[test]
    fn test_double_submit_rejected() {
        let mut draft = at_step(BookingStep::Details);
        let form = contact_form("Jane Doe", "jane@example.com");
        let ticket = draft.begin_submission(&form).unwrap();
        assert_eq!(draft.begin_submission(&form), Err(SubmitError::InProgress));
        assert_eq!(draft.go_to(BookingStep::Time), Transition::Ignored);

        assert!(draft.complete_submission(ticket).is_some());
        assert!(draft.complete_submission(ticket).is_none());
    }

    #[test]
    fn test_reset_invalidates_pending_submission() {
        let mut draft = at_step(BookingStep::Details);
        let ticket = draft
            .begin_submission(&contact_form("Jane Doe", "jane@example.com"))
            .unwrap();
        draft.reset();
        assert!(draft.complete_submission(ticket).is_none());
        assert_eq!(draft.step(), BookingStep::Date);
    }

    #[test]
    fn test_reopen_invalidates_pending_submission() {
        let mut draft = at_step(BookingStep::Details);
        let ticket = draft
            .begin_submission(&contact_form("Jane Doe", "jane@example.com"))
            .unwrap();
        draft.open(&svc("svc_01"));
        assert!(draft.complete_submission(ticket).is_none());
        assert!(!draft.submitting());
    }

    #[test]
    fn test_reset_from_every_step() {
        for step in BookingStep::ALL {
            let mut draft = at_step(step);
            assert!(draft.reset().applied());
            assert!(!draft.dialog_open());
            assert_eq!(draft.step(), BookingStep::Date);
            assert!(draft.service().is_none());
            assert!(draft.date().is_none());
            assert!(draft.time().is_none());
            assert!(draft.contact().is_none());
            assert!(!draft.submitting());
        }
    }

    #[test]
    fn test_confirmed_summary() {
        let draft = at_step(BookingStep::Confirmed);
        let confirmed = draft.confirmed().unwrap();
        assert_eq!(confirmed.service.id, "svc_01");
        assert_eq!(confirmed.date, next_monday());
        assert_eq!(confirmed.time, "09:00 AM");
        assert_eq!(
            confirmed.summary(),
            "Your appointment for a Signature Haircut on October 26th, 2026 at 09:00 AM has been successfully booked."
        );
        assert!(at_step(BookingStep::Details).confirmed().is_none());
    }

    #[test]
    fn test_draft_serializes_lowercase_step() {
        let draft = at_step(BookingStep::Time);
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["step"], "time");
        assert_eq!(json["date"], "2026-10-26");
        assert_eq!(json["dialog_open"], true);
        assert!(json.get("epoch").is_none());
    }
}
