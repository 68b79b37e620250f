use chrono::NaiveDate;
use serde::Serialize;

use crate::models::availability::{available_times, format_long_date};
use crate::models::BookingStep;
use crate::services::wizard::BookingDraft;

pub const NO_SLOTS_MESSAGE: &str = "No available slots for this day. Please select another date.";
pub const CONFIRMED_HEADING: &str = "Booking Confirmed!";
pub const CONFIRMATION_NOTE: &str = "A confirmation email has been sent to you.";

#[derive(Debug, Serialize)]
pub struct DialogView {
    pub open: bool,
    pub step: BookingStep,
    pub header: Option<DialogHeader>,
    pub body: StepView,
}

#[derive(Debug, Serialize)]
pub struct DialogHeader {
    pub title: String,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StepView {
    Date(DateStep),
    Time(TimeStep),
    Details(DetailsStep),
    Confirmed(ConfirmedStep),
}

#[derive(Debug, Serialize)]
pub struct DateStep {
    pub selected_date: Option<NaiveDate>,
    pub continue_label: &'static str,
    pub can_continue: bool,
}

#[derive(Debug, Serialize)]
pub struct SlotOption {
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Serialize)]
pub struct TimeStep {
    pub heading: Option<String>,
    pub slots: Vec<SlotOption>,
    pub empty_message: Option<&'static str>,
    pub continue_label: &'static str,
    pub can_continue: bool,
}

#[derive(Debug, Serialize)]
pub struct DetailsStep {
    pub submitting: bool,
    pub can_go_back: bool,
    pub can_submit: bool,
    pub submit_label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ConfirmedStep {
    pub heading: &'static str,
    pub summary: String,
    pub note: &'static str,
    pub action_label: &'static str,
}

fn step_description(step: BookingStep) -> &'static str {
    match step {
        BookingStep::Date => "Choose a day for your appointment.",
        BookingStep::Time => "Choose an available time slot.",
        BookingStep::Details => "Please provide your contact information.",
        BookingStep::Confirmed => "",
    }
}

/// The dialog as the widget should render it for `draft`.
pub fn dialog_view(draft: &BookingDraft) -> DialogView {
    let step = draft.step();
    let header = (step != BookingStep::Confirmed).then(|| DialogHeader {
        title: draft.service().map(|s| s.name.to_string()).unwrap_or_default(),
        description: step_description(step),
    });

    DialogView {
        open: draft.dialog_open(),
        step,
        header,
        body: step_view(draft),
    }
}

pub fn step_view(draft: &BookingDraft) -> StepView {
    match draft.step() {
        BookingStep::Date => StepView::Date(DateStep {
            selected_date: draft.date(),
            continue_label: "Select Time",
            can_continue: draft.date().is_some(),
        }),
        BookingStep::Time => {
            let slots: Vec<SlotOption> = draft
                .date()
                .map(available_times)
                .unwrap_or_default()
                .into_iter()
                .map(|label| SlotOption {
                    selected: draft.time() == Some(label.as_str()),
                    label,
                })
                .collect();
            StepView::Time(TimeStep {
                heading: draft
                    .date()
                    .map(|d| format!("Available slots for {}", format_long_date(d))),
                empty_message: slots.is_empty().then_some(NO_SLOTS_MESSAGE),
                slots,
                continue_label: "Enter Details",
                can_continue: draft.time().is_some(),
            })
        }
        BookingStep::Details => StepView::Details(DetailsStep {
            submitting: draft.submitting(),
            can_go_back: !draft.submitting(),
            can_submit: !draft.submitting(),
            submit_label: "Confirm Booking",
        }),
        BookingStep::Confirmed => StepView::Confirmed(ConfirmedStep {
            heading: CONFIRMED_HEADING,
            summary: draft.confirmed().map(|b| b.summary()).unwrap_or_default(),
            note: CONFIRMATION_NOTE,
            action_label: "Book Another Appointment",
        }),
    }
}
