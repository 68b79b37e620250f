use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;

use crate::errors::AppError;
use crate::models::{find_service, BookingStep, ConfirmedBooking, Notification, Service};
use crate::services::validation::ContactForm;
use crate::services::wizard::{BookingDraft, SubmissionTicket, Transition};
use crate::state::AppState;

fn lookup_service(service_id: &str) -> Result<&'static Service, AppError> {
    find_service(service_id).ok_or_else(|| AppError::NotFound(format!("service {service_id}")))
}

fn session_not_found(session_id: &str) -> AppError {
    AppError::NotFound(format!("booking session {session_id}"))
}

/// Starts a new booking session with the dialog open on `service_id`.
pub fn start_session(state: &AppState, service_id: &str) -> Result<(String, BookingDraft), AppError> {
    let service = lookup_service(service_id)?;
    let mut draft = BookingDraft::default();
    draft.open(service);
    let session_id = state.sessions.create(draft.clone());

    tracing::info!(session_id = %session_id, service_id, "booking session started");
    Ok((session_id, draft))
}

pub fn draft(state: &AppState, session_id: &str) -> Result<BookingDraft, AppError> {
    state
        .sessions
        .snapshot(session_id)
        .ok_or_else(|| session_not_found(session_id))
}

/// Notifications already delivered to this session, after `last_id`.
pub fn notifications(
    state: &AppState,
    session_id: &str,
    last_id: u64,
) -> Result<Vec<Notification>, AppError> {
    draft(state, session_id)?;
    Ok(state.notifications.since(session_id, last_id))
}

fn apply(
    state: &AppState,
    session_id: &str,
    operation: &'static str,
    f: impl FnOnce(&mut BookingDraft) -> Transition,
) -> Result<BookingDraft, AppError> {
    let (outcome, draft) = state
        .sessions
        .with_draft(session_id, |d| (f(d), d.clone()))
        .ok_or_else(|| session_not_found(session_id))?;

    match outcome {
        Transition::Applied => tracing::info!(
            session_id,
            operation,
            step = draft.step().as_str(),
            "booking transition applied"
        ),
        Transition::Ignored => tracing::debug!(
            session_id,
            operation,
            step = draft.step().as_str(),
            "booking transition ignored"
        ),
    }
    Ok(draft)
}

pub fn open(state: &AppState, session_id: &str, service_id: &str) -> Result<BookingDraft, AppError> {
    let service = lookup_service(service_id)?;
    apply(state, session_id, "open", |d| d.open(service))
}

pub fn select_date(
    state: &AppState,
    session_id: &str,
    date: NaiveDate,
    today: NaiveDate,
) -> Result<BookingDraft, AppError> {
    apply(state, session_id, "select_date", |d| d.select_date(date, today))
}

pub fn select_time(state: &AppState, session_id: &str, time: &str) -> Result<BookingDraft, AppError> {
    apply(state, session_id, "select_time", |d| d.select_time(time))
}

pub fn go_to(state: &AppState, session_id: &str, step: BookingStep) -> Result<BookingDraft, AppError> {
    apply(state, session_id, "go_to", |d| d.go_to(step))
}

pub fn reset(state: &AppState, session_id: &str) -> Result<BookingDraft, AppError> {
    apply(state, session_id, "reset", |d| d.reset())
}

/// Validates the contact form and schedules the simulated confirmation.
///
/// Returns the draft as it stands right after validation (`submitting` set);
/// the transition to `confirmed` happens once the configured delay elapses.
pub fn submit_details(
    state: &Arc<AppState>,
    session_id: &str,
    form: &ContactForm,
) -> Result<BookingDraft, AppError> {
    let (ticket, draft) = state
        .sessions
        .with_draft(session_id, |d| d.begin_submission(form).map(|t| (t, d.clone())))
        .ok_or_else(|| session_not_found(session_id))?
        .map_err(|e| {
            tracing::debug!(session_id, error = %e, "contact details rejected");
            AppError::from(e)
        })?;

    tracing::info!(session_id, "contact details accepted, submitting booking");

    let task_state = Arc::clone(state);
    let task_session = session_id.to_string();
    tokio::spawn(async move {
        finish_submission(&task_state, &task_session, ticket).await;
    });

    Ok(draft)
}

async fn finish_submission(
    state: &AppState,
    session_id: &str,
    ticket: SubmissionTicket,
) -> Option<ConfirmedBooking> {
    tokio::time::sleep(Duration::from_millis(state.config.submit_delay_ms)).await;

    let booking = state
        .sessions
        .with_draft(session_id, |d| d.complete_submission(ticket))
        .flatten();

    let Some(booking) = booking else {
        tracing::info!(session_id, "submission superseded before it completed");
        return None;
    };

    tracing::info!(
        session_id,
        service_id = booking.service.id,
        date = %booking.date,
        time = %booking.time,
        "booking confirmed"
    );

    state.notifications.booking_confirmed(session_id, &booking);

    if let Err(e) = state.confirmations.send_confirmation(&booking).await {
        tracing::error!(session_id, error = %e, "failed to send booking confirmation");
    }

    Some(booking)
}
