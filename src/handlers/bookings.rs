use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::catalog::parse_date;
use crate::errors::AppError;
use crate::models::BookingStep;
use crate::services::booking;
use crate::services::validation::ContactForm;
use crate::services::wizard::BookingDraft;
use crate::state::AppState;
use crate::views::{dialog_view, DialogView};

#[derive(Deserialize)]
pub struct OpenRequest {
    pub service_id: String,
}

#[derive(Serialize)]
pub struct SessionResponse {
    pub session_id: String,
    pub draft: BookingDraft,
}

// POST /api/bookings
pub async fn create_session(
    State(state): State<Arc<AppState>>,
    Json(body): Json<OpenRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), AppError> {
    let (session_id, draft) = booking::start_session(&state, body.service_id.trim())?;
    Ok((StatusCode::CREATED, Json(SessionResponse { session_id, draft })))
}

// GET /api/bookings/:id
pub async fn get_draft(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<BookingDraft>, AppError> {
    booking::draft(&state, &id).map(Json)
}

// GET /api/bookings/:id/dialog
pub async fn get_dialog(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DialogView>, AppError> {
    let draft = booking::draft(&state, &id)?;
    Ok(Json(dialog_view(&draft)))
}

// POST /api/bookings/:id/open
pub async fn open(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<OpenRequest>,
) -> Result<Json<BookingDraft>, AppError> {
    booking::open(&state, &id, body.service_id.trim()).map(Json)
}

// POST /api/bookings/:id/date
#[derive(Deserialize)]
pub struct DateRequest {
    pub date: String,
}

pub async fn select_date(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<DateRequest>,
) -> Result<Json<BookingDraft>, AppError> {
    let date = parse_date(&body.date)?;
    let today = chrono::Local::now().date_naive();
    booking::select_date(&state, &id, date, today).map(Json)
}

// POST /api/bookings/:id/time
#[derive(Deserialize)]
pub struct TimeRequest {
    pub time: String,
}

pub async fn select_time(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<TimeRequest>,
) -> Result<Json<BookingDraft>, AppError> {
    booking::select_time(&state, &id, body.time.trim()).map(Json)
}

// POST /api/bookings/:id/step
#[derive(Deserialize)]
pub struct StepRequest {
    pub step: BookingStep,
}

pub async fn go_to_step(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<StepRequest>,
) -> Result<Json<BookingDraft>, AppError> {
    booking::go_to(&state, &id, body.step).map(Json)
}

// POST /api/bookings/:id/details
pub async fn submit_details(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(form): Json<ContactForm>,
) -> Result<(StatusCode, Json<BookingDraft>), AppError> {
    let draft = booking::submit_details(&state, &id, &form)?;
    Ok((StatusCode::ACCEPTED, Json(draft)))
}

// POST /api/bookings/:id/reset
pub async fn reset(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<BookingDraft>, AppError> {
    booking::reset(&state, &id).map(Json)
}
