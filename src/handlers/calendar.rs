use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::errors::AppError;
use crate::services::booking;
use crate::services::calendar::generate_ics;
use crate::state::AppState;

// GET /api/bookings/:id/calendar.ics
pub async fn download_ics(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let confirmed = booking::draft(&state, &id)?
        .confirmed()
        .ok_or_else(|| AppError::NotFound(format!("confirmed booking for session {id}")))?;

    let ics = generate_ics(
        &confirmed,
        &id,
        &state.config.business_name,
        &state.config.business_address,
    )
    .ok_or_else(|| {
        tracing::error!(session_id = %id, time = %confirmed.time, "unreadable slot time for .ics");
        AppError::NotFound(format!("calendar entry for session {id}"))
    })?;

    let filename = format!("booking-{}.ics", confirmed.date.format("%Y-%m-%d"));

    Ok((
        [
            (header::CONTENT_TYPE, "text/calendar; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        ics,
    )
        .into_response())
}
