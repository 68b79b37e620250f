use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::response::sse::{Event, Sse};
use axum::Json;
use serde::Deserialize;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;

use crate::errors::AppError;
use crate::models::Notification;
use crate::services::booking;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SinceQuery {
    pub last_id: Option<u64>,
}

// GET /api/bookings/:id/notifications
pub async fn list_notifications(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<SinceQuery>,
) -> Result<Json<Vec<Notification>>, AppError> {
    booking::notifications(&state, &id, query.last_id.unwrap_or(0)).map(Json)
}

fn to_event(notification: &Notification) -> Event {
    let data = serde_json::to_string(notification).unwrap_or_default();
    Event::default()
        .id(notification.id.to_string())
        .event("notification")
        .data(data)
}

// GET /api/bookings/:id/notifications/events
pub async fn events_stream(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<SinceQuery>,
) -> Result<Sse<impl tokio_stream::Stream<Item = Result<Event, Infallible>>>, AppError> {
    // Subscribe before reading history so nothing falls between the two
    let rx = state.notifications.subscribe();
    let catchup = booking::notifications(&state, &id, query.last_id.unwrap_or(0))?;
    let high_water = catchup.last().map(|n| n.id).unwrap_or(0);

    let catchup_stream =
        tokio_stream::iter(catchup.into_iter().map(|n| Ok::<_, Infallible>(to_event(&n))));

    let live_stream = BroadcastStream::new(rx).filter_map(move |result| match result {
        Ok(n) if n.session_id == id && n.id > high_water => Some(Ok(to_event(&n))),
        Ok(_) => None,
        Err(tokio_stream::wrappers::errors::BroadcastStreamRecvError::Lagged(skipped)) => {
            tracing::warn!(skipped, "notification stream lagged");
            None
        }
    });

    let keepalive_stream = tokio_stream::StreamExt::map(
        tokio_stream::wrappers::IntervalStream::new(tokio::time::interval(Duration::from_secs(30))),
        |_| Ok(Event::default().comment("keepalive")),
    );

    let combined = catchup_stream.chain(live_stream);
    let merged = StreamExt::merge(combined, keepalive_stream);

    Ok(Sse::new(merged))
}
