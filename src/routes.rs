use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::home::home_page))
        .route("/health", get(handlers::health::health))
        .route("/api/services", get(handlers::catalog::list_services))
        .route("/api/services/:id", get(handlers::catalog::get_service))
        .route("/api/availability", get(handlers::catalog::get_availability))
        .route("/api/bookings", post(handlers::bookings::create_session))
        .route("/api/bookings/:id", get(handlers::bookings::get_draft))
        .route("/api/bookings/:id/dialog", get(handlers::bookings::get_dialog))
        .route("/api/bookings/:id/open", post(handlers::bookings::open))
        .route("/api/bookings/:id/date", post(handlers::bookings::select_date))
        .route("/api/bookings/:id/time", post(handlers::bookings::select_time))
        .route("/api/bookings/:id/step", post(handlers::bookings::go_to_step))
        .route(
            "/api/bookings/:id/details",
            post(handlers::bookings::submit_details),
        )
        .route("/api/bookings/:id/reset", post(handlers::bookings::reset))
        .route(
            "/api/bookings/:id/calendar.ics",
            get(handlers::calendar::download_ics),
        )
        .route(
            "/api/bookings/:id/notifications",
            get(handlers::notifications::list_notifications),
        )
        .route(
            "/api/bookings/:id/notifications/events",
            get(handlers::notifications::events_stream),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
