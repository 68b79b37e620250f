use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use chrono::Datelike;

use crate::state::AppState;
use crate::views::render_home_page;

pub async fn home_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let year = chrono::Local::now().year();
    Html(render_home_page(&state.config, year))
}
