use axum::extract::{Path, Query};
use axum::Json;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::availability::{available_times, is_bookable_date};
use crate::models::{catalog, find_service, Service, TimeSlot};

// GET /api/services
pub async fn list_services() -> Json<&'static [Service]> {
    Json(catalog())
}

// GET /api/services/:id
pub async fn get_service(Path(id): Path<String>) -> Result<Json<Service>, AppError> {
    find_service(&id)
        .copied()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("service {id}")))
}

// GET /api/availability?date=YYYY-MM-DD
#[derive(Deserialize)]
pub struct AvailabilityQuery {
    pub date: String,
}

#[derive(Serialize)]
pub struct AvailabilityResponse {
    date: NaiveDate,
    weekday: String,
    bookable: bool,
    times: Vec<TimeSlot>,
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("invalid date '{raw}', expected YYYY-MM-DD")))
}

pub async fn get_availability(
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let date = parse_date(&query.date)?;
    let today = chrono::Local::now().date_naive();

    Ok(Json(AvailabilityResponse {
        date,
        weekday: date.weekday().to_string(),
        bookable: is_bookable_date(date, today),
        times: available_times(date),
    }))
}
