use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: u64,
    #[serde(skip_serializing, default)]
    pub session_id: String,
    pub title: String,
    pub description: String,
    pub service_id: String,
    pub date: NaiveDate,
    pub time: String,
    pub created_at: String,
}
