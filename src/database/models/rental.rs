use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A booking of one car for an inclusive range of calendar days
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Rental {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub car_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub is_canceled: bool,
}

impl Rental {
    pub fn is_active(&self) -> bool {
        !self.is_canceled
    }

    /// Strict overlap: touching endpoints are not an overlap
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start_date < end && self.end_date > start
    }
}
