use std::collections::HashSet;

use chrono::NaiveDate;
use thiserror::Error;

use crate::database::models::{Car, Rental};
use crate::types::RentalSearchResult;

/// Wire format for every date accepted or stored by the API
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error, PartialEq)]
pub enum WindowError {
    #[error("Invalid {field} '{value}', expected YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },

    #[error("end_date {end} is before start_date {start}")]
    Inverted { start: NaiveDate, end: NaiveDate },
}

/// Requested rental window; `start <= end` always holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, WindowError> {
        if end < start {
            return Err(WindowError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn parse(start: &str, end: &str) -> Result<Self, WindowError> {
        let start = parse_date("start_date", start)?;
        let end = parse_date("end_date", end)?;
        Self::new(start, end)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Billable days; a same-day window is zero
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, WindowError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| WindowError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// Keeps available cars with no active rental overlapping `window`, priced for the window.
/// Output preserves the input car order.
pub fn filter_available(cars: Vec<Car>, rentals: &[Rental], window: &DateWindow) -> Vec<RentalSearchResult> {
    let booked: HashSet<&str> = rentals
        .iter()
        .filter(|r| r.is_active())
        .filter(|r| r.overlaps(window.start, window.end))
        .map(|r| r.car_id.as_str())
        .collect();

    let days = window.days();
    cars.into_iter()
        .filter(|car| car.available)
        .filter(|car| !booked.contains(car.id.as_str()))
        .map(|car| RentalSearchResult::from_car(car, days))
        .collect()
}
