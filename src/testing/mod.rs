//! Builders for unit-test fixtures

use chrono::NaiveDate;

use crate::database::models::{Car, Rental, User};
use crate::services::availability::DATE_FORMAT;

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, DATE_FORMAT).expect("test date")
}

/// An available five-seat hatchback with the given daily price
pub fn sample_car(id: &str, price: i64) -> Car {
    Car {
        id: id.to_string(),
        image_url: None,
        brand: "Toyota".to_string(),
        model: "Corolla".to_string(),
        car_type: "hatchback".to_string(),
        number_of_seats: 5,
        horse_power: 120,
        gearbox: "manual".to_string(),
        trunk: 350,
        fuel_type: "petrol".to_string(),
        number_of_doors: 5,
        color: "white".to_string(),
        production_year: 2020,
        fuel_consumption: 5.8,
        available: true,
        price,
    }
}

pub fn sample_rental(id: &str, car_id: &str, start: &str, end: &str) -> Rental {
    Rental {
        id: id.to_string(),
        car_id: car_id.to_string(),
        start_date: date(start),
        end_date: date(end),
        is_canceled: false,
    }
}

pub fn sample_user(id: &str) -> User {
    User {
        id: id.to_string(),
        licence_number: "LIC-1".to_string(),
        wallet_balance: 100,
        country: "PL".to_string(),
        city: "Warsaw".to_string(),
        street: "Koszykowa".to_string(),
        postal_code: "00-662".to_string(),
        house_number: "75".to_string(),
        apartment_number: None,
        phone_number: "+48 123 456 789".to_string(),
    }
}
