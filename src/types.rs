/// Request and response shapes shared by the search handlers and services
use serde::{Deserialize, Serialize};

use crate::database::models::Car;

/// Body of `POST /filtered`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RentalSearch {
    pub number_of_seats: Option<i32>,
    pub brand: Option<String>,
    #[serde(rename = "type")]
    pub car_type: Option<String>,
    pub gearbox: Option<String>,
    pub fuel_type: Option<String>,
    pub number_of_doors: Option<i32>,
    pub earliest_production_year: Option<i32>,
    pub minimal_horse_power: Option<i32>,
    pub minimal_trunk_size: Option<i32>,
    pub minimal_price: Option<i64>,
    pub maximal_price: Option<i64>,
    /// Kept as text so malformed dates surface as field validation errors
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalSearchResult {
    #[serde(rename = "_id")]
    pub id: String,
    pub image_url: Option<String>,
    pub brand: String,
    pub model: String,
    pub number_of_seats: i32,
    pub horse_power: i32,
    pub gearbox: String,
    pub trunk: i32,
    pub fuel_type: String,
    pub number_of_doors: i32,
    pub color: String,
    pub production_year: i32,
    pub fuel_consumption: f64,
    pub price_overall: i64,
}

impl RentalSearchResult {
    pub fn from_car(car: Car, days: i64) -> Self {
        Self {
            price_overall: car.price * days,
            id: car.id,
            image_url: car.image_url,
            brand: car.brand,
            model: car.model,
            number_of_seats: car.number_of_seats,
            horse_power: car.horse_power,
            gearbox: car.gearbox,
            trunk: car.trunk,
            fuel_type: car.fuel_type,
            number_of_doors: car.number_of_doors,
            color: car.color,
            production_year: car.production_year,
            fuel_consumption: car.fuel_consumption,
        }
    }
}

/// Distinct values per filterable attribute, each sorted ascending
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterParameters {
    pub cars_brands: Vec<String>,
    pub number_of_seats: Vec<i32>,
    #[serde(rename = "type")]
    pub types: Vec<String>,
    pub gearboxes: Vec<String>,
    pub fuel_types: Vec<String>,
    pub number_of_doors: Vec<i32>,
}
