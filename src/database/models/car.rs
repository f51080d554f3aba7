use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A rentable car as stored in the car catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Car {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub brand: String,
    pub model: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub car_type: String,
    pub number_of_seats: i32,
    pub horse_power: i32,
    pub gearbox: String,
    pub trunk: i32,
    pub fuel_type: String,
    pub number_of_doors: i32,
    pub color: String,
    pub production_year: i32,
    pub fuel_consumption: f64,
    pub available: bool,
    /// Daily price
    pub price: i64,
}
