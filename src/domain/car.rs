use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single rentable vehicle as stored in the car database.
///
/// Identity is the `id`; the service never mutates a car.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: String,
    pub name: String,
    pub release_year: u16,
    pub available: bool,
    pub gas_available: bool,
}

/// A class of vehicles sharing a daily price and a pool of candidate cars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarCategory {
    pub id: String,
    pub name: String,
    pub car_ids: Vec<String>,
    /// Base daily rate.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}
