use crate::domain::tax::TaxTable;
use crate::error::Result;
use crate::interfaces::format::{Currency, Locale};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings a `CarService` is built from.
///
/// Loaded from JSON with camelCase keys, e.g.
/// `{"cars": "database/cars.json", "locale": "en-US", "currency": "USD"}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalConfig {
    /// Path of the JSON car database.
    pub cars: PathBuf,
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub taxes_based_on_age: Option<TaxTable>,
}

impl RentalConfig {
    pub fn new(cars: impl Into<PathBuf>) -> Self {
        Self {
            cars: cars.into(),
            locale: Locale::default(),
            currency: Currency::default(),
            taxes_based_on_age: None,
        }
    }

    /// Loads a config file. A relative `cars` path is taken relative to the
    /// directory holding the config file.
    pub async fn from_file(path: &Path) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let mut config: Self = serde_json::from_slice(&bytes)?;
        if config.cars.is_relative()
            && let Some(dir) = path.parent()
        {
            config.cars = dir.join(&config.cars);
        }
        Ok(config)
    }
}
