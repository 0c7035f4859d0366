use super::car::Car;
use crate::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Read-only lookup of cars by id.
#[async_trait]
pub trait CarRepository: Send + Sync {
    /// Returns the car with `id`, or `RentalError::NotFound`.
    async fn find(&self, id: &str) -> Result<Car>;
    async fn all(&self) -> Result<Vec<Car>>;
}

/// Source of uniformly distributed positions.
pub trait RandomSource: Send + Sync {
    /// A position in `0..len`. Callers guarantee `len > 0`.
    fn position(&self, len: usize) -> usize;
}

pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

pub trait CurrencyFormatter: Send + Sync {
    fn format(&self, amount: Decimal) -> String;
}

pub trait DateFormatter: Send + Sync {
    fn format(&self, date: NaiveDate) -> String;
}

pub type CarRepositoryBox = Box<dyn CarRepository>;
pub type RandomSourceBox = Box<dyn RandomSource>;
pub type ClockBox = Box<dyn Clock>;
pub type CurrencyFormatterBox = Box<dyn CurrencyFormatter>;
pub type DateFormatterBox = Box<dyn DateFormatter>;
