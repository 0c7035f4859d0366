use crate::domain::customer::Customer;
use crate::error::{RentalError, Result};
use serde::Deserialize;
use std::io::Read;

/// One row of a batch rental file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RentalRequest {
    pub customer_id: String,
    pub customer_name: String,
    pub age: u32,
    pub category_id: String,
    pub days: u32,
}

impl RentalRequest {
    pub fn customer(&self) -> Customer {
        Customer {
            id: self.customer_id.clone(),
            name: self.customer_name.clone(),
            age: self.age,
        }
    }
}

/// Reads rental requests from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over `Result<RentalRequest>`.
/// Whitespace around fields is trimmed.
pub struct RentalRequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RentalRequestReader<R> {
    /// Creates a new `RentalRequestReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes requests.
    pub fn requests(self) -> impl Iterator<Item = Result<RentalRequest>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(RentalError::from))
    }
}
