use thiserror::Error;

#[derive(Error, Debug)]
pub enum RentalError {
    #[error("Car not found: {id}")]
    NotFound { id: String },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("No tax tier covers customer age {age}")]
    NoTaxTier { age: u32 },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RentalError>;
