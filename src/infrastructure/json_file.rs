use crate::domain::car::Car;
use crate::domain::ports::CarRepository;
use crate::error::{RentalError, Result};
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads a JSON array of records from `path`.
pub async fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let bytes = tokio::fs::read(path).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Writes `records` to `path` as a pretty-printed JSON array.
pub async fn save_records<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let json = serde_json::to_vec_pretty(records)?;
    tokio::fs::write(path, json).await?;
    Ok(())
}

/// Car repository backed by a JSON file.
///
/// The file is re-read on every lookup, so edits to the database are
/// visible without restarting.
#[derive(Debug, Clone)]
pub struct JsonFileCarRepository {
    path: PathBuf,
}

impl JsonFileCarRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CarRepository for JsonFileCarRepository {
    async fn find(&self, id: &str) -> Result<Car> {
        debug!(path = %self.path.display(), id, "looking up car");
        load_records::<Car>(&self.path)
            .await?
            .into_iter()
            .find(|car| car.id == id)
            .ok_or_else(|| RentalError::NotFound { id: id.to_string() })
    }

    async fn all(&self) -> Result<Vec<Car>> {
        load_records(&self.path).await
    }
}
