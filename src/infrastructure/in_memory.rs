use crate::domain::car::Car;
use crate::domain::ports::CarRepository;
use crate::error::{RentalError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory car repository.
///
/// Uses `Arc<RwLock<HashMap<String, Car>>>` so clones share the same cars.
/// Handy for tests and for callers that already hold their fleet in memory.
#[derive(Default, Clone)]
pub struct InMemoryCarRepository {
    cars: Arc<RwLock<HashMap<String, Car>>>,
}

impl InMemoryCarRepository {
    /// Creates a new, empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cars(cars: impl IntoIterator<Item = Car>) -> Self {
        let cars = cars.into_iter().map(|car| (car.id.clone(), car)).collect();
        Self {
            cars: Arc::new(RwLock::new(cars)),
        }
    }

    pub async fn insert(&self, car: Car) {
        let mut cars = self.cars.write().await;
        cars.insert(car.id.clone(), car);
    }
}

#[async_trait]
impl CarRepository for InMemoryCarRepository {
    async fn find(&self, id: &str) -> Result<Car> {
        let cars = self.cars.read().await;
        cars.get(id)
            .cloned()
            .ok_or_else(|| RentalError::NotFound { id: id.to_string() })
    }

    async fn all(&self) -> Result<Vec<Car>> {
        let cars = self.cars.read().await;
        let mut all: Vec<Car> = cars.values().cloned().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(all)
    }
}
