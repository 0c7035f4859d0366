use async_trait::async_trait;
use rentacar::domain::car::{Car, CarCategory};
use rentacar::domain::customer::Customer;
use rentacar::domain::ports::{CarRepository, RandomSource};
use rentacar::error::{RentalError, Result};
use rust_decimal_macros::dec;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub fn valid_car() -> Car {
    Car {
        id: "5e7ae7e6-4d2b-4d6b-9a4a-2f7d6b8a1c01".to_string(),
        name: "Gol".to_string(),
        release_year: 2018,
        available: true,
        gas_available: true,
    }
}

pub fn valid_car_category() -> CarCategory {
    CarCategory {
        id: "hatch".to_string(),
        name: "Hatchback".to_string(),
        car_ids: vec![
            "5e7ae7e6-4d2b-4d6b-9a4a-2f7d6b8a1c01".to_string(),
            "0b3f5a9c-7d1e-4c2a-8f6b-9e4d3c2b1a02".to_string(),
        ],
        price: dec!(42.1),
    }
}

pub fn valid_customer() -> Customer {
    Customer {
        id: "c0ffee00-1111-2222-3333-444455556666".to_string(),
        name: "Ana Silva".to_string(),
        age: 30,
    }
}

/// Repository fake that answers every lookup with the same car and
/// remembers the ids it was asked for.
#[derive(Clone)]
pub struct RecordingRepository {
    car: Option<Car>,
    lookups: Arc<Mutex<Vec<String>>>,
}

impl RecordingRepository {
    pub fn resolving(car: Car) -> Self {
        Self {
            car: Some(car),
            lookups: Arc::default(),
        }
    }

    pub fn empty() -> Self {
        Self {
            car: None,
            lookups: Arc::default(),
        }
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl CarRepository for RecordingRepository {
    async fn find(&self, id: &str) -> Result<Car> {
        self.lookups.lock().unwrap().push(id.to_string());
        self.car
            .clone()
            .ok_or_else(|| RentalError::NotFound { id: id.to_string() })
    }

    async fn all(&self) -> Result<Vec<Car>> {
        Ok(self.car.iter().cloned().collect())
    }
}

/// Random source pinned to one position, counting how often it is asked.
#[derive(Clone)]
pub struct FixedRandom {
    position: usize,
    calls: Arc<AtomicUsize>,
}

impl FixedRandom {
    pub fn new(position: usize) -> Self {
        Self {
            position,
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RandomSource for FixedRandom {
    fn position(&self, _len: usize) -> usize {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.position
    }
}
