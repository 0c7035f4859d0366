use super::json_file::save_records;
use crate::domain::car::{Car, CarCategory};
use crate::domain::customer::Customer;
use crate::error::Result;
use rand::Rng;
use rand::seq::SliceRandom;
use rust_decimal::Decimal;
use std::path::Path;
use tracing::info;
use uuid::Uuid;

pub const CARS_FILE: &str = "cars.json";
pub const CATEGORIES_FILE: &str = "carCategories.json";
pub const CUSTOMERS_FILE: &str = "customers.json";

const CATEGORY_NAMES: &[&str] = &["Hatchback", "Sedan", "SUV", "Pickup", "Minivan", "Coupe"];
const MODEL_NAMES: &[&str] = &[
    "Gol", "Onix", "Civic", "Corolla", "Compass", "Hilux", "Kwid", "Argo", "Polo", "Renegade",
];
const FIRST_NAMES: &[&str] = &["Ana", "Bruno", "Carla", "Diego", "Elisa", "Fabio", "Gabi"];
const LAST_NAMES: &[&str] = &["Silva", "Souza", "Lima", "Costa", "Rocha", "Alves"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedOptions {
    pub categories: usize,
    pub cars_per_category: usize,
    pub customers: usize,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            categories: 1,
            cars_per_category: 2,
            customers: 1,
        }
    }
}

/// A generated database: every category's `car_ids` point into `cars`.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedData {
    pub cars: Vec<Car>,
    pub categories: Vec<CarCategory>,
    pub customers: Vec<Customer>,
}

impl SeedData {
    pub fn generate<R: Rng + ?Sized>(options: SeedOptions, rng: &mut R) -> Self {
        let mut cars = Vec::with_capacity(options.categories * options.cars_per_category);
        let mut categories = Vec::with_capacity(options.categories);

        for _ in 0..options.categories {
            let mut car_ids = Vec::with_capacity(options.cars_per_category);
            for _ in 0..options.cars_per_category {
                let car = Car {
                    id: Uuid::new_v4().to_string(),
                    name: pick(MODEL_NAMES, rng).to_string(),
                    release_year: rng.gen_range(2000..=2024),
                    available: true,
                    gas_available: true,
                };
                car_ids.push(car.id.clone());
                cars.push(car);
            }

            categories.push(CarCategory {
                id: Uuid::new_v4().to_string(),
                name: pick(CATEGORY_NAMES, rng).to_string(),
                car_ids,
                // cents in [20.00, 100.00]
                price: Decimal::new(rng.gen_range(2000..=10000), 2),
            });
        }

        let customers = (0..options.customers)
            .map(|_| Customer {
                id: Uuid::new_v4().to_string(),
                name: format!("{} {}", pick(FIRST_NAMES, rng), pick(LAST_NAMES, rng)),
                age: rng.gen_range(18..=50),
            })
            .collect();

        Self {
            cars,
            categories,
            customers,
        }
    }

    /// Writes `cars.json`, `carCategories.json` and `customers.json` into `dir`.
    pub async fn write_to(&self, dir: &Path) -> Result<()> {
        tokio::fs::create_dir_all(dir).await?;
        save_records(&dir.join(CARS_FILE), &self.cars).await?;
        save_records(&dir.join(CATEGORIES_FILE), &self.categories).await?;
        save_records(&dir.join(CUSTOMERS_FILE), &self.customers).await?;
        info!(
            dir = %dir.display(),
            cars = self.cars.len(),
            categories = self.categories.len(),
            customers = self.customers.len(),
            "database seeded"
        );
        Ok(())
    }
}

fn pick<'a, R: Rng + ?Sized>(items: &'a [&'a str], rng: &mut R) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}
