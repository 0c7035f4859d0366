mod common;

use common::{valid_car, valid_car_category, valid_customer};
use rentacar::application::car_service::CarService;
use rentacar::domain::car::CarCategory;
use rentacar::domain::ports::{CarRepository, CarRepositoryBox};
use rentacar::infrastructure::in_memory::InMemoryCarRepository;
use rentacar::infrastructure::json_file::JsonFileCarRepository;
use std::sync::Arc;

#[tokio::test]
async fn test_repositories_as_trait_objects() {
    let repositories: Vec<CarRepositoryBox> = vec![
        Box::new(InMemoryCarRepository::with_cars([valid_car()])),
        Box::new(JsonFileCarRepository::new("tests/fixtures/cars.json")),
    ];

    for repository in repositories {
        // Verify Send + Sync by spawning tasks
        let handle = tokio::spawn(async move { repository.find(&valid_car().id).await.unwrap() });
        assert_eq!(handle.await.unwrap(), valid_car());
    }
}

#[tokio::test]
async fn test_service_shared_across_tasks() {
    let service = Arc::new(CarService::new(Box::new(InMemoryCarRepository::with_cars([
        valid_car(),
    ]))));
    let category = CarCategory {
        car_ids: vec![valid_car().id],
        ..valid_car_category()
    };

    let handles: Vec<_> = (1..=10)
        .map(|days| {
            let service = Arc::clone(&service);
            let category = category.clone();
            tokio::spawn(async move { service.rent(&valid_customer(), &category, days).await })
        })
        .collect();

    for handle in handles {
        let receipt = handle.await.unwrap().unwrap();
        assert_eq!(receipt.car, valid_car());
        assert_eq!(receipt.customer, valid_customer());
    }
}
