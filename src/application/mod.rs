//! Application layer containing the rental business logic.
//!
//! This module defines the `CarService`, the entry point for picking a car
//! out of a category, pricing a rental and producing its receipt. All of its
//! collaborators are injected through the ports in `domain::ports`.

pub mod car_service;
