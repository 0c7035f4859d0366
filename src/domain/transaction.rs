use super::car::Car;
use super::customer::Customer;
use serde::Serialize;

/// Receipt produced by a successful rental.
///
/// Built once per rental and never persisted. `amount` and `due_date`
/// are already rendered for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub customer: Customer,
    pub car: Car,
    pub amount: String,
    pub due_date: String,
}

impl Transaction {
    pub fn new(customer: Customer, car: Car, amount: String, due_date: String) -> Self {
        Self {
            customer,
            car,
            amount,
            due_date,
        }
    }
}
