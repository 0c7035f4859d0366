use crate::config::RentalConfig;
use crate::domain::car::{Car, CarCategory};
use crate::domain::customer::Customer;
use crate::domain::ports::{
    CarRepository, CarRepositoryBox, Clock, ClockBox, CurrencyFormatter, CurrencyFormatterBox,
    DateFormatter, DateFormatterBox, RandomSource, RandomSourceBox,
};
use crate::domain::tax::TaxTable;
use crate::domain::transaction::Transaction;
use crate::error::{RentalError, Result};
use crate::infrastructure::clock::SystemClock;
use crate::infrastructure::json_file::JsonFileCarRepository;
use crate::infrastructure::random::ThreadRandom;
use crate::interfaces::format::{CurrencyFormat, LongDateFormat};
use chrono::Days;
use rust_decimal::Decimal;
use tracing::{debug, info};

/// Picks cars, prices rentals and issues receipts.
///
/// `CarService` holds no mutable state: the repository, random source,
/// clock, formatters and tax table are fixed at construction, so the same
/// inputs always price the same way.
pub struct CarService {
    car_repository: CarRepositoryBox,
    random: RandomSourceBox,
    clock: ClockBox,
    currency_format: CurrencyFormatterBox,
    date_format: DateFormatterBox,
    taxes_based_on_age: TaxTable,
}

impl CarService {
    /// Creates a service over `car_repository` with the default
    /// collaborators: thread RNG, system clock, `pt-BR`/`BRL` formatting
    /// and the default tax table.
    pub fn new(car_repository: CarRepositoryBox) -> Self {
        Self {
            car_repository,
            random: Box::new(ThreadRandom),
            clock: Box::new(SystemClock),
            currency_format: Box::new(CurrencyFormat::default()),
            date_format: Box::new(LongDateFormat::default()),
            taxes_based_on_age: TaxTable::default(),
        }
    }

    /// Builds a service reading cars from the JSON file named in `config`.
    pub fn from_config(config: &RentalConfig) -> Self {
        let service = Self::new(Box::new(JsonFileCarRepository::new(config.cars.clone())))
            .with_currency_format(Box::new(CurrencyFormat::new(config.locale, config.currency)))
            .with_date_format(Box::new(LongDateFormat::new(config.locale)));

        match &config.taxes_based_on_age {
            Some(taxes) => service.with_taxes_based_on_age(taxes.clone()),
            None => service,
        }
    }

    pub fn with_random(mut self, random: RandomSourceBox) -> Self {
        self.random = random;
        self
    }

    pub fn with_clock(mut self, clock: ClockBox) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_currency_format(mut self, currency_format: CurrencyFormatterBox) -> Self {
        self.currency_format = currency_format;
        self
    }

    pub fn with_date_format(mut self, date_format: DateFormatterBox) -> Self {
        self.date_format = date_format;
        self
    }

    pub fn with_taxes_based_on_age(mut self, taxes: TaxTable) -> Self {
        self.taxes_based_on_age = taxes;
        self
    }

    pub fn car_repository(&self) -> &dyn CarRepository {
        self.car_repository.as_ref()
    }

    pub fn currency_format(&self) -> &dyn CurrencyFormatter {
        self.currency_format.as_ref()
    }

    pub fn taxes_based_on_age(&self) -> &TaxTable {
        &self.taxes_based_on_age
    }

    /// Returns a uniformly chosen index into `items`.
    ///
    /// Fails with `InvalidInput` when `items` is empty or the random source
    /// hands back a position outside `items`.
    pub fn random_position<T>(&self, items: &[T]) -> Result<usize> {
        if items.is_empty() {
            return Err(RentalError::InvalidInput(
                "cannot pick a position from an empty list".to_string(),
            ));
        }
        let position = self.random.position(items.len());
        if position >= items.len() {
            return Err(RentalError::InvalidInput(format!(
                "random position {position} is out of range for {} items",
                items.len()
            )));
        }
        Ok(position)
    }

    /// Picks one of the category's car ids.
    pub fn choose_random_car<'a>(&self, category: &'a CarCategory) -> Result<&'a str> {
        if category.car_ids.is_empty() {
            return Err(RentalError::InvalidInput(format!(
                "car category {} has no cars",
                category.id
            )));
        }
        let position = self.random_position(&category.car_ids)?;
        let car_id = category.car_ids[position].as_str();
        debug!(category = %category.id, position, car_id, "chose car");
        Ok(car_id)
    }

    /// Chooses a car id from the category and resolves it through the repository.
    ///
    /// A stale id surfaces the repository's `NotFound` unchanged; no other
    /// id is tried.
    pub async fn get_available_car(&self, category: &CarCategory) -> Result<Car> {
        let car_id = self.choose_random_car(category)?;
        self.car_repository.find(car_id).await
    }

    /// `price * days * multiplier` for the customer's age tier, unformatted.
    pub fn final_price(
        &self,
        category: &CarCategory,
        customer: &Customer,
        number_of_days: u32,
    ) -> Result<Decimal> {
        if number_of_days == 0 {
            return Err(RentalError::InvalidInput(
                "a rental must last at least one day".to_string(),
            ));
        }
        let multiplier = self.taxes_based_on_age.multiplier_for(customer.age)?;

        let total = category
            .price
            .checked_mul(Decimal::from(number_of_days))
            .and_then(|subtotal| subtotal.checked_mul(multiplier))
            .ok_or_else(|| {
                RentalError::InvalidInput(format!(
                    "price overflow for category {} over {number_of_days} days",
                    category.id
                ))
            })?;

        debug!(
            category = %category.id,
            age = customer.age,
            %multiplier,
            days = number_of_days,
            %total,
            "priced rental"
        );
        Ok(total)
    }

    /// Final price formatted through the configured currency formatter.
    pub fn calculate_final_price(
        &self,
        category: &CarCategory,
        customer: &Customer,
        number_of_days: u32,
    ) -> Result<String> {
        let total = self.final_price(category, customer, number_of_days)?;
        Ok(self.currency_format.format(total))
    }

    /// Prices the rental, resolves a car and returns the receipt.
    ///
    /// The due date is today plus `number_of_days`, in long form. Nothing is
    /// persisted; if the car lookup fails no receipt is produced.
    pub async fn rent(
        &self,
        customer: &Customer,
        category: &CarCategory,
        number_of_days: u32,
    ) -> Result<Transaction> {
        let amount = self.calculate_final_price(category, customer, number_of_days)?;
        let car = self.get_available_car(category).await?;

        let due = self
            .clock
            .today()
            .checked_add_days(Days::new(u64::from(number_of_days)))
            .ok_or_else(|| {
                RentalError::InvalidInput(format!("due date out of range for {number_of_days} days"))
            })?;
        let due_date = self.date_format.format(due);

        info!(customer = %customer.id, car = %car.id, %amount, %due_date, "car rented");
        Ok(Transaction::new(customer.clone(), car, amount, due_date))
    }
}
