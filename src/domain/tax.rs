use crate::error::{RentalError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Price multiplier applied to customers whose age lies in `from..=to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeTaxTier {
    pub from: u32,
    pub to: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub then: Decimal,
}

impl AgeTaxTier {
    pub fn new(from: u32, to: u32, then: Decimal) -> Self {
        Self { from, to, then }
    }

    pub fn covers(&self, age: u32) -> bool {
        (self.from..=self.to).contains(&age)
    }
}

/// Ordered set of age tiers used when pricing a rental.
///
/// Lookup takes the first tier covering the age, so overlapping tiers
/// resolve in table order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<AgeTaxTier>", into = "Vec<AgeTaxTier>")]
pub struct TaxTable(Vec<AgeTaxTier>);

impl TaxTable {
    pub fn new(tiers: Vec<AgeTaxTier>) -> Result<Self> {
        for tier in &tiers {
            if tier.from > tier.to {
                return Err(RentalError::InvalidInput(format!(
                    "tax tier {}..={} has an empty age range",
                    tier.from, tier.to
                )));
            }
            if tier.then < Decimal::ONE {
                return Err(RentalError::InvalidInput(format!(
                    "tax tier {}..={} multiplier {} is below 1",
                    tier.from, tier.to, tier.then
                )));
            }
        }
        Ok(Self(tiers))
    }

    pub fn tiers(&self) -> &[AgeTaxTier] {
        &self.0
    }

    /// Multiplier for `age`, or `NoTaxTier` when no tier covers it.
    pub fn multiplier_for(&self, age: u32) -> Result<Decimal> {
        self.0
            .iter()
            .find(|tier| tier.covers(age))
            .map(|tier| tier.then)
            .ok_or(RentalError::NoTaxTier { age })
    }
}

impl Default for TaxTable {
    fn default() -> Self {
        Self(vec![
            AgeTaxTier::new(18, 25, dec!(1.1)),
            AgeTaxTier::new(26, 30, dec!(1.5)),
            AgeTaxTier::new(31, 100, dec!(1.3)),
        ])
    }
}

impl TryFrom<Vec<AgeTaxTier>> for TaxTable {
    type Error = RentalError;

    fn try_from(tiers: Vec<AgeTaxTier>) -> Result<Self> {
        Self::new(tiers)
    }
}

impl From<TaxTable> for Vec<AgeTaxTier> {
    fn from(table: TaxTable) -> Self {
        table.0
    }
}
