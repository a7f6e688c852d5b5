use thiserror::Error;

use crate::DEFAULT_GOLD_PRICE_PER_GRAM;

/// Weight of gold, in grams, that defines the Nisab
pub const NISAB_GOLD_GRAMS: f64 = 85.0;

/// Zakat rate applied to the whole portfolio once it reaches the Nisab (2.5%)
pub const ZAKAT_RATE: f64 = 0.025;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ZakatError {
    #[error("Gold price must be a non-negative finite number, got {0}")]
    InvalidGoldPrice(f64),
}

/// Zakat threshold and amount calculation against a configurable gold price
#[derive(Debug, Clone, PartialEq)]
pub struct ZakatPolicy {
    gold_price_per_gram: f64,
}

impl Default for ZakatPolicy {
    fn default() -> Self {
        Self {
            gold_price_per_gram: DEFAULT_GOLD_PRICE_PER_GRAM,
        }
    }
}

impl ZakatPolicy {
    pub fn new(gold_price_per_gram: f64) -> Result<Self, ZakatError> {
        let mut policy = Self::default();
        policy.set_gold_price_per_gram(gold_price_per_gram)?;
        Ok(policy)
    }

    pub fn gold_price_per_gram(&self) -> f64 {
        self.gold_price_per_gram
    }

    /// Update the gold price used for the Nisab threshold
    pub fn set_gold_price_per_gram(&mut self, price: f64) -> Result<(), ZakatError> {
        if !price.is_finite() || price < 0.0 {
            return Err(ZakatError::InvalidGoldPrice(price));
        }
        self.gold_price_per_gram = price;
        Ok(())
    }

    pub fn nisab_threshold(&self) -> f64 {
        NISAB_GOLD_GRAMS * self.gold_price_per_gram
    }

    /// Zakat applies once the total value reaches the Nisab
    pub fn is_applicable(&self, total_value: f64) -> bool {
        total_value >= self.nisab_threshold()
    }

    /// 2.5% of the total when applicable, otherwise zero
    pub fn zakat_due(&self, total_value: f64) -> f64 {
        if self.is_applicable(total_value) {
            total_value * ZAKAT_RATE
        } else {
            0.0
        }
    }
}
