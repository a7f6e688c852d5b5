use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::valuation::format_amount;

/// Validation errors for portfolio input and edits
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PortfolioError {
    #[error("Asset name cannot be empty")]
    EmptyName,
    #[error("Invalid value '{0}'! Must be a number.")]
    InvalidValue(String),
    #[error("Asset value must be a finite number")]
    NonFiniteValue,
    #[error("Invalid selection {selected}: choose between 1 and {available}")]
    SelectionOutOfRange { selected: usize, available: usize },
    #[error("Invalid input '{0}'. Please enter a number.")]
    InvalidSelection(String),
}

/// A named monetary position. Immutable once constructed: editing a holding
/// means replacing it with a new `Asset`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Asset {
    name: String,
    value: f64,
}

impl Asset {
    /// Build an asset, rejecting empty names and non-finite values
    pub fn new(name: impl Into<String>, value: f64) -> Result<Self, PortfolioError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PortfolioError::EmptyName);
        }
        if !value.is_finite() {
            return Err(PortfolioError::NonFiniteValue);
        }
        Ok(Self { name, value })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Same name, new value
    pub fn with_value(&self, value: f64) -> Result<Self, PortfolioError> {
        Self::new(self.name.clone(), value)
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Asset: {}, Value: ${}", self.name, format_amount(self.value))
    }
}

/// Parse a monetary value typed at the console
pub fn parse_asset_value(input: &str) -> Result<f64, PortfolioError> {
    let value = input
        .trim()
        .parse::<f64>()
        .map_err(|_| PortfolioError::InvalidValue(input.trim().to_string()))?;

    if !value.is_finite() {
        return Err(PortfolioError::NonFiniteValue);
    }
    Ok(value)
}

/// Parse a 1-based menu selection into a 0-based index within `available`
pub fn parse_selection(input: &str, available: usize) -> Result<usize, PortfolioError> {
    let selected = input
        .trim()
        .parse::<usize>()
        .map_err(|_| PortfolioError::InvalidSelection(input.trim().to_string()))?;

    if selected == 0 || selected > available {
        return Err(PortfolioError::SelectionOutOfRange {
            selected,
            available,
        });
    }
    Ok(selected - 1)
}
