//! Monetary value object.

use serde::{Deserialize, Serialize};

/// An amount in a specific currency, as reported by the pricing API.
///
/// The page only displays and echoes amounts back on submit; it never does
/// arithmetic on them, so the API's decimal maps to a plain `f64`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Money {
    /// ISO currency code (e.g. "USD", "EUR").
    pub currency: String,
    pub amount: f64,
}

impl Money {
    pub fn new(currency: impl Into<String>, amount: f64) -> Self {
        Self {
            currency: currency.into(),
            amount,
        }
    }
}
