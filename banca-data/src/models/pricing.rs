use serde::{Deserialize, Serialize};

/// The bank's bid/ask quote for the PEN/USD pair
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRates {
    /// PEN paid per USD bought from the customer
    pub buy: f64,
    /// PEN charged per USD sold to the customer
    pub sell: f64,
}

impl ExchangeRates {
    /// Positive, finite, and never buying above the selling price
    pub fn is_consistent(&self) -> bool {
        self.buy.is_finite() && self.sell.is_finite() && self.buy > 0.0 && self.buy <= self.sell
    }
}

impl Default for ExchangeRates {
    fn default() -> Self {
        Self {
            buy: 3.72,
            sell: 3.75,
        }
    }
}

/// Terms of the personal loan simulator
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanOffer {
    /// Effective annual rate (TEA), e.g. 0.145
    pub annual_rate: f64,
    pub min_amount: i64,
    pub max_amount: i64,
    pub amount_step: i64,
    pub min_months: u32,
    pub max_months: u32,
    pub default_amount: i64,
    pub default_months: u32,
}

impl Default for LoanOffer {
    fn default() -> Self {
        Self {
            annual_rate: 0.145,
            min_amount: 1_000,
            max_amount: 50_000,
            amount_step: 500,
            min_months: 6,
            max_months: 60,
            default_amount: 15_000,
            default_months: 24,
        }
    }
}
