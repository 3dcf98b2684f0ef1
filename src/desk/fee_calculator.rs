use crate::domain::model::order::Charges;

use super::config;

/// Proportional brokerage and transaction tax.
///
/// Pure and infallible. Results are not rounded here; rounding happens
/// only when a confirmation is displayed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeeCalculator {
    pub brokerage_rate: f64,
    pub transaction_tax_rate: f64,
}

impl Default for FeeCalculator {
    fn default() -> Self {
        Self::new(config::BROKERAGE_RATE, config::TRANSACTION_TAX_RATE)
    }
}

impl FeeCalculator {
    pub fn new(brokerage_rate: f64, transaction_tax_rate: f64) -> Self {
        Self {
            brokerage_rate,
            transaction_tax_rate,
        }
    }

    pub fn compute_charges(&self, order_value: f64) -> Charges {
        Charges::new(
            order_value * self.brokerage_rate,
            order_value * self.transaction_tax_rate,
        )
    }
}

/// Charges at the standard rates
pub fn compute_charges(order_value: f64) -> Charges {
    FeeCalculator::default().compute_charges(order_value)
}
