use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::enums::{Exchange, InstrumentType, OrderSide};

/// A position held in the portfolio
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub symbol: String,
    pub asset_type: InstrumentType,
    pub quantity: f64,
    pub avg_price: f64,
}

impl Holding {
    pub fn new(symbol: &str, asset_type: InstrumentType, quantity: f64, avg_price: f64) -> Self {
        Self {
            symbol: symbol.to_string(),
            asset_type,
            quantity,
            avg_price,
        }
    }

    pub fn cost(&self) -> f64 {
        self.avg_price * self.quantity
    }
}

/// A past fill from the transaction history
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,
    pub date: NaiveDate,
    pub symbol: String,
    pub side: OrderSide,
    pub quantity: f64,
    pub price: f64,
    pub exchange: Exchange,
}

/// Valuation of all holdings at current prices
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PortfolioSummary {
    pub total_value: f64,
    pub total_cost: f64,
    pub unrealized_pnl: f64,
    /// Current value per asset type, in first-seen order
    pub allocation: Vec<(InstrumentType, f64)>,
}
