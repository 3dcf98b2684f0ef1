use std::sync::Arc;

use crate::domain::enums::InstrumentType;
use crate::domain::model::portfolio::{Holding, PortfolioSummary, Transaction};
use crate::domain::traits::PriceOracle;

/// Transaction history filters
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransactionFilter {
    /// Case-insensitive symbol substring; blank matches all
    pub symbol: String,
    pub asset_type: Option<InstrumentType>,
}

/// Holdings and history, valued against the price oracle
pub struct Portfolio {
    holdings: Vec<Holding>,
    transactions: Vec<Transaction>,
    oracle: Arc<dyn PriceOracle>,
}

impl Portfolio {
    pub fn new(
        holdings: Vec<Holding>,
        transactions: Vec<Transaction>,
        oracle: Arc<dyn PriceOracle>,
    ) -> Self {
        Self {
            holdings,
            transactions,
            oracle,
        }
    }

    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    /// Quoted price, or the average cost when the symbol has no quote
    pub fn current_price(&self, holding: &Holding) -> f64 {
        self.oracle
            .quote(&holding.symbol)
            .map(|q| q.price)
            .unwrap_or(holding.avg_price)
    }

    pub fn summary(&self) -> PortfolioSummary {
        let mut total_value = 0.0;
        let mut total_cost = 0.0;
        let mut allocation: Vec<(InstrumentType, f64)> = Vec::new();

        for holding in &self.holdings {
            let value = self.current_price(holding) * holding.quantity;
            total_value += value;
            total_cost += holding.cost();

            match allocation.iter_mut().find(|(t, _)| *t == holding.asset_type) {
                Some((_, sum)) => *sum += value,
                None => allocation.push((holding.asset_type, value)),
            }
        }

        PortfolioSummary {
            total_value,
            total_cost,
            unrealized_pnl: total_value - total_cost,
            allocation,
        }
    }

    /// History entries matching `filter`. A transaction has an asset type
    /// only through a holding with the same symbol.
    pub fn transactions(&self, filter: &TransactionFilter) -> Vec<&Transaction> {
        let term = filter.symbol.trim().to_lowercase();

        self.transactions
            .iter()
            .filter(|txn| term.is_empty() || txn.symbol.to_lowercase().contains(&term))
            .filter(|txn| match filter.asset_type {
                None => true,
                Some(t) => self
                    .holdings
                    .iter()
                    .any(|h| h.symbol == txn.symbol && h.asset_type == t),
            })
            .collect()
    }
}
