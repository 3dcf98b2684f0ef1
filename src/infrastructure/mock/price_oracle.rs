use std::collections::HashMap;

use crate::domain::model::instrument::Quote;
use crate::domain::traits::PriceOracle;

/// Price used for symbols missing from the quote table. A placeholder, not a real price.
pub const DEFAULT_PRICE: f64 = 100.0;

/// Fixed quote table standing in for a live feed
#[derive(Clone, Debug)]
pub struct StaticPriceOracle {
    quotes: HashMap<String, Quote>,
    default_price: f64,
}

impl Default for StaticPriceOracle {
    fn default() -> Self {
        Self::new(DEFAULT_PRICE)
    }
}

impl StaticPriceOracle {
    pub fn new(default_price: f64) -> Self {
        Self::with_quotes(
            vec![
                Quote::new("RELIANCE", 2900.5, 1.5),
                Quote::new("TCS", 4200.75, -0.3),
                Quote::new("NIFTYBEES", 150.0, 0.2),
                Quote::new("BTC/INR", 4_800_000.0, 2.0),
                Quote::new("USD/INR", 83.2, 0.1),
                Quote::new("NIFTY", 17600.0, 0.8),
                Quote::new("GOLDBEES", 55.5, 0.3),
                Quote::new("INFY", 1400.0, -0.5),
                // Held in the portfolio, not listed on the market board
                Quote::new("SBI Mutual Fund", 115.0, 0.0),
            ],
            default_price,
        )
    }

    pub fn with_quotes(quotes: Vec<Quote>, default_price: f64) -> Self {
        Self {
            quotes: quotes.into_iter().map(|q| (q.symbol.clone(), q)).collect(),
            default_price,
        }
    }
}

impl PriceOracle for StaticPriceOracle {
    fn quote(&self, symbol: &str) -> Option<Quote> {
        self.quotes.get(symbol).cloned()
    }

    fn default_price(&self) -> f64 {
        self.default_price
    }
}
