use serde::{Deserialize, Serialize};

use crate::domain::enums::{Exchange, InstrumentType};

/// A tradable symbol from the catalog. Loaded once, never mutated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    /// Unique uppercase ticker, e.g. `RELIANCE` or `BTC/INR`
    pub symbol: String,
    pub name: String,
    pub exchange: Exchange,
    #[serde(rename = "type")]
    pub instrument_type: InstrumentType,
}

impl Instrument {
    pub fn new(symbol: &str, name: &str, exchange: Exchange, instrument_type: InstrumentType) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
            exchange,
            instrument_type,
        }
    }
}

/// Last traded price and daily change for a symbol
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: String,
    pub price: f64,
    /// Daily change in percent
    pub change_pct: f64,
}

impl Quote {
    pub fn new(symbol: &str, price: f64, change_pct: f64) -> Self {
        Self {
            symbol: symbol.to_string(),
            price,
            change_pct,
        }
    }

    /// Change formatted with an explicit sign for gains, e.g. `+1.50%`
    pub fn format_change(&self) -> String {
        if self.change_pct > 0.0 {
            format!("+{:.2}%", self.change_pct)
        } else {
            format!("{:.2}%", self.change_pct)
        }
    }
}
