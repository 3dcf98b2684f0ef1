use std::sync::Arc;

use serde::Serialize;

use crate::domain::enums::{Exchange, InstrumentType};
use crate::domain::errors::DeskError;
use crate::domain::model::instrument::{Instrument, Quote};
use crate::domain::traits::{InstrumentCatalog, PriceOracle};

/// Catalog entry joined with its quote
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MarketListing {
    pub instrument: Instrument,
    pub quote: Quote,
}

/// Market board filters. `None` and a blank search match everything.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MarketFilter {
    pub instrument_type: Option<InstrumentType>,
    pub exchange: Option<Exchange>,
    pub search: String,
}

impl MarketFilter {
    pub fn matches(&self, instrument: &Instrument) -> bool {
        if let Some(t) = self.instrument_type {
            if instrument.instrument_type != t {
                return false;
            }
        }
        if let Some(ex) = self.exchange {
            if instrument.exchange != ex {
                return false;
            }
        }

        let term = self.search.trim().to_lowercase();
        term.is_empty()
            || instrument.symbol.to_lowercase().contains(&term)
            || instrument.name.to_lowercase().contains(&term)
    }
}

/// Read-only market listing
pub struct MarketBoard {
    catalog: Arc<dyn InstrumentCatalog>,
    oracle: Arc<dyn PriceOracle>,
}

impl MarketBoard {
    pub fn new(catalog: Arc<dyn InstrumentCatalog>, oracle: Arc<dyn PriceOracle>) -> Self {
        Self { catalog, oracle }
    }

    /// Matching instruments in catalog order
    pub fn listings(&self, filter: &MarketFilter) -> Vec<MarketListing> {
        self.catalog
            .list_instruments()
            .iter()
            .filter(|i| filter.matches(i))
            .map(|i| MarketListing {
                instrument: i.clone(),
                quote: self.quote(&i.symbol),
            })
            .collect()
    }

    /// Catalog entry for `symbol` with its quote
    pub fn listing(&self, symbol: &str) -> Result<MarketListing, DeskError> {
        let instrument = self
            .catalog
            .find(symbol)
            .ok_or_else(|| DeskError::Lookup(symbol.to_string()))?;

        Ok(MarketListing {
            quote: self.quote(&instrument.symbol),
            instrument: instrument.clone(),
        })
    }

    /// Quote for `symbol`, or the fallback price with no change
    pub fn quote(&self, symbol: &str) -> Quote {
        self.oracle
            .quote(symbol)
            .unwrap_or_else(|| Quote::new(symbol, self.oracle.default_price(), 0.0))
    }
}
