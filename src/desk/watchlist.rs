use std::sync::Arc;

use log::{debug, info, warn};

use crate::domain::constants::{MSG_ALREADY_WATCHED, MSG_SELECT_INSTRUMENT, WATCHLIST_KEY};
use crate::domain::errors::DeskError;
use crate::domain::model::instrument::Instrument;
use crate::domain::traits::{InstrumentCatalog, KeyValueStore};

/// Ordered set of watched symbols, written through to storage on every change
pub struct Watchlist {
    store: Arc<dyn KeyValueStore>,
    catalog: Arc<dyn InstrumentCatalog>,
    symbols: Vec<String>,
}

impl Watchlist {
    /// Load from the fixed storage key. Absent, unreadable or malformed
    /// content yields an empty watchlist.
    pub fn load(store: Arc<dyn KeyValueStore>, catalog: Arc<dyn InstrumentCatalog>) -> Self {
        let symbols = match store.get(WATCHLIST_KEY) {
            Ok(Some(raw)) => parse_symbols(&raw),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to read watchlist, starting empty: {}", e);
                Vec::new()
            }
        };
        debug!("Loaded watchlist with {} symbols", symbols.len());

        Self {
            store,
            catalog,
            symbols,
        }
    }

    /// Append `symbol`. Rejects an empty symbol or one already watched.
    pub fn add(&mut self, symbol: &str) -> Result<(), DeskError> {
        if symbol.is_empty() {
            return Err(DeskError::validation(MSG_SELECT_INSTRUMENT));
        }
        if self.contains(symbol) {
            return Err(DeskError::validation(MSG_ALREADY_WATCHED));
        }

        let mut next = self.symbols.clone();
        next.push(symbol.to_string());
        self.commit(next)?;
        info!("Added {} to watchlist", symbol);
        Ok(())
    }

    /// Remove `symbol`; no-op when it is not watched.
    pub fn remove(&mut self, symbol: &str) -> Result<(), DeskError> {
        if !self.contains(symbol) {
            return Ok(());
        }

        let next = self
            .symbols
            .iter()
            .filter(|s| s.as_str() != symbol)
            .cloned()
            .collect();
        self.commit(next)?;
        info!("Removed {} from watchlist", symbol);
        Ok(())
    }

    /// Watched instruments in insertion order. Symbols the catalog does not
    /// know are skipped here but kept in storage.
    pub fn list(&self) -> Vec<Instrument> {
        self.symbols
            .iter()
            .filter_map(|s| self.catalog.find(s).cloned())
            .collect()
    }

    /// Raw stored symbols, including unresolvable ones
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.iter().any(|s| s == symbol)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    // Persist first so memory never runs ahead of storage
    fn commit(&mut self, next: Vec<String>) -> Result<(), DeskError> {
        let raw = serde_json::to_string(&next)?;
        self.store.set(WATCHLIST_KEY, &raw)?;
        self.symbols = next;
        Ok(())
    }
}

fn parse_symbols(raw: &str) -> Vec<String> {
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(mut symbols) => {
            // Keep set semantics even if the stored list was edited by hand
            let mut seen = std::collections::HashSet::new();
            symbols.retain(|s| seen.insert(s.clone()));
            symbols
        }
        Err(e) => {
            warn!("Malformed watchlist in storage, starting empty: {}", e);
            Vec::new()
        }
    }
}
