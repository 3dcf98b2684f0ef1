use crate::domain::enums::{Exchange, InstrumentType};
use crate::domain::model::instrument::Instrument;
use crate::domain::traits::InstrumentCatalog;

/// Instrument list fixed at startup
#[derive(Clone, Debug)]
pub struct StaticCatalog {
    instruments: Vec<Instrument>,
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::with_instruments(vec![
            Instrument::new("RELIANCE", "Reliance Industries", Exchange::Nse, InstrumentType::Stock),
            Instrument::new("TCS", "Tata Consultancy Services", Exchange::Bse, InstrumentType::Stock),
            Instrument::new("NIFTYBEES", "NIFTYBEES ETF", Exchange::Nse, InstrumentType::Etf),
            Instrument::new("BTC/INR", "Bitcoin INR", Exchange::WazirX, InstrumentType::Crypto),
            Instrument::new("USD/INR", "US Dollar to INR", Exchange::Forex, InstrumentType::Forex),
            Instrument::new("NIFTY", "NIFTY 50", Exchange::Nse, InstrumentType::Index),
            Instrument::new("GOLDBEES", "Gold Bees ETF", Exchange::Nse, InstrumentType::Etf),
            Instrument::new("INFY", "Infosys Ltd", Exchange::Nse, InstrumentType::Stock),
        ])
    }

    pub fn with_instruments(instruments: Vec<Instrument>) -> Self {
        Self { instruments }
    }
}

impl InstrumentCatalog for StaticCatalog {
    fn list_instruments(&self) -> &[Instrument] {
        &self.instruments
    }
}
