use async_trait::async_trait;

use crate::domain::errors::DeskError;
use crate::domain::model::ack::ExecutionAck;
use crate::domain::model::instrument::{Instrument, Quote};
use crate::domain::model::order::OrderConfirmation;
use crate::domain::model::user::{LoginResponse, Registration, SessionClaims, User};

/// Durable string key-value storage
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, DeskError>;
    fn set(&self, key: &str, value: &str) -> Result<(), DeskError>;
    fn remove(&self, key: &str) -> Result<(), DeskError>;
}

/// Static list of tradable instruments
pub trait InstrumentCatalog: Send + Sync {
    fn list_instruments(&self) -> &[Instrument];

    fn find(&self, symbol: &str) -> Option<&Instrument> {
        self.list_instruments().iter().find(|i| i.symbol == symbol)
    }
}

/// Last traded prices
pub trait PriceOracle: Send + Sync {
    fn quote(&self, symbol: &str) -> Option<Quote>;

    /// Price returned for symbols without a quote
    fn default_price(&self) -> f64;

    fn get_price(&self, symbol: &str) -> f64 {
        self.quote(symbol)
            .map(|q| q.price)
            .unwrap_or_else(|| self.default_price())
    }
}

#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Submit a confirmed order. May suspend the caller; dropping the
    /// returned future abandons the submission.
    async fn submit(&self, order: &OrderConfirmation) -> Result<ExecutionAck, DeskError>;
}

#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, DeskError>;
    async fn register(&self, registration: &Registration) -> Result<(), DeskError>;
    async fn profile(&self, claims: &SessionClaims) -> Result<User, DeskError>;
}
