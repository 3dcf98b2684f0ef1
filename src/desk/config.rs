/// Constants and default parameters for the trading desk
pub const BROKERAGE_RATE: f64 = 0.0005; // 0.05%
pub const TRANSACTION_TAX_RATE: f64 = 0.0001; // 0.01%, STT/SEBI
/// Largest order value a ticket accepts, in rupees. Keeps paise amounts within i64.
pub const MAX_ORDER_VALUE: f64 = 1e13;

pub const GATEWAY_TIMEOUT_MS: u64 = 5000;
pub const MIN_PASSWORD_LEN: usize = 6;

/// Initial ticket values
pub const DEFAULT_INSTRUMENT: &str = "RELIANCE";
pub const DEFAULT_QUANTITY: &str = "1";

pub const EXECUTED_NOTIFICATION_TITLE: &str = "Order executed";
