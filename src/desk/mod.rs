//! Trading desk components
//!
//! Stateful pieces of the dashboard: order ticket and submission,
//! fee assessment, watchlist, market board, portfolio, session and
//! notifications. Each receives its collaborators explicitly.

pub mod config;
mod fee_calculator;
mod market;
mod notifications;
mod order_desk;
mod order_form;
mod portfolio;
mod session;
mod watchlist;

pub use fee_calculator::{compute_charges, FeeCalculator};
pub use market::{MarketBoard, MarketFilter, MarketListing};
pub use notifications::NotificationCenter;
pub use order_desk::OrderDesk;
pub use order_form::{FormState, OrderForm};
pub use portfolio::{Portfolio, TransactionFilter};
pub use session::{validate_registration, SessionManager};
pub use watchlist::Watchlist;
