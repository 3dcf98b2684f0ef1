// Simulated collaborators: fixed data, artificial latency
pub mod auth_api;
pub mod catalog;
pub mod gateway;
pub mod portfolio_data;
pub mod price_oracle;

pub use auth_api::MockAuthApi;
pub use catalog::StaticCatalog;
pub use gateway::MockOrderGateway;
pub use portfolio_data::mock_portfolio;
pub use price_oracle::StaticPriceOracle;
