// Desk component tests against the in-memory backends
mod order_flow;
mod order_submission;
mod session;
mod watchlist;
