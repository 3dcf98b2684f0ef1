pub mod ack;
pub mod instrument;
pub mod notification;
pub mod order;
pub mod portfolio;
pub mod user;
