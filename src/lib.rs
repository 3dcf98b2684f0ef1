pub mod cli;
pub mod config_loader;
pub mod desk;
pub mod domain;
pub mod infrastructure;

pub use desk::*;
pub use domain::constants::*;
pub use domain::enums::*;
pub use domain::errors::DeskError;
pub use domain::model::ack::*;
pub use domain::model::instrument::*;
pub use domain::model::notification::*;
pub use domain::model::order::*;
pub use domain::model::portfolio::*;
pub use domain::model::user::*;
pub use domain::traits::*;
