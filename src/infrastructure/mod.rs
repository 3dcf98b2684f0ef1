pub mod mock;
pub mod storage;

pub use mock::*;
pub use storage::*;
