pub use contact::error_chain_fmt;
pub use contact::RelayResult;

pub mod contact;
pub mod health_check;
