mod connection_info;
mod secret;

pub use connection_info::{ApiKey, ConnectionUrl};
pub use secret::{Secret, Variable};
