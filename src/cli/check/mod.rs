//! Configuration and connectivity checks.

mod config;
#[cfg(feature = "telegram")]
mod telegram;

pub use config::execute_config;
#[cfg(feature = "telegram")]
pub use telegram::execute_telegram;
