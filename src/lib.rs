//! homework-bot - homework review status notifier.
//!
//! Polls the homework review API on a fixed interval, detects status changes
//! of the most recent submission and forwards them to a Telegram chat.
//!
//! # Architecture
//!
//! The crate follows a small hexagonal layout:
//!
//! - **`domain`** - pure response validation and status message building
//! - **`port`** - [`port::StatusSource`] and [`port::Notifier`] capability traits
//! - **`adapter`** - reqwest status client, Telegram and log notifiers
//! - **`app`** - the [`app::Poller`] state machine and its wiring
//!
//! # Modules
//!
//! - [`config`] - Credentials from the environment, settings from TOML, logging
//! - [`domain`] - Verdicts, submissions, response shape checks
//! - [`error`] - Error types for the crate
//! - [`cli`] - Command-line entry points
//!
//! # Features
//!
//! - `telegram` (default) - Telegram Bot API notifier via teloxide
//!
//! # Example
//!
//! ```
//! use homework_bot::domain::parse_status;
//! use serde_json::json;
//!
//! let message = parse_status(&json!({
//!     "homework_name": "proj1",
//!     "status": "reviewing",
//! }))
//! .unwrap();
//! assert!(message.contains("proj1"));
//! ```

pub mod adapter;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;
