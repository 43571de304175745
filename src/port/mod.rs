//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! The poll loop talks to the outside world through two capabilities:
//!
//! ```text
//!                 ┌──────────────────┐
//!                 │      Poller      │
//!                 │  (app::poller)   │
//!                 └────────┬─────────┘
//!            ┌─────────────┴─────────────┐
//!            ▼                           ▼
//!     ┌──────────────┐            ┌─────────────┐
//!     │ StatusSource │            │  Notifier   │
//!     │  (review API)│            │ (Telegram)  │
//!     └──────────────┘            └─────────────┘
//! ```
//!
//! - [`StatusSource`] - fetch raw submission statuses since a watermark
//! - [`Notifier`] - deliver a text message to the operator

pub mod outbound;

pub use outbound::notifier::Notifier;
pub use outbound::status::StatusSource;
