//! Fleet Console Core Library
//!
//! Provides the record-management workflow for the fleet console, including:
//! - Record Manager (list / search / create / edit orchestration)
//! - Validated vehicle form draft
//! - User-visible notice channel
//!
//! This library is presentation-independent: it depends only on the gateway
//! traits from `fleet-console-gateway` and exposes plain state flags
//! (`modal_visible`, `loading`, ...) plus a [`Notifier`] channel that any
//! UI layer can bind.

pub mod error;
pub mod form;
pub mod notify;
pub mod services;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use form::{ValidationRule, VehicleForm};
pub use notify::{LogNotifier, Notice, Notifier};
pub use services::{RecordManager, SearchFilters};
