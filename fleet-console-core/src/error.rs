//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use crate::form::ValidationRule;

// Re-export library error type
pub use fleet_console_gateway::GatewayError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// The form draft violates one or more validation rules
    #[error("Validation failed: {0:?}")]
    ValidationFailed(Vec<ValidationRule>),

    /// The vehicle has no server-assigned id (cannot be edited)
    #[error("Vehicle has no id")]
    MissingVehicleId,

    /// Gateway error (converted from library)
    #[error("{0}")]
    Gateway(#[from] GatewayError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.),
    /// used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error`
    /// when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ValidationFailed(_) | Self::MissingVehicleId => true,
            Self::Gateway(e) => e.is_expected(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
