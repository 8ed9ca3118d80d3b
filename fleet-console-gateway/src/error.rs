use serde::{Deserialize, Serialize};

/// Unified error type for all gateway operations.
///
/// Each variant includes a `resource` field identifying which endpoint
/// produced the error (`"vehiculos"` or `"estados"`), plus variant-specific
/// context. All variants are serializable for structured error reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum GatewayError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Resource that produced the error.
        resource: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Resource that produced the error.
        resource: String,
        /// Error details.
        detail: String,
    },

    /// The requested record was not found (HTTP 404).
    NotFound {
        /// Resource that produced the error.
        resource: String,
        /// Identifier that was not found.
        id: String,
        /// Original error message from the backend, if available.
        raw_message: Option<String>,
    },

    /// The backend rejected the request body (HTTP 400/422).
    ///
    /// Client-side validation should normally prevent this, but the backend
    /// enforces its own constraints and may reject a draft anyway.
    ValidationRejected {
        /// Resource that produced the error.
        resource: String,
        /// Original error message from the backend.
        raw_message: String,
    },

    /// Failed to parse the backend's JSON response.
    ParseError {
        /// Resource that produced the error.
        resource: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Resource that produced the error.
        resource: String,
        /// Details about the serialization failure.
        detail: String,
    },

    /// An unrecognized error from the backend.
    ///
    /// Catch-all for HTTP statuses not mapped to a specific variant.
    Unknown {
        /// Resource that produced the error.
        resource: String,
        /// HTTP status code, if the response got that far.
        status: Option<u16>,
        /// Raw response body or error message.
        raw_message: String,
    },
}

impl GatewayError {
    /// 是否为预期行为（资源不存在、后端校验拒绝等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::ValidationRejected { .. }
        )
    }
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { resource, detail } => {
                write!(f, "[{resource}] Network error: {detail}")
            }
            Self::Timeout { resource, detail } => {
                write!(f, "[{resource}] Request timeout: {detail}")
            }
            Self::NotFound {
                resource,
                id,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{resource}] Record '{id}' not found: {msg}")
                } else {
                    write!(f, "[{resource}] Record '{id}' not found")
                }
            }
            Self::ValidationRejected {
                resource,
                raw_message,
            } => {
                write!(f, "[{resource}] Rejected by backend: {raw_message}")
            }
            Self::ParseError { resource, detail } => {
                write!(f, "[{resource}] Parse error: {detail}")
            }
            Self::SerializationError { resource, detail } => {
                write!(f, "[{resource}] Serialization error: {detail}")
            }
            Self::Unknown {
                resource,
                status,
                raw_message,
            } => {
                if let Some(code) = status {
                    write!(f, "[{resource}] HTTP {code}: {raw_message}")
                } else {
                    write!(f, "[{resource}] {raw_message}")
                }
            }
        }
    }
}

impl std::error::Error for GatewayError {}

/// Convenience type alias for `Result<T, GatewayError>`.
pub type Result<T> = std::result::Result<T, GatewayError>;
