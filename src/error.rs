use strum_macros::Display;
use thiserror::Error;

pub type BindResult<T> = std::result::Result<T, BindError>;

/// Machine-readable code for each binding failure, carried in error
/// payloads alongside the human-readable message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ErrorCode {
    MissingParameter,
    TypeCoercion,
    Deserialization,
    UnsupportedEncoding,
    Serialization,
}

/// A failure while binding request data or serializing a response.
///
/// Every variant is scoped to a single request; none is fatal to the
/// process. The surrounding runtime maps variants to client-visible
/// status codes via [`status`](BindError::status).
#[derive(Debug, Error)]
pub enum BindError {
    #[error("required parameter '{name}' is not present")]
    MissingParameter { name: String },

    #[error("parameter '{name}': cannot coerce \"{value}\" to {target}")]
    TypeCoercion {
        name: String,
        value: String,
        target: &'static str,
    },

    #[error("cannot read request body: {reason}")]
    Deserialization { reason: String },

    #[error("unsupported charset '{label}'")]
    UnsupportedEncoding { label: String },

    #[error("cannot serialize response body: {reason}")]
    Serialization { reason: String },
}

impl BindError {
    pub fn code(&self) -> ErrorCode {
        match self {
            BindError::MissingParameter { .. } => ErrorCode::MissingParameter,
            BindError::TypeCoercion { .. } => ErrorCode::TypeCoercion,
            BindError::Deserialization { .. } => ErrorCode::Deserialization,
            BindError::UnsupportedEncoding { .. } => ErrorCode::UnsupportedEncoding,
            BindError::Serialization { .. } => ErrorCode::Serialization,
        }
    }

    /// The client-visible status for this failure.
    ///
    /// Client-caused failures are 4xx; only responder-side
    /// serialization maps to a server error.
    pub fn status(&self) -> axum::http::StatusCode {
        match self {
            BindError::MissingParameter { .. }
            | BindError::TypeCoercion { .. }
            | BindError::Deserialization { .. } => axum::http::StatusCode::BAD_REQUEST,
            BindError::UnsupportedEncoding { .. } => {
                axum::http::StatusCode::UNSUPPORTED_MEDIA_TYPE
            }
            BindError::Serialization { .. } => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl axum::response::IntoResponse for BindError {
    fn into_response(self) -> axum::response::Response {
        (self.status(), self.to_string()).into_response()
    }
}
