use axum::Json;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::error::BindError;
use crate::exception::BindFilter;

/// Default filter: status per the error taxonomy, JSON envelope with
/// a stable machine-readable code.
#[derive(Default)]
pub struct HttpBindFilter;

impl BindFilter for HttpBindFilter {
    fn catch(&self, error: &BindError) -> Response {
        tracing::debug!(%error, "request binding failed");

        let status = error.status();
        (
            status,
            Json(json!({
                "statusCode": status.as_u16(),
                "code": error.code().to_string(),
                "message": error.to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339(),
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn missing_parameter_becomes_a_client_error() {
        let filter = HttpBindFilter;
        let response = filter.catch(&BindError::MissingParameter {
            name: "username".to_string(),
        });
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn serialization_failure_becomes_a_server_error() {
        let filter = HttpBindFilter;
        let response = filter.catch(&BindError::Serialization {
            reason: "key must be a string".to_string(),
        });
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
