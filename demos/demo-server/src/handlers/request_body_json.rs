use axum::response::Response;
use bindery::extract::{JsonBody, Negotiate, RawText};
use bindery::respond::Reply;
use bindery::{BindError, json};

use crate::hello::HelloData;

/// Text first, record second: read the body as a string, then run the
/// deserializer explicitly.
pub async fn request_body_json_v1(RawText(message_body): RawText) -> Result<&'static str, BindError> {
    tracing::info!("messageBody={}", message_body);

    let hello_data: HelloData = json::from_str(&message_body)?;

    tracing::info!("username={}, age={}", hello_data.username, hello_data.age);

    Ok("ok")
}

/// Direct record binding: the extractor runs the deserializer.
pub async fn request_body_json_v3(JsonBody(hello_data): JsonBody<HelloData>) -> &'static str {
    tracing::info!("username={}, age={}", hello_data.username, hello_data.age);

    "ok"
}

/// Record in, record out: the reply serializes with the same format
/// the deserializer consumed, so the echo round-trips byte-for-value.
pub async fn request_body_json_v5(
    Negotiate(format): Negotiate,
    JsonBody(hello_data): JsonBody<HelloData>,
) -> Response {
    tracing::info!("username={}, age={}", hello_data.username, hello_data.age);

    Reply::record(hello_data).into_response_with(format)
}
