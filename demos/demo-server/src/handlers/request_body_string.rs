use bindery::extract::RawText;

/// The body as text, decoded under the charset the client declared.
pub async fn request_body_string_v1(RawText(message_body): RawText) -> &'static str {
    tracing::info!("messageBody={}", message_body);

    "ok"
}
