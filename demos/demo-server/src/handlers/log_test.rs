/// Emits one event per level so the subscriber's filtering is easy to
/// eyeball (`RUST_LOG=trace` shows all five).
pub async fn log_test() -> &'static str {
    let name = "bindery";

    tracing::trace!("trace log={}", name);
    tracing::debug!("debug log={}", name);
    tracing::info!("info log={}", name);
    tracing::warn!("warn log={}", name);
    tracing::error!("error log={}", name);

    "ok"
}
