//! Error reporting seam between the binding core and the runtime.

use axum::response::Response;

use crate::error::BindError;

pub mod http;

pub use http::HttpBindFilter;

/// Turns a binding failure into the client-visible response.
///
/// The runtime installs one filter and routes every [`BindError`]
/// through it; no failure escapes the request it belongs to.
pub trait BindFilter: Send + Sync + 'static {
    fn catch(&self, error: &BindError) -> Response;
}
