use axum::extract::FromRequestParts;
use axum::http::{StatusCode, request::Parts};
use axum::response::{IntoResponse, Response};

use crate::registry::{BindingRegistry, BoundParams};
use crate::request::RequestData;

/// Trait the application state must implement to expose the registry.
pub trait HasRegistry {
    fn registry(&self) -> &BindingRegistry;
}

/// Axum extractor that executes the binding plan registered for the
/// request path against the query string.
///
/// # Example
/// ```
/// use bindery::param::{ParamDescriptor, ParamKind};
/// use bindery::registry::{BindingPlan, BindingRegistry, Bound, HasRegistry};
/// use std::sync::Arc;
///
/// #[derive(Clone)]
/// struct AppState {
///     registry: Arc<BindingRegistry>,
/// }
///
/// impl HasRegistry for AppState {
///     fn registry(&self) -> &BindingRegistry {
///         &self.registry
///     }
/// }
///
/// async fn hello(Bound(params): Bound) -> String {
///     format!("username={:?}", params.text("username"))
/// }
///
/// // At startup:
/// let registry = BindingRegistry::new();
/// registry.register(
///     BindingPlan::new("/hello")
///         .param(ParamDescriptor::new("username", ParamKind::Text).required()),
/// );
/// let state = AppState {
///     registry: Arc::new(registry),
/// };
/// ```
pub struct Bound(pub BoundParams);

impl<S> FromRequestParts<S> for Bound
where
    S: Send + Sync + HasRegistry,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let path = parts.uri.path();
        let plan = state.registry().plan(path).ok_or_else(|| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("no binding plan registered for '{path}'"),
            )
                .into_response()
        })?;

        let req = RequestData::from_query(parts.uri.query().unwrap_or(""));
        plan.bind(&req).map(Bound).map_err(IntoResponse::into_response)
    }
}

impl std::ops::Deref for Bound {
    type Target = BoundParams;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
