//! # Bindery
//!
//! Typed request binding and response serialization for Axum services.
//!
//! Bindery replaces annotation-style parameter injection with explicit
//! binding descriptors: each route declares up front which named
//! parameters it takes, their target types, whether they are required,
//! and their defaults. The same crate covers the other direction too,
//! serializing handler return values back to the wire under content
//! negotiation.
//!
//! ## Features
//!
//! - **Parameter extraction**: named query/form values with type
//!   coercion, required/optional policy, and default substitution
//! - **Binding plans**: per-route descriptors registered once at
//!   startup and executed per request
//! - **Body binding**: raw text under a declared charset, or JSON
//!   records via serde
//! - **Responder**: text and record replies with Accept-driven
//!   negotiation, symmetric with the deserializer
//! - **Typed failures**: every binding failure maps to a structured
//!   client-visible response
//!
//! ## Quick Start
//!
//! ```rust
//! use bindery::param::{self, ParamDescriptor, ParamKind};
//! use bindery::request::RequestData;
//!
//! # fn main() -> Result<(), bindery::BindError> {
//! // Declared once at startup:
//! let username = ParamDescriptor::new("username", ParamKind::Text).required();
//! let age = ParamDescriptor::new("age", ParamKind::Int).with_default("-1");
//!
//! // Executed per request:
//! let req = RequestData::from_query("username=hello");
//! let username: String = param::require(&req, &username)?;
//! let age: i32 = param::require(&req, &age)?;
//!
//! assert_eq!(username, "hello");
//! assert_eq!(age, -1);
//! # Ok(())
//! # }
//! ```
//!
//! Inside an axum handler, the adapter layer does the plumbing:
//!
//! ```rust,no_run
//! use bindery::extract::{JsonBody, Negotiate};
//! use bindery::respond::Reply;
//! use axum::response::Response;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct HelloData {
//!     username: String,
//!     age: i32,
//! }
//!
//! async fn echo(Negotiate(format): Negotiate, JsonBody(data): JsonBody<HelloData>) -> Response {
//!     Reply::record(data).into_response_with(format)
//! }
//! ```

pub mod body;
pub mod error;
pub mod exception;
pub mod extract;
pub mod json;
pub mod logging;
pub mod param;
pub mod registry;
pub mod request;
pub mod respond;

// Re-export core types
pub use error::{BindError, BindResult, ErrorCode};
pub use param::{FromParamValue, ParamDescriptor, ParamKind, ParamMap};
pub use registry::{BindingPlan, BindingRegistry, Bound, HasRegistry};
pub use request::{ContentType, RequestData};
pub use respond::{Reply, ResponseFormat};

// Re-export commonly used types from dependencies
pub use async_trait::async_trait;
pub use axum;

/// Prelude module for convenient imports
///
/// ```
/// use bindery::prelude::*;
/// ```
pub mod prelude {
    pub use crate::body::Encoding;
    pub use crate::error::{BindError, BindResult, ErrorCode};
    pub use crate::exception::{BindFilter, HttpBindFilter};
    pub use crate::extract::{FromRequestData, JsonBody, Negotiate, RawText};
    pub use crate::logging::RequestLogLayer;
    pub use crate::param::{self, FromParamValue, ParamDescriptor, ParamKind, ParamMap};
    pub use crate::registry::{BindingPlan, BindingRegistry, Bound, BoundParams, BoundValue, HasRegistry};
    pub use crate::request::{ContentType, RequestData};
    pub use crate::respond::{Reply, ResponseFormat};
    pub use async_trait::async_trait;
    pub use axum::{
        Json, Router,
        extract::{Path, Query, State},
        http::StatusCode,
        response::{IntoResponse, Response},
    };
    pub use std::sync::Arc;
}
