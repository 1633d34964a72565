//! Response serialization and content negotiation.
//!
//! A [`Reply`] is either plain text or a record. Text is emitted
//! as-is; records are serialized with the same serde machinery the
//! deserializer consumes, so a record round-trips symmetrically.
//! Negotiation only decides how a *text* reply is represented — a
//! record is always structured, it is never flattened to plain text.

use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::BindResult;
use crate::json;

/// Outgoing representation selected from the client's Accept header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    #[default]
    Text,
    Json,
}

impl ResponseFormat {
    /// Pick a representation from an Accept header value. Anything
    /// naming a JSON media type selects JSON; everything else,
    /// including an absent header, stays plain text.
    pub fn negotiate(accept: Option<&str>) -> Self {
        let Some(accept) = accept else {
            return ResponseFormat::Text;
        };
        let wants_json = accept
            .split(',')
            .map(|part| part.split(';').next().unwrap_or("").trim().to_ascii_lowercase())
            .any(|essence| essence == "application/json" || essence.ends_with("+json"));
        if wants_json { ResponseFormat::Json } else { ResponseFormat::Text }
    }
}

/// A handler return value on its way to the wire.
#[derive(Debug)]
pub enum Reply<T = ()> {
    Text(String),
    Record(T),
}

impl<T: Serialize> Reply<T> {
    pub fn record(value: T) -> Self {
        Reply::Record(value)
    }

    /// The outgoing content type and bytes under `format`.
    ///
    /// Text under JSON negotiation becomes a JSON string; a record is
    /// structured regardless of `format`.
    pub fn into_bytes(self, format: ResponseFormat) -> BindResult<(&'static str, Vec<u8>)> {
        match (self, format) {
            (Reply::Text(text), ResponseFormat::Text) => {
                Ok(("text/plain; charset=utf-8", text.into_bytes()))
            }
            (Reply::Text(text), ResponseFormat::Json) => {
                Ok(("application/json", json::to_vec(&text)?))
            }
            (Reply::Record(value), _) => Ok(("application/json", json::to_vec(&value)?)),
        }
    }

    /// Serialize into an axum response; a serialization failure
    /// surfaces as the error's own response.
    pub fn into_response_with(self, format: ResponseFormat) -> Response {
        match self.into_bytes(format) {
            Ok((content_type, bytes)) => {
                ([(CONTENT_TYPE, content_type)], bytes).into_response()
            }
            Err(e) => e.into_response(),
        }
    }
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Reply {
        Reply::Text(text.into())
    }
}
