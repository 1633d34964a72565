//! Axum adapter layer.
//!
//! These extractors are the seam between the server runtime and the
//! binding core: the runtime hands over raw body bytes with their
//! declared encoding, the parsed parameter mapping, and the
//! negotiated response format; failures reject with [`BindError`].

use async_trait::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use std::convert::Infallible;

use crate::body;
use crate::error::{BindError, BindResult};
use crate::json;
use crate::param::ParamMap;
use crate::request::{ContentType, RequestData};
use crate::respond::ResponseFormat;

/// The request body as text, decoded under its declared charset.
#[derive(Debug)]
pub struct RawText(pub String);

impl<S> FromRequest<S> for RawText
where
    S: Send + Sync,
{
    type Rejection = BindError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = declared_content_type(req.headers());
        let encoding = body::encoding_of(content_type.as_ref())?;
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| BindError::Deserialization {
                reason: format!("cannot buffer request body: {e}"),
            })?;
        body::read_to_string(&bytes, encoding).map(RawText)
    }
}

/// The request body deserialized into a record.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = BindError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let RawText(text) = RawText::from_request(req, state).await?;
        json::from_str(&text).map(JsonBody)
    }
}

impl<S> FromRequestParts<S> for ParamMap
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let req = RequestData::from_query(parts.uri.query().unwrap_or(""));
        Ok(ParamMap::from_request(&req))
    }
}

/// The response format negotiated from the Accept header.
#[derive(Debug, Clone, Copy)]
pub struct Negotiate(pub ResponseFormat);

impl<S> FromRequestParts<S> for Negotiate
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let accept = parts.headers.get(ACCEPT).and_then(|v| v.to_str().ok());
        Ok(Negotiate(ResponseFormat::negotiate(accept)))
    }
}

/// Binding seam for whole values built from a [`RequestData`], for
/// callers driving the core outside of axum.
#[async_trait]
pub trait FromRequestData: Sized {
    async fn from_request_data(req: &RequestData) -> BindResult<Self>;
}

#[async_trait]
impl FromRequestData for ParamMap {
    async fn from_request_data(req: &RequestData) -> BindResult<Self> {
        Ok(ParamMap::from_request(req))
    }
}

#[async_trait]
impl FromRequestData for RawText {
    async fn from_request_data(req: &RequestData) -> BindResult<Self> {
        let encoding = body::encoding_of(req.content_type())?;
        body::read_to_string(req.body().unwrap_or(&[]), encoding).map(RawText)
    }
}

#[async_trait]
impl<T> FromRequestData for JsonBody<T>
where
    T: DeserializeOwned + Send,
{
    async fn from_request_data(req: &RequestData) -> BindResult<Self> {
        let encoding = body::encoding_of(req.content_type())?;
        json::from_body(req.body().unwrap_or(&[]), encoding).map(JsonBody)
    }
}

fn declared_content_type(headers: &axum::http::HeaderMap) -> Option<ContentType> {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(ContentType::parse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Deserialize)]
    struct HelloData {
        username: String,
        age: i32,
    }

    #[tokio::test]
    async fn json_body_binds_from_request_data() {
        let req = RequestData::new().with_body(
            r#"{"username":"hello","age":20}"#.as_bytes().to_vec(),
            Some(ContentType::parse("application/json; charset=utf-8")),
        );
        let JsonBody(data) = JsonBody::<HelloData>::from_request_data(&req).await.unwrap();
        assert_eq!(data.username, "hello");
        assert_eq!(data.age, 20);
    }

    #[tokio::test]
    async fn raw_text_respects_the_declared_charset() {
        let req = RequestData::new().with_body(
            vec![0x63, 0x61, 0x66, 0xe9],
            Some(ContentType::parse("text/plain; charset=iso-8859-1")),
        );
        let RawText(text) = RawText::from_request_data(&req).await.unwrap();
        assert_eq!(text, "café");
    }

    #[tokio::test]
    async fn unknown_charset_rejects() {
        let req = RequestData::new().with_body(
            b"hi".to_vec(),
            Some(ContentType::parse("text/plain; charset=utf-7")),
        );
        let err = RawText::from_request_data(&req).await.unwrap_err();
        assert!(matches!(err, BindError::UnsupportedEncoding { .. }));
    }

    #[tokio::test]
    async fn param_map_binds_from_request_data() {
        let req = RequestData::from_query("userIds=id1&userIds=id2");
        let map = ParamMap::from_request_data(&req).await.unwrap();
        assert_eq!(
            map.get_all("userIds").unwrap(),
            &["id1".to_string(), "id2".to_string()]
        );
    }
}
