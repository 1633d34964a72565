//! Structured body deserialization.
//!
//! Converts a JSON-formatted body into a caller-declared record.
//! Field name matching is serde's exact, case-sensitive match; a
//! malformed document or a missing/mistyped field fails with
//! `Deserialization`.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::body::Encoding;
use crate::error::{BindError, BindResult};

/// Deserialize a record from already-decoded text.
pub fn from_str<T: DeserializeOwned>(text: &str) -> BindResult<T> {
    serde_json::from_str(text).map_err(|e| BindError::Deserialization {
        reason: e.to_string(),
    })
}

/// Deserialize a record straight from body bytes, decoding them under
/// the declared encoding first.
pub fn from_body<T: DeserializeOwned>(bytes: &[u8], encoding: Encoding) -> BindResult<T> {
    let text = encoding.decode(bytes)?;
    from_str(&text)
}

/// Serialize a record into the same structured format the
/// deserializer consumes, so record -> bytes -> record round-trips.
pub fn to_vec<T: Serialize>(value: &T) -> BindResult<Vec<u8>> {
    serde_json::to_vec(value).map_err(|e| BindError::Serialization {
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct HelloData {
        username: String,
        age: i32,
    }

    #[test]
    fn valid_body_deserializes() {
        let data: HelloData = from_str(r#"{"username":"hello","age":20}"#).unwrap();
        assert_eq!(
            data,
            HelloData {
                username: "hello".to_string(),
                age: 20
            }
        );
    }

    #[test]
    fn deserialize_then_serialize_round_trips() {
        let body = br#"{"username":"hello","age":20}"#;
        let data: HelloData = from_body(body, Encoding::Utf8).unwrap();
        let bytes = to_vec(&data).unwrap();
        let again: HelloData = from_body(&bytes, Encoding::Utf8).unwrap();
        assert_eq!(data, again);
    }

    #[test]
    fn malformed_json_fails() {
        let err = from_str::<HelloData>(r#"{"username":}"#).unwrap_err();
        assert!(matches!(err, BindError::Deserialization { .. }));
    }

    #[test]
    fn missing_field_fails() {
        let err = from_str::<HelloData>(r#"{"username":"hello"}"#).unwrap_err();
        assert!(matches!(err, BindError::Deserialization { .. }));
    }

    #[test]
    fn mistyped_field_fails() {
        let err = from_str::<HelloData>(r#"{"username":"hello","age":"twenty"}"#).unwrap_err();
        assert!(matches!(err, BindError::Deserialization { .. }));
    }

    #[test]
    fn field_matching_is_case_sensitive() {
        assert!(from_str::<HelloData>(r#"{"Username":"hello","age":20}"#).is_err());
    }
}
