//! Raw-body reading.
//!
//! Turns the unparsed request payload into text under a declared
//! character encoding. UTF-8 and ISO-8859-1 are supported; any other
//! declared charset is rejected rather than guessed.

use crate::error::{BindError, BindResult};
use crate::request::ContentType;

/// Character encodings a declared charset can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    #[default]
    Utf8,
    Latin1,
}

impl Encoding {
    /// Resolve a charset label (`utf-8`, `iso-8859-1`, ...).
    pub fn from_label(label: &str) -> BindResult<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Encoding::Utf8),
            "iso-8859-1" | "latin1" | "latin-1" | "l1" => Ok(Encoding::Latin1),
            _ => Err(BindError::UnsupportedEncoding {
                label: label.to_string(),
            }),
        }
    }

    /// Decode `bytes` under this encoding.
    pub fn decode(self, bytes: &[u8]) -> BindResult<String> {
        match self {
            Encoding::Utf8 => {
                String::from_utf8(bytes.to_vec()).map_err(|e| BindError::Deserialization {
                    reason: format!("request body is not valid UTF-8: {e}"),
                })
            }
            // Latin-1 maps every byte to the code point of the same value.
            Encoding::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
        }
    }
}

/// The encoding declared by a content type, defaulting to UTF-8 when
/// no charset parameter is present.
pub fn encoding_of(content_type: Option<&ContentType>) -> BindResult<Encoding> {
    match content_type.and_then(ContentType::charset) {
        Some(label) => Encoding::from_label(label),
        None => Ok(Encoding::Utf8),
    }
}

/// Read the payload as text under `encoding`.
pub fn read_to_string(bytes: &[u8], encoding: Encoding) -> BindResult<String> {
    let text = encoding.decode(bytes)?;
    tracing::debug!(bytes = bytes.len(), ?encoding, "decoded request body");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_body_decodes() {
        let body = "{\"username\":\"hello\", \"age\": 20}".as_bytes();
        assert_eq!(
            read_to_string(body, Encoding::Utf8).unwrap(),
            "{\"username\":\"hello\", \"age\": 20}"
        );
    }

    #[test]
    fn invalid_utf8_is_a_deserialization_failure() {
        let err = read_to_string(&[0xff, 0xfe], Encoding::Utf8).unwrap_err();
        assert!(matches!(err, BindError::Deserialization { .. }));
    }

    #[test]
    fn latin1_never_fails() {
        assert_eq!(Encoding::Latin1.decode(&[0x63, 0x61, 0x66, 0xe9]).unwrap(), "café");
    }

    #[test]
    fn charset_labels_resolve() {
        assert_eq!(Encoding::from_label("UTF-8").unwrap(), Encoding::Utf8);
        assert_eq!(Encoding::from_label("iso-8859-1").unwrap(), Encoding::Latin1);
        assert!(matches!(
            Encoding::from_label("utf-7"),
            Err(BindError::UnsupportedEncoding { .. })
        ));
    }

    #[test]
    fn missing_charset_defaults_to_utf8() {
        assert_eq!(encoding_of(None).unwrap(), Encoding::Utf8);
        let ct = crate::request::ContentType::parse("application/json");
        assert_eq!(encoding_of(Some(&ct)).unwrap(), Encoding::Utf8);
        let ct = crate::request::ContentType::parse("text/plain; charset=latin1");
        assert_eq!(encoding_of(Some(&ct)).unwrap(), Encoding::Latin1);
    }
}
