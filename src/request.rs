//! Per-request data model.
//!
//! A [`RequestData`] is built once per incoming call by the server
//! runtime and discarded after the handler returns. It holds the
//! ordered, multi-valued parameter mapping, the raw body bytes, and
//! the declared content type.

/// Snapshot of the bindable parts of one request.
#[derive(Debug, Default, Clone)]
pub struct RequestData {
    params: Vec<(String, Vec<String>)>,
    body: Option<Vec<u8>>,
    content_type: Option<ContentType>,
}

impl RequestData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw query string (`a=1&b=x&b=y`) into the ordered
    /// multi-valued mapping. Percent-escapes are decoded and `+`
    /// means space, as in `application/x-www-form-urlencoded`.
    pub fn from_query(query: &str) -> Self {
        let mut data = Self::new();
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (name, value) = match pair.split_once('=') {
                Some((n, v)) => (n, v),
                None => (pair, ""),
            };
            data.append(percent_decode(name), percent_decode(value));
        }
        data
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>, content_type: Option<ContentType>) -> Self {
        self.body = Some(body.into());
        self.content_type = content_type;
        self
    }

    /// Append a value for `name`, preserving arrival order. Repeated
    /// names accumulate into a multi-valued entry.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        match self.params.iter_mut().find(|(n, _)| *n == name) {
            Some((_, values)) => values.push(value.into()),
            None => self.params.push((name, vec![value.into()])),
        }
    }

    /// First value for `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.get_all(name).and_then(|values| values.first()).map(String::as_str)
    }

    /// All values for `name`, in arrival order.
    pub fn get_all(&self, name: &str) -> Option<&[String]> {
        self.params
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, values)| values.as_slice())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.params.iter().any(|(n, _)| n == name)
    }

    /// Parameter names in arrival order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.params.iter().map(|(n, v)| (n.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    pub fn content_type(&self) -> Option<&ContentType> {
        self.content_type.as_ref()
    }
}

/// Declared content type of a request or response body.
///
/// Only the `type/subtype` essence and the `charset` parameter are
/// retained; other parameters are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentType {
    essence: String,
    charset: Option<String>,
}

impl ContentType {
    /// Parse a `Content-Type` header value, e.g.
    /// `application/json; charset=utf-8`.
    pub fn parse(header: &str) -> Self {
        let mut parts = header.split(';');
        let essence = parts.next().unwrap_or("").trim().to_ascii_lowercase();
        let charset = parts
            .filter_map(|p| p.trim().split_once('='))
            .find(|(key, _)| key.trim().eq_ignore_ascii_case("charset"))
            .map(|(_, value)| value.trim().trim_matches('"').to_ascii_lowercase());
        Self { essence, charset }
    }

    pub fn essence(&self) -> &str {
        &self.essence
    }

    pub fn charset(&self) -> Option<&str> {
        self.charset.as_deref()
    }

    pub fn is_json(&self) -> bool {
        self.essence == "application/json" || self.essence.ends_with("+json")
    }
}

/// Decode percent-escapes and `+` in a query component. Malformed
/// escapes are kept literally rather than rejected, matching lenient
/// server behavior.
fn percent_decode(component: &str) -> String {
    let bytes = component.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                match hex_pair(bytes[i + 1], bytes[i + 2]) {
                    Some(byte) => {
                        out.push(byte);
                        i += 3;
                    }
                    None => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            other => {
                out.push(other);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_pair(hi: u8, lo: u8) -> Option<u8> {
    let hi = (hi as char).to_digit(16)?;
    let lo = (lo as char).to_digit(16)?;
    Some((hi * 16 + lo) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_parsing_keeps_order_and_multiplicity() {
        let data = RequestData::from_query("username=hello&userIds=id1&userIds=id2&age=20");
        assert_eq!(data.get("username"), Some("hello"));
        assert_eq!(data.get("age"), Some("20"));
        assert_eq!(
            data.get_all("userIds").unwrap(),
            &["id1".to_string(), "id2".to_string()]
        );
        assert_eq!(data.names().collect::<Vec<_>>(), vec!["username", "userIds", "age"]);
    }

    #[test]
    fn query_parsing_decodes_escapes() {
        let data = RequestData::from_query("name=hello+world&city=S%C3%A3o");
        assert_eq!(data.get("name"), Some("hello world"));
        assert_eq!(data.get("city"), Some("São"));
    }

    #[test]
    fn bare_name_yields_empty_value() {
        let data = RequestData::from_query("username=&flag");
        assert_eq!(data.get("username"), Some(""));
        assert_eq!(data.get("flag"), Some(""));
        assert!(data.contains("flag"));
        assert!(!data.contains("missing"));
    }

    #[test]
    fn malformed_escape_is_kept_literally() {
        let data = RequestData::from_query("v=100%zz");
        assert_eq!(data.get("v"), Some("100%zz"));
    }

    #[test]
    fn content_type_parsing() {
        let ct = ContentType::parse("application/json; charset=UTF-8");
        assert_eq!(ct.essence(), "application/json");
        assert_eq!(ct.charset(), Some("utf-8"));
        assert!(ct.is_json());

        let ct = ContentType::parse("text/plain");
        assert_eq!(ct.essence(), "text/plain");
        assert_eq!(ct.charset(), None);
        assert!(!ct.is_json());

        let ct = ContentType::parse("application/problem+json");
        assert!(ct.is_json());
    }
}
