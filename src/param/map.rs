use crate::request::RequestData;

/// The "bind everything" escape hatch: an ordered name -> values
/// mapping for handlers that take unknown or dynamic parameter sets.
///
/// `get` gives the single-value view, `get_all` the multi-value view,
/// so `?userIds=id1&userIds=id2` is reachable both as `"id1"` and as
/// `["id1", "id2"]`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParamMap {
    entries: Vec<(String, Vec<String>)>,
}

impl ParamMap {
    pub fn from_request(req: &RequestData) -> Self {
        Self {
            entries: req
                .iter()
                .map(|(name, values)| (name.to_string(), values.to_vec()))
                .collect(),
        }
    }

    /// First value for `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.get_all(name).and_then(|v| v.first()).map(String::as_str)
    }

    /// All values for `name`, in arrival order.
    pub fn get_all(&self, name: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_slice())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_valued_parameters_stay_ordered() {
        let req = RequestData::from_query("userIds=id1&userIds=id2");
        let map = ParamMap::from_request(&req);
        assert_eq!(map.get("userIds"), Some("id1"));
        assert_eq!(
            map.get_all("userIds").unwrap(),
            &["id1".to_string(), "id2".to_string()]
        );
    }

    #[test]
    fn unknown_names_bind_too() {
        let req = RequestData::from_query("username=hello&age=20&extra=1");
        let map = ParamMap::from_request(&req);
        assert_eq!(map.len(), 3);
        assert_eq!(map.get("extra"), Some("1"));
        assert_eq!(map.get("missing"), None);
        assert_eq!(map.names().collect::<Vec<_>>(), vec!["username", "age", "extra"]);
    }
}
