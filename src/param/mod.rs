//! Named-parameter extraction.
//!
//! A [`ParamDescriptor`] declares how one named parameter binds:
//! its target kind, whether it is required, and an optional default.
//! Descriptors are built once at startup (see [`crate::registry`])
//! instead of being discovered per call.
//!
//! Resolution order for a lookup:
//! 1. a present, non-empty value binds as-is;
//! 2. otherwise the default binds, when one is declared (a default
//!    makes the parameter effectively optional even when marked
//!    required, and an empty submitted value still takes the default);
//! 3. otherwise a required parameter fails with `MissingParameter`
//!    and an optional one binds to nothing.

use crate::error::{BindError, BindResult};
use crate::request::RequestData;

pub mod coerce;
pub mod map;

pub use coerce::FromParamValue;
pub use map::ParamMap;

/// Target kind for registry-driven binding plans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Text,
    Int,
    Float,
    Bool,
    /// All values of a multi-valued parameter, as text.
    TextList,
}

/// Declares how a single named parameter binds.
#[derive(Debug, Clone)]
pub struct ParamDescriptor {
    name: String,
    kind: ParamKind,
    required: bool,
    default: Option<String>,
}

impl ParamDescriptor {
    pub fn new(name: impl Into<String>, kind: ParamKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: false,
            default: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Declare a default, substituted when the parameter is absent or
    /// submitted empty. The default is coerced like a real value.
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ParamKind {
        self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// The effective raw string for this parameter, after default
    /// substitution and the required check. `Ok(None)` means the
    /// parameter is optional and absent.
    fn resolve_raw<'a>(&'a self, req: &'a RequestData) -> BindResult<Option<&'a str>> {
        match req.get(&self.name).filter(|v| !v.is_empty()) {
            Some(value) => Ok(Some(value)),
            None => match self.default.as_deref() {
                Some(default) => Ok(Some(default)),
                None if self.required => Err(BindError::MissingParameter {
                    name: self.name.clone(),
                }),
                None => Ok(None),
            },
        }
    }
}

/// Extract one typed parameter. `Ok(None)` means the parameter is
/// optional, absent, and has no default.
pub fn extract<T: FromParamValue>(
    req: &RequestData,
    desc: &ParamDescriptor,
) -> BindResult<Option<T>> {
    let resolved = desc.resolve_raw(req)?;
    tracing::debug!(name = desc.name(), raw = ?resolved, "extracting parameter");
    resolved
        .map(|raw| T::from_param_value(desc.name(), raw))
        .transpose()
}

/// Extract one typed parameter that must bind: required descriptors
/// and descriptors with a default always do.
pub fn require<T: FromParamValue>(req: &RequestData, desc: &ParamDescriptor) -> BindResult<T> {
    extract(req, desc)?.ok_or_else(|| BindError::MissingParameter {
        name: desc.name().to_string(),
    })
}

/// Extract every value of a multi-valued parameter, coerced in
/// arrival order. An absent parameter yields an empty sequence.
pub fn extract_all<T: FromParamValue>(req: &RequestData, name: &str) -> BindResult<Vec<T>> {
    req.get_all(name)
        .unwrap_or(&[])
        .iter()
        .map(|raw| T::from_param_value(name, raw))
        .collect()
}
