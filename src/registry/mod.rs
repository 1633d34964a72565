//! Startup-registered binding plans.
//!
//! Instead of per-call introspection, each route declares its
//! parameter descriptors once at startup. A [`BindingPlan`] is the
//! ordered list of descriptors for one route; the [`BindingRegistry`]
//! resolves route paths to plans per request. The registry is written
//! only during startup and read-only afterwards, so no handler ever
//! shares mutable state.

use dashmap::DashMap;
use std::sync::Arc;

use crate::error::{BindError, BindResult};
use crate::param::{self, ParamDescriptor, ParamKind};
use crate::request::RequestData;

pub mod extractor;

pub use extractor::{Bound, HasRegistry};

/// A typed value produced by executing a plan.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    List(Vec<String>),
}

impl BoundValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            BoundValue::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            BoundValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            BoundValue::List(v) => Some(v),
            _ => None,
        }
    }
}

/// The bindings produced for one request, in declaration order.
/// Optional parameters that did not bind are simply absent.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BoundParams {
    values: Vec<(String, BoundValue)>,
}

impl BoundParams {
    pub fn get(&self, name: &str) -> Option<&BoundValue> {
        self.values.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(BoundValue::as_text)
    }

    pub fn int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(BoundValue::as_int)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BoundValue)> {
        self.values.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The parameter descriptors declared for one route.
#[derive(Debug, Clone)]
pub struct BindingPlan {
    route: String,
    params: Vec<ParamDescriptor>,
}

impl BindingPlan {
    pub fn new(route: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            params: Vec::new(),
        }
    }

    pub fn param(mut self, descriptor: ParamDescriptor) -> Self {
        self.params.push(descriptor);
        self
    }

    pub fn route(&self) -> &str {
        &self.route
    }

    pub fn descriptors(&self) -> &[ParamDescriptor] {
        &self.params
    }

    /// Execute the plan against one request.
    pub fn bind(&self, req: &RequestData) -> BindResult<BoundParams> {
        let mut bound = BoundParams::default();
        for desc in &self.params {
            if let Some(value) = bind_one(req, desc)? {
                bound.values.push((desc.name().to_string(), value));
            }
        }
        tracing::debug!(route = %self.route, bound = bound.len(), "executed binding plan");
        Ok(bound)
    }
}

fn bind_one(req: &RequestData, desc: &ParamDescriptor) -> BindResult<Option<BoundValue>> {
    match desc.kind() {
        ParamKind::Text => Ok(param::extract::<String>(req, desc)?.map(BoundValue::Text)),
        ParamKind::Int => Ok(param::extract::<i64>(req, desc)?.map(BoundValue::Int)),
        ParamKind::Float => Ok(param::extract::<f64>(req, desc)?.map(BoundValue::Float)),
        ParamKind::Bool => Ok(param::extract::<bool>(req, desc)?.map(BoundValue::Bool)),
        ParamKind::TextList => {
            let values: Vec<String> = param::extract_all(req, desc.name())?;
            if values.is_empty() {
                if desc.is_required() {
                    return Err(BindError::MissingParameter {
                        name: desc.name().to_string(),
                    });
                }
                Ok(None)
            } else {
                Ok(Some(BoundValue::List(values)))
            }
        }
    }
}

/// Thread-safe route -> plan registry.
pub struct BindingRegistry {
    plans: DashMap<String, Arc<BindingPlan>>,
}

impl BindingRegistry {
    pub fn new() -> Self {
        Self {
            plans: DashMap::new(),
        }
    }

    pub fn register(&self, plan: BindingPlan) -> &Self {
        self.plans.insert(plan.route().to_string(), Arc::new(plan));
        self
    }

    pub fn plan(&self, route: &str) -> Option<Arc<BindingPlan>> {
        self.plans.get(route).map(|entry| Arc::clone(entry.value()))
    }

    pub fn contains(&self, route: &str) -> bool {
        self.plans.contains_key(route)
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

impl Default for BindingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hello_plan() -> BindingPlan {
        BindingPlan::new("/hello")
            .param(ParamDescriptor::new("username", ParamKind::Text).required())
            .param(ParamDescriptor::new("age", ParamKind::Int).with_default("-1"))
            .param(ParamDescriptor::new("userIds", ParamKind::TextList))
    }

    #[test]
    fn register_and_bind() {
        let registry = BindingRegistry::new();
        registry.register(hello_plan());

        let plan = registry.plan("/hello").unwrap();
        let req = RequestData::from_query("username=hello&age=20&userIds=id1&userIds=id2");
        let bound = plan.bind(&req).unwrap();

        assert_eq!(bound.text("username"), Some("hello"));
        assert_eq!(bound.int("age"), Some(20));
        assert_eq!(
            bound.get("userIds").unwrap().as_list().unwrap(),
            &["id1".to_string(), "id2".to_string()]
        );
    }

    #[test]
    fn defaults_apply_inside_plans() {
        let registry = BindingRegistry::new();
        registry.register(hello_plan());

        let req = RequestData::from_query("username=hello");
        let bound = registry.plan("/hello").unwrap().bind(&req).unwrap();
        assert_eq!(bound.int("age"), Some(-1));
        assert_eq!(bound.get("userIds"), None);
    }

    #[test]
    fn missing_required_fails_the_whole_plan() {
        let plan = hello_plan();
        let req = RequestData::from_query("age=20");
        let err = plan.bind(&req).unwrap_err();
        assert!(matches!(err, BindError::MissingParameter { name } if name == "username"));
    }

    #[test]
    fn unknown_route_has_no_plan() {
        let registry = BindingRegistry::new();
        assert!(registry.plan("/nope").is_none());
        assert!(registry.is_empty());
        registry.register(hello_plan());
        assert!(registry.contains("/hello"));
        assert_eq!(registry.len(), 1);
    }
}
