use axum::extract::RawQuery;
use bindery::param::{self, ParamDescriptor, ParamKind, ParamMap};
use bindery::registry::Bound;
use bindery::{BindError, RequestData};

/// Registry-driven binding: the descriptors for this route live in
/// the startup plan (see `binding_registry` in main.rs), the handler
/// only consumes the bound values.
pub async fn request_param_v1(Bound(params): Bound) -> &'static str {
    tracing::info!(
        "username={:?}, age={:?}",
        params.text("username"),
        params.int("age")
    );

    "ok"
}

/// username is required; age is optional and binds to `None` when
/// absent. A missing username rejects with 400.
pub async fn request_param_required(
    RawQuery(query): RawQuery,
) -> Result<&'static str, BindError> {
    let req = RequestData::from_query(query.as_deref().unwrap_or(""));

    let username: String =
        param::require(&req, &ParamDescriptor::new("username", ParamKind::Text).required())?;
    let age: Option<i32> = param::extract(&req, &ParamDescriptor::new("age", ParamKind::Int))?;

    tracing::info!("username={}, age={:?}", username, age);

    Ok("ok")
}

/// Defaults make both parameters effectively optional; `?username=`
/// (empty value) still yields "guest".
pub async fn request_param_default(
    RawQuery(query): RawQuery,
) -> Result<&'static str, BindError> {
    let req = RequestData::from_query(query.as_deref().unwrap_or(""));

    let username: String = param::require(
        &req,
        &ParamDescriptor::new("username", ParamKind::Text)
            .required()
            .with_default("guest"),
    )?;
    let age: i32 = param::require(
        &req,
        &ParamDescriptor::new("age", ParamKind::Int).with_default("-1"),
    )?;

    tracing::info!("username={}, age={}", username, age);

    Ok("ok")
}

/// The escape hatch for unknown parameter sets: everything binds into
/// an ordered multi-valued map.
pub async fn request_param_map(map: ParamMap) -> &'static str {
    tracing::info!("username={:?}, age={:?}", map.get("username"), map.get("age"));

    if let Some(ids) = map.get_all("userIds") {
        tracing::info!("userIds={:?}", ids);
    }

    "ok"
}
