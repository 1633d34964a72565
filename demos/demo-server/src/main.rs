use axum::Router;
use axum::routing::{get, post};
use bindery::prelude::*;
use std::sync::Arc;

mod handlers;
mod hello;

use handlers::log_test::log_test;
use handlers::request_body_json::{request_body_json_v1, request_body_json_v3, request_body_json_v5};
use handlers::request_body_string::request_body_string_v1;
use handlers::request_param::{
    request_param_default, request_param_map, request_param_required, request_param_v1,
};

#[derive(Clone)]
pub struct AppState {
    registry: Arc<BindingRegistry>,
}

impl HasRegistry for AppState {
    fn registry(&self) -> &BindingRegistry {
        &self.registry
    }
}

fn binding_registry() -> BindingRegistry {
    let registry = BindingRegistry::new();
    registry.register(
        BindingPlan::new("/request-param-v1")
            .param(ParamDescriptor::new("username", ParamKind::Text).required())
            .param(ParamDescriptor::new("age", ParamKind::Int).required()),
    );
    registry
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    tracing::info!("🚀 Starting Demo Server...");

    let state = AppState {
        registry: Arc::new(binding_registry()),
    };

    let router = Router::new()
        .route("/log-test", get(log_test))
        .route("/request-param-v1", get(request_param_v1))
        .route("/request-param-required", get(request_param_required))
        .route("/request-param-default", get(request_param_default))
        .route("/request-param-map", get(request_param_map))
        .route("/request-body-string-v1", post(request_body_string_v1))
        .route("/request-body-json-v1", post(request_body_json_v1))
        .route("/request-body-json-v3", post(request_body_json_v3))
        .route("/request-body-json-v5", post(request_body_json_v5))
        .layer(RequestLogLayer::default())
        .with_state(state);

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    tracing::info!("✅ Server running on http://127.0.0.1:{}", port);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("failed to install Ctrl+C handler");
            tracing::info!("🛑 Initiating graceful shutdown...");
        })
        .await
        .unwrap();

    tracing::info!("👋 Server stopped");
}
