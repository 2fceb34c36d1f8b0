//! API routes configuration module

use crate::api::errors::not_found;
use crate::api::handlers::invoke;
use crate::config::FunctionsConfig;
use axum::{routing::any, Router};
use std::sync::Arc;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates and configures the router serving every registered function
///
/// Each function answers on `/{name}`, `/{name}/` and on any path below it,
/// for every HTTP method. All functions share one concurrency ceiling of
/// `global.max_instances`; requests above it wait for a free slot. Unknown
/// paths get a JSON 404 without taking a slot.
///
/// # Arguments
/// * `config` - Validated functions configuration
///
/// # Returns
/// * `Router` - Configured router with all function endpoints and middleware
pub fn app(config: &FunctionsConfig) -> Router {
    let mut router = Router::new();

    for function in &config.functions {
        let exact = format!("/{}", function.name);
        let trailing = format!("/{}/", function.name);
        let nested = format!("/{}/*rest", function.name);
        let routes = Router::new()
            .route(&exact, any(invoke))
            .route(&trailing, any(invoke))
            .route(&nested, any(invoke))
            .with_state(Arc::new(function.clone()));
        router = router.merge(routes);
    }

    with_middleware(router, config.global.max_instances).fallback(not_found)
}

/// Caps in-flight requests across every route of `router` and traces them
///
/// Request tracing is emitted at TRACE so that `debug` logging still shows a
/// single record per invocation.
fn with_middleware(router: Router, max_instances: usize) -> Router {
    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::TRACE))
        .on_request(DefaultOnRequest::new().level(Level::TRACE))
        .on_response(DefaultOnResponse::new().level(Level::TRACE));

    router
        .layer(GlobalConcurrencyLimitLayer::new(max_instances))
        .layer(trace)
}
