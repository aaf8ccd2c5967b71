use std::time::Duration;

use axum::{
    Json, Router,
    http::{HeaderName, Request, Response, StatusCode, Uri},
    response::IntoResponse,
    routing::get,
};
use tower::{ServiceBuilder, limit::ConcurrencyLimitLayer, util::MapResponseLayer};
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::Span;

use crate::{response::ApiResponse, state::AppState};

pub mod cart;
pub mod health;
pub mod params;
pub mod products;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

const MAX_BODY_BYTES: usize = 64 * 1024;
const MAX_CONCURRENT_REQUESTS: usize = 100;

/// Catalog and cart endpoints, mounted under `/api` by [`app`].
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/products", products::router())
        .nest("/categories", products::categories_router())
        .nest("/cart", cart::router())
}

/// Full reference server: API routes, health check and HTTP layers.
///
/// Every response carries an `x-request-id`, either the caller's or a fresh
/// UUID, and the same id is recorded on the request span.
pub fn app(state: AppState) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    let layers = ServiceBuilder::new()
        .layer(ConcurrencyLimitLayer::new(MAX_CONCURRENT_REQUESTS))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .layer(MapResponseLayer::new(IntoResponse::into_response))
        .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
        .layer(PropagateRequestIdLayer::new(request_id))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(catalog_span)
                .on_response(log_response),
        );

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", create_api_router())
        .fallback(not_found)
        .layer(layers)
        .with_state(state)
}

fn catalog_span<B>(request: &Request<B>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-");
    tracing::info_span!(
        "catalog_request",
        method = %request.method(),
        path = request.uri().path(),
        query = request.uri().query().unwrap_or(""),
        request_id,
    )
}

fn log_response<B>(response: &Response<B>, latency: Duration, _span: &Span) {
    tracing::info!(
        status = response.status().as_u16(),
        ms = latency.as_millis() as u64,
        "request finished"
    );
}

async fn not_found(uri: Uri) -> (StatusCode, Json<ApiResponse<serde_json::Value>>) {
    let body = ApiResponse::success("Not Found", serde_json::json!({ "path": uri.path() }));
    (StatusCode::NOT_FOUND, Json(body))
}
