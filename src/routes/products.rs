use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};

use crate::{
    models::{Category, PageResult},
    routes::params::ProductQuery,
    services::product_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_products))
}

pub fn categories_router() -> Router<AppState> {
    Router::new().route("/", get(list_categories))
}

pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Json<PageResult> {
    Json(product_service::list_products(&state, &query))
}

pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<Category>> {
    Json(product_service::list_categories(&state))
}
