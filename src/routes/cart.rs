use axum::{Json, Router, extract::State, routing::get};

use crate::{
    error::AppResult,
    models::CartLine,
    response::ApiResponse,
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(cart_list).post(add_to_cart))
}

pub async fn cart_list(State(state): State<AppState>) -> Json<ApiResponse<Vec<CartLine>>> {
    let items = cart_service::cart_lines(&state).await;
    Json(ApiResponse::success("OK", items))
}

pub async fn add_to_cart(
    State(state): State<AppState>,
    Json(payload): Json<CartLine>,
) -> AppResult<Json<ApiResponse<CartLine>>> {
    let line = cart_service::add_to_cart(&state, payload).await?;
    Ok(Json(ApiResponse::success("Added to cart", line)))
}
