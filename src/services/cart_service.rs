use crate::{
    error::{AppError, AppResult},
    models::CartLine,
    state::AppState,
};

/// Adds `payload.quantity` of a product, merging with an existing line.
pub async fn add_to_cart(state: &AppState, payload: CartLine) -> AppResult<CartLine> {
    if payload.quantity == 0 {
        return Err(AppError::BadRequest("quantity must be at least 1".into()));
    }

    let product = state
        .store
        .find_product(&payload.product_id)
        .ok_or(AppError::NotFound)?;

    let mut cart = state.store.cart().lock().await;
    let existing = cart
        .iter()
        .find(|line| line.product_id == payload.product_id)
        .map(|line| line.quantity)
        .unwrap_or(0);
    let quantity = existing.saturating_add(payload.quantity);

    if i64::from(quantity) > product.stock {
        return Err(AppError::BadRequest(format!(
            "only {} of '{}' in stock",
            product.stock.max(0),
            product.name
        )));
    }

    match cart.iter_mut().find(|line| line.product_id == payload.product_id) {
        Some(line) => line.quantity = quantity,
        None => cart.push(CartLine {
            product_id: payload.product_id.clone(),
            quantity,
        }),
    }

    tracing::info!(product_id = %payload.product_id, quantity, "cart updated");
    Ok(CartLine {
        product_id: payload.product_id,
        quantity,
    })
}

pub async fn cart_lines(state: &AppState) -> Vec<CartLine> {
    state.store.cart().lock().await.clone()
}
