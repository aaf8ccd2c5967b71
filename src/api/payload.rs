use serde_json::Value;

use crate::models::{PageResult, Pagination, ProductSummary};

/// Normalizes the catalog listing body into a [`PageResult`].
///
/// Accepted shapes: `{products, pagination}`, a bare array (legacy), or an
/// object carrying a `users` array. Anything else becomes an empty page.
pub fn normalize_products(body: Value) -> PageResult {
    let (items, pagination) = match body {
        Value::Array(items) => (Value::Array(items), None),
        Value::Object(mut map) => {
            let pagination = map.remove("pagination");
            match map.remove("products").or_else(|| map.remove("users")) {
                Some(items @ Value::Array(_)) => (items, pagination),
                _ => {
                    tracing::warn!("catalog payload has no product list, showing empty page");
                    return PageResult::default();
                }
            }
        }
        other => {
            tracing::warn!(kind = value_kind(&other), "unexpected catalog payload");
            return PageResult::default();
        }
    };

    let products = match serde_json::from_value::<Vec<ProductSummary>>(items) {
        Ok(products) => products,
        Err(err) => {
            tracing::warn!(error = %err, "malformed products in catalog payload");
            return PageResult::default();
        }
    };

    let pagination = pagination
        .and_then(|p| match serde_json::from_value::<Pagination>(p) {
            Ok(p) => Some(p),
            Err(err) => {
                tracing::warn!(error = %err, "malformed pagination in catalog payload");
                None
            }
        })
        .unwrap_or_default();

    PageResult {
        products,
        pagination,
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn item(id: &str) -> Value {
        json!({ "_id": id, "name": id, "price": 100, "stock": 1, "image": "/x.jpg" })
    }

    #[test]
    fn reads_paginated_object() {
        let page = normalize_products(json!({
            "products": [item("a"), item("b")],
            "pagination": {
                "currentPage": 2, "totalPages": 3, "totalProducts": 26,
                "hasPrevPage": true, "hasNextPage": true
            }
        }));
        assert_eq!(page.products.len(), 2);
        assert_eq!(page.pagination.current_page, 2);
        assert_eq!(page.pagination.total_pages, 3);
    }

    #[test]
    fn tolerates_bare_array_and_users_field() {
        let page = normalize_products(json!([item("a")]));
        assert_eq!(page.products.len(), 1);
        assert_eq!(page.pagination, Pagination::default());

        let page = normalize_products(json!({ "users": [item("u")] }));
        assert_eq!(page.products[0].id, "u");
    }

    #[test]
    fn unknown_shapes_become_empty() {
        assert_eq!(normalize_products(json!("oops")), PageResult::default());
        assert_eq!(normalize_products(json!({ "items": [] })), PageResult::default());
        assert_eq!(
            normalize_products(json!({ "products": [{ "name": 3 }] })),
            PageResult::default()
        );
    }
}
