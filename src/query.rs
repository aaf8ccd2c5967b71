use crate::filters::FilterState;

/// Ordered `key=value` pairs sent to the catalog endpoint.
pub type QueryParams = Vec<(&'static str, String)>;

/// Maps filter state to the catalog query.
///
/// Empty dimensions are left out entirely. `hide_out_of_stock` is a display
/// filter and never reaches the server.
pub fn build_query(state: &FilterState) -> QueryParams {
    let mut params = QueryParams::with_capacity(8);

    if !state.is_all_categories() {
        params.push(("category", state.category.clone()));
    }

    let search = state.search_term.trim();
    if !search.is_empty() {
        params.push(("search", search.to_string()));
    }

    if let Some(min) = state.min_price {
        params.push(("min", min.to_string()));
    }
    if let Some(max) = state.max_price {
        params.push(("max", max.to_string()));
    }

    params.push(("page", state.page().to_string()));
    params.push(("limit", state.page_size().to_string()));
    params.push(("sortBy", state.sort_by.as_str().to_string()));
    params.push(("sortOrder", state.sort_order.as_str().to_string()));

    params
}

/// Percent-encoded query string, in parameter order.
pub fn to_query_string(params: &QueryParams) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_reserved_characters() {
        let mut state = FilterState::default();
        state.set_category("Audio & Video");
        state.set_search_term("  4k dome ");
        let query = to_query_string(&build_query(&state));
        assert_eq!(
            query,
            "category=Audio%20%26%20Video&search=4k%20dome&page=1&limit=12&sortBy=createdAt&sortOrder=desc"
        );
    }
}
