use std::cmp::Ordering;

use crate::{
    filters::{SortBy, SortOrder},
    models::{Category, PageResult, Pagination, ProductSummary},
    routes::params::ProductQuery,
    state::AppState,
};

pub fn list_products(state: &AppState, query: &ProductQuery) -> PageResult {
    let (page, limit) = query.normalize();
    let search = query.search().map(str::to_lowercase);

    let mut matches: Vec<&ProductSummary> = state
        .store
        .products()
        .iter()
        .filter(|p| query.category().is_none_or(|c| p.category == c))
        .filter(|p| {
            search
                .as_deref()
                .is_none_or(|s| matches_search(p, s))
        })
        .filter(|p| query.min.is_none_or(|min| p.price >= min))
        .filter(|p| query.max.is_none_or(|max| p.price <= max))
        .collect();

    let sort_by = query.sort_by.unwrap_or_default();
    let sort_order = query.sort_order.unwrap_or_default();
    matches.sort_by(|a, b| {
        let ordering = compare(a, b, sort_by);
        match sort_order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    let total = matches.len() as u64;
    let offset = (page as usize - 1).saturating_mul(limit as usize);
    let products = matches
        .into_iter()
        .skip(offset)
        .take(limit as usize)
        .cloned()
        .collect();

    PageResult {
        products,
        pagination: Pagination::new(page, limit, total),
    }
}

pub fn list_categories(state: &AppState) -> Vec<Category> {
    state.store.categories().to_vec()
}

fn matches_search(product: &ProductSummary, needle: &str) -> bool {
    product.name.to_lowercase().contains(needle)
        || product
            .brand
            .as_deref()
            .is_some_and(|b| b.to_lowercase().contains(needle))
}

fn compare(a: &ProductSummary, b: &ProductSummary, sort_by: SortBy) -> Ordering {
    match sort_by {
        SortBy::CreatedAt => a.created_at.cmp(&b.created_at),
        SortBy::Price => a.price.total_cmp(&b.price),
        SortBy::Rating => a
            .rating
            .unwrap_or(0.0)
            .total_cmp(&b.rating.unwrap_or(0.0)),
        SortBy::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
    }
    .then_with(|| a.id.cmp(&b.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_catalog;

    #[test]
    fn filters_sorts_and_paginates() {
        let state = AppState::new(seed_catalog());
        let query = ProductQuery {
            category: Some("Cameras".into()),
            sort_by: Some(SortBy::Price),
            sort_order: Some(SortOrder::Asc),
            ..Default::default()
        };
        let page = list_products(&state, &query);
        assert!(!page.products.is_empty());
        assert!(page.products.iter().all(|p| p.category == "Cameras"));
        assert!(page.products.windows(2).all(|w| w[0].price <= w[1].price));
        assert_eq!(page.pagination.current_page, 1);
    }

    #[test]
    fn page_past_the_end_is_empty_but_keeps_totals() {
        let state = AppState::new(seed_catalog());
        let query = ProductQuery {
            page: Some(99),
            ..Default::default()
        };
        let page = list_products(&state, &query);
        assert!(page.products.is_empty());
        assert_eq!(page.pagination.total_products, state.store.products().len() as u64);
        assert!(!page.pagination.has_next_page);
    }
}
