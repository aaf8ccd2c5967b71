//! Render-ready snapshot of the catalog controller.

use crate::{
    actions::ViewMode,
    coordinator::FetchCoordinator,
    filters::{FilterState, PAGE_SIZE},
    models::{Category, Pagination, ProductSummary},
};

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryEntry {
    pub name: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView {
    pub heading: String,
    pub categories: Vec<CategoryEntry>,
    pub products: Vec<ProductSummary>,
    pub loading: bool,
    pub error: Option<String>,
    pub pagination: Pagination,
    pub view_mode: ViewMode,
}

impl CatalogView {
    pub fn build(
        filters: &FilterState,
        categories: &[Category],
        fetch: &FetchCoordinator,
        view_mode: ViewMode,
    ) -> Self {
        let heading = if filters.is_all_categories() {
            "All Products".to_string()
        } else {
            filters.category.clone()
        };

        let categories = categories
            .iter()
            .map(|c| CategoryEntry {
                name: c.name.clone(),
                active: c.name == filters.category,
            })
            .collect();

        let page = fetch.current();
        Self {
            heading,
            categories,
            products: visible_products(&page.products, filters.hide_out_of_stock),
            loading: fetch.is_loading(),
            error: fetch.error().map(str::to_string),
            pagination: page.pagination.clone(),
            view_mode,
        }
    }

    /// Page buttons are only shown when there is more than one page.
    pub fn page_numbers(&self) -> Vec<u32> {
        if self.pagination.total_pages <= 1 {
            return Vec::new();
        }
        (1..=self.pagination.total_pages).collect()
    }

    pub fn results_summary(&self) -> Option<String> {
        self.pagination
            .results_range(PAGE_SIZE)
            .map(|(first, last, total)| format!("Showing {first}-{last} of {total} products"))
    }
}

/// Applies the out-of-stock display filter to an already fetched page.
pub fn visible_products(products: &[ProductSummary], hide_out_of_stock: bool) -> Vec<ProductSummary> {
    products
        .iter()
        .filter(|p| !hide_out_of_stock || p.in_stock())
        .cloned()
        .collect()
}
