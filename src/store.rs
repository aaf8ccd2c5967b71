use tokio::sync::Mutex;

use crate::models::{CartLine, Category, ProductSummary};

/// In-memory backing data for the reference catalog server.
#[derive(Debug, Default)]
pub struct CatalogStore {
    categories: Vec<Category>,
    products: Vec<ProductSummary>,
    cart: Mutex<Vec<CartLine>>,
}

impl CatalogStore {
    pub fn new(categories: Vec<Category>, products: Vec<ProductSummary>) -> Self {
        Self {
            categories,
            products,
            cart: Mutex::new(Vec::new()),
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn products(&self) -> &[ProductSummary] {
        &self.products
    }

    pub fn find_product(&self, id: &str) -> Option<&ProductSummary> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn cart(&self) -> &Mutex<Vec<CartLine>> {
        &self.cart
    }
}
