use std::sync::Arc;

use crate::store::CatalogStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<CatalogStore>,
}

impl AppState {
    pub fn new(store: CatalogStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
