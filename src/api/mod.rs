//! Collaborators the catalog controller talks to.
//!
//! The controller only sees these traits; [`HttpCatalogClient`] is the
//! network implementation.

use async_trait::async_trait;

use crate::{
    error::ClientResult,
    models::{Category, PageResult},
    query::QueryParams,
};

pub mod http;
pub mod payload;

pub use http::HttpCatalogClient;

#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn fetch_categories(&self) -> ClientResult<Vec<Category>>;

    /// Malformed payloads come back as an empty page, not an error.
    async fn fetch_products(&self, query: &QueryParams) -> ClientResult<PageResult>;
}

#[async_trait]
pub trait CartApi: Send + Sync {
    async fn add_to_cart(&self, product_id: &str, quantity: u32) -> ClientResult<()>;
}
