use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, header};
use uuid::Uuid;

use super::{CartApi, CatalogApi, payload::normalize_products};
use crate::{
    config::ClientConfig,
    error::{ClientError, ClientResult},
    models::{CartLine, Category, PageResult},
    query::{QueryParams, to_query_string},
};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// reqwest-backed catalog and cart client.
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpCatalogClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.auth_token.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn products_url(&self, query: &QueryParams) -> String {
        format!("{}/api/products?{}", self.base_url, to_query_string(query))
    }

    fn prepare(&self, req: RequestBuilder) -> RequestBuilder {
        let req = req.header(REQUEST_ID_HEADER, Uuid::new_v4().to_string());
        // Only the configured token; a 401 comes back as a plain status error.
        match &self.token {
            Some(token) => req.header(header::AUTHORIZATION, format!("Bearer {token}")),
            None => req,
        }
    }

    async fn check_status(response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ClientError::Status { status, body })
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogClient {
    async fn fetch_categories(&self) -> ClientResult<Vec<Category>> {
        let url = format!("{}/api/categories", self.base_url);
        let response = self.prepare(self.client.get(&url)).send().await?;
        let response = Self::check_status(response).await?;
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|err| ClientError::InvalidResponse(err.to_string()))
    }

    async fn fetch_products(&self, query: &QueryParams) -> ClientResult<PageResult> {
        let url = self.products_url(query);
        tracing::debug!(%url, "fetching products");
        let response = self.prepare(self.client.get(&url)).send().await?;
        let response = Self::check_status(response).await?;
        let text = response.text().await?;

        match serde_json::from_str(&text) {
            Ok(body) => Ok(normalize_products(body)),
            Err(err) => {
                tracing::warn!(error = %err, "catalog body is not JSON, showing empty page");
                Ok(PageResult::default())
            }
        }
    }
}

#[async_trait]
impl CartApi for HttpCatalogClient {
    async fn add_to_cart(&self, product_id: &str, quantity: u32) -> ClientResult<()> {
        let url = format!("{}/api/cart", self.base_url);
        let body = CartLine {
            product_id: product_id.to_string(),
            quantity,
        };
        let response = self
            .prepare(self.client.post(&url).json(&body))
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }
}
