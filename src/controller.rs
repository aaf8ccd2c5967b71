//! Catalog browsing controller.
//!
//! [`CatalogController`] owns the filter state, the one-time category list
//! and the [`FetchCoordinator`]. Each user action maps to one method which
//! updates the filters and, where the browsing contract says so, triggers a
//! product fetch.
//!
//! Requests (products and the category list) run on spawned tasks and
//! report back over one channel. The owner of the controller pulls them with
//! [`CatalogController::next_event`] or [`CatalogController::next_completion`],
//! so every state mutation happens on the owner's task. Completions from
//! superseded product requests are dropped by the coordinator.

use std::{future::Future, sync::Arc};

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::{
    actions::{Navigation, Notice, ViewMode},
    api::{CartApi, CatalogApi, HttpCatalogClient},
    coordinator::{Epoch, FetchCoordinator, FetchOutcome},
    error::{ClientError, ClientResult},
    filters::{FilterState, SortBy, SortOrder},
    models::{Category, PageResult, ProductSummary},
    query::{build_query, to_query_string},
    view::CatalogView,
};

/// A finished request as delivered to the controller's task.
#[derive(Debug)]
enum Completion {
    Products {
        epoch: Epoch,
        result: ClientResult<PageResult>,
    },
    Categories(ClientResult<Vec<Category>>),
}

/// What applying one completion changed.
#[derive(Debug, Clone, PartialEq)]
pub enum ControllerEvent {
    Products(FetchOutcome),
    Categories { loaded: bool },
}

/// # Panics
///
/// Methods that issue a request (`mount`, `load_categories`, every
/// fetch-triggering setter, `go_to_page`, `refresh`) spawn onto the current
/// Tokio runtime and panic when called outside one.
pub struct CatalogController {
    api: Arc<dyn CatalogApi>,
    cart: Arc<dyn CartApi>,
    filters: FilterState,
    categories: Vec<Category>,
    categories_loaded: bool,
    categories_pending: bool,
    view_mode: ViewMode,
    fetch: FetchCoordinator,
    in_flight: usize,
    completions_tx: UnboundedSender<Completion>,
    completions_rx: UnboundedReceiver<Completion>,
}

impl CatalogController {
    pub fn new(api: Arc<dyn CatalogApi>, cart: Arc<dyn CartApi>) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            api,
            cart,
            filters: FilterState::default(),
            categories: Vec::new(),
            categories_loaded: false,
            categories_pending: false,
            view_mode: ViewMode::default(),
            fetch: FetchCoordinator::new(),
            in_flight: 0,
            completions_tx,
            completions_rx,
        }
    }

    pub fn with_http_client(client: HttpCatalogClient) -> Self {
        let client = Arc::new(client);
        Self::new(client.clone(), client)
    }

    /// Issues the first product fetch and requests the category list.
    /// Returns immediately; both answers arrive through [`Self::next_event`].
    pub fn mount(&mut self) -> Epoch {
        let epoch = self.trigger_fetch();
        self.load_categories();
        epoch
    }

    /// Requests the category list unless it is already loaded or on its way.
    /// Returns whether a request was issued. A failed load may be retried.
    pub fn load_categories(&mut self) -> bool {
        if self.categories_loaded || self.categories_pending {
            return false;
        }
        self.categories_pending = true;
        let api = Arc::clone(&self.api);
        self.spawn_request(
            async move { api.fetch_categories().await },
            Completion::Categories,
        );
        true
    }

    pub fn set_category(&mut self, name: impl Into<String>) -> Epoch {
        self.filters.set_category(name);
        self.trigger_fetch()
    }

    /// Typing alone never fetches.
    pub fn set_search_term(&mut self, text: impl Into<String>) {
        self.filters.set_search_term(text);
    }

    pub fn submit_search(&mut self) -> Epoch {
        self.filters.reset_page();
        self.trigger_fetch()
    }

    /// Re-sorting keeps the current page window.
    pub fn set_sort_by(&mut self, key: SortBy) -> Epoch {
        self.filters.set_sort_by(key);
        self.trigger_fetch()
    }

    pub fn set_sort_order(&mut self, order: SortOrder) -> Epoch {
        self.filters.set_sort_order(order);
        self.trigger_fetch()
    }

    pub fn set_price_range(&mut self, min: Option<f64>, max: Option<f64>) -> ClientResult<()> {
        self.filters.set_price_range(min, max)
    }

    pub fn apply_price_filter(&mut self) -> Epoch {
        self.filters.reset_page();
        self.trigger_fetch()
    }

    pub fn set_hide_out_of_stock(&mut self, hide: bool) {
        self.filters.set_hide_out_of_stock(hide);
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// Returns `None` without touching anything when `page` is outside
    /// `1..=total_pages` of the page on display.
    pub fn go_to_page(&mut self, page: u32) -> Option<Epoch> {
        let total_pages = self.fetch.current().pagination.total_pages;
        if page == 0 || page > total_pages {
            tracing::debug!(page, total_pages, "ignoring out of range page");
            return None;
        }
        if let Err(err) = self.filters.set_page(page) {
            tracing::debug!(error = %err, "rejected page");
            return None;
        }
        Some(self.trigger_fetch())
    }

    pub fn next_page(&mut self) -> Option<Epoch> {
        let pagination = &self.fetch.current().pagination;
        if !pagination.has_next_page {
            return None;
        }
        let page = pagination.current_page.saturating_add(1);
        self.go_to_page(page)
    }

    pub fn previous_page(&mut self) -> Option<Epoch> {
        let pagination = &self.fetch.current().pagination;
        if !pagination.has_prev_page {
            return None;
        }
        let page = pagination.current_page.saturating_sub(1);
        self.go_to_page(page)
    }

    /// Re-issues the current query. This is the only way to retry.
    pub fn refresh(&mut self) -> Epoch {
        self.trigger_fetch()
    }

    fn trigger_fetch(&mut self) -> Epoch {
        let query = build_query(&self.filters);
        let epoch = self.fetch.begin();
        tracing::debug!(%epoch, query = %to_query_string(&query), "triggering product fetch");

        let api = Arc::clone(&self.api);
        self.in_flight += 1;
        self.spawn_request(
            async move { api.fetch_products(&query).await },
            move |result| Completion::Products { epoch, result },
        );
        epoch
    }

    /// Runs `request` on its own task and always reports back, even when the
    /// request panics, so pending counters cannot get stuck.
    fn spawn_request<T, F, W>(&self, request: F, wrap: W)
    where
        T: Send + 'static,
        F: Future<Output = ClientResult<T>> + Send + 'static,
        W: FnOnce(ClientResult<T>) -> Completion + Send + 'static,
    {
        let tx = self.completions_tx.clone();
        tokio::spawn(async move {
            let result = match tokio::spawn(request).await {
                Ok(result) => result,
                Err(err) => Err(ClientError::Task(err)),
            };
            // The receiver lives as long as the controller.
            let _ = tx.send(wrap(result));
        });
    }

    /// Requests still expected to report back, products and categories.
    pub fn pending(&self) -> usize {
        self.in_flight + usize::from(self.categories_pending)
    }

    /// Waits for the next finished request of either kind and applies it.
    /// Returns `None` right away when nothing is pending.
    pub async fn next_event(&mut self) -> Option<ControllerEvent> {
        if self.pending() == 0 {
            return None;
        }
        let completion = self.completions_rx.recv().await?;
        Some(self.apply(completion))
    }

    fn apply(&mut self, completion: Completion) -> ControllerEvent {
        match completion {
            Completion::Products { epoch, result } => {
                self.in_flight -= 1;
                ControllerEvent::Products(self.fetch.resolve(epoch, result))
            }
            Completion::Categories(result) => {
                self.categories_pending = false;
                match result {
                    Ok(categories) => {
                        tracing::debug!(count = categories.len(), "loaded categories");
                        self.categories = categories;
                        self.categories_loaded = true;
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "failed to load categories");
                    }
                }
                ControllerEvent::Categories {
                    loaded: self.categories_loaded,
                }
            }
        }
    }

    /// Waits for the next finished product request and applies it. Category
    /// answers arriving in between are applied on the way. Returns `None`
    /// right away when no product request is in flight.
    pub async fn next_completion(&mut self) -> Option<FetchOutcome> {
        while self.in_flight > 0 {
            match self.next_event().await? {
                ControllerEvent::Products(outcome) => return Some(outcome),
                ControllerEvent::Categories { .. } => continue,
            }
        }
        None
    }

    /// Drains completions until the latest product request has resolved and
    /// the category list request, if any, has answered.
    pub async fn settle(&mut self) -> Vec<FetchOutcome> {
        let mut outcomes = Vec::new();
        while self.fetch.is_loading() || self.categories_pending {
            match self.next_event().await {
                Some(ControllerEvent::Products(outcome)) => outcomes.push(outcome),
                Some(ControllerEvent::Categories { .. }) => {}
                None => break,
            }
        }
        outcomes
    }

    pub async fn add_to_cart(&self, product_id: &str, quantity: u32) -> Notice {
        match self.cart.add_to_cart(product_id, quantity).await {
            Ok(()) => {
                tracing::info!(product_id, quantity, "added to cart");
                Notice::Success("Added to cart!".to_string())
            }
            Err(err) => {
                tracing::warn!(product_id, error = %err, "add to cart failed");
                Notice::Error("Failed to add to cart.".to_string())
            }
        }
    }

    pub fn open_product(&self, product_id: &str) -> Navigation {
        Navigation::ProductDetail {
            id: product_id.to_string(),
        }
    }

    pub fn buy_now(&self, product: &ProductSummary) -> Navigation {
        Navigation::Checkout {
            product: Box::new(product.clone()),
        }
    }

    pub fn view(&self) -> CatalogView {
        CatalogView::build(&self.filters, &self.categories, &self.fetch, self.view_mode)
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn page_result(&self) -> &PageResult {
        self.fetch.current()
    }

    pub fn is_loading(&self) -> bool {
        self.fetch.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.fetch.error()
    }

    pub fn latest_epoch(&self) -> Epoch {
        self.fetch.latest()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}
