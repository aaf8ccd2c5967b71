//! Storefront catalog browsing.
//!
//! The core is [`controller::CatalogController`]: filter state, query
//! building and epoch-tagged fetch coordination against a paginated catalog
//! API. The `routes`, `services` and `store` modules make up a small
//! in-memory reference server speaking the same API.

pub mod actions;
pub mod api;
pub mod config;
pub mod controller;
pub mod coordinator;
pub mod error;
pub mod filters;
pub mod models;
pub mod query;
pub mod response;
pub mod routes;
pub mod seed;
pub mod services;
pub mod state;
pub mod store;
pub mod view;

pub use controller::CatalogController;
pub use error::{ClientError, ClientResult};
