//! # API crate — data model, remote facade, and page-state logic for StockDeck
//!
//! This crate is the UI-independent core of the dashboard. Everything the
//! page views orchestrate lives here, fully unit-testable without a
//! renderer.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Data transfer types (`User`, `Product`, `PaginatedResponse`, `SortConfig`, …) and sort semantics |
//! | [`client`] | The [`ProductStore`] capability trait and the [`MockApi`] stand-in backend with simulated latency |
//! | [`session`] | The [`Session`] state holder (Anonymous ⇄ Authenticated) |
//! | [`list`] | Pure list-page logic: [`Pager`] bounds arithmetic and the [`ViewMode`] toggle |
//! | [`form`] | The product form schema: [`ProductForm`] validation into [`ProductInput`] with per-field errors |
//! | [`error`] | The [`ApiError`] failure taxonomy |
//! | [`config`] | [`StockdeckConfig`] — TOML-backed page-size and mock knobs |
//!
//! ## Facade functions
//!
//! The free functions below (`login`, `fetch_products`, `fetch_product_by_id`,
//! `create_product`, `update_product`) are what the views call. They delegate
//! to a lazily initialized default [`MockApi`]; swapping in a real backend
//! means swapping the [`ProductStore`] implementation behind them.

use std::sync::OnceLock;

pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod list;
pub mod models;
pub mod session;

pub use client::{MockApi, ProductStore, MOCK_TOKEN};
pub use config::{ListConfig, MockConfig, StockdeckConfig};
pub use error::ApiError;
pub use form::{FieldErrors, ProductForm, NAME_MAX_LEN, NAME_MIN_LEN};
pub use list::{Pager, ViewMode};
pub use models::{
    AuthResponse, Category, PaginatedResponse, Product, ProductInput, ProductPatch, SortColumn,
    SortConfig, SortDirection, User,
};
pub use session::Session;

static DEFAULT_API: OnceLock<MockApi> = OnceLock::new();

fn default_api() -> &'static MockApi {
    DEFAULT_API.get_or_init(MockApi::new)
}

/// Authenticate with the backend. The mock accepts any credential pair.
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    default_api().login(email, password).await
}

/// Fetch one page of products, optionally sorted.
pub async fn fetch_products(
    page: u32,
    limit: u32,
    sort: Option<SortConfig>,
) -> Result<PaginatedResponse<Product>, ApiError> {
    default_api().list(page, limit, sort).await
}

/// Fetch a single product by id.
pub async fn fetch_product_by_id(id: u64) -> Result<Product, ApiError> {
    default_api().get_by_id(id).await
}

/// Create a product from validated form input.
pub async fn create_product(input: ProductInput) -> Result<Product, ApiError> {
    default_api().create(input).await
}

/// Apply a partial update to the product with the given id.
pub async fn update_product(id: u64, patch: ProductPatch) -> Result<Product, ApiError> {
    default_api().update(id, patch).await
}
