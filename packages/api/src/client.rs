//! # Remote facade — the product backend behind a capability trait
//!
//! [`ProductStore`] is the sole "network" boundary of the application: one
//! capability per backend operation, so a real HTTP client can replace the
//! mock without touching any page logic. [`MockApi`] is the only
//! implementation today; it simulates latency and fabricates data instead
//! of talking to a server.
//!
//! The mock never fails, but every operation returns `Result` so failure
//! propagation is already in place for a production client.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{Duration, Utc};
use rand::Rng;

use crate::config::MockConfig;
use crate::error::ApiError;
use crate::models::{
    AuthResponse, Category, PaginatedResponse, Product, ProductInput, ProductPatch, SortConfig,
    User,
};

/// The mock session token. Any credential pair receives it.
pub const MOCK_TOKEN: &str = "mock-jwt-token";

/// Spread of randomized `created_at` timestamps, matching roughly the last
/// 115 days.
const CREATED_AT_SPREAD_MS: i64 = 10_000_000_000;

/// Async interface over the product backend.
pub trait ProductStore {
    fn list(
        &self,
        page: u32,
        limit: u32,
        sort: Option<SortConfig>,
    ) -> impl Future<Output = Result<PaginatedResponse<Product>, ApiError>>;
    fn get_by_id(&self, id: u64) -> impl Future<Output = Result<Product, ApiError>>;
    fn create(&self, input: ProductInput) -> impl Future<Output = Result<Product, ApiError>>;
    fn update(
        &self,
        id: u64,
        patch: ProductPatch,
    ) -> impl Future<Output = Result<Product, ApiError>>;
}

/// Sleep for the simulated round-trip delay.
async fn simulate_latency(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(std::time::Duration::from_millis(ms)).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

/// In-memory stand-in for a real backend.
///
/// Data is regenerated randomly per request; nothing is persisted. A
/// subsequent fetch will not reflect an earlier create or update.
#[derive(Clone, Debug)]
pub struct MockApi {
    config: MockConfig,
    next_id: Arc<AtomicU64>,
}

impl Default for MockApi {
    fn default() -> Self {
        Self::with_config(MockConfig::default())
    }
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MockConfig) -> Self {
        // Created ids start past the fixed total so they never collide with
        // ids handed out by `list`.
        let next_id = Arc::new(AtomicU64::new(u64::from(config.total_products) + 1));
        Self { config, next_id }
    }

    /// Authenticate. The mock accepts any credential pair and returns a
    /// static admin user carrying the caller's email.
    pub async fn login(&self, email: &str, _password: &str) -> Result<AuthResponse, ApiError> {
        simulate_latency(self.config.latency_ms).await;
        Ok(AuthResponse {
            token: MOCK_TOKEN.to_string(),
            user: User {
                id: 1,
                email: email.to_string(),
                name: "John Doe".to_string(),
                role: "admin".to_string(),
            },
        })
    }

    fn random_product(id: u64, spread_created_at: bool) -> Product {
        let mut rng = rand::thread_rng();
        let created_at = if spread_created_at {
            Utc::now() - Duration::milliseconds(rng.gen_range(0..CREATED_AT_SPREAD_MS))
        } else {
            Utc::now()
        };
        Product {
            id,
            name: format!("Product {id}"),
            price: rng.gen_range(0..1000) as f64,
            category: Category::ALL[rng.gen_range(0..Category::ALL.len())],
            stock: rng.gen_range(0..100),
            created_at,
        }
    }
}

impl ProductStore for MockApi {
    /// Generate one page of products with ids `page*limit + 1 ..=
    /// page*limit + limit`. The reported total is fixed regardless of page.
    async fn list(
        &self,
        page: u32,
        limit: u32,
        sort: Option<SortConfig>,
    ) -> Result<PaginatedResponse<Product>, ApiError> {
        simulate_latency(self.config.latency_ms).await;
        let first = u64::from(page) * u64::from(limit) + 1;
        let mut data: Vec<Product> = (0..u64::from(limit))
            .map(|i| Self::random_product(first + i, true))
            .collect();
        if let Some(sort) = sort {
            data.sort_by(|a, b| sort.ordering(a, b));
        }
        Ok(PaginatedResponse {
            data,
            total: self.config.total_products,
            page,
            limit,
        })
    }

    /// Return a freshly randomized product carrying the requested id. The
    /// mock has no storage to look up.
    async fn get_by_id(&self, id: u64) -> Result<Product, ApiError> {
        simulate_latency(self.config.latency_ms).await;
        Ok(Self::random_product(id, false))
    }

    async fn create(&self, input: ProductInput) -> Result<Product, ApiError> {
        simulate_latency(self.config.latency_ms).await;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        Ok(Product {
            id,
            name: input.name,
            price: input.price,
            category: input.category,
            stock: input.stock,
            created_at: Utc::now(),
        })
    }

    /// Merge the patch onto a placeholder with the given id and a fresh
    /// timestamp. Not persisted anywhere.
    async fn update(&self, id: u64, patch: ProductPatch) -> Result<Product, ApiError> {
        simulate_latency(self.config.latency_ms).await;
        let mut product = Product::placeholder(id);
        patch.apply_to(&mut product);
        product.created_at = Utc::now();
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SortColumn, SortDirection};

    fn fast_api() -> MockApi {
        MockApi::with_config(MockConfig {
            latency_ms: 0,
            total_products: 100,
        })
    }

    #[tokio::test]
    async fn test_login_accepts_any_credentials() {
        let api = fast_api();
        let resp = api.login("someone@example.com", "whatever").await.unwrap();
        assert_eq!(resp.token, MOCK_TOKEN);
        assert_eq!(resp.user.name, "John Doe");
        assert_eq!(resp.user.role, "admin");
        assert_eq!(resp.user.email, "someone@example.com");
    }

    #[tokio::test]
    async fn test_list_returns_exactly_limit_items_with_sequential_ids() {
        let api = fast_api();
        for page in [0u32, 1, 7] {
            let resp = api.list(page, 10, None).await.unwrap();
            assert_eq!(resp.data.len(), 10);
            assert_eq!(resp.total, 100);
            assert_eq!(resp.page, page);
            let expected: Vec<u64> = (1..=10).map(|i| u64::from(page) * 10 + i).collect();
            let got: Vec<u64> = resp.data.iter().map(|p| p.id).collect();
            assert_eq!(got, expected);
        }
    }

    #[tokio::test]
    async fn test_list_applies_numeric_price_sort() {
        let api = fast_api();
        let sort = SortConfig {
            column: SortColumn::Price,
            direction: SortDirection::Ascending,
        };
        let resp = api.list(0, 25, Some(sort)).await.unwrap();
        assert!(resp.data.windows(2).all(|w| w[0].price <= w[1].price));

        let desc = SortConfig {
            direction: SortDirection::Descending,
            ..sort
        };
        let resp = api.list(0, 25, Some(desc)).await.unwrap();
        assert!(resp.data.windows(2).all(|w| w[0].price >= w[1].price));
    }

    #[tokio::test]
    async fn test_get_by_id_carries_requested_id() {
        let api = fast_api();
        let product = api.get_by_id(42).await.unwrap();
        assert_eq!(product.id, 42);
        assert_eq!(product.name, "Product 42");
        assert!(product.price >= 0.0 && product.price < 1000.0);
        assert!(product.stock < 100);
    }

    #[tokio::test]
    async fn test_create_assigns_fresh_ids_past_fixed_total() {
        let api = fast_api();
        let input = ProductInput {
            name: "Gadget".to_string(),
            price: 19.5,
            category: Category::Electronics,
            stock: 4,
        };
        let first = api.create(input.clone()).await.unwrap();
        let second = api.create(input.clone()).await.unwrap();
        assert_eq!(first.id, 101);
        assert_eq!(second.id, 102);
        assert_eq!(first.name, "Gadget");
        assert_eq!(first.stock, 4);
    }

    #[tokio::test]
    async fn test_update_merges_patch_and_refreshes_timestamp() {
        let api = fast_api();
        let before = Utc::now();
        let patch = ProductPatch {
            name: Some("Renamed".to_string()),
            stock: Some(7),
            ..Default::default()
        };
        let product = api.update(3, patch).await.unwrap();
        assert_eq!(product.id, 3);
        assert_eq!(product.name, "Renamed");
        assert_eq!(product.stock, 7);
        assert!(product.created_at >= before);
    }
}
