//! # Product Catalog Store
//!
//! In-memory product list with a simulated asynchronous fetch.
//!
//! ## Fetch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  fetch()                                                                │
//! │    │ status = pending                                                   │
//! │    ▼                                                                    │
//! │  sleep(fetch_delay)   ◄── lock NOT held; add/update/delete still work  │
//! │    │                                                                    │
//! │    ├── failure configured? ──► status = failed, error kept             │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  products = seed list (replaces everything, including local edits)     │
//! │  status = succeeded                                                     │
//! │                                                                         │
//! │  Two fetches in flight both complete; the later one wins.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Mutations on an id that is not in the list are silent no-ops; they
//! return `false` and emit nothing.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use retailer_core::product::{filter_products, seed_products, FetchStatus};
use retailer_core::validation::validate_search_query;
use retailer_core::{NewProduct, Product};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::events::DashboardEventEmitter;

/// Product list plus fetch progress.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot {
    pub products: Vec<Product>,
    pub status: FetchStatus,
    pub error: Option<String>,
}

/// Product catalog store.
///
/// Cheap to clone; clones share the same list.
#[derive(Clone)]
pub struct ProductCatalog {
    state: Arc<RwLock<CatalogSnapshot>>,
    fetch_delay: Duration,
    fetch_failure: Option<String>,
    emitter: Arc<dyn DashboardEventEmitter>,
}

impl ProductCatalog {
    /// Creates an empty catalog in the `idle` state.
    pub fn new(
        fetch_delay: Duration,
        fetch_failure: Option<String>,
        emitter: Arc<dyn DashboardEventEmitter>,
    ) -> Self {
        ProductCatalog {
            state: Arc::new(RwLock::new(CatalogSnapshot::default())),
            fetch_delay,
            fetch_failure,
            emitter,
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, CatalogSnapshot> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CatalogSnapshot> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` under the write lock, then emits the new snapshot if `f`
    /// reports a change.
    fn mutate<R>(&self, f: impl FnOnce(&mut CatalogSnapshot) -> (bool, R)) -> R {
        let (result, snapshot) = {
            let mut state = self.write();
            let (changed, result) = f(&mut state);
            (result, changed.then(|| state.clone()))
        };
        if let Some(snapshot) = snapshot {
            self.emitter.emit_catalog(&snapshot);
        }
        result
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Copy of the current list and status.
    pub fn snapshot(&self) -> CatalogSnapshot {
        self.read().clone()
    }

    /// Copy of the current list.
    pub fn list(&self) -> Vec<Product> {
        self.read().products.clone()
    }

    pub fn status(&self) -> FetchStatus {
        self.read().status
    }

    /// Products whose name or category contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> StoreResult<Vec<Product>> {
        let query = validate_search_query(query)?;
        let state = self.read();
        Ok(filter_products(&state.products, &query)
            .into_iter()
            .cloned()
            .collect())
    }

    // =========================================================================
    // Fetch
    // =========================================================================

    /// Loads the catalog after the configured delay.
    ///
    /// ## Returns
    /// * `Ok(products)` - The list now held by the store
    /// * `Err(StoreError::FetchFailed)` - Status is `failed`, message kept
    pub async fn fetch(&self) -> StoreResult<Vec<Product>> {
        info!(delay_ms = self.fetch_delay.as_millis() as u64, "Fetching products");

        self.mutate(|state| {
            state.status = FetchStatus::Pending;
            state.error = None;
            (true, ())
        });

        tokio::time::sleep(self.fetch_delay).await;

        if let Some(message) = &self.fetch_failure {
            warn!(error = %message, "Product fetch failed");
            self.mutate(|state| {
                state.status = FetchStatus::Failed;
                state.error = Some(message.clone());
                (true, ())
            });
            return Err(StoreError::FetchFailed(message.clone()));
        }

        let products = seed_products();
        self.mutate(|state| {
            state.products = products.clone();
            state.status = FetchStatus::Succeeded;
            state.error = None;
            (true, ())
        });

        info!(count = products.len(), "Products fetched");
        Ok(products)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Validates and appends a product with a fresh UUID.
    pub fn add(&self, input: NewProduct) -> StoreResult<Product> {
        input.validate()?;
        let product = input.into_product(Uuid::new_v4().to_string());

        self.mutate(|state| {
            state.products.push(product.clone());
            (true, ())
        });

        debug!(id = %product.id, name = %product.name, "Product added");
        Ok(product)
    }

    /// Replaces the product with the same id.
    ///
    /// The id is looked up before the body is validated, so a missing id is
    /// a no-op even when the body would be rejected.
    ///
    /// ## Returns
    /// * `Ok(true)` - Replaced
    /// * `Ok(false)` - No product has that id; list unchanged
    /// * `Err(StoreError::Core)` - The id exists but the body is invalid
    pub fn update(&self, product: Product) -> StoreResult<bool> {
        let id = product.id.clone();

        let found = self.mutate(|state| {
            match state.products.iter_mut().find(|p| p.id == product.id) {
                Some(slot) => match product.validate() {
                    Ok(()) => {
                        *slot = product;
                        (true, Ok(true))
                    }
                    Err(e) => (false, Err(e)),
                },
                None => (false, Ok(false)),
            }
        })?;

        debug!(%id, found, "Product update");
        Ok(found)
    }

    /// Removes the product with this id. Returns whether one was removed.
    pub fn delete(&self, id: &str) -> bool {
        let removed = self.mutate(|state| {
            let before = state.products.len();
            state.products.retain(|p| p.id != id);
            let removed = state.products.len() != before;
            (removed, removed)
        });

        debug!(id, removed, "Product delete");
        removed
    }

    /// Sets the stock count of the product with this id. Returns whether
    /// one was found.
    pub fn set_stock(&self, id: &str, quantity: u32) -> bool {
        let found = self.mutate(|state| {
            match state.products.iter_mut().find(|p| p.id == id) {
                Some(product) => {
                    product.stock_quantity = quantity;
                    (true, true)
                }
                None => (false, false),
            }
        });

        debug!(id, quantity, found, "Product stock update");
        found
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
