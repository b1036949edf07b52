//! # Product Commands
//!
//! Tauri commands for the product catalog.
//!
//! ## Fetch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Fetch Flow                                   │
//! │                                                                         │
//! │  Products page mounts                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  invoke('fetch_products')                                              │
//! │       │                                                                 │
//! │       ├──► "catalog:changed" { status: 'pending' }   (spinner)         │
//! │       │                                                                 │
//! │       ▼  simulated latency                                              │
//! │  seed list replaces the catalog                                         │
//! │       │                                                                 │
//! │       ├──► "catalog:changed" { status: 'succeeded', products }         │
//! │       ▼                                                                 │
//! │  Return Vec<Product> (or FETCH_FAILED)                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Instant;

use retailer_core::validation::validate_stock_quantity;
use retailer_core::{NewProduct, Product};
use retailer_store::ProductCatalog;
use tauri::State;
use tracing::{debug, info};

use crate::error::ApiError;

/// Loads the catalog.
///
/// ## Returns
/// The seed list, which replaces anything added locally.
#[tauri::command]
pub async fn fetch_products(catalog: State<'_, ProductCatalog>) -> Result<Vec<Product>, ApiError> {
    let start = Instant::now();
    debug!("fetch_products command");

    let products = catalog.fetch().await?;

    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        count = products.len(),
        "fetch_products complete"
    );
    Ok(products)
}

/// Lists products, optionally filtered by name or category.
#[tauri::command]
pub fn list_products(
    catalog: State<'_, ProductCatalog>,
    query: Option<String>,
) -> Result<Vec<Product>, ApiError> {
    debug!(?query, "list_products command");
    match query {
        Some(query) => Ok(catalog.search(&query)?),
        None => Ok(catalog.list()),
    }
}

/// Adds a product and returns it with its new id.
#[tauri::command]
pub fn add_product(
    catalog: State<'_, ProductCatalog>,
    input: NewProduct,
) -> Result<Product, ApiError> {
    debug!(name = %input.name, "add_product command");
    Ok(catalog.add(input)?)
}

/// Replaces a product.
///
/// ## Returns
/// `false` when no product has that id (nothing changes).
#[tauri::command]
pub fn update_product(
    catalog: State<'_, ProductCatalog>,
    product: Product,
) -> Result<bool, ApiError> {
    debug!(id = %product.id, "update_product command");
    Ok(catalog.update(product)?)
}

/// Removes a product. Returns `false` when the id is unknown.
#[tauri::command]
pub fn delete_product(catalog: State<'_, ProductCatalog>, id: String) -> bool {
    debug!(id = %id, "delete_product command");
    catalog.delete(&id)
}

/// Sets a product's stock count.
///
/// ## Arguments
/// * `quantity` - New count; negative values are rejected
///
/// ## Returns
/// `false` when the id is unknown.
#[tauri::command]
pub fn set_stock(
    catalog: State<'_, ProductCatalog>,
    id: String,
    quantity: i64,
) -> Result<bool, ApiError> {
    debug!(id = %id, quantity, "set_stock command");
    let quantity = validate_stock_quantity(quantity)?;
    Ok(catalog.set_stock(&id, quantity))
}
