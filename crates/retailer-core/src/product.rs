//! # Product Model
//!
//! Product records, the seed catalog, and the pure helpers the product page
//! uses (search filter, stock badges).
//!
//! ## Product Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  NewProduct (form input, no id)                                        │
//! │       │ validate()                                                      │
//! │       ▼                                                                 │
//! │  into_product(uuid) ──► Product ──► catalog list                       │
//! │                                        │                                │
//! │                   update / set_stock ◄─┤                                │
//! │                               delete ◄─┘                                │
//! │                                                                         │
//! │  fetch() replaces the whole list with seed_products()                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreResult;
use crate::money::Money;
use crate::validation::{
    validate_category, validate_description, validate_price_cents, validate_product_name,
};

/// Image used by the seed catalog.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/150";

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
///
/// ## Fields
/// - `id`: unique within the list; seed products use "1".."4", products
///   added at runtime get a UUID v4
/// - `price_cents`: never negative
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub category: String,
    pub stock_quantity: u32,
    pub image_url: Option<String>,
}

impl Product {
    /// Price as [`Money`].
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Badge level for the current stock count.
    #[inline]
    pub fn stock_level(&self) -> StockLevel {
        StockLevel::for_quantity(self.stock_quantity)
    }

    /// Checks the same rules as [`NewProduct::validate`].
    pub fn validate(&self) -> CoreResult<()> {
        validate_fields(&self.name, &self.description, self.price_cents, &self.category)
    }

    /// Case-insensitive substring match on name or category.
    ///
    /// `needle` must already be lowercase.
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.category.to_lowercase().contains(needle)
    }
}

/// Product form input, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price_cents: i64,
    pub category: String,
    #[serde(default)]
    pub stock_quantity: u32,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl NewProduct {
    /// Validates name, category, description and price.
    pub fn validate(&self) -> CoreResult<()> {
        validate_fields(&self.name, &self.description, self.price_cents, &self.category)
    }

    /// Attaches an id.
    pub fn into_product(self, id: impl Into<String>) -> Product {
        Product {
            id: id.into(),
            name: self.name.trim().to_string(),
            description: self.description,
            price_cents: self.price_cents,
            category: self.category.trim().to_string(),
            stock_quantity: self.stock_quantity,
            image_url: self.image_url,
        }
    }
}

fn validate_fields(name: &str, description: &str, price_cents: i64, category: &str) -> CoreResult<()> {
    validate_product_name(name)?;
    validate_category(category)?;
    validate_description(description)?;
    validate_price_cents(price_cents)?;
    Ok(())
}

// =============================================================================
// Fetch Status
// =============================================================================

/// Progress of the catalog fetch.
///
/// ```text
/// Idle ──fetch()──► Pending ──┬──► Succeeded
///                             └──► Failed (error message kept)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum FetchStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

// =============================================================================
// Stock Level
// =============================================================================

/// Color of the stock badge on the product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum StockLevel {
    /// More than 100 in stock.
    Success,
    /// 51 to 100.
    Info,
    /// 21 to 50.
    Warning,
    /// 20 or fewer.
    Error,
}

impl StockLevel {
    pub fn for_quantity(quantity: u32) -> Self {
        match quantity {
            q if q > 100 => StockLevel::Success,
            q if q > 50 => StockLevel::Info,
            q if q > 20 => StockLevel::Warning,
            _ => StockLevel::Error,
        }
    }
}

// =============================================================================
// Catalog Helpers
// =============================================================================

/// The list a successful fetch delivers.
pub fn seed_products() -> Vec<Product> {
    let seed = |id: &str, name: &str, description: &str, price_cents, category: &str, stock| Product {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price_cents,
        category: category.to_string(),
        stock_quantity: stock,
        image_url: Some(PLACEHOLDER_IMAGE_URL.to_string()),
    };

    vec![
        seed(
            "1",
            "Premium T-Shirt",
            "High-quality cotton t-shirt available in multiple colors",
            2999,
            "Clothing",
            150,
        ),
        seed(
            "2",
            "Wireless Headphones",
            "Noise-cancelling wireless headphones with 20-hour battery life",
            12999,
            "Electronics",
            75,
        ),
        seed(
            "3",
            "Organic Coffee Beans",
            "Fair-trade organic coffee beans, 1lb bag",
            1499,
            "Food & Beverage",
            200,
        ),
        seed(
            "4",
            "Smart Watch",
            "Fitness tracking smartwatch with heart rate monitor",
            19999,
            "Electronics",
            45,
        ),
    ]
}

/// Products whose name or category contains `query`, ignoring case.
///
/// An empty (or whitespace-only) query matches everything. Order is kept.
///
/// ## Example
/// ```rust
/// use retailer_core::product::{filter_products, seed_products};
///
/// let products = seed_products();
/// let hits = filter_products(&products, "ELECTRO");
/// assert_eq!(hits.len(), 2);
/// ```
pub fn filter_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return products.iter().collect();
    }
    products.iter().filter(|p| p.matches(&needle)).collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn new_product(name: &str, price_cents: i64) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            description: String::new(),
            price_cents,
            category: "Clothing".to_string(),
            stock_quantity: 10,
            image_url: None,
        }
    }

    #[test]
    fn test_seed_catalog() {
        let products = seed_products();
        assert_eq!(products.len(), 4);
        assert_eq!(products[0].name, "Premium T-Shirt");
        assert_eq!(products[1].price().to_string(), "$129.99");
        assert_eq!(products[3].stock_quantity, 45);
        assert!(products.iter().all(|p| p.validate().is_ok()));
    }

    #[test]
    fn test_stock_levels() {
        assert_eq!(StockLevel::for_quantity(150), StockLevel::Success);
        assert_eq!(StockLevel::for_quantity(101), StockLevel::Success);
        assert_eq!(StockLevel::for_quantity(100), StockLevel::Info);
        assert_eq!(StockLevel::for_quantity(51), StockLevel::Info);
        assert_eq!(StockLevel::for_quantity(50), StockLevel::Warning);
        assert_eq!(StockLevel::for_quantity(21), StockLevel::Warning);
        assert_eq!(StockLevel::for_quantity(20), StockLevel::Error);
        assert_eq!(StockLevel::for_quantity(0), StockLevel::Error);
    }

    #[test]
    fn test_filter_is_case_insensitive_on_name_and_category() {
        let products = seed_products();

        let by_name = filter_products(&products, "coffee");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, "3");

        let by_category = filter_products(&products, "electronics");
        let ids: Vec<_> = by_category.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "4"]);

        assert_eq!(filter_products(&products, "  ").len(), 4);
        assert!(filter_products(&products, "bicycle").is_empty());
    }

    #[test]
    fn test_new_product_validation() {
        assert!(new_product("Mug", 899).validate().is_ok());
        assert!(matches!(
            new_product("", 899).validate(),
            Err(CoreError::Validation(_))
        ));
        assert!(new_product("Mug", -1).validate().is_err());
    }

    #[test]
    fn test_into_product_trims() {
        let product = NewProduct {
            category: " Home ".to_string(),
            ..new_product("  Mug ", 899)
        }
        .into_product("abc");
        assert_eq!(product.id, "abc");
        assert_eq!(product.name, "Mug");
        assert_eq!(product.category, "Home");
    }

    #[test]
    fn test_new_product_deserialize_defaults() {
        let input: NewProduct = serde_json::from_str(
            r#"{"name":"Mug","priceCents":899,"category":"Home"}"#,
        )
        .unwrap();
        assert_eq!(input.stock_quantity, 0);
        assert_eq!(input.image_url, None);
        assert!(input.description.is_empty());
    }
}
