//! # Validation Module
//!
//! Input validation utilities for Retailer Web.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Form field checks (empty, number inputs)                          │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Tauri Command (Rust)                                         │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: product fields, search text, stock counts            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Stores                                                        │
//! │  └── Only ever receive values that passed layer 2                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use retailer_core::validation::{validate_product_name, validate_stock_quantity};
//!
//! assert!(validate_product_name("Smart Watch").is_ok());
//! assert_eq!(validate_stock_quantity(45).unwrap(), 45);
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest product name the list cards can lay out.
const MAX_NAME_LEN: usize = 200;

/// Longest description kept on a product.
const MAX_DESCRIPTION_LEN: usize = 2_000;

/// Longest search text accepted by the product filter.
const MAX_QUERY_LEN: usize = 100;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use retailer_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Premium T-Shirt").is_ok());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a product category.
///
/// Categories are free text ("Electronics", "Food & Beverage"), but a
/// product without one cannot be found by the category filter.
pub fn validate_category(category: &str) -> ValidationResult<()> {
    if category.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "category".to_string(),
        });
    }

    Ok(())
}

/// Validates a product description. Empty descriptions are allowed.
pub fn validate_description(description: &str) -> ValidationResult<()> {
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::TooLong {
            field: "description".to_string(),
            max: MAX_DESCRIPTION_LEN,
        });
    }

    Ok(())
}

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (matches every product)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_QUERY_LEN,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use retailer_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(2999).is_ok()); // $29.99
/// assert!(validate_price_cents(0).is_ok());    // Free item
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a stock count coming from a number input.
///
/// The frontend sends whatever the user typed, so negative values arrive
/// here as signed integers and are rejected before reaching the catalog.
pub fn validate_stock_quantity(quantity: i64) -> ValidationResult<u32> {
    u32::try_from(quantity).map_err(|_| ValidationError::OutOfRange {
        field: "stock quantity".to_string(),
        min: 0,
        max: u32::MAX as i64,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Wireless Headphones").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("  \t ").is_err());
        assert!(validate_product_name(&"A".repeat(201)).is_err());
    }

    #[test]
    fn test_validate_category() {
        assert!(validate_category("Food & Beverage").is_ok());
        assert!(matches!(
            validate_category(" "),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_validate_description() {
        assert!(validate_description("").is_ok());
        assert!(validate_description(&"x".repeat(2_001)).is_err());
    }

    #[test]
    fn test_validate_search_query_trims() {
        assert_eq!(validate_search_query("  watch ").unwrap(), "watch");
        assert!(validate_search_query(&"q".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(12999).is_ok());
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(-1).is_err());
    }

    #[test]
    fn test_validate_stock_quantity() {
        assert_eq!(validate_stock_quantity(0).unwrap(), 0);
        assert_eq!(validate_stock_quantity(150).unwrap(), 150);
        assert!(validate_stock_quantity(-5).is_err());
        assert!(validate_stock_quantity(i64::from(u32::MAX) + 1).is_err());
    }
}
