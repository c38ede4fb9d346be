//! Catalog record types as delivered by the admin REST API.
//!
//! All records are transient caches of the last fetch; the remote API is
//! the sole authoritative store. Fields the API omits inconsistently carry
//! `#[serde(default)]` so partial payloads still decode.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

fn default_currency() -> String {
    "USD".to_owned()
}

/// A catalog category.
///
/// `parent_id` either references another category's `id` or is `None` for a
/// root. The data as delivered is not guaranteed tree-consistent: orphaned
/// parent references occur, and the tree builder in [`crate::tree`] treats
/// such nodes as roots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Advisory flag from the API; may disagree with the fetched data.
    #[serde(default)]
    pub has_children: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brand {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub brand_id: Option<i64>,
    #[serde(default)]
    pub category_ids: Vec<i64>,
    pub price: Decimal,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub variants: Vec<Variant>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

/// A sellable variation of a product (size, color, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variant {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    /// Overrides the product price when set.
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// A free-form name/value pair attached to a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Discount {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub percent: Option<Decimal>,
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub category_ids: Vec<i64>,
    #[serde(default)]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Delivery {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub min_days: Option<i32>,
    #[serde(default)]
    pub max_days: Option<i32>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warranty {
    pub id: i64,
    pub name: String,
    pub months: i32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxClass {
    pub id: i64,
    pub name: String,
    pub rate: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub vat_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Per-product stock as reported by the stock endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockLevel {
    pub product_id: i64,
    pub quantity: i64,
    #[serde(default)]
    pub reserved: i64,
}

impl StockLevel {
    /// Units available to sell: on-hand quantity minus reservations.
    #[must_use]
    pub fn available(&self) -> i64 {
        self.quantity.saturating_sub(self.reserved)
    }

    #[must_use]
    pub fn status(&self, low_threshold: i64) -> StockStatus {
        StockStatus::from_quantity(self.available(), low_threshold)
    }
}

/// Display bucket for a product's availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    #[must_use]
    pub fn from_quantity(available: i64, low_threshold: i64) -> Self {
        if available <= 0 {
            StockStatus::OutOfStock
        } else if available <= low_threshold {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StockStatus::InStock => write!(f, "in stock"),
            StockStatus::LowStock => write!(f, "low stock"),
            StockStatus::OutOfStock => write!(f, "out of stock"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_decodes_with_omitted_optional_fields() {
        let category: Category =
            serde_json::from_str(r#"{"id":1,"name":"Drinks","slug":"drinks"}"#).unwrap();
        assert_eq!(category.id, 1);
        assert!(category.parent_id.is_none());
        assert!(category.is_active, "is_active should default to true");
        assert!(!category.has_children);
        assert_eq!(category.sort_order, 0);
    }

    #[test]
    fn product_decodes_price_from_string() {
        let product: Product = serde_json::from_str(
            r#"{"id":7,"name":"Shirt","slug":"shirt","price":"19.90"}"#,
        )
        .unwrap();
        assert_eq!(product.price.to_string(), "19.90");
        assert_eq!(product.currency, "USD");
        assert!(product.variants.is_empty());
    }

    #[test]
    fn stock_available_subtracts_reservations() {
        let level = StockLevel {
            product_id: 1,
            quantity: 10,
            reserved: 4,
        };
        assert_eq!(level.available(), 6);
        assert_eq!(level.status(5), StockStatus::InStock);
    }

    #[test]
    fn stock_status_buckets() {
        assert_eq!(StockStatus::from_quantity(0, 5), StockStatus::OutOfStock);
        assert_eq!(StockStatus::from_quantity(-2, 5), StockStatus::OutOfStock);
        assert_eq!(StockStatus::from_quantity(3, 5), StockStatus::LowStock);
        assert_eq!(StockStatus::from_quantity(5, 5), StockStatus::LowStock);
        assert_eq!(StockStatus::from_quantity(6, 5), StockStatus::InStock);
    }
}
