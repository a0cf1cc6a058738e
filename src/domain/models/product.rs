//! Product domain model.
//!
//! A product references a category by id; the `category` field is resolved
//! at read time and stays `None` when the reference is absent or dangling.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::Category;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub stock_quantity: i64,
    #[serde(default)]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        category_id: Option<i64>,
        stock_quantity: i64,
        is_active: bool,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name: name.into(),
            description: description.into(),
            price,
            category_id,
            category: None,
            stock_quantity,
            is_active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Validate field constraints, collecting every violation.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        let name_len = self.name.chars().count();
        if name_len < 3 {
            errors.push("name must be at least 3 characters long".to_string());
        }
        if name_len > 100 {
            errors.push("name cannot be longer than 100 characters".to_string());
        }

        if self.price <= 0.0 {
            errors.push("price must be greater than 0".to_string());
        }

        if self.stock_quantity < 0 {
            errors.push("stock_quantity must be greater than or equal to 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Partial update applied over an existing product; absent fields keep
/// their current value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category_id: Option<i64>,
    pub stock_quantity: Option<i64>,
    pub is_active: Option<bool>,
}

impl ProductPatch {
    /// Merge this patch into `product`, bumping its update timestamp.
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(description) = &self.description {
            product.description = description.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(category_id) = self.category_id {
            product.category_id = Some(category_id);
        }
        if let Some(stock_quantity) = self.stock_quantity {
            product.stock_quantity = stock_quantity;
        }
        if let Some(is_active) = self.is_active {
            product.is_active = is_active;
        }
        product.updated_at = Utc::now();
    }
}

/// One page of the product listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub page: i64,
    pub total_items: i64,
    pub total_pages: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_product() {
        let product = Product::new("Laptop", "A laptop", 999.99, Some(1), 4, true);
        assert!(product.validate().is_ok());
    }

    #[test]
    fn test_rejects_short_name_and_nonpositive_price() {
        let product = Product::new("ab", "", 0.0, None, 1, true);
        let errors = product.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_rejects_negative_stock() {
        let product = Product::new("Widget", "", 5.0, None, -1, true);
        assert!(product.validate().is_err());
    }

    #[test]
    fn test_patch_keeps_unset_fields() {
        let mut product = Product::new("Widget", "original", 5.0, Some(2), 7, true);
        let patch = ProductPatch {
            price: Some(6.5),
            ..Default::default()
        };
        patch.apply_to(&mut product);
        assert_eq!(product.price, 6.5);
        assert_eq!(product.name, "Widget");
        assert_eq!(product.description, "original");
        assert_eq!(product.category_id, Some(2));
    }

    #[test]
    fn test_category_omitted_from_json_when_absent() {
        let product = Product::new("Widget", "", 5.0, None, 1, true);
        let json = serde_json::to_string(&product).unwrap();
        assert!(!json.contains("\"category\""));
        assert!(json.contains("\"category_id\""));
    }
}
