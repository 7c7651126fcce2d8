use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::ProductId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    /// `false` marks the product as removed. Rows are never deleted.
    pub available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: ProductId,
        name: String,
        price: f64,
        available: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            price,
            available,
            created_at,
            updated_at,
        }
    }
}

/// Fields of a product about to be inserted. The store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub available: bool,
}

impl NewProduct {
    pub fn new(name: String, price: f64, available: Option<bool>) -> Self {
        Self {
            name,
            price,
            available: available.unwrap_or(true),
        }
    }
}

/// Partial update of a product. `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub available: Option<bool>,
}

impl ProductChanges {
    /// Soft delete.
    pub fn mark_unavailable() -> Self {
        Self {
            available: Some(false),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.available.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_new_product_to_available() {
        let product = NewProduct::new("Keyboard".to_string(), 49.9, None);
        assert!(product.available);
    }

    #[test]
    fn should_keep_explicit_availability() {
        let product = NewProduct::new("Keyboard".to_string(), 49.9, Some(false));
        assert!(!product.available);
    }

    #[test]
    fn should_only_touch_availability_when_marking_unavailable() {
        let changes = ProductChanges::mark_unavailable();
        assert_eq!(changes.available, Some(false));
        assert!(changes.name.is_none());
        assert!(changes.price.is_none());
        assert!(!changes.is_empty());
    }

    #[test]
    fn should_report_empty_changes() {
        assert!(ProductChanges::default().is_empty());
    }
}
