use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductChanges};

/// Partial update payload as received from the caller.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    /// Accepted on input but never applied.
    pub id: Option<i32>,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub available: Option<bool>,
}

impl ProductPatch {
    pub fn into_changes(self) -> ProductChanges {
        ProductChanges {
            name: self.name,
            price: self.price,
            available: self.available,
        }
    }
}

pub struct UpdateProductParams {
    pub id: String,
    pub patch: ProductPatch,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
