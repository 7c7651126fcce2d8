use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct DeleteProductParams {
    pub id: String,
}

/// Soft delete: the product is flagged unavailable and returned.
#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    async fn execute(&self, params: DeleteProductParams) -> Result<Product, ProductError>;
}
