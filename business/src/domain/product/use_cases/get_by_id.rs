use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct GetProductByIdParams {
    /// Raw identifier as received; parsed by the use case.
    pub id: String,
}

#[async_trait]
pub trait GetProductByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError>;
}
