use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::pagination::Paginated;

#[derive(Debug, Default)]
pub struct GetAllProductsParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

#[async_trait]
pub trait GetAllProductsUseCase: Send + Sync {
    async fn execute(&self, params: GetAllProductsParams)
    -> Result<Paginated<Product>, ProductError>;
}
