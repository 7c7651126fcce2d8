use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewProduct, Product, ProductChanges};
use super::value_objects::ProductId;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Inserts a row and returns it with its assigned id.
    async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
    /// Available products in storage order, `skip` rows in, at most `take` rows.
    async fn find_available(&self, skip: u64, take: u64) -> Result<Vec<Product>, RepositoryError>;
    async fn count_available(&self) -> Result<u64, RepositoryError>;
    async fn find_available_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
    async fn update(
        &self,
        id: ProductId,
        changes: &ProductChanges,
    ) -> Result<Product, RepositoryError>;
}
