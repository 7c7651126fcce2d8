use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::get_by_id::find_available_product;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductChanges};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::product::value_objects::ProductId;

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

impl UpdateProductUseCaseImpl {
    async fn apply(&self, raw_id: &str, changes: &ProductChanges) -> Result<Product, ProductError> {
        let id = ProductId::parse(raw_id)?;
        let existing = find_available_product(self.repository.as_ref(), id).await?;
        Ok(self.repository.update(existing.id, changes).await?)
    }
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    /// Every failure on this path is reported as `NotFound`.
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let changes = params.patch.into_changes();
        let updated_product = self.apply(&params.id, &changes).await.map_err(|e| {
            self.logger
                .warn(&format!("Update of product {} failed: {}", params.id, e));
            ProductError::NotFound
        })?;

        self.logger
            .info(&format!("Product updated: {}", updated_product.id));
        Ok(updated_product)
    }
}
