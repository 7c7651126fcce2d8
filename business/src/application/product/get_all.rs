use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::pagination::{PageMeta, Paginated, Pagination};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(
        &self,
        params: GetAllProductsParams,
    ) -> Result<Paginated<Product>, ProductError> {
        let pagination = Pagination::new(params.page, params.limit);
        self.logger.info(&format!(
            "Fetching available products (page {}, limit {})",
            pagination.page, pagination.limit
        ));

        let total = self.repository.count_available().await?;
        let meta = PageMeta::compute(total, &pagination);

        // The slice follows the requested page even when meta.page was clamped.
        let data = self
            .repository
            .find_available(pagination.skip(), pagination.take())
            .await?;

        self.logger.debug(&format!(
            "Returning {} of {} available products",
            data.len(),
            total
        ));
        Ok(Paginated { data, meta })
    }
}
