use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::get_by_id::find_available_product;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductChanges};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use crate::domain::product::value_objects::ProductId;

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Removing product: {}", params.id));

        let id = ProductId::parse(&params.id)?;

        // Verify product exists and is still available
        let existing = find_available_product(self.repository.as_ref(), id).await?;

        let product = self
            .repository
            .update(existing.id, &ProductChanges::mark_unavailable())
            .await?;

        self.logger
            .info(&format!("Product marked unavailable: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::NewProduct;
    use chrono::Utc;
    use mockall::mock;
    use std::sync::atomic::{AtomicBool, Ordering};

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
            async fn find_available(&self, skip: u64, take: u64) -> Result<Vec<Product>, RepositoryError>;
            async fn count_available(&self) -> Result<u64, RepositoryError>;
            async fn find_available_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
            async fn update(&self, id: ProductId, changes: &ProductChanges) -> Result<Product, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn make_product(id: ProductId, available: bool) -> Product {
        let now = Utc::now();
        Product::from_repository(id, "Headphones".to_string(), 59.0, available, now, now)
    }

    #[tokio::test]
    async fn should_mark_product_unavailable_when_exists() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_available_by_id()
            .returning(|id| Ok(make_product(id, true)));
        mock_repo
            .expect_update()
            .withf(|id, changes| {
                *id == ProductId::new(5) && *changes == ProductChanges::mark_unavailable()
            })
            .times(1)
            .returning(|id, _| Ok(make_product(id, false)));

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(DeleteProductParams {
                id: "5".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(product.id, ProductId::new(5));
        assert!(!product.available);
    }

    #[tokio::test]
    async fn should_return_invalid_id_when_not_numeric() {
        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(MockProductRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductParams {
                id: "abc".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::InvalidId));
    }

    #[tokio::test]
    async fn should_return_not_found_when_removing_nonexistent_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_available_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        mock_repo.expect_update().never();

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductParams {
                id: "12".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_fail_second_removal_with_not_found() {
        let removed = Arc::new(AtomicBool::new(false));
        let mut mock_repo = MockProductRepo::new();

        let lookup_flag = removed.clone();
        mock_repo.expect_find_available_by_id().returning(move |id| {
            if lookup_flag.load(Ordering::SeqCst) {
                Err(RepositoryError::NotFound)
            } else {
                Ok(make_product(id, true))
            }
        });
        let update_flag = removed.clone();
        mock_repo.expect_update().times(1).returning(move |id, _| {
            update_flag.store(true, Ordering::SeqCst);
            Ok(make_product(id, false))
        });

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let first = use_case
            .execute(DeleteProductParams {
                id: "8".to_string(),
            })
            .await;
        let second = use_case
            .execute(DeleteProductParams {
                id: "8".to_string(),
            })
            .await;

        assert!(!first.unwrap().available);
        assert!(matches!(second.unwrap_err(), ProductError::NotFound));
    }
}
