use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};
use crate::domain::product::value_objects::ProductId;

pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

/// Looks up an available product. Unavailable rows are reported as missing.
pub(crate) async fn find_available_product(
    repository: &dyn ProductRepository,
    id: ProductId,
) -> Result<Product, ProductError> {
    repository
        .find_available_by_id(id)
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => ProductError::NotFound,
            other => ProductError::Repository(other),
        })
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Fetching product by id: {}", params.id));

        let id = ProductId::parse(&params.id)?;
        find_available_product(self.repository.as_ref(), id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::{NewProduct, ProductChanges};
    use chrono::Utc;
    use mockall::mock;

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

    #[tokio::test]
    async fn should_return_product_when_exists() {
        let now = Utc::now();
        let mut mock_repo = MockProductRepo::new();

        mock_repo
            .expect_find_available_by_id()
            .withf(|id| *id == ProductId::new(3))
            .returning(move |id| {
                Ok(Product::from_repository(
                    id,
                    "USB Hub".to_string(),
                    19.99,
                    true,
                    now,
                    now,
                ))
            });

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams {
                id: "3".to_string(),
            })
            .await;

        assert!(result.is_ok());
        let product = result.unwrap();
        assert_eq!(product.id, ProductId::new(3));
        assert_eq!(product.name, "USB Hub");
    }

    #[tokio::test]
    async fn should_return_invalid_id_when_not_numeric() {
        // The repository must not be reached at all.
        let mock_repo = MockProductRepo::new();

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams {
                id: "abc".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::InvalidId));
    }

    #[tokio::test]
    async fn should_return_error_when_product_not_found() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_available_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams {
                id: "999".to_string(),
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_keep_database_errors_distinct_from_not_found() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_available_by_id()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams {
                id: "1".to_string(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
