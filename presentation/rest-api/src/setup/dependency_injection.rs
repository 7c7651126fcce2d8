use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryPostgres;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;

use crate::api::health::routes::HealthApi;
use crate::api::product::routes::ProductApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = HealthApi::new();

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool));

        // Product use cases
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository,
            logger,
        });

        let product_api = ProductApi::new(
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        );

        Self {
            health_api,
            product_api,
        }
    }
}
