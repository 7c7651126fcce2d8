use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product, ProductChanges};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductId;

use super::entity::ProductEntity;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn to_sql_bound(value: u64) -> Result<i64, RepositoryError> {
    i64::try_from(value).map_err(|_| RepositoryError::DatabaseError)
}

fn database_error(e: sqlx::Error) -> RepositoryError {
    tracing::error!("Product query failed: {}", e);
    RepositoryError::DatabaseError
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            r#"INSERT INTO products (name, price, available)
            VALUES ($1, $2, $3)
            RETURNING id, name, price, available, created_at, updated_at"#,
        )
        .bind(&product.name)
        .bind(product.price)
        .bind(product.available)
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entity.into_domain())
    }

    async fn find_available(&self, skip: u64, take: u64) -> Result<Vec<Product>, RepositoryError> {
        // No ORDER BY: rows come back in storage order.
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, price, available, created_at, updated_at FROM products WHERE available = TRUE OFFSET $1 LIMIT $2",
        )
        .bind(to_sql_bound(skip)?)
        .bind(to_sql_bound(take)?)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn count_available(&self) -> Result<u64, RepositoryError> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM products WHERE available = TRUE",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?;

        u64::try_from(total).map_err(|_| RepositoryError::DatabaseError)
    }

    async fn find_available_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, price, available, created_at, updated_at FROM products WHERE id = $1 AND available = TRUE",
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn update(
        &self,
        id: ProductId,
        changes: &ProductChanges,
    ) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            r#"UPDATE products SET
                name = COALESCE($2, name),
                price = COALESCE($3, price),
                available = COALESCE($4, available),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, price, available, created_at, updated_at"#,
        )
        .bind(id.value())
        .bind(changes.name.as_deref())
        .bind(changes.price)
        .bind(changes.available)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_bounds_within_range() {
        assert_eq!(to_sql_bound(40).unwrap(), 40);
    }

    #[test]
    fn should_reject_bounds_beyond_sql_range() {
        assert!(matches!(
            to_sql_bound(u64::MAX),
            Err(RepositoryError::DatabaseError)
        ));
    }
}
