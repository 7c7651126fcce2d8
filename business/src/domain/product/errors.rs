#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.invalid_id")]
    InvalidId,
    #[error("product.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
