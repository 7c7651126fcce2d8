use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::product::model::Product;
use business::domain::product::value_objects::ProductId;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            ProductId::new(self.id),
            self.name,
            self.price,
            self.available,
            self.created_at,
            self.updated_at,
        )
    }
}
