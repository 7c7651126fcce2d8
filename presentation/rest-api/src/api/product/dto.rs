use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::product::model::Product;
use business::domain::product::pagination::{PageMeta, Paginated};
use business::domain::product::use_cases::update::ProductPatch;

#[derive(Debug, Clone, Object)]
#[oai(deny_unknown_fields)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    #[oai(validator(min_length = 1))]
    pub name: String,
    /// Unit price (must be positive)
    #[oai(validator(minimum(value = "0", exclusive)))]
    pub price: f64,
    /// Whether the product is listed (default: true)
    #[oai(skip_serializing_if_is_none)]
    pub available: Option<bool>,
}

/// Partial update. Omitted fields are left untouched.
#[derive(Debug, Clone, Object)]
#[oai(deny_unknown_fields)]
pub struct UpdateProductRequest {
    /// Accepted for compatibility; the identifier in the path wins
    #[oai(skip_serializing_if_is_none)]
    pub id: Option<i32>,
    /// Product name (cannot be empty)
    #[oai(validator(min_length = 1), skip_serializing_if_is_none)]
    pub name: Option<String>,
    /// Unit price (must be positive)
    #[oai(validator(minimum(value = "0", exclusive)), skip_serializing_if_is_none)]
    pub price: Option<f64>,
    /// Whether the product is listed
    #[oai(skip_serializing_if_is_none)]
    pub available: Option<bool>,
}

impl From<UpdateProductRequest> for ProductPatch {
    fn from(request: UpdateProductRequest) -> Self {
        Self {
            id: request.id,
            name: request.name,
            price: request.price,
            available: request.available,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    /// Product identifier
    pub id: i32,
    /// Product name
    pub name: String,
    /// Unit price
    pub price: f64,
    /// `false` once the product has been removed
    pub available: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.value(),
            name: product.name,
            price: product.price,
            available: product.available,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct PageMetaResponse {
    /// Number of available products
    pub total: u64,
    /// Requested page, clamped to the last page
    pub page: u32,
    /// Number of pages
    pub last_page: u32,
}

impl From<PageMeta> for PageMetaResponse {
    fn from(meta: PageMeta) -> Self {
        Self {
            total: meta.total,
            page: meta.page,
            last_page: meta.last_page,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct PaginatedProductsResponse {
    pub data: Vec<ProductResponse>,
    pub meta: PageMetaResponse,
}

impl From<Paginated<Product>> for PaginatedProductsResponse {
    fn from(page: Paginated<Product>) -> Self {
        Self {
            data: page.data.into_iter().map(|p| p.into()).collect(),
            meta: page.meta.into(),
        }
    }
}
