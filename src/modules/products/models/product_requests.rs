// HTTP request/response schemas for the products API

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::product::ProductStatus;
use super::product_dto::{double_option, ProductDto, ProductPatch};

fn default_status() -> String {
    ProductStatus::default().to_string()
}

/// Request body for product creation and full replacement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
}

impl CreateProductRequest {
    pub fn into_dto(self, id: Option<i64>) -> ProductDto {
        ProductDto {
            id,
            name: self.name,
            price: self.price,
            description: self.description,
            status: self.status,
        }
    }
}

/// Request body for PATCH /products/{id}
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPartialUpdate {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    /// `null` clears the description, an absent field keeps it
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
    pub status: Option<String>,
}

impl From<ProductPartialUpdate> for ProductPatch {
    fn from(update: ProductPartialUpdate) -> Self {
        ProductPatch {
            name: update.name,
            price: update.price,
            description: update.description,
            status: update.status,
        }
    }
}

/// Request body for PATCH /products/{id}/price
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductPriceUpdate {
    pub price: Decimal,
}

/// Product as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductResponse {
    pub id: Option<i64>,
    pub name: String,
    pub price: Decimal,
    pub description: Option<String>,
    pub status: String,
}

impl From<ProductDto> for ProductResponse {
    fn from(dto: ProductDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            price: dto.price,
            description: dto.description,
            status: dto.status,
        }
    }
}
