use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::product::{Product, ProductStatus};
use crate::core::Result;

/// Application-layer representation of a product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDto {
    pub id: Option<i64>,
    pub name: String,
    pub price: Decimal,
    pub description: Option<String>,
    pub status: String,
}

impl ProductDto {
    pub fn new(name: impl Into<String>, price: Decimal, description: Option<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            price,
            description,
            status: ProductStatus::default().to_string(),
        }
    }

    pub fn to_domain(&self) -> Result<Product> {
        let status: ProductStatus = self.status.parse()?;
        Product::with_identity(
            self.id,
            self.name.clone(),
            self.price,
            self.description.clone(),
            status,
        )
    }

    pub fn from_domain(product: &Product) -> Self {
        Self {
            id: product.id(),
            name: product.name().to_string(),
            price: product.price(),
            description: product.description().map(str::to_string),
            status: product.status().to_string(),
        }
    }

    pub fn with_id(self, id: i64) -> Self {
        Self { id: Some(id), ..self }
    }

    pub fn merged(self, patch: ProductPatch) -> Self {
        Self {
            id: self.id,
            name: patch.name.unwrap_or(self.name),
            price: patch.price.unwrap_or(self.price),
            description: match patch.description {
                Some(description) => description,
                None => self.description,
            },
            status: patch.status.unwrap_or(self.status),
        }
    }
}

/// Fields of a partial product update; `None` leaves the stored value untouched.
///
/// `description` distinguishes an absent field (`None`) from an explicit
/// `null` (`Some(None)`), which clears the stored description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
    pub status: Option<String>,
}

/// Deserialize a present field as `Some`, keeping a JSON `null` as `Some(None)`
pub(crate) fn double_option<'de, D, T>(
    deserializer: D,
) -> std::result::Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.price.is_none()
            && self.description.is_none()
            && self.status.is_none()
    }
}
