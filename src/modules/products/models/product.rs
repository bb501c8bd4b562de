// Product entity
//
// Price must be strictly positive at creation and on every update, and fit the
// DECIMAL(20,6) storage column without rounding.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::traits::{validate_id, Identifiable};
use crate::core::{AppError, Result};

pub const NAME_MAX_LEN: usize = 100;
pub const DESCRIPTION_MAX_LEN: usize = 500;
pub const MAX_PRICE_SCALE: u32 = 6;
/// Integer digits a stored price may carry, matching the `DECIMAL(20,6)` column
pub const MAX_PRICE_INTEGER_DIGITS: u32 = 14;

/// Product availability status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    #[default]
    Active,
    Inactive,
}

impl ProductStatus {
    pub const ALL: [ProductStatus; 2] = [ProductStatus::Active, ProductStatus::Inactive];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Active => "active",
            ProductStatus::Inactive => "inactive",
        }
    }
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProductStatus {
    type Err = AppError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "active" => Ok(ProductStatus::Active),
            "inactive" => Ok(ProductStatus::Inactive),
            _ => Err(AppError::validation(format!(
                "Unsupported product status: {}. Valid values: active, inactive",
                s
            ))),
        }
    }
}

/// A product offered for sale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: Option<i64>,
    name: String,
    price: Decimal,
    description: Option<String>,
    status: ProductStatus,
}

impl Product {
    /// Create a new, active, not yet persisted product
    pub fn new(name: String, price: Decimal, description: Option<String>) -> Result<Self> {
        Self::validate_name(&name)?;
        Self::validate_price(price)?;
        Self::validate_description(description.as_deref())?;

        Ok(Self {
            id: None,
            name,
            price,
            description,
            status: ProductStatus::Active,
        })
    }

    /// Rehydrate a product from storage
    pub fn restore(
        id: i64,
        name: String,
        price: Decimal,
        description: Option<String>,
        status: ProductStatus,
    ) -> Self {
        Self {
            id: Some(id),
            name,
            price,
            description,
            status,
        }
    }

    /// Build a product whose identity may or may not be known yet, validating all fields
    pub fn with_identity(
        id: Option<i64>,
        name: String,
        price: Decimal,
        description: Option<String>,
        status: ProductStatus,
    ) -> Result<Self> {
        let mut product = Self::new(name, price, description)?;
        product.status = status;
        match id {
            Some(id) => Ok(product.assign_id(validate_id(id)?)),
            None => Ok(product),
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn status(&self) -> ProductStatus {
        self.status
    }

    /// Set a new price; the stored price is left unchanged on rejection
    pub fn update_price(&mut self, new_price: Decimal) -> Result<()> {
        Self::validate_price(new_price)?;
        self.price = new_price;
        Ok(())
    }

    pub fn rename(&mut self, new_name: String) -> Result<()> {
        Self::validate_name(&new_name)?;
        self.name = new_name;
        Ok(())
    }

    pub fn update_description(&mut self, description: Option<String>) -> Result<()> {
        Self::validate_description(description.as_deref())?;
        self.description = description;
        Ok(())
    }

    /// Move to `new_status`. Returns `false` when already there (no-op).
    pub fn change_status(&mut self, new_status: ProductStatus) -> bool {
        if self.status == new_status {
            return false;
        }
        self.status = new_status;
        true
    }

    pub fn activate(&mut self) -> bool {
        self.change_status(ProductStatus::Active)
    }

    pub fn deactivate(&mut self) -> bool {
        self.change_status(ProductStatus::Inactive)
    }

    /// Plain mapping for transport
    pub fn to_map(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.id,
            "name": self.name,
            "price": self.price.to_string(),
            "description": self.description,
            "status": self.status.as_str(),
        })
    }

    fn validate_name(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(AppError::validation("Product name cannot be empty"));
        }
        if name.chars().count() > NAME_MAX_LEN {
            return Err(AppError::validation(format!(
                "Product name must be at most {} characters",
                NAME_MAX_LEN
            )));
        }
        Ok(())
    }

    fn validate_price(price: Decimal) -> Result<()> {
        if price <= Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Price must be greater than zero, got {}",
                price
            )));
        }
        if price >= Decimal::from(10i64.pow(MAX_PRICE_INTEGER_DIGITS)) {
            return Err(AppError::validation(format!(
                "Price must be below 10^{}, got {}",
                MAX_PRICE_INTEGER_DIGITS, price
            )));
        }
        if price.normalize().scale() > MAX_PRICE_SCALE {
            return Err(AppError::validation(format!(
                "Price must have at most {} decimal places",
                MAX_PRICE_SCALE
            )));
        }
        Ok(())
    }

    fn validate_description(description: Option<&str>) -> Result<()> {
        if let Some(text) = description {
            if text.chars().count() > DESCRIPTION_MAX_LEN {
                return Err(AppError::validation(format!(
                    "Description must be at most {} characters",
                    DESCRIPTION_MAX_LEN
                )));
            }
        }
        Ok(())
    }
}

impl Identifiable for Product {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn assign_id(mut self, id: i64) -> Self {
        self.id.get_or_insert(id);
        self
    }
}
