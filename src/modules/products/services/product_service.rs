use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::core::{AppError, Result};
use crate::modules::products::models::{ProductDto, ProductPatch, ProductStatus};
use crate::modules::products::repositories::ProductRepository;

/// Use cases for the product resource
pub struct ProductService {
    product_repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(product_repo: Arc<dyn ProductRepository>) -> Self {
        Self { product_repo }
    }

    pub async fn create_product(&self, dto: ProductDto) -> Result<ProductDto> {
        let product = dto.to_domain()?;

        let created = self.product_repo.create(product).await?;
        info!(
            product_id = ?created.id(),
            name = %created.name(),
            price = %created.price(),
            "Product created"
        );

        Ok(ProductDto::from_domain(&created))
    }

    pub async fn get_product_by_id(&self, id: i64) -> Result<Option<ProductDto>> {
        let product = self.product_repo.find_by_id(id).await?;
        Ok(product.as_ref().map(ProductDto::from_domain))
    }

    pub async fn get_all_products(&self) -> Result<Vec<ProductDto>> {
        let products = self.product_repo.find_all().await?;
        Ok(products.iter().map(ProductDto::from_domain).collect())
    }

    pub async fn list_products(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Vec<ProductDto>> {
        let products = self.product_repo.list(limit, offset).await?;
        Ok(products.iter().map(ProductDto::from_domain).collect())
    }

    pub async fn list_products_by_status(
        &self,
        status: &str,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Vec<ProductDto>> {
        let status: ProductStatus = status.parse()?;
        let products = self.product_repo.find_by_status(status, limit, offset).await?;
        Ok(products.iter().map(ProductDto::from_domain).collect())
    }

    /// Replace every field of an existing product
    pub async fn update_product(&self, dto: ProductDto) -> Result<ProductDto> {
        if dto.id.is_none() {
            return Err(AppError::validation("Product ID is required for update"));
        }
        let product = dto.to_domain()?;

        let updated = self.product_repo.update(product).await?;
        info!(product_id = ?updated.id(), "Product updated");

        Ok(ProductDto::from_domain(&updated))
    }

    /// Apply the supplied fields over the stored product and re-validate the whole record
    pub async fn update_product_partial(&self, id: i64, patch: ProductPatch) -> Result<ProductDto> {
        if patch.is_empty() {
            return Err(AppError::validation("No fields provided for update"));
        }

        let current = self
            .product_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Product with ID {} not found", id)))?;

        let product = ProductDto::from_domain(&current).merged(patch).to_domain()?;

        let updated = self.product_repo.update(product).await?;
        info!(product_id = id, "Product partially updated");

        Ok(ProductDto::from_domain(&updated))
    }

    pub async fn update_product_price(&self, id: i64, price: Decimal) -> Result<ProductDto> {
        let mut product = self
            .product_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Product with ID {} not found", id)))?;

        product.update_price(price)?;

        let updated = self.product_repo.update(product).await?;
        info!(product_id = id, price = %price, "Product price changed");

        Ok(ProductDto::from_domain(&updated))
    }

    /// Returns `false` when no product had this ID
    pub async fn delete_product(&self, id: i64) -> Result<bool> {
        let deleted = self.product_repo.delete_by_id(id).await?;
        if deleted {
            info!(product_id = id, "Product deleted");
        } else {
            warn!(product_id = id, "Delete requested for unknown product");
        }

        Ok(deleted)
    }

    /// Take a product off sale without removing it
    pub async fn deactivate_product(&self, id: i64) -> Result<ProductDto> {
        let mut product = self
            .product_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Product with ID {} not found", id)))?;

        if !product.deactivate() {
            return Ok(ProductDto::from_domain(&product));
        }

        let updated = self.product_repo.update(product).await?;
        info!(product_id = id, "Product deactivated");

        Ok(ProductDto::from_domain(&updated))
    }
}
