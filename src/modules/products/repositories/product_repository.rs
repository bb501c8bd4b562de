// ProductRepository contract and its MySQL implementation

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{FromRow, MySqlPool};

use crate::core::traits::{Identifiable, Repository};
use crate::core::{AppError, Result};
use crate::modules::products::models::{Product, ProductStatus};

/// Persistence operations for products beyond basic CRUD
#[async_trait]
pub trait ProductRepository: Repository<Product, i64> {
    async fn find_by_status(
        &self,
        status: ProductStatus,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Vec<Product>>;
}

/// Row model for the `products` table
#[derive(Debug, Clone, FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    price: Decimal,
    description: Option<String>,
    status: String,
}

impl ProductRow {
    fn into_domain(self) -> Result<Product> {
        let status: ProductStatus = self.status.parse().map_err(|_| {
            AppError::internal(format!(
                "Product {} has unknown stored status '{}'",
                self.id, self.status
            ))
        })?;

        // DECIMAL(20,6) pads the scale; normalize so 1.50 reads back as 1.5
        Ok(Product::restore(
            self.id,
            self.name,
            self.price.normalize(),
            self.description,
            status,
        ))
    }
}

fn rows_into_domain(rows: Vec<ProductRow>) -> Result<Vec<Product>> {
    rows.into_iter().map(ProductRow::into_domain).collect()
}

/// MySQL-backed product repository
#[derive(Clone)]
pub struct MySqlProductRepository {
    pool: MySqlPool,
}

impl MySqlProductRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Product, i64> for MySqlProductRepository {
    async fn create(&self, product: Product) -> Result<Product> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO products (id, name, price, description, status)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(product.id())
        .bind(product.name())
        .bind(product.price())
        .bind(product.description())
        .bind(product.status().as_str())
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            AppError::from_write(e, || {
                format!("Product with ID {:?} already exists", product.id())
            })
        })?;

        tx.commit().await?;

        let id = match product.id() {
            Some(id) => id,
            None => i64::try_from(result.last_insert_id())
                .map_err(|_| AppError::internal("Generated product ID out of range"))?,
        };

        tracing::debug!(product_id = id, "Product row inserted");
        Ok(product.assign_id(id))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, price, description, status FROM products WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(ProductRow::into_domain).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, price, description, status FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        rows_into_domain(rows)
    }

    async fn list(&self, limit: Option<u32>, offset: Option<u32>) -> Result<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, price, description, status
            FROM products
            ORDER BY id
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(limit.map(i64::from).unwrap_or(i64::MAX))
        .bind(offset.map(i64::from).unwrap_or(0))
        .fetch_all(&self.pool)
        .await?;

        rows_into_domain(rows)
    }

    async fn update(&self, product: Product) -> Result<Product> {
        let id = product
            .id()
            .ok_or_else(|| AppError::validation("Product ID is required for update"))?;

        let mut tx = self.pool.begin().await?;

        let existing: Option<i64> =
            sqlx::query_scalar("SELECT id FROM products WHERE id = ? FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        if existing.is_none() {
            return Err(AppError::not_found(format!("Product with ID {} not found", id)));
        }

        sqlx::query(
            r#"
            UPDATE products
            SET name = ?, price = ?, description = ?, status = ?
            WHERE id = ?
            "#,
        )
        .bind(product.name())
        .bind(product.price())
        .bind(product.description())
        .bind(product.status().as_str())
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(total.max(0) as u64)
    }
}

#[async_trait]
impl ProductRepository for MySqlProductRepository {
    async fn find_by_status(
        &self,
        status: ProductStatus,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, price, description, status
            FROM products
            WHERE status = ?
            ORDER BY id
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(status.as_str())
        .bind(limit.map(i64::from).unwrap_or(i64::MAX))
        .bind(offset.map(i64::from).unwrap_or(0))
        .fetch_all(&self.pool)
        .await?;

        rows_into_domain(rows)
    }
}
