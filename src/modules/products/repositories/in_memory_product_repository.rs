use async_trait::async_trait;

use crate::core::traits::Repository;
use crate::core::{InMemoryTable, Result};
use crate::modules::products::models::{Product, ProductStatus};

use super::product_repository::ProductRepository;

/// In-memory product repository
#[derive(Debug)]
pub struct InMemoryProductRepository {
    table: InMemoryTable<Product>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self {
            table: InMemoryTable::new("Product"),
        }
    }
}

#[async_trait]
impl Repository<Product, i64> for InMemoryProductRepository {
    async fn create(&self, product: Product) -> Result<Product> {
        self.table.write()?.insert(product)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>> {
        Ok(self.table.read()?.get(id))
    }

    async fn find_all(&self) -> Result<Vec<Product>> {
        Ok(self.table.read()?.values().cloned().collect())
    }

    async fn list(&self, limit: Option<u32>, offset: Option<u32>) -> Result<Vec<Product>> {
        Ok(self.table.read()?.page(limit, offset))
    }

    async fn update(&self, product: Product) -> Result<Product> {
        self.table.write()?.replace(product)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool> {
        Ok(self.table.write()?.remove(id))
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.table.read()?.len())
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_by_status(
        &self,
        status: ProductStatus,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Vec<Product>> {
        let state = self.table.read()?;
        let offset = offset.unwrap_or(0) as usize;
        let limit = limit.map(|l| l as usize).unwrap_or(usize::MAX);

        let products = state
            .values()
            .filter(|p| p.status() == status)
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();
        Ok(products)
    }
}
