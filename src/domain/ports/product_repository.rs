//! Product repository port.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{Product, ProductPage, ReportPage};

/// Repository interface for Product persistence.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Create a new product, returning its assigned id.
    async fn create(&self, product: &Product) -> DomainResult<i64>;

    /// Get a product by id, with its category resolved when present.
    async fn get(&self, id: i64) -> DomainResult<Option<Product>>;

    /// List one page of products with categories resolved.
    async fn list_page(&self, page: ReportPage) -> DomainResult<ProductPage>;

    /// Overwrite an existing product.
    async fn update(&self, product: &Product) -> DomainResult<()>;

    /// Delete a product by id.
    async fn delete(&self, id: i64) -> DomainResult<()>;
}
