//! Category repository port.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::Category;

/// Repository interface for Category persistence.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Create a new category, returning its assigned id.
    async fn create(&self, category: &Category) -> DomainResult<i64>;

    /// Get a category by id.
    async fn get(&self, id: i64) -> DomainResult<Option<Category>>;

    /// List all categories.
    async fn list(&self) -> DomainResult<Vec<Category>>;

    /// Overwrite an existing category.
    async fn update(&self, category: &Category) -> DomainResult<()>;

    /// Delete a category by id.
    async fn delete(&self, id: i64) -> DomainResult<()>;
}
