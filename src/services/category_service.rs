//! Category service implementing CRUD business logic.

use std::sync::Arc;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::Category;
use crate::domain::ports::CategoryRepository;

pub struct CategoryService<R: CategoryRepository> {
    repository: Arc<R>,
}

impl<R: CategoryRepository> CategoryService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn create_category(&self, category: Category) -> DomainResult<Category> {
        category.validate().map_err(DomainError::ValidationFailed)?;
        let id = self.repository.create(&category).await?;
        self.get_category(id).await
    }

    pub async fn get_category(&self, id: i64) -> DomainResult<Category> {
        self.repository
            .get(id)
            .await?
            .ok_or(DomainError::CategoryNotFound(id))
    }

    pub async fn list_categories(&self) -> DomainResult<Vec<Category>> {
        self.repository.list().await
    }

    pub async fn update_category(&self, id: i64, mut category: Category) -> DomainResult<Category> {
        category.id = id;
        category.validate().map_err(DomainError::ValidationFailed)?;
        self.repository.update(&category).await?;
        self.get_category(id).await
    }

    pub async fn delete_category(&self, id: i64) -> DomainResult<()> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sqlite::{create_migrated_test_pool, SqliteCategoryRepository};

    async fn setup() -> CategoryService<SqliteCategoryRepository> {
        let pool = create_migrated_test_pool().await.unwrap();
        CategoryService::new(Arc::new(SqliteCategoryRepository::new(pool)))
    }

    #[tokio::test]
    async fn test_create_validates_name_length() {
        let service = setup().await;
        assert!(matches!(
            service.create_category(Category::new("x", "")).await,
            Err(DomainError::ValidationFailed(_))
        ));

        let created = service
            .create_category(Category::new("Garden", "Outdoor goods"))
            .await
            .unwrap();
        assert!(created.id > 0);
    }

    #[tokio::test]
    async fn test_update_roundtrip() {
        let service = setup().await;
        let created = service.create_category(Category::new("Tools", "")).await.unwrap();

        let updated = service
            .update_category(created.id, Category::new("Power Tools", "Mains powered"))
            .await
            .unwrap();
        assert_eq!(updated.name, "Power Tools");
        assert_eq!(updated.id, created.id);
    }
}
