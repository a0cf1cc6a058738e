//! Product service implementing CRUD business logic.

use std::sync::Arc;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Product, ProductPage, ProductPatch, ReportPage};
use crate::domain::ports::ProductRepository;

pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Create a product after validation, returning it with its assigned
    /// id and resolved category.
    pub async fn create_product(&self, product: Product) -> DomainResult<Product> {
        product.validate().map_err(DomainError::ValidationFailed)?;
        let id = self.repository.create(&product).await?;
        self.repository
            .get(id)
            .await?
            .ok_or(DomainError::ProductNotFound(id))
    }

    pub async fn get_product(&self, id: i64) -> DomainResult<Product> {
        self.repository
            .get(id)
            .await?
            .ok_or(DomainError::ProductNotFound(id))
    }

    pub async fn list_products(&self, page: ReportPage) -> DomainResult<ProductPage> {
        self.repository.list_page(page).await
    }

    /// Apply a partial update: only the fields present in the patch
    /// overwrite the stored product, and the result is revalidated.
    pub async fn update_product(&self, id: i64, patch: ProductPatch) -> DomainResult<Product> {
        let mut product = self.get_product(id).await?;
        patch.apply_to(&mut product);
        product.validate().map_err(DomainError::ValidationFailed)?;

        self.repository.update(&product).await?;
        self.get_product(id).await
    }

    pub async fn delete_product(&self, id: i64) -> DomainResult<()> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sqlite::{create_migrated_test_pool, SqliteProductRepository};

    async fn setup() -> ProductService<SqliteProductRepository> {
        let pool = create_migrated_test_pool().await.unwrap();
        ProductService::new(Arc::new(SqliteProductRepository::new(pool)))
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_product() {
        let service = setup().await;
        let err = service
            .create_product(Product::new("ab", "", -1.0, None, 1, true))
            .await
            .unwrap_err();
        match err {
            DomainError::ValidationFailed(errors) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation failure, got {other}"),
        }
    }

    #[tokio::test]
    async fn test_partial_update_keeps_other_fields() {
        let service = setup().await;
        let created = service
            .create_product(Product::new("Widget", "original", 5.0, None, 7, true))
            .await
            .unwrap();

        let patch = ProductPatch {
            stock_quantity: Some(3),
            ..Default::default()
        };
        let updated = service.update_product(created.id, patch).await.unwrap();

        assert_eq!(updated.stock_quantity, 3);
        assert_eq!(updated.name, "Widget");
        assert_eq!(updated.description, "original");
        assert_eq!(updated.price, 5.0);
    }

    #[tokio::test]
    async fn test_update_revalidates_merged_product() {
        let service = setup().await;
        let created = service
            .create_product(Product::new("Widget", "", 5.0, None, 7, true))
            .await
            .unwrap();

        let patch = ProductPatch {
            price: Some(0.0),
            ..Default::default()
        };
        assert!(matches!(
            service.update_product(created.id, patch).await,
            Err(DomainError::ValidationFailed(_))
        ));
    }

    #[tokio::test]
    async fn test_get_missing_product() {
        let service = setup().await;
        assert!(matches!(
            service.get_product(404).await,
            Err(DomainError::ProductNotFound(404))
        ));
    }
}
