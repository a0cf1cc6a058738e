//! SQLite implementation of the CategoryRepository.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::Category;
use crate::domain::ports::CategoryRepository;

#[derive(Clone)]
pub struct SqliteCategoryRepository {
    pool: SqlitePool,
}

impl SqliteCategoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for SqliteCategoryRepository {
    async fn create(&self, category: &Category) -> DomainResult<i64> {
        let result = sqlx::query("INSERT INTO categories (name, description) VALUES (?, ?)")
            .bind(&category.name)
            .bind(&category.description)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    async fn get(&self, id: i64) -> DomainResult<Option<Category>> {
        let row: Option<CategoryRow> =
            sqlx::query_as("SELECT id, name, description FROM categories WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(Category::from))
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let rows: Vec<CategoryRow> =
            sqlx::query_as("SELECT id, name, description FROM categories ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn update(&self, category: &Category) -> DomainResult<()> {
        let result = sqlx::query("UPDATE categories SET name = ?, description = ? WHERE id = ?")
            .bind(&category.name)
            .bind(&category.description)
            .bind(category.id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CategoryNotFound(category.id));
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CategoryNotFound(id));
        }

        Ok(())
    }
}

#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    description: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category {
            id: row.id,
            name: row.name,
            description: row.description,
        }
    }
}
