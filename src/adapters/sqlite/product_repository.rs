//! SQLite implementation of the ProductRepository.

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::parse_datetime;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Category, Product, ProductPage, ReportPage};
use crate::domain::ports::ProductRepository;

/// Detail select shared with the report repository: product columns plus
/// the left-joined category, so a dangling reference surfaces as NULLs.
pub(crate) const PRODUCT_SELECT: &str = "SELECT p.id, p.name, p.description, p.price, \
     p.category_id, p.stock_quantity, p.is_active, p.created_at, p.updated_at, \
     c.id AS cat_id, c.name AS cat_name, c.description AS cat_description \
     FROM products p LEFT JOIN categories c ON c.id = p.category_id";

#[derive(Clone)]
pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn create(&self, product: &Product) -> DomainResult<i64> {
        let result = sqlx::query(
            r#"INSERT INTO products (name, description, price, category_id, stock_quantity, is_active, created_at, updated_at)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.category_id)
        .bind(product.stock_quantity)
        .bind(product.is_active)
        .bind(product.created_at.to_rfc3339())
        .bind(product.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn get(&self, id: i64) -> DomainResult<Option<Product>> {
        let row: Option<ProductRow> =
            sqlx::query_as(&format!("{PRODUCT_SELECT} WHERE p.id = ?"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        row.map(|r| r.try_into()).transpose()
    }

    async fn list_page(&self, page: ReportPage) -> DomainResult<ProductPage> {
        let rows: Vec<ProductRow> =
            sqlx::query_as(&format!("{PRODUCT_SELECT} ORDER BY p.id LIMIT ? OFFSET ?"))
                .bind(page.page_size)
                .bind(page.offset())
                .fetch_all(&self.pool)
                .await?;

        let products = rows
            .into_iter()
            .map(|r| r.try_into())
            .collect::<DomainResult<Vec<Product>>>()?;

        let total_items: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(ProductPage {
            products,
            page: page.page,
            total_items,
            total_pages: (total_items + page.page_size - 1) / page.page_size,
        })
    }

    async fn update(&self, product: &Product) -> DomainResult<()> {
        let result = sqlx::query(
            r#"UPDATE products SET name = ?, description = ?, price = ?, category_id = ?,
               stock_quantity = ?, is_active = ?, updated_at = ?
               WHERE id = ?"#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.category_id)
        .bind(product.stock_quantity)
        .bind(product.is_active)
        .bind(product.updated_at.to_rfc3339())
        .bind(product.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ProductNotFound(product.id));
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ProductNotFound(id));
        }

        Ok(())
    }
}

#[derive(sqlx::FromRow)]
pub(crate) struct ProductRow {
    id: i64,
    name: String,
    description: String,
    price: f64,
    category_id: Option<i64>,
    stock_quantity: i64,
    is_active: bool,
    created_at: String,
    updated_at: String,
    cat_id: Option<i64>,
    cat_name: Option<String>,
    cat_description: Option<String>,
}

impl TryFrom<ProductRow> for Product {
    type Error = DomainError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let category = match (row.cat_id, row.cat_name) {
            (Some(id), Some(name)) => Some(Category {
                id,
                name,
                description: row.cat_description.unwrap_or_default(),
            }),
            _ => None,
        };

        Ok(Product {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
            category_id: row.category_id,
            category,
            stock_quantity: row.stock_quantity,
            is_active: row.is_active,
            created_at: parse_datetime(&row.created_at)?,
            updated_at: parse_datetime(&row.updated_at)?,
        })
    }
}
