//! SQLite implementation of the ReportRepository.
//!
//! Four queries back the product report: matching count, stock sum,
//! average price, and the detail page. The filter translates into an
//! AND-ed WHERE clause built from string fragments with positional
//! bindings; each query builds its own copy of the clause, so the
//! parallel strategy shares nothing mutable between workers.

use async_trait::async_trait;
use sqlx::SqlitePool;
use tokio::task::JoinError;

use super::product_repository::{ProductRow, PRODUCT_SELECT};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Product, ProductReport, ReportFilter, ReportPage, ReportSort};
use crate::domain::ports::ReportRepository;

#[derive(Clone)]
pub struct SqliteReportRepository {
    pool: SqlitePool,
}

impl SqliteReportRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn count(&self, filter: &ReportFilter) -> DomainResult<i64> {
        let (clause, bindings) = build_where(filter);
        let query = format!("SELECT COUNT(*) FROM products p{clause}");
        let mut q = sqlx::query_scalar::<_, i64>(&query);
        for binding in &bindings {
            q = q.bind(binding);
        }
        Ok(q.fetch_one(&self.pool).await?)
    }

    async fn stock_sum(&self, filter: &ReportFilter) -> DomainResult<i64> {
        let (clause, bindings) = build_where(filter);
        let query = format!("SELECT COALESCE(SUM(p.stock_quantity), 0) FROM products p{clause}");
        let mut q = sqlx::query_scalar::<_, i64>(&query);
        for binding in &bindings {
            q = q.bind(binding);
        }
        Ok(q.fetch_one(&self.pool).await?)
    }

    async fn avg_price(&self, filter: &ReportFilter) -> DomainResult<f64> {
        let (clause, bindings) = build_where(filter);
        let query = format!("SELECT COALESCE(AVG(p.price), 0.0) FROM products p{clause}");
        let mut q = sqlx::query_scalar::<_, f64>(&query);
        for binding in &bindings {
            q = q.bind(binding);
        }
        Ok(q.fetch_one(&self.pool).await?)
    }

    async fn detail_page(
        &self,
        filter: &ReportFilter,
        sort: &ReportSort,
        page: ReportPage,
    ) -> DomainResult<Vec<Product>> {
        let (clause, bindings) = build_where(filter);
        let query = format!(
            "{PRODUCT_SELECT}{clause}{order} LIMIT ? OFFSET ?",
            order = build_order(sort)
        );

        let mut q = sqlx::query_as::<_, ProductRow>(&query);
        for binding in &bindings {
            q = q.bind(binding);
        }
        let rows = q.bind(page.page_size).bind(page.offset()).fetch_all(&self.pool).await?;

        rows.into_iter().map(|r| r.try_into()).collect()
    }
}

#[async_trait]
impl ReportRepository for SqliteReportRepository {
    async fn generate(
        &self,
        filter: &ReportFilter,
        sort: &ReportSort,
        page: ReportPage,
    ) -> DomainResult<ProductReport> {
        let total_products = self.count(filter).await?;
        let total_stock = self.stock_sum(filter).await?;
        let avg_price = self.avg_price(filter).await?;
        let products = self.detail_page(filter, sort, page).await?;

        Ok(ProductReport {
            total_products,
            total_stock,
            avg_price,
            products,
        })
    }

    async fn generate_parallel(
        &self,
        filter: &ReportFilter,
        sort: &ReportSort,
        page: ReportPage,
    ) -> DomainResult<ProductReport> {
        let count_task = tokio::spawn({
            let repo = self.clone();
            let filter = filter.clone();
            async move { repo.count(&filter).await }
        });
        let stock_task = tokio::spawn({
            let repo = self.clone();
            let filter = filter.clone();
            async move { repo.stock_sum(&filter).await }
        });
        let avg_task = tokio::spawn({
            let repo = self.clone();
            let filter = filter.clone();
            async move { repo.avg_price(&filter).await }
        });
        let detail_task = tokio::spawn({
            let repo = self.clone();
            let filter = filter.clone();
            let sort = *sort;
            async move { repo.detail_page(&filter, &sort, page).await }
        });

        // Join barrier: all four workers finish before any result is
        // inspected, then the first error wins. Never a partial report.
        let (count, stock, avg, detail) =
            tokio::join!(count_task, stock_task, avg_task, detail_task);

        Ok(ProductReport {
            total_products: flatten(count)?,
            total_stock: flatten(stock)?,
            avg_price: flatten(avg)?,
            products: flatten(detail)?,
        })
    }
}

fn flatten<T>(joined: Result<DomainResult<T>, JoinError>) -> DomainResult<T> {
    joined.map_err(|e| DomainError::ExecutionFailed(format!("report worker panicked: {e}")))?
}

/// Build the WHERE clause for a filter. Bindings are carried as strings
/// and coerced by column affinity, one per `?` in order of appearance.
fn build_where(filter: &ReportFilter) -> (String, Vec<String>) {
    let mut clause = String::from(" WHERE 1=1");
    let mut bindings = Vec::new();

    if let Some(name) = &filter.name {
        clause.push_str(" AND p.name LIKE ?");
        bindings.push(format!("%{name}%"));
    }
    if let Some(category_id) = filter.category_id {
        clause.push_str(" AND p.category_id = ?");
        bindings.push(category_id.to_string());
    }
    if let Some(min_price) = filter.min_price {
        clause.push_str(" AND p.price >= ?");
        bindings.push(min_price.to_string());
    }
    if let Some(max_price) = filter.max_price {
        clause.push_str(" AND p.price <= ?");
        bindings.push(max_price.to_string());
    }
    if let Some(min_stock) = filter.min_stock {
        clause.push_str(" AND p.stock_quantity >= ?");
        bindings.push(min_stock.to_string());
    }
    if let Some(max_stock) = filter.max_stock {
        clause.push_str(" AND p.stock_quantity <= ?");
        bindings.push(max_stock.to_string());
    }

    (clause, bindings)
}

/// Build the ORDER BY clause. A sort without a valid column yields no
/// explicit ordering at all.
fn build_order(sort: &ReportSort) -> String {
    match sort.column {
        Some(column) => format!(" ORDER BY p.{} {}", column.as_str(), sort.direction.as_sql()),
        None => String::new(),
    }
}
