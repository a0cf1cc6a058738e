//! HTTP layer: router, handlers and error mapping.

pub mod categories;
pub mod error;
pub mod products;
pub mod reports;

use axum::routing::{get, post};
use axum::Router;
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;

use crate::adapters::cache::MokaReportCache;
use crate::adapters::sqlite::{
    SqliteCategoryRepository, SqliteProductRepository, SqliteReportRepository,
};
use crate::domain::models::Config;
use crate::services::{CategoryService, ProductService, ReportService};

/// Shared handler state. Services are wired here by constructor
/// injection: repositories over the pool, the report cache from config.
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<ProductService<SqliteProductRepository>>,
    pub categories: Arc<CategoryService<SqliteCategoryRepository>>,
    pub reports: Arc<ReportService<SqliteReportRepository, MokaReportCache>>,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: &Config) -> Self {
        let cache = Arc::new(MokaReportCache::new(
            Duration::from_secs(config.cache.report_ttl_secs),
            config.cache.max_entries,
        ));

        Self {
            products: Arc::new(ProductService::new(Arc::new(SqliteProductRepository::new(
                pool.clone(),
            )))),
            categories: Arc::new(CategoryService::new(Arc::new(
                SqliteCategoryRepository::new(pool.clone()),
            ))),
            reports: Arc::new(ReportService::new(
                Arc::new(SqliteReportRepository::new(pool)),
                cache,
            )),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/products", post(products::create).get(products::list))
        .route(
            "/products/:id",
            get(products::get).put(products::update).delete(products::remove),
        )
        .route("/categories", post(categories::create).get(categories::list))
        .route(
            "/categories/:id",
            get(categories::get)
                .put(categories::update)
                .delete(categories::remove),
        )
        .route("/reports/products", get(reports::product_report))
        .with_state(state)
}
