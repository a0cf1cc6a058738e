//! Stockroom - product/category catalog service with cached reporting.
//!
//! CRUD endpoints over a SQLite store plus an aggregate product report
//! (count, stock sum, average price, detail page) that can run its four
//! queries sequentially or in parallel and is served cache-aside with a
//! short TTL.
//!
//! # Architecture
//!
//! - **Domain** (`domain`): models, capability ports, errors
//! - **Adapters** (`adapters`): SQLite repositories, moka report cache
//! - **Services** (`services`): business logic and the report orchestrator
//! - **API** (`api`): axum router and handlers
//! - **Infrastructure** (`infrastructure`): configuration loading

pub mod adapters;
pub mod api;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::{
    Category, Config, Product, ProductPage, ProductPatch, ProductReport, ReportFilter,
    ReportPage, ReportSort, SortColumn, SortDirection,
};
pub use domain::ports::{CategoryRepository, ProductRepository, ReportCache, ReportRepository};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{CategoryService, ProductService, ReportService};
