//! Domain models for the catalog service.

pub mod category;
pub mod config;
pub mod product;
pub mod report;

pub use category::Category;
pub use config::{CacheConfig, Config, DatabaseConfig, LoggingConfig, ServerConfig};
pub use product::{Product, ProductPage, ProductPatch};
pub use report::{ProductReport, ReportFilter, ReportPage, ReportSort, SortColumn, SortDirection};
