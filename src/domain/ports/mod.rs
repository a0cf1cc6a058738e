//! Capability traits consumed by the service layer and implemented by
//! the adapters.

pub mod category_repository;
pub mod product_repository;
pub mod report_cache;
pub mod report_repository;

pub use category_repository::CategoryRepository;
pub use product_repository::ProductRepository;
pub use report_cache::ReportCache;
pub use report_repository::ReportRepository;
