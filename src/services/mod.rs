//! Service layer: business logic over the ports.

pub mod category_service;
pub mod product_service;
pub mod report_service;

pub use category_service::CategoryService;
pub use product_service::ProductService;
pub use report_service::ReportService;
