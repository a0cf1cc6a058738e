//! In-memory caching layer behind the `ReportCache` port.
//!
//! Uses `moka` for TTL-based concurrent caching.

pub mod report_cache;

pub use report_cache::MokaReportCache;
