//! Report repository port.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{ProductReport, ReportFilter, ReportPage, ReportSort};

/// Aggregate query executor for the product report.
///
/// Both methods return the same report for the same inputs; they differ
/// only in how the four underlying queries (count, stock sum, average
/// price, detail page) are issued. The result is all-or-nothing: any
/// query failure fails the whole call, never a partial report.
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Issue the four queries one after another.
    async fn generate(
        &self,
        filter: &ReportFilter,
        sort: &ReportSort,
        page: ReportPage,
    ) -> DomainResult<ProductReport>;

    /// Issue the four queries as parallel workers over the shared pool,
    /// joining all of them before surfacing the first error, if any.
    async fn generate_parallel(
        &self,
        filter: &ReportFilter,
        sort: &ReportSort,
        page: ReportPage,
    ) -> DomainResult<ProductReport>;
}
