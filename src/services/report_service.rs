//! Report orchestration: cache-aside around the aggregate query executor.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::errors::DomainResult;
use crate::domain::models::{ProductReport, ReportFilter, ReportPage, ReportSort};
use crate::domain::ports::{ReportCache, ReportRepository};

/// Cache key for a report. Carries only the page coordinates: requests
/// that differ only in filter or sort share one entry until it expires.
fn cache_key(page: ReportPage) -> String {
    format!("product_report_{}_page_size{}", page.page, page.page_size)
}

pub struct ReportService<R: ReportRepository, C: ReportCache> {
    repository: Arc<R>,
    cache: Arc<C>,
}

impl<R: ReportRepository, C: ReportCache> ReportService<R, C> {
    pub fn new(repository: Arc<R>, cache: Arc<C>) -> Self {
        Self { repository, cache }
    }

    /// Generate the product report, serving from cache when possible.
    ///
    /// On a miss the report is computed with the strategy selected by
    /// `parallel`, stored best-effort, and returned. A cached entry that
    /// fails to decode aborts the request; a failed store does not.
    pub async fn generate_report(
        &self,
        filter: &ReportFilter,
        sort: &ReportSort,
        page: ReportPage,
        parallel: bool,
    ) -> DomainResult<ProductReport> {
        let key = cache_key(page);

        if let Some(cached) = self.cache.get(&key).await? {
            if !cached.is_empty() {
                debug!(%key, "report cache hit");
                return Ok(serde_json::from_str(&cached)?);
            }
        }

        debug!(%key, parallel, "report cache miss, generating");
        let report = if parallel {
            self.repository.generate_parallel(filter, sort, page).await?
        } else {
            self.repository.generate(filter, sort, page).await?
        };

        let encoded = serde_json::to_string(&report)?;
        if let Err(err) = self.cache.put(&key, encoded).await {
            warn!(%key, error = %err, "failed to store report in cache");
        }

        Ok(report)
    }
}
