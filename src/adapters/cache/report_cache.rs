//! moka-backed implementation of the ReportCache port.

use async_trait::async_trait;
use moka::future::Cache;
use std::time::Duration;

use crate::domain::errors::DomainResult;
use crate::domain::ports::ReportCache;

/// Default TTL for cached reports.
const REPORT_CACHE_TTL_SECS: u64 = 5;

/// Maximum number of cached report entries.
const REPORT_CACHE_MAX_CAPACITY: u64 = 1_000;

/// TTL cache for serialized reports. The lifetime is fixed at
/// construction; every entry expires that long after insertion.
pub struct MokaReportCache {
    entries: Cache<String, String>,
}

impl MokaReportCache {
    pub fn new(ttl: Duration, max_capacity: u64) -> Self {
        Self {
            entries: Cache::builder()
                .max_capacity(max_capacity)
                .time_to_live(ttl)
                .build(),
        }
    }
}

impl Default for MokaReportCache {
    fn default() -> Self {
        Self::new(
            Duration::from_secs(REPORT_CACHE_TTL_SECS),
            REPORT_CACHE_MAX_CAPACITY,
        )
    }
}

#[async_trait]
impl ReportCache for MokaReportCache {
    async fn get(&self, key: &str) -> DomainResult<Option<String>> {
        Ok(self.entries.get(key).await)
    }

    async fn put(&self, key: &str, value: String) -> DomainResult<()> {
        self.entries.insert(key.to_string(), value).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_roundtrip() {
        let cache = MokaReportCache::default();
        assert_eq!(cache.get("k").await.unwrap(), None);

        cache.put("k", "v".to_string()).await.unwrap();
        assert_eq!(cache.get("k").await.unwrap(), Some("v".to_string()));
    }

    #[tokio::test]
    async fn test_entries_expire_after_ttl() {
        let cache = MokaReportCache::new(Duration::from_millis(50), 10);
        cache.put("k", "v".to_string()).await.unwrap();

        tokio::time::sleep(Duration::from_millis(120)).await;
        assert_eq!(cache.get("k").await.unwrap(), None);
    }
}
