//! Report cache port.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;

/// Key-value store for serialized reports. Entries expire after the
/// implementation's fixed TTL.
#[async_trait]
pub trait ReportCache: Send + Sync {
    /// Look up a cached value; `None` on a miss or after expiry.
    async fn get(&self, key: &str) -> DomainResult<Option<String>>;

    /// Store a value under `key` for the cache's TTL.
    async fn put(&self, key: &str, value: String) -> DomainResult<()>;
}
