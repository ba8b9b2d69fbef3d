use crate::domain::model::{RawPage, RawRecord};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Settings the service and server read, whatever layer they come from.
pub trait ConfigProvider: Send + Sync {
    fn upstream_base_url(&self) -> &str;
    fn collection(&self) -> &str;
    fn bind_address(&self) -> &str;
    fn max_pages(&self) -> Option<u32>;
    fn request_timeout(&self) -> Option<Duration>;
}

/// Upstream people data source.
///
/// `Ok(None)` means the upstream answered without a usable body. Transport
/// failures, non-success statuses and undecodable payloads are errors.
#[async_trait]
pub trait PeopleSource: Send + Sync {
    async fn fetch_page(&self, url: &str) -> Result<Option<RawPage>>;
    async fn fetch_person(&self, url: &str) -> Result<Option<RawRecord>>;
}
