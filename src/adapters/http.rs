use crate::domain::model::{RawPage, RawRecord};
use crate::domain::ports::{ConfigProvider, PeopleSource};
use crate::utils::error::{Result, StarwError};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Upstream source backed by a shared reqwest client.
///
/// `Client` is a pooled handle; cloning the source shares the pool.
#[derive(Debug, Clone)]
pub struct HttpPeopleSource {
    client: Client,
}

impl HttpPeopleSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(concat!("starw/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::new(builder.build()?))
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::with_timeout(config.request_timeout())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<Option<T>> {
        tracing::debug!("Making upstream request to: {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        tracing::debug!("Upstream response status: {}", status);
        if !status.is_success() {
            return Err(StarwError::UpstreamStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            tracing::debug!("Upstream returned an empty body for {}", url);
            return Ok(None);
        }

        // A literal `null` body decodes to `None` as well.
        Ok(serde_json::from_slice::<Option<T>>(&body)?)
    }
}

#[async_trait]
impl PeopleSource for HttpPeopleSource {
    async fn fetch_page(&self, url: &str) -> Result<Option<RawPage>> {
        self.get_json(url).await
    }

    async fn fetch_person(&self, url: &str) -> Result<Option<RawRecord>> {
        self.get_json(url).await
    }
}
