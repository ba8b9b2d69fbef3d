use crate::core::lookup::SingleLookup;
use crate::core::normalizer::normalize;
use crate::core::page_walker::PageWalker;
use crate::domain::model::NormalizedPerson;
use crate::domain::ports::{ConfigProvider, PeopleSource};
use crate::utils::error::Result;
use std::sync::Arc;

/// Listing and lookup over one upstream collection.
///
/// Holds only the injected source and immutable settings, so one instance
/// can serve concurrent requests.
#[derive(Clone)]
pub struct PeopleService {
    source: Arc<dyn PeopleSource>,
    collection_url: String,
    max_pages: Option<u32>,
}

impl PeopleService {
    pub fn new(source: Arc<dyn PeopleSource>, base_url: &str, collection: &str) -> Self {
        Self {
            source,
            collection_url: collection_url(base_url, collection),
            max_pages: None,
        }
    }

    pub fn from_config<C: ConfigProvider>(source: Arc<dyn PeopleSource>, config: &C) -> Self {
        Self::new(source, config.upstream_base_url(), config.collection())
            .with_max_pages(config.max_pages())
    }

    pub fn with_max_pages(mut self, max_pages: Option<u32>) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub async fn list_people(&self) -> Result<Vec<NormalizedPerson>> {
        tracing::info!("Listing people from {}", self.collection_url);

        let records = PageWalker::new(self.source.as_ref(), &self.collection_url)
            .with_max_pages(self.max_pages)
            .walk()
            .await?;

        let people: Vec<NormalizedPerson> = records.into_iter().map(normalize).collect();
        tracing::info!("Listed {} people", people.len());
        Ok(people)
    }

    pub async fn get_person(&self, id: u32) -> Result<NormalizedPerson> {
        tracing::info!("Looking up person {}", id);
        SingleLookup::new(self.source.as_ref(), &self.collection_url)
            .fetch_one(id)
            .await
    }
}

/// `{base}/{collection}/`, tolerating a trailing slash on either part.
pub fn collection_url(base_url: &str, collection: &str) -> String {
    format!(
        "{}/{}/",
        base_url.trim_end_matches('/'),
        collection.trim_matches('/')
    )
}
