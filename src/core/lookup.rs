use crate::core::normalizer::normalize_with_id;
use crate::domain::model::NormalizedPerson;
use crate::domain::ports::PeopleSource;
use crate::utils::error::{Result, StarwError};

/// Fetches a single person directly by id, without pagination.
pub struct SingleLookup<'a> {
    source: &'a dyn PeopleSource,
    collection_url: &'a str,
}

impl<'a> SingleLookup<'a> {
    pub fn new(source: &'a dyn PeopleSource, collection_url: &'a str) -> Self {
        Self {
            source,
            collection_url,
        }
    }

    pub fn person_url(&self, id: u32) -> String {
        format!("{}{}/", self.collection_url, id)
    }

    /// The returned id is the requested one, not re-derived from the record's self-URL.
    pub async fn fetch_one(&self, id: u32) -> Result<NormalizedPerson> {
        let url = self.person_url(id);
        tracing::debug!("Fetching person {} from {}", id, url);

        match self.source.fetch_person(&url).await? {
            Some(raw) => Ok(normalize_with_id(raw, id.to_string())),
            None => Err(StarwError::not_found(format!(
                "Person with id: {} was not found!",
                id
            ))),
        }
    }
}
