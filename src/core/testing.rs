//! In-memory upstream used by the core unit tests.

use crate::domain::model::{RawPage, RawRecord};
use crate::domain::ports::PeopleSource;
use crate::utils::error::{Result, StarwError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

enum Entry {
    Page(RawPage),
    Person(RawRecord),
    Failure,
}

#[derive(Default)]
pub struct FakeSource {
    entries: HashMap<String, Entry>,
    requests: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, page: RawPage) -> Self {
        self.entries.insert(url.to_string(), Entry::Page(page));
        self
    }

    pub fn with_person(mut self, url: &str, person: RawRecord) -> Self {
        self.entries.insert(url.to_string(), Entry::Person(person));
        self
    }

    pub fn with_failure(mut self, url: &str) -> Self {
        self.entries.insert(url.to_string(), Entry::Failure);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn record(&self, url: &str) -> Result<Option<&Entry>> {
        self.requests.lock().unwrap().push(url.to_string());
        match self.entries.get(url) {
            Some(Entry::Failure) => Err(StarwError::UpstreamStatus {
                url: url.to_string(),
                status: 500,
            }),
            other => Ok(other),
        }
    }
}

#[async_trait]
impl PeopleSource for FakeSource {
    async fn fetch_page(&self, url: &str) -> Result<Option<RawPage>> {
        match self.record(url)? {
            Some(Entry::Page(page)) => Ok(Some(page.clone())),
            _ => Ok(None),
        }
    }

    async fn fetch_person(&self, url: &str) -> Result<Option<RawRecord>> {
        match self.record(url)? {
            Some(Entry::Person(person)) => Ok(Some(person.clone())),
            _ => Ok(None),
        }
    }
}

pub fn person(id: u32) -> RawRecord {
    RawRecord {
        name: format!("Person {id}"),
        height: format!("{}", 150 + id),
        birth_year: Some(format!("{id}BBY")),
        url: format!("https://swapi.test/api/people/{id}/"),
    }
}

/// `next` is appended to the test collection URL when present.
pub fn page(ids: &[u32], next: Option<&str>) -> RawPage {
    RawPage {
        count: None,
        next: next.map(|query| format!("https://swapi.test/api/people/{query}")),
        results: ids.iter().copied().map(person).collect(),
    }
}
