use crate::domain::model::{RawPage, RawRecord};
use crate::domain::ports::PeopleSource;
use crate::utils::error::{Result, StarwError};
use futures::stream::{self, Stream, TryStreamExt};

enum Cursor {
    Page(u32),
    Exhausted,
}

/// Walks a server-paginated collection one page at a time.
///
/// Page 1 is the collection URL itself; page N is `{collection}?page=N`.
/// The walk continues while the previous page carried a `next` reference.
pub struct PageWalker<'a> {
    source: &'a dyn PeopleSource,
    collection_url: &'a str,
    max_pages: Option<u32>,
}

impl<'a> PageWalker<'a> {
    pub fn new(source: &'a dyn PeopleSource, collection_url: &'a str) -> Self {
        Self {
            source,
            collection_url,
            max_pages: None,
        }
    }

    pub fn with_max_pages(mut self, max_pages: Option<u32>) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Lazily fetches pages in order. Each page is requested only after the
    /// previous one has been received.
    pub fn pages(&self) -> impl Stream<Item = Result<RawPage>> + 'a {
        self.pages_from(1)
    }

    fn pages_from(&self, first: u32) -> impl Stream<Item = Result<RawPage>> + 'a {
        let source = self.source;
        let collection_url = self.collection_url;
        let max_pages = self.max_pages;

        stream::try_unfold(Cursor::Page(first), move |cursor| async move {
            let number = match cursor {
                Cursor::Page(number) => number,
                Cursor::Exhausted => return Ok(None),
            };

            if let Some(limit) = max_pages {
                if number > limit {
                    tracing::warn!("Stopping walk of {} after {} pages", collection_url, limit);
                    return Err(StarwError::PageLimitExceeded {
                        url: collection_url.to_string(),
                        limit,
                    });
                }
            }

            let url = page_url(collection_url, number);
            tracing::debug!("Fetching page {}: {}", number, url);

            let page = match source.fetch_page(&url).await? {
                Some(page) => page,
                None if number == 1 => {
                    return Err(StarwError::not_found(format!(
                        "No people collection found at {}",
                        collection_url
                    )))
                }
                None => return Err(StarwError::EmptyPage { page: number }),
            };

            tracing::debug!(
                "Page {} returned {} records of {:?} (next: {:?})",
                number,
                page.results.len(),
                page.count,
                page.next
            );

            let cursor = if !page.has_next() {
                Cursor::Exhausted
            } else {
                match number.checked_add(1) {
                    Some(next) => Cursor::Page(next),
                    None => {
                        return Err(StarwError::PageLimitExceeded {
                            url: collection_url.to_string(),
                            limit: number,
                        })
                    }
                }
            };
            Ok(Some((page, cursor)))
        })
    }

    /// Collects every record of every page, or nothing at all if any page fails.
    pub async fn walk(&self) -> Result<Vec<RawRecord>> {
        self.pages()
            .try_fold(Vec::new(), |mut records, page| async move {
                records.extend(page.results);
                Ok::<_, StarwError>(records)
            })
            .await
    }
}

fn page_url(collection_url: &str, number: u32) -> String {
    if number <= 1 {
        collection_url.to_string()
    } else {
        format!("{}?page={}", collection_url, number)
    }
}
