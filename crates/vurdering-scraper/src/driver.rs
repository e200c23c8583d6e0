//! Pull-driven pagination over the registry's result pages.
//!
//! [`ValuationDriver::next`] drains an internal buffer holding one page of
//! records and fetches the following page only once that buffer is empty.
//! The last page pushes an explicit end-of-sequence marker behind its
//! records, so end-of-sequence is always the final item delivered.

use std::collections::VecDeque;

use futures::Stream;
use reqwest::Url;
use vurdering_core::{Query, Record, ScraperConfig};

use crate::error::ScraperError;
use crate::fetch::{HttpPageSource, PageSource};
use crate::parse::parse_page;
use crate::request::first_page_url;

#[derive(Debug)]
enum BufferedItem {
    Record(Record),
    EndOfSequence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DriverState {
    Active,
    Finished,
    Failed,
}

/// Yields every [`Record`] for one [`Query`], one page at a time.
///
/// `next` takes `&mut self`, so a driver never has more than one fetch in
/// flight and never prefetches. Dropping the driver drops any in-flight
/// request.
pub struct ValuationDriver<S> {
    source: S,
    pending: VecDeque<BufferedItem>,
    current_url: Url,
    state: DriverState,
    max_pages: usize,
    pages_fetched: usize,
    records_yielded: usize,
}

impl ValuationDriver<HttpPageSource> {
    /// Builds a driver that fetches over HTTP using `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidUrl`] if `config.base_url` is not an
    /// absolute URL, or [`ScraperError::Http`] if the HTTP client cannot be
    /// constructed.
    pub fn from_config(query: &Query, config: &ScraperConfig) -> Result<Self, ScraperError> {
        let source = HttpPageSource::new(config)?;
        Ok(Self::new(query, source, &config.base_url)?.with_max_pages(config.max_pages))
    }
}

impl<S: PageSource> ValuationDriver<S> {
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidUrl`] if `base_url` is not an absolute URL.
    pub fn new(query: &Query, source: S, base_url: &str) -> Result<Self, ScraperError> {
        let current_url = first_page_url(query, base_url)?;
        Ok(Self {
            source,
            pending: VecDeque::new(),
            current_url,
            state: DriverState::Active,
            max_pages: ScraperConfig::default().max_pages,
            pages_fetched: 0,
            records_yielded: 0,
        })
    }

    /// Caps the number of pages followed; reaching the cap fails with
    /// [`ScraperError::PaginationLimit`]. Values below 1 are raised to 1.
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    /// URL of the page that will be (or was last) fetched.
    #[must_use]
    pub fn current_url(&self) -> &Url {
        &self.current_url
    }

    #[must_use]
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// `true` once the sequence has ended or failed; no further I/O happens.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.state != DriverState::Active
    }

    /// Returns the next record, `Ok(None)` at end-of-sequence, or the error
    /// that ended the sequence.
    ///
    /// An error is returned once; every later call returns `Ok(None)`
    /// without fetching.
    ///
    /// # Errors
    ///
    /// Propagates transport errors from the [`PageSource`], page errors from
    /// [`parse_page`] and [`ScraperError::PaginationLimit`].
    pub async fn next(&mut self) -> Result<Option<Record>, ScraperError> {
        loop {
            if self.state != DriverState::Active {
                return Ok(None);
            }

            match self.pending.pop_front() {
                Some(BufferedItem::Record(record)) => {
                    self.records_yielded += 1;
                    return Ok(Some(record));
                }
                Some(BufferedItem::EndOfSequence) => {
                    self.state = DriverState::Finished;
                    tracing::info!(
                        pages = self.pages_fetched,
                        records = self.records_yielded,
                        "valuation sequence finished"
                    );
                    return Ok(None);
                }
                None => {}
            }

            if let Err(err) = self.fetch_next_page().await {
                self.state = DriverState::Failed;
                tracing::warn!(
                    url = %self.current_url,
                    pages = self.pages_fetched,
                    error = %err,
                    "valuation sequence failed"
                );
                return Err(err);
            }
        }
    }

    /// Fetches and parses `current_url`, then refills the buffer.
    ///
    /// The buffer is only touched after both steps succeed, so a cancelled
    /// or failed fetch leaves the driver where it was.
    async fn fetch_next_page(&mut self) -> Result<(), ScraperError> {
        if self.pages_fetched >= self.max_pages {
            return Err(ScraperError::PaginationLimit {
                max_pages: self.max_pages,
            });
        }

        tracing::debug!(url = %self.current_url, page = self.pages_fetched + 1, "fetching page");
        let html = self.source.fetch_page(&self.current_url).await?;
        self.pages_fetched += 1;
        let page = parse_page(&html, &self.current_url)?;

        self.pending
            .extend(page.records.into_iter().map(BufferedItem::Record));
        match page.next {
            Some(next) => self.current_url = next,
            None => self.pending.push_back(BufferedItem::EndOfSequence),
        }
        Ok(())
    }

    /// Drains the whole sequence.
    ///
    /// All-or-nothing: on error, records already received are discarded.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by [`Self::next`].
    pub async fn collect_all(mut self) -> Result<Vec<Record>, ScraperError> {
        let mut records = Vec::new();
        while let Some(record) = self.next().await? {
            records.push(record);
        }
        Ok(records)
    }

    /// Adapts the driver into a [`Stream`] that ends after end-of-sequence
    /// or after yielding its one error.
    pub fn into_stream(self) -> impl Stream<Item = Result<Record, ScraperError>> {
        futures::stream::unfold(self, |mut driver| async move {
            match driver.next().await {
                Ok(Some(record)) => Some((Ok(record), driver)),
                Ok(None) => None,
                Err(err) => Some((Err(err), driver)),
            }
        })
    }
}

#[cfg(test)]
#[path = "driver_test.rs"]
mod tests;
