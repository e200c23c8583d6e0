//! Results-page parsing.
//!
//! A page is in exactly one of three shapes:
//!
//! - **error page**: carries a `.skts-fejltekst-info` element whose text is
//!   the registry's own message (e.g. an invalid postal code);
//! - **results page**: carries the "more results" image
//!   `/images/svur/vis10eft.gif` and a nested result table;
//! - anything else, which is reported as an unknown page shape.
//!
//! On a results page the image doubles as the pagination control. Its `alt`
//! text says whether the street has more properties, and its enclosing
//! `<a href>` is the next page, relative to the page just fetched.

use std::sync::LazyLock;

use reqwest::Url;
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;
use vurdering_core::Record;

/// `alt` text of the marker image on the last page of a street.
pub const NO_MORE_PROPERTIES_ALT: &str = "Ikke flere ejendomme på vejen";

static ERROR_MESSAGE: LazyLock<Selector> = LazyLock::new(|| selector(".skts-fejltekst-info"));
static MORE_RESULTS_MARKER: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"img[src="/images/svur/vis10eft.gif"]"#));
static RESULT_ROWS: LazyLock<Selector> = LazyLock::new(|| {
    selector("#skts-indhold-ejendomsvudering table table:nth-child(2) table tr")
});
static DATA_CELL: LazyLock<Selector> = LazyLock::new(|| selector("td"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector is valid CSS")
}

/// Why a fetched page produced no data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    /// The page's own error message, trimmed but otherwise verbatim.
    #[error("{0}")]
    Source(String),

    /// Neither an error page nor a results page.
    #[error("unknown error")]
    UnknownShape(String),
}

/// Records from one results page plus the link to the following page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPage {
    pub records: Vec<Record>,
    /// `None` on the last page.
    pub next: Option<Url>,
}

/// Parses one decoded results page fetched from `current_url`.
///
/// A results page with zero rows is not an error: it yields an empty batch
/// and still reports the next link.
///
/// # Errors
///
/// - [`PageError::Source`] when the page carries the registry's error message.
/// - [`PageError::UnknownShape`] when the "more results" marker is missing, or
///   it has no resolvable enclosing link while announcing more results.
pub fn parse_page(html: &str, current_url: &Url) -> Result<ParsedPage, PageError> {
    let document = Html::parse_document(html);

    let mut error_elements = document.select(&ERROR_MESSAGE).peekable();
    if error_elements.peek().is_some() {
        let message: String = error_elements.flat_map(|el| el.text()).collect();
        return Err(PageError::Source(message.trim().to_owned()));
    }

    let Some(marker) = document.select(&MORE_RESULTS_MARKER).next() else {
        return Err(PageError::UnknownShape(
            "page has neither an error message nor the more-results marker".to_owned(),
        ));
    };

    let records: Vec<Record> = document.select(&RESULT_ROWS).filter_map(parse_row).collect();
    let next = next_page_url(marker, current_url)?;

    tracing::debug!(
        url = %current_url,
        records = records.len(),
        has_next = next.is_some(),
        "parsed results page"
    );

    Ok(ParsedPage { records, next })
}

/// Maps a `<tr>` to a [`Record`]. Rows without any `<td>` (header rows made
/// of `<th>`, spacer rows) carry no property and are skipped.
fn parse_row(row: ElementRef<'_>) -> Option<Record> {
    row.select(&DATA_CELL).next()?;

    let cells: Vec<String> = row
        .children()
        .filter_map(ElementRef::wrap)
        .map(|cell| cell.text().collect::<String>().trim().to_owned())
        .collect();
    Some(Record::from_cells(&cells))
}

fn next_page_url(marker: ElementRef<'_>, current_url: &Url) -> Result<Option<Url>, PageError> {
    if marker.value().attr("alt") == Some(NO_MORE_PROPERTIES_ALT) {
        return Ok(None);
    }

    let href = marker
        .parent()
        .and_then(ElementRef::wrap)
        .and_then(|link| link.value().attr("href"))
        .ok_or_else(|| {
            PageError::UnknownShape("more-results marker is not inside a link".to_owned())
        })?;

    current_url
        .join(href.trim())
        .map(Some)
        .map_err(|e| PageError::UnknownShape(format!("next link \"{href}\" is not a URL: {e}")))
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
