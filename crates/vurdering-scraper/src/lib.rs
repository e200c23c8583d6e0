pub mod driver;
pub mod error;
pub mod fetch;
pub mod parse;
pub mod request;
mod retry;

pub use driver::ValuationDriver;
pub use error::{ErrorKind, ScraperError};
pub use fetch::{decode_latin1, HttpPageSource, PageSource};
pub use parse::{parse_page, PageError, ParsedPage};
pub use request::RequestParameters;
pub use vurdering_core::{Query, Record, ScraperConfig, ValidationError};

#[cfg(test)]
mod fixtures;
