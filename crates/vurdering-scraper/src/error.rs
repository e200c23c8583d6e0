use thiserror::Error;
use vurdering_core::ValidationError;

use crate::parse::PageError;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("rate limited by {url} (retry after {retry_after_secs}s)")]
    RateLimited { url: String, retry_after_secs: u64 },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The registry rendered its own error message; the text is kept verbatim.
    #[error("{message}")]
    Source { message: String },

    #[error("unknown error")]
    UnknownPageShape { reason: String },

    #[error("pagination limit reached: exceeded {max_pages} pages")]
    PaginationLimit { max_pages: usize },
}

/// Coarse grouping of [`ScraperError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Transport,
    Source,
    UnknownPageShape,
}

impl ScraperError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Http(_)
            | Self::RateLimited { .. }
            | Self::UnexpectedStatus { .. }
            | Self::InvalidUrl { .. } => ErrorKind::Transport,
            Self::Source { .. } => ErrorKind::Source,
            Self::UnknownPageShape { .. } | Self::PaginationLimit { .. } => {
                ErrorKind::UnknownPageShape
            }
        }
    }
}

impl From<PageError> for ScraperError {
    fn from(err: PageError) -> Self {
        match err {
            PageError::Source(message) => Self::Source { message },
            PageError::UnknownShape(reason) => Self::UnknownPageShape { reason },
        }
    }
}
