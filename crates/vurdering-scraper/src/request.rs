//! First-page request construction.
//!
//! Only the first page URL is built here. Every later page URL comes from the
//! "next" link scraped off the previous page (see [`crate::parse`]).

use reqwest::Url;
use vurdering_core::Query;

use crate::error::ScraperError;

pub const SIDE_NAVN: &str = "sideNavn";
pub const VEJKODE: &str = "VEJKODE";
pub const VEJNAVN: &str = "VEJNAVN";
pub const HUSNR: &str = "HUSNR";
pub const BOGSTAV: &str = "BOGSTAV";
pub const ETAGE: &str = "ETAGE";
pub const SIDE: &str = "SIDE";
pub const POSTNR: &str = "POSTNR";
pub const KMNR: &str = "KMNR";

/// Page-context flag: lookup by street code.
pub const FLOW_STREET_CODE: &str = "vvej";
/// Page-context flag: street name within a postal code.
pub const FLOW_BY_POSTAL_CODE: &str = "vstartp";
/// Page-context flag: street name within a municipality.
pub const FLOW_BY_MUNICIPALITY: &str = "vstartv";

const STREET_CODE_WIDTH: usize = 4;

/// Ordered query-string fields for the first results page.
///
/// Unused fields are present with empty values; the registry expects the
/// full form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParameters {
    fields: Vec<(&'static str, String)>,
}

impl RequestParameters {
    #[must_use]
    pub fn from_query(query: &Query) -> Self {
        let mut side_navn = "";
        let mut vejkode = String::new();
        let mut vejnavn = String::new();

        match (query.street_name(), query.street_code()) {
            (Some(name), _) => vejnavn = name.to_owned(),
            (None, Some(code)) => {
                vejkode = format!("{code:0width$}", width = STREET_CODE_WIDTH);
                side_navn = FLOW_STREET_CODE;
            }
            // Query construction guarantees a name or a code.
            (None, None) => {}
        }

        let has_name = query.street_name().is_some();
        let area = if let Some(zip) = query.zip_code() {
            if has_name {
                side_navn = FLOW_BY_POSTAL_CODE;
            }
            Some((POSTNR, zip.to_string()))
        } else if let Some(kmnr) = query.municipality_code() {
            if has_name {
                side_navn = FLOW_BY_MUNICIPALITY;
            }
            Some((KMNR, kmnr.to_string()))
        } else {
            None
        };

        let mut fields = vec![
            (SIDE_NAVN, side_navn.to_owned()),
            (VEJKODE, vejkode),
            (VEJNAVN, vejnavn),
            (HUSNR, String::new()),
            (BOGSTAV, String::new()),
            (ETAGE, String::new()),
            (SIDE, String::new()),
        ];
        fields.extend(area);

        Self { fields }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|(key, value)| (*key, value.as_str()))
    }

    /// Appends the fields as the query string of `base`, replacing any query
    /// `base` already carried.
    #[must_use]
    pub fn page_url(&self, base: &Url) -> Url {
        let mut url = base.clone();
        url.set_query(None);
        url.query_pairs_mut().extend_pairs(self.iter());
        url
    }
}

/// Parses `base_url` and builds the first results-page URL for `query`.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidUrl`] if `base_url` is not an absolute URL.
pub fn first_page_url(query: &Query, base_url: &str) -> Result<Url, ScraperError> {
    let base = Url::parse(base_url).map_err(|e| ScraperError::InvalidUrl {
        url: base_url.to_owned(),
        reason: e.to_string(),
    })?;
    Ok(RequestParameters::from_query(query).page_url(&base))
}
