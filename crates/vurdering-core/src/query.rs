//! Location queries against the property-valuation registry.
//!
//! A [`Query`] names an area (postal code and/or municipality code) and a
//! street (by name, or by code within a municipality). Invalid combinations
//! are rejected by [`Query::new`]; a constructed `Query` is always valid.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("either zipcode or the municipality code should be set")]
    MissingArea,

    #[error("the street name or code should be set")]
    MissingStreet,
}

/// A validated location query.
///
/// Zero-valued codes and blank street names are treated as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    zip_code: Option<u32>,
    municipality_code: Option<u32>,
    street_name: Option<String>,
    street_code: Option<u32>,
}

impl Query {
    /// Validates and normalizes a query.
    ///
    /// Requires `(zip_code OR municipality_code)` and
    /// `(street_name OR (municipality_code AND street_code))`.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MissingArea`] when neither a postal code nor a
    ///   municipality code is set.
    /// - [`ValidationError::MissingStreet`] when there is no street name and
    ///   no municipality-scoped street code.
    pub fn new(
        zip_code: Option<u32>,
        municipality_code: Option<u32>,
        street_name: Option<&str>,
        street_code: Option<u32>,
    ) -> Result<Self, ValidationError> {
        let zip_code = zip_code.filter(|&z| z != 0);
        let municipality_code = municipality_code.filter(|&k| k != 0);
        let street_code = street_code.filter(|&c| c != 0);
        let street_name = street_name
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned);

        if zip_code.is_none() && municipality_code.is_none() {
            return Err(ValidationError::MissingArea);
        }
        if street_name.is_none() && (municipality_code.is_none() || street_code.is_none()) {
            return Err(ValidationError::MissingStreet);
        }

        Ok(Self {
            zip_code,
            municipality_code,
            street_name,
            street_code,
        })
    }

    /// Positional form: postal code plus street name.
    ///
    /// # Errors
    ///
    /// Same as [`Query::new`].
    pub fn by_zip_and_street_name(zip_code: u32, street_name: &str) -> Result<Self, ValidationError> {
        Self::new(Some(zip_code), None, Some(street_name), None)
    }

    /// # Errors
    ///
    /// Same as [`Query::new`].
    pub fn by_municipality_and_street_name(
        municipality_code: u32,
        street_name: &str,
    ) -> Result<Self, ValidationError> {
        Self::new(None, Some(municipality_code), Some(street_name), None)
    }

    /// # Errors
    ///
    /// Same as [`Query::new`].
    pub fn by_municipality_and_street_code(
        municipality_code: u32,
        street_code: u32,
    ) -> Result<Self, ValidationError> {
        Self::new(None, Some(municipality_code), None, Some(street_code))
    }

    #[must_use]
    pub fn builder() -> QueryBuilder {
        QueryBuilder::default()
    }

    #[must_use]
    pub fn zip_code(&self) -> Option<u32> {
        self.zip_code
    }

    #[must_use]
    pub fn municipality_code(&self) -> Option<u32> {
        self.municipality_code
    }

    #[must_use]
    pub fn street_name(&self) -> Option<&str> {
        self.street_name.as_deref()
    }

    #[must_use]
    pub fn street_code(&self) -> Option<u32> {
        self.street_code
    }
}

/// Chained construction for callers holding optional fields.
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    zip_code: Option<u32>,
    municipality_code: Option<u32>,
    street_name: Option<String>,
    street_code: Option<u32>,
}

impl QueryBuilder {
    #[must_use]
    pub fn zip_code(mut self, zip_code: u32) -> Self {
        self.zip_code = Some(zip_code);
        self
    }

    #[must_use]
    pub fn municipality_code(mut self, municipality_code: u32) -> Self {
        self.municipality_code = Some(municipality_code);
        self
    }

    #[must_use]
    pub fn street_name(mut self, street_name: impl Into<String>) -> Self {
        self.street_name = Some(street_name.into());
        self
    }

    #[must_use]
    pub fn street_code(mut self, street_code: u32) -> Self {
        self.street_code = Some(street_code);
        self
    }

    /// # Errors
    ///
    /// Same as [`Query::new`].
    pub fn build(self) -> Result<Query, ValidationError> {
        Query::new(
            self.zip_code,
            self.municipality_code,
            self.street_name.as_deref(),
            self.street_code,
        )
    }
}
