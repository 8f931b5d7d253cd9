//! Loaded catalog plus the queries a form needs on each keystroke and commit.
//!
//! A [`Session`] owns the catalog for its whole life and is passed by
//! reference to whatever drives the form. Nothing here is global, so tests
//! build sessions straight from a [`Catalog`] without a load step.

pub mod selection;
pub mod types;


pub use selection::SelectionForm;
pub use types::CommitOutcome;

use tracing::warn;

use crate::catalog::{Catalog, CatalogResult, CatalogSource, ModelRecord, load_catalog};
use crate::constants::SuggestionLimits;
use crate::matching::{
    filter_models_by_make, find_exact, has_acceptable_match, rank_suggestions,
};

#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    makes: Vec<String>,
    limits: SuggestionLimits,
}

impl Session {
    pub fn new(catalog: Catalog, limits: SuggestionLimits) -> Self {
        let makes = catalog.make_names().into_iter().map(String::from).collect();
        Self {
            catalog,
            makes,
            limits,
        }
    }

    /// A session with no makes; every query comes back empty.
    pub fn empty(limits: SuggestionLimits) -> Self {
        Self::new(Catalog::new(), limits)
    }

    /// Loads the catalog, falling back to an empty session on failure.
    ///
    /// The failure is logged, not retried.
    pub async fn load(source: &dyn CatalogSource, limits: SuggestionLimits) -> Self {
        match Self::try_load(source, limits).await {
            Ok(session) => session,
            Err(e) => {
                warn!(
                    source = %source.describe(),
                    error = %e,
                    "Failed to load catalog. Starting empty."
                );
                Self::empty(limits)
            }
        }
    }

    /// Loads the catalog and propagates any failure.
    pub async fn try_load(
        source: &dyn CatalogSource,
        limits: SuggestionLimits,
    ) -> CatalogResult<Self> {
        Ok(Self::new(load_catalog(source).await?, limits))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn limits(&self) -> SuggestionLimits {
        self.limits
    }

    /// All make names, sorted.
    pub fn make_names(&self) -> &[String] {
        &self.makes
    }

    /// Make suggestions for a partially typed make.
    pub fn suggest_makes(&self, term: &str) -> Vec<&str> {
        rank_suggestions(&self.makes, term, self.limits.makes)
            .into_iter()
            .map(String::as_str)
            .collect()
    }

    /// Model suggestions within `make`. Empty for an unknown or blank make.
    pub fn suggest_models(&self, make: &str, term: &str) -> Vec<&ModelRecord> {
        filter_models_by_make(&self.catalog, make, term, self.limits.models)
    }

    pub fn accepts_make(&self, term: &str) -> bool {
        has_acceptable_match(&self.makes, term)
    }

    pub fn accepts_model(&self, make: &str, term: &str) -> bool {
        has_acceptable_match(self.catalog.models(make), term)
    }

    /// Canonical make name for an exact (case-insensitive) entry.
    pub fn resolve_make(&self, term: &str) -> Option<&str> {
        find_exact(&self.makes, term).map(String::as_str)
    }

    /// Model record for an exact (case-insensitive) name within `make`.
    pub fn resolve_model(&self, make: &str, term: &str) -> Option<&ModelRecord> {
        self.catalog.model(make, term)
    }
}
