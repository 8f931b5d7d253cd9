//! Vehicle selector library crate (used by the console binary and integration tests).
//!
//! # Public API Surface
//!
//! ## Matching
//! - [`score`], [`classify`] - Rule-ladder fuzzy score for one label
//! - [`rank_suggestions`], [`rank_matches`] - Autocomplete lists
//! - [`has_acceptable_match`] - Commit-time validation
//! - [`filter_models_by_make`] - Model suggestions scoped to a make
//!
//! ## Catalog
//! - [`Catalog`], [`ModelRecord`] - Make/model reference data
//! - [`CatalogSource`], [`FileCatalogSource`], [`load_catalog`] - One-time async load
//!
//! ## Session & Form
//! - [`Session`] - Owns the loaded catalog and suggestion limits
//! - [`SelectionForm`], [`CommitOutcome`] - Cascading make → model → sub-tier state
//! - [`Console`] - Line-oriented driver for the form
//!
//! ## Configuration
//! - [`Config`], [`ConfigError`] - `VEHICLE_SELECTOR_*` environment settings

pub mod catalog;
pub mod config;
pub mod console;
pub mod constants;
pub mod matching;
pub mod session;

pub use catalog::{
    Catalog, CatalogError, CatalogResult, CatalogSource, FileCatalogSource, ModelRecord,
    StaticCatalogSource, load_catalog,
};
pub use config::{Config, ConfigError};
pub use console::{Command, Console, ConsoleError, Reply};
pub use constants::{
    DEFAULT_MAKE_SUGGESTION_LIMIT, DEFAULT_MODEL_SUGGESTION_LIMIT, SuggestionLimits,
};
pub use matching::{
    Candidate, Match, MatchKind, classify, filter_models_by_make, find_exact,
    has_acceptable_match, rank_matches, rank_suggestions, score,
};
pub use session::{CommitOutcome, SelectionForm, Session};
