//! Fuzzy scoring, ranking, and commit validation for autocomplete fields.
//!
//! [`score`] applies a fixed rule ladder to one label; the first rule that
//! fires wins:
//!
//! | Rule          | Score                     |
//! |---------------|---------------------------|
//! | exact         | 1000                      |
//! | prefix        | 500                       |
//! | boundary      | 300                       |
//! | substring     | `100 - position`, min 51  |
//! | subsequence   | 50                        |
//! | no match      | 0                         |
//!
//! [`rank_suggestions`] feeds the suggestion list on every keystroke.
//! [`has_acceptable_match`] is the stricter gate applied when a field is
//! committed; it refuses input the user could not have picked from the list.
//!
//! All functions are total: empty terms, empty collections, and unknown
//! makes produce empty results or `false`.

pub mod ranker;
pub mod scorer;
pub mod types;

#[cfg(test)]
mod tests;

pub use ranker::{
    filter_models_by_make, find_exact, has_acceptable_match, rank_matches, rank_suggestions,
};
pub use scorer::{classify, score};
pub use types::{Candidate, Match, MatchKind};
