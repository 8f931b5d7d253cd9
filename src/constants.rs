//! Cross-cutting, shared constants.
//!
//! Rule scores are ordered so that every rule strictly outranks the rules below it.
//! The substring floor is derived from the subsequence score to keep that ordering.

pub const EXACT_SCORE: u32 = 1000;
pub const PREFIX_SCORE: u32 = 500;
pub const BOUNDARY_SCORE: u32 = 300;

/// Substring matches score `SUBSTRING_BASE - position`.
pub const SUBSTRING_BASE: u32 = 100;
pub const SUBSEQUENCE_SCORE: u32 = 50;
/// Lowest score a substring match can reach (always above a subsequence match).
pub const SUBSTRING_FLOOR: u32 = SUBSEQUENCE_SCORE + 1;

/// Score reserved for "no match"; never returned in ranked results.
pub const NO_MATCH: u32 = 0;

pub const DEFAULT_MAKE_SUGGESTION_LIMIT: usize = 12;
pub const DEFAULT_MODEL_SUGGESTION_LIMIT: usize = 20;

pub const DEFAULT_CATALOG_PATH: &str = "data/models.json";

/// Runtime suggestion caps for the make and model stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionLimits {
    /// Maximum make suggestions per keystroke.
    pub makes: usize,
    /// Maximum model suggestions per keystroke.
    pub models: usize,
}

impl Default for SuggestionLimits {
    fn default() -> Self {
        Self {
            makes: DEFAULT_MAKE_SUGGESTION_LIMIT,
            models: DEFAULT_MODEL_SUGGESTION_LIMIT,
        }
    }
}

impl SuggestionLimits {
    pub fn new(makes: usize, models: usize) -> Self {
        Self { makes, models }
    }
}
