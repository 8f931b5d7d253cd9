use crate::constants::{
    BOUNDARY_SCORE, EXACT_SCORE, NO_MATCH, PREFIX_SCORE, SUBSEQUENCE_SCORE, SUBSTRING_BASE,
    SUBSTRING_FLOOR,
};

/// Anything with a display label that can be matched against a search term.
pub trait Candidate {
    /// The text the user sees and types against.
    fn label(&self) -> &str;
}

impl Candidate for str {
    fn label(&self) -> &str {
        self
    }
}

impl Candidate for String {
    fn label(&self) -> &str {
        self.as_str()
    }
}

impl<T: Candidate + ?Sized> Candidate for &T {
    fn label(&self) -> &str {
        (**self).label()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Which scoring rule matched a term against a label.
///
/// Variants are listed from strongest to weakest; each one scores strictly
/// higher than every variant after it.
pub enum MatchKind {
    /// Label equals the term (case-insensitive).
    Exact,
    /// Label starts with the term.
    Prefix,
    /// Term starts right after a space or hyphen in the label.
    Boundary,
    /// Term occurs somewhere else in the label.
    Substring {
        /// Character offset of the first occurrence.
        position: usize,
    },
    /// Every term character occurs in order, not necessarily contiguous.
    Subsequence,
    /// Nothing matched.
    None,
}

impl MatchKind {
    /// Relevance score for this rule. `0` only for [`MatchKind::None`].
    pub fn score(&self) -> u32 {
        match self {
            MatchKind::Exact => EXACT_SCORE,
            MatchKind::Prefix => PREFIX_SCORE,
            MatchKind::Boundary => BOUNDARY_SCORE,
            MatchKind::Substring { position } => {
                let position = u32::try_from(*position).unwrap_or(u32::MAX);
                SUBSTRING_BASE
                    .saturating_sub(position)
                    .max(SUBSTRING_FLOOR)
            }
            MatchKind::Subsequence => SUBSEQUENCE_SCORE,
            MatchKind::None => NO_MATCH,
        }
    }

    /// Returns `true` for every variant except [`MatchKind::None`].
    pub fn is_match(&self) -> bool {
        !matches!(self, MatchKind::None)
    }

    /// Returns a short debug string.
    pub fn debug_status(&self) -> &'static str {
        match self {
            MatchKind::Exact => "EXACT",
            MatchKind::Prefix => "PREFIX",
            MatchKind::Boundary => "BOUNDARY",
            MatchKind::Substring { .. } => "SUBSTRING",
            MatchKind::Subsequence => "SUBSEQUENCE",
            MatchKind::None => "NO_MATCH",
        }
    }
}

impl std::fmt::Display for MatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchKind::Substring { position } => {
                write!(f, "SUBSTRING (position: {}, score: {})", position, self.score())
            }
            other => write!(f, "{} (score: {})", other.debug_status(), other.score()),
        }
    }
}

#[derive(Debug)]
/// A candidate paired with the rule that matched it.
pub struct Match<'a, C: ?Sized> {
    /// The matched candidate, borrowed from the input collection.
    pub candidate: &'a C,
    /// Which rule fired.
    pub kind: MatchKind,
    /// Score derived from `kind`; always non-zero in ranked output.
    pub score: u32,
}

impl<'a, C: ?Sized> Match<'a, C> {
    pub fn new(candidate: &'a C, kind: MatchKind) -> Self {
        Self {
            candidate,
            kind,
            score: kind.score(),
        }
    }
}

impl<C: ?Sized> Clone for Match<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized> Copy for Match<'_, C> {}
