use tracing::debug;

use crate::catalog::{Catalog, ModelRecord};

use super::scorer::classify_lowered;
use super::types::{Candidate, Match, MatchKind};

/// Trims and lowercases a user-typed term. `None` when blank.
pub(crate) fn normalize_term(term: &str) -> Option<String> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Scores every candidate, drops non-matches, and returns the best `limit`
/// matches ordered by descending score.
///
/// Ties keep their input order. A blank term yields no matches.
pub fn rank_matches<'a, C, I>(candidates: I, term: &str, limit: usize) -> Vec<Match<'a, C>>
where
    C: Candidate + ?Sized + 'a,
    I: IntoIterator<Item = &'a C>,
{
    let Some(term) = normalize_term(term) else {
        return Vec::new();
    };

    let mut matches: Vec<Match<'a, C>> = candidates
        .into_iter()
        .filter_map(|candidate| {
            let kind = classify_lowered(&candidate.label().to_lowercase(), &term);
            kind.is_match().then(|| Match::new(candidate, kind))
        })
        .collect();

    // sort_by is stable, so equal scores stay in catalog order.
    matches.sort_by(|a, b| b.score.cmp(&a.score));
    let total = matches.len();
    matches.truncate(limit);

    debug!(
        term = %term,
        matched = total,
        returned = matches.len(),
        limit,
        "Ranked suggestions"
    );

    matches
}

/// Ranked candidates for an autocomplete list (see [`rank_matches`]).
pub fn rank_suggestions<'a, C, I>(candidates: I, term: &str, limit: usize) -> Vec<&'a C>
where
    C: Candidate + ?Sized + 'a,
    I: IntoIterator<Item = &'a C>,
{
    rank_matches(candidates, term, limit)
        .into_iter()
        .map(|m| m.candidate)
        .collect()
}

/// Decides whether a committed term may stand.
///
/// Accepted when some label, or one of its space/hyphen separated words,
/// starts with the term. Otherwise a fuzzy match only counts if the
/// candidate also shares the term's first character, so a scattered
/// subsequence hit under a different initial is refused.
pub fn has_acceptable_match<'a, C, I>(candidates: I, term: &str) -> bool
where
    C: Candidate + ?Sized + 'a,
    I: IntoIterator<Item = &'a C>,
{
    let Some(term) = normalize_term(term) else {
        return false;
    };

    let labels: Vec<String> = candidates
        .into_iter()
        .map(|candidate| candidate.label().to_lowercase())
        .collect();

    let starts_word = labels.iter().any(|label| {
        matches!(
            classify_lowered(label, &term),
            MatchKind::Exact | MatchKind::Prefix | MatchKind::Boundary
        )
    });
    if starts_word {
        return true;
    }

    let first = term.chars().next();
    let accepted = labels.iter().any(|label| {
        label.chars().next() == first && classify_lowered(label, &term).is_match()
    });

    if !accepted {
        debug!(term = %term, candidates = labels.len(), "No acceptable match");
    }
    accepted
}

/// Case-insensitive exact label lookup after trimming the term.
pub fn find_exact<'a, C, I>(candidates: I, term: &str) -> Option<&'a C>
where
    C: Candidate + ?Sized + 'a,
    I: IntoIterator<Item = &'a C>,
{
    let term = normalize_term(term)?;
    candidates
        .into_iter()
        .find(|candidate| candidate.label().to_lowercase() == term)
}

/// Ranks the models of `make` by name. An unknown make has no models.
pub fn filter_models_by_make<'a>(
    catalog: &'a Catalog,
    make: &str,
    term: &str,
    limit: usize,
) -> Vec<&'a ModelRecord> {
    rank_suggestions(catalog.models(make), term, limit)
}
