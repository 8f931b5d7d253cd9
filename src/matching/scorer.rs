use super::types::MatchKind;

/// Scores `text` against `term`, case-insensitively.
///
/// Returns `0` for no match and for an empty `term`. The term is used as
/// given; trimming is the caller's job.
pub fn score(text: &str, term: &str) -> u32 {
    classify(text, term).score()
}

/// Returns the strongest rule that matches `term` against `text`.
pub fn classify(text: &str, term: &str) -> MatchKind {
    if term.is_empty() {
        return MatchKind::None;
    }
    classify_lowered(&text.to_lowercase(), &term.to_lowercase())
}

/// Same as [`classify`] for inputs that are already lowercased.
pub(crate) fn classify_lowered(text: &str, term: &str) -> MatchKind {
    if term.is_empty() {
        return MatchKind::None;
    }

    if text == term {
        return MatchKind::Exact;
    }

    if text.starts_with(term) {
        return MatchKind::Prefix;
    }

    if is_boundary_match(text, term) {
        return MatchKind::Boundary;
    }

    if let Some(byte_pos) = text.find(term) {
        return MatchKind::Substring {
            position: text[..byte_pos].chars().count(),
        };
    }

    if is_subsequence(text, term) {
        return MatchKind::Subsequence;
    }

    MatchKind::None
}

fn is_boundary_match(text: &str, term: &str) -> bool {
    text.contains(&format!(" {term}")) || text.contains(&format!("-{term}"))
}

// Greedy left-to-right scan; each term char consumes text up to its match.
fn is_subsequence(text: &str, term: &str) -> bool {
    let mut text_chars = text.chars();
    term.chars().all(|wanted| text_chars.any(|c| c == wanted))
}
