use super::ranker::{
    filter_models_by_make, find_exact, has_acceptable_match, rank_matches, rank_suggestions,
};
use super::scorer::{classify, score};
use super::types::{Candidate, MatchKind};
use crate::catalog::{Catalog, ModelRecord};
use crate::constants::{
    BOUNDARY_SCORE, EXACT_SCORE, PREFIX_SCORE, SUBSEQUENCE_SCORE, SUBSTRING_FLOOR,
};

fn labels<'a, C: Candidate + ?Sized>(ranked: &[&'a C]) -> Vec<&'a str> {
    ranked.iter().map(|&c| c.label()).collect()
}

fn ford_catalog() -> Catalog {
    Catalog::new().with_make(
        "Ford",
        vec![
            ModelRecord::new("F-150", "Truck", ["2-door", "4-door"]),
            ModelRecord::new("Focus", "Sedan", ["4-Door"]),
            ModelRecord::new("Mustang", "Coupe", ["2-Door"]),
        ],
    )
}

#[test]
fn test_exact_match_any_case() {
    assert_eq!(score("Toyota", "Toyota"), EXACT_SCORE);
    assert_eq!(score("Toyota", "tOYOTA"), EXACT_SCORE);
    assert_eq!(score("BMW", "bmw"), EXACT_SCORE);
    assert_eq!(classify("Mercedes-Benz", "MERCEDES-BENZ"), MatchKind::Exact);
}

#[test]
fn test_prefix_match() {
    assert_eq!(score("Toyota", "toy"), PREFIX_SCORE);
    assert_eq!(classify("Land Rover", "land r"), MatchKind::Prefix);
}

#[test]
fn test_boundary_match_after_hyphen_and_space() {
    assert_eq!(score("Mercedes-Benz", "benz"), BOUNDARY_SCORE);
    assert_eq!(score("Alfa Romeo", "rom"), BOUNDARY_SCORE);
    assert_eq!(score("Escalade IQ", "iq"), BOUNDARY_SCORE);
}

#[test]
fn test_boundary_match_finds_later_occurrence() {
    // The first "a-a" follows an 'x'; only the second one sits on a hyphen.
    assert_eq!(classify("xa-a-a", "a-a"), MatchKind::Boundary);
}

#[test]
fn test_substring_scores_by_position() {
    assert_eq!(classify("Chevrolet", "vro"), MatchKind::Substring { position: 3 });
    assert_eq!(score("Chevrolet", "vro"), 97);
    assert_eq!(score("Chevrolet", "let"), 94);
    assert!(score("Chevrolet", "evr") > score("Chevrolet", "let"));
}

#[test]
fn test_substring_position_counts_characters() {
    assert_eq!(classify("Škoda", "oda"), MatchKind::Substring { position: 2 });
    assert_eq!(score("Škoda", "oda"), 98);
}

#[test]
fn test_substring_floor_stays_above_subsequence() {
    let text = format!("{}tail", "x".repeat(120));
    assert_eq!(classify(&text, "tail"), MatchKind::Substring { position: 120 });
    assert_eq!(score(&text, "tail"), SUBSTRING_FLOOR);
    assert!(score(&text, "tail") > SUBSEQUENCE_SCORE);
}

#[test]
fn test_subsequence_match_is_constant() {
    assert_eq!(classify("Mercedes", "mrcds"), MatchKind::Subsequence);
    assert_eq!(score("Mercedes", "mrcds"), SUBSEQUENCE_SCORE);
    assert_eq!(score("Volkswagen", "vw"), SUBSEQUENCE_SCORE);
}

#[test]
fn test_no_match() {
    assert_eq!(score("Chevrolet", "xyz"), 0);
    assert_eq!(score("Mazda", "mrcds"), 0);
    // Right characters, wrong order.
    assert_eq!(score("BMW", "wb"), 0);
}

#[test]
fn test_empty_term_never_matches() {
    assert_eq!(score("Toyota", ""), 0);
    assert_eq!(classify("Toyota", ""), MatchKind::None);
}

#[test]
fn test_score_uses_term_untrimmed() {
    assert_eq!(score("a b", " b"), 99);
    assert_eq!(classify("a b", " b"), MatchKind::Substring { position: 1 });
    assert_eq!(score("a b", "b"), BOUNDARY_SCORE);

    let ranked = rank_matches(&["a b"], " b", 5);
    assert_eq!(ranked[0].kind, MatchKind::Boundary);
}

#[test]
fn test_substring_of_text_always_scores() {
    let text = "Mercedes-Benz Sprinter";
    let lower = text.to_lowercase();
    for start in 0..lower.len() {
        for end in start + 1..=lower.len() {
            if let Some(term) = lower.get(start..end) {
                assert!(score(text, term) > 0, "term {term:?} should match");
            }
        }
    }
}

#[test]
fn test_rule_priority_is_monotonic() {
    let ladder = [
        score("Kia", "kia"),
        score("Kia Motors", "kia"),
        score("Hyundai-Kia", "kia"),
        score("Nikia", "kia"),
        score("Kxixa", "kia"),
        score("Kxixb", "kia"),
    ];
    for pair in ladder.windows(2) {
        assert!(pair[0] > pair[1], "ladder out of order: {ladder:?}");
    }
}

#[test]
fn test_match_kind_display() {
    assert_eq!(MatchKind::Exact.to_string(), "EXACT (score: 1000)");
    assert_eq!(
        MatchKind::Substring { position: 4 }.to_string(),
        "SUBSTRING (position: 4, score: 96)"
    );
    assert_eq!(MatchKind::None.debug_status(), "NO_MATCH");
    assert!(!MatchKind::None.is_match());
    assert!(MatchKind::Subsequence.is_match());
}

#[test]
fn test_rank_suggestions_boundary_top_result() {
    let candidates = ["Mercedes-Benz", "Ford", "BMW"];
    let ranked = rank_suggestions(&candidates, "benz", 12);
    assert_eq!(labels(&ranked), vec!["Mercedes-Benz"]);
}

#[test]
fn test_rank_suggestions_prefix() {
    let candidates = ["Toyota", "Honda"];
    let ranked = rank_suggestions(&candidates, "toy", 12);
    assert_eq!(labels(&ranked), vec!["Toyota"]);

    let matches = rank_matches(&candidates, "toy", 12);
    assert_eq!(matches[0].score, PREFIX_SCORE);
    assert_eq!(matches[0].kind, MatchKind::Prefix);
}

#[test]
fn test_rank_suggestions_orders_by_score() {
    let candidates = ["Alfa Romeo", "Rolls-Royce", "Ram", "Ferrari"];
    let ranked = rank_suggestions(&candidates, "r", 12);
    assert_eq!(
        labels(&ranked),
        vec!["Rolls-Royce", "Ram", "Alfa Romeo", "Ferrari"]
    );
}

#[test]
fn test_rank_suggestions_ties_keep_input_order() {
    let candidates = ["Kia Niro", "Kia Soul", "Kia Rio", "Kia EV6"];
    let ranked = rank_suggestions(&candidates, "kia", 12);
    assert_eq!(labels(&ranked), candidates.to_vec());

    let reversed: Vec<&str> = candidates.iter().rev().copied().collect();
    let ranked = rank_suggestions(&reversed, "kia", 12);
    assert_eq!(labels(&ranked), reversed);
}

#[test]
fn test_rank_suggestions_respects_limit() {
    let candidates: Vec<String> = (0..40).map(|i| format!("Model {i}")).collect();
    assert_eq!(rank_suggestions(&candidates, "model", 12).len(), 12);
    assert_eq!(rank_suggestions(&candidates, "model", 20).len(), 20);
    assert!(rank_suggestions(&candidates, "model", 0).is_empty());
}

#[test]
fn test_rank_suggestions_never_returns_zero_scores() {
    let candidates = ["Chevrolet", "Chrysler", "Citroen", "Mazda"];
    for m in rank_matches(&candidates, "chr", 12) {
        assert!(m.score > 0);
    }
    assert!(rank_suggestions(&["Chevrolet"], "xyz", 12).is_empty());
}

#[test]
fn test_rank_suggestions_blank_term_is_empty() {
    let candidates = ["Toyota", "Honda"];
    assert!(rank_suggestions(&candidates, "", 12).is_empty());
    assert!(rank_suggestions(&candidates, "   ", 12).is_empty());
}

#[test]
fn test_rank_suggestions_trims_term() {
    let candidates = ["Toyota", "Honda"];
    let ranked = rank_suggestions(&candidates, "  hon ", 12);
    assert_eq!(labels(&ranked), vec!["Honda"]);
}

#[test]
fn test_acceptable_match_boundary() {
    assert!(has_acceptable_match(&["Mercedes-Benz", "Ford", "BMW"], "benz"));
}

#[test]
fn test_acceptable_match_word_prefix_ignores_initial() {
    assert!(has_acceptable_match(&["Alfa Romeo"], "romeo"));
    assert!(has_acceptable_match(&["Rolls-Royce"], "roy"));
    // Mid-word substring under a different initial is refused.
    assert!(!has_acceptable_match(&["Rolls-Royce"], "oyce"));
}

#[test]
fn test_acceptable_match_rejects_unmatched() {
    assert!(!has_acceptable_match(&["Chevrolet"], "xyz"));
}

#[test]
fn test_acceptable_match_subsequence_needs_same_initial() {
    let candidates = ["Mazda", "Mercedes"];
    assert!(has_acceptable_match(&candidates, "mrcds"));

    let ranked = rank_suggestions(&candidates, "mrcds", 12);
    assert_eq!(labels(&ranked), vec!["Mercedes"]);

    // "rcds" is a subsequence of Mercedes but starts with a different letter.
    assert!(!has_acceptable_match(&candidates, "rcds"));
    assert!(!rank_suggestions(&candidates, "rcds", 12).is_empty());
}

#[test]
fn test_acceptable_match_substring_needs_same_initial() {
    assert!(!has_acceptable_match(&["Chevrolet"], "vrol"));
    assert!(has_acceptable_match(&["Chevrolet"], "chev"));
    assert!(has_acceptable_match(&["Chevrolet"], "cvrlt"));
}

#[test]
fn test_acceptable_match_blank_term() {
    assert!(!has_acceptable_match(&["Toyota"], ""));
    assert!(!has_acceptable_match(&["Toyota"], "  \t"));
    let none: [&str; 0] = [];
    assert!(!has_acceptable_match(&none, "toy"));
}

#[test]
fn test_find_exact() {
    let candidates = ["BMW", "Buick"];
    assert_eq!(find_exact(&candidates, " bmw "), Some(&"BMW"));
    assert_eq!(find_exact(&candidates, "bm"), None);
    assert_eq!(find_exact(&candidates, ""), None);
}

#[test]
fn test_filter_models_by_make_returns_full_record() {
    let catalog = ford_catalog();
    let models = filter_models_by_make(&catalog, "Ford", "f15", 20);

    assert_eq!(models.len(), 1);
    assert_eq!(models[0].name, "F-150");
    assert_eq!(models[0].body_type, "Truck");
    assert_eq!(models[0].subtiers, vec!["2-door", "4-door"]);
}

#[test]
fn test_filter_models_by_make_ranks_prefix_first() {
    let catalog = ford_catalog();
    let models = filter_models_by_make(&catalog, "Ford", "f", 20);
    let names: Vec<&str> = models.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["F-150", "Focus"]);
}

#[test]
fn test_filter_models_by_make_unknown_make() {
    let catalog = ford_catalog();
    assert!(filter_models_by_make(&catalog, "Tesla", "model", 20).is_empty());
    assert!(filter_models_by_make(&catalog, "ford", "f15", 20).is_empty());
}
