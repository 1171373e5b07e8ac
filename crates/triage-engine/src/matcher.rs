use std::cmp::Ordering;

use strsim::normalized_levenshtein;
use tracing::debug;
use triage_catalog::conditions;
use triage_core::condition::ConditionProfile;
use triage_core::diagnosis::ConditionMatch;

/// Average similarity a condition must exceed (strictly) to be reported.
pub const SIMILARITY_FLOOR: f64 = 0.3;

/// Number of ranked candidates retained, top condition included.
pub const MAX_MATCHES: usize = 3;

/// Normalizes free-text symptoms for matching: trimmed, lowercased, with
/// underscores folded to spaces and separator runs collapsed to single
/// spaces so both wire spellings land on the catalogue form. Blank entries
/// are dropped.
pub fn normalize_symptoms(symptoms: &[String]) -> Vec<String> {
    symptoms
        .iter()
        .map(|s| {
            s.to_lowercase()
                .replace('_', " ")
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|s| !s.is_empty())
        .collect()
}

/// Best edit-distance ratio between one reported symptom and any canonical
/// symptom of the condition.
fn best_match(symptom: &str, canonical: &[&str]) -> f64 {
    canonical
        .iter()
        .map(|c| normalized_levenshtein(symptom, c))
        .fold(0.0, f64::max)
}

/// Average of the per-symptom best matches, in `[0, 1]`. Symptoms must
/// already be normalized.
pub fn score_condition(symptoms: &[String], profile: &ConditionProfile) -> f64 {
    if symptoms.is_empty() {
        return 0.0;
    }
    let total: f64 = symptoms
        .iter()
        .map(|s| best_match(s, profile.symptoms))
        .sum();
    total / symptoms.len() as f64
}

/// Scores every clinical condition against the reported symptoms and
/// returns the candidates above the floor, best first. Ties keep catalogue
/// order, so results are deterministic for identical input.
pub fn rank_conditions(symptoms: &[String]) -> Vec<ConditionMatch> {
    let symptoms = normalize_symptoms(symptoms);
    if symptoms.is_empty() {
        return Vec::new();
    }

    let mut matches = Vec::new();
    for profile in conditions::profiles() {
        let similarity = score_condition(&symptoms, profile);
        debug!("{}: similarity {similarity:.3}", profile.id);
        if similarity > SIMILARITY_FLOOR {
            matches.push(ConditionMatch {
                condition: profile.id,
                similarity,
                description: profile.description,
                severity: profile.severity,
            });
        }
    }

    matches.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
    });
    matches.truncate(MAX_MATCHES);
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_core::condition::ConditionId;

    fn symptoms(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn exact_symptoms_score_perfectly() {
        let matches = rank_conditions(&symptoms(&["fever", "headache"]));
        assert_eq!(matches[0].condition, ConditionId::FeverHeadache);
        assert!((matches[0].similarity - 1.0).abs() < 1e-9);
    }

    #[test]
    fn misspelled_symptoms_still_match() {
        let matches = rank_conditions(&symptoms(&["fevr", "headach"]));
        assert_eq!(matches[0].condition, ConditionId::FeverHeadache);
        assert!(matches[0].similarity > 0.7);
    }

    #[test]
    fn gastro_triple_ranks_gastroenteritis_first() {
        let matches = rank_conditions(&symptoms(&["nausea", "vomiting", "diarrhea"]));
        assert_eq!(matches[0].condition, ConditionId::Gastroenteritis);
        assert!((matches[0].similarity - 1.0).abs() < 1e-9);
        // Migraine shares nausea and vomiting, so it trails as a candidate.
        assert!(matches.len() >= 2);
        assert_eq!(matches[1].condition, ConditionId::Migraine);
    }

    #[test]
    fn normalization_accepts_underscores_and_case() {
        let matches = rank_conditions(&symptoms(&["Body_Aches", "  FEVER  "]));
        assert_eq!(matches[0].condition, ConditionId::FeverHeadache);
        assert!((matches[0].similarity - 1.0).abs() < 1e-9);
    }

    #[test]
    fn unrelated_text_matches_nothing() {
        let matches = rank_conditions(&symptoms(&["xyzzy", "qwerty"]));
        assert!(matches.is_empty());
    }

    #[test]
    fn empty_and_blank_symptoms_match_nothing() {
        assert!(rank_conditions(&[]).is_empty());
        assert!(rank_conditions(&symptoms(&["", "   "])).is_empty());
    }

    #[test]
    fn results_are_capped_and_sorted() {
        let matches = rank_conditions(&symptoms(&["headache", "fatigue", "nausea", "dizziness"]));
        assert!(!matches.is_empty());
        assert!(matches.len() <= MAX_MATCHES);
        for pair in matches.windows(2) {
            assert!(pair[0].similarity >= pair[1].similarity);
        }
        for m in &matches {
            assert!(m.similarity > SIMILARITY_FLOOR);
            assert!(m.similarity <= 1.0);
        }
    }

    #[test]
    fn ranking_is_deterministic() {
        let input = symptoms(&["headache", "nausea"]);
        let first = rank_conditions(&input);
        let second = rank_conditions(&input);
        let ids: Vec<_> = first.iter().map(|m| m.condition).collect();
        let ids_again: Vec<_> = second.iter().map(|m| m.condition).collect();
        assert_eq!(ids, ids_again);
    }

    #[test]
    fn diabetes_phrases_match_diabetes() {
        let matches = rank_conditions(&symptoms(&[
            "increased thirst",
            "frequent urination",
            "blurred vision",
        ]));
        assert_eq!(matches[0].condition, ConditionId::Diabetes);
        assert!((matches[0].similarity - 1.0).abs() < 1e-9);
    }

    #[test]
    fn normalize_drops_blanks_and_folds_underscores() {
        let normalized = normalize_symptoms(&symptoms(&[" Sore_Throat ", "", "FEVER"]));
        assert_eq!(normalized, vec!["sore throat".to_string(), "fever".to_string()]);
    }

    #[test]
    fn normalize_collapses_separator_runs() {
        let normalized = normalize_symptoms(&symptoms(&["sore__throat", "runny   nose", "_ _"]));
        assert_eq!(
            normalized,
            vec!["sore throat".to_string(), "runny nose".to_string()]
        );
    }

    #[test]
    fn doubled_separators_still_score_exact() {
        let matches = rank_conditions(&symptoms(&["sore__throat", "fever"]));
        assert_eq!(matches[0].condition, ConditionId::FeverHeadache);
        assert!((matches[0].similarity - 1.0).abs() < 1e-9);
    }
}
