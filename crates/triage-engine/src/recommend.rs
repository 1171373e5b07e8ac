use triage_catalog::advice;
use triage_core::condition::{ConditionId, Severity, SeverityTier};
use triage_core::patient::{DietQuality, Gender, Lifestyle, SleepPattern};

/// Builds the free-text recommendation for a diagnosis: severity wording
/// first, then age and gender notes, then condition-specific advice, joined
/// into one sentence-per-clause string.
pub fn recommendation(
    condition: ConditionId,
    severity: Severity,
    age: Option<i64>,
    gender: Option<Gender>,
) -> String {
    let mut lines: Vec<&'static str> = Vec::new();

    match severity.tier() {
        SeverityTier::High => {
            lines.push("Seek medical attention immediately");
            lines.push("Avoid self-medication");
        }
        SeverityTier::Moderate => {
            lines.push("Schedule a doctor's appointment");
            lines.push("Monitor symptoms closely");
        }
        SeverityTier::Low => {
            lines.push("Rest and monitor symptoms");
            lines.push("Stay hydrated");
        }
    }

    if let Some(age) = age {
        if age < 2 {
            lines.push("Contact pediatrician immediately");
        } else if age < 18 {
            lines.push("Inform school/teachers");
        } else if age >= 65 {
            lines.push("Contact healthcare provider");
            lines.push("Monitor for complications");
        }
    }

    if gender == Some(Gender::Female) {
        lines.push("Monitor for pregnancy-related symptoms");
    }

    match condition {
        ConditionId::Migraine => {
            lines.push("Keep a headache diary");
            lines.push("Identify and avoid triggers");
            lines.push("Practice stress management");
        }
        ConditionId::Gastroenteritis => {
            lines.push("Stay hydrated");
            lines.push("Eat bland foods");
            lines.push("Avoid dairy and fatty foods");
        }
        _ => {}
    }

    format!("{}.", lines.join(". "))
}

/// Base follow-up lines, then condition-specific ones, then age-band notes.
pub fn follow_up_instructions(condition: ConditionId, age: i64) -> Vec<String> {
    let mut instructions: Vec<String> = vec![
        "Return immediately if symptoms worsen or new symptoms develop".to_string(),
        "Follow up with primary care physician if symptoms persist beyond expected duration"
            .to_string(),
    ];
    instructions.extend(advice::follow_ups(condition).iter().map(|s| s.to_string()));
    if age < 2 {
        instructions.push("Pediatric follow-up recommended within 24-48 hours".to_string());
    } else if age > 65 {
        instructions.push(
            "Geriatric follow-up recommended due to increased risk of complications".to_string(),
        );
    }
    instructions
}

pub fn lifestyle_recommendations(lifestyle: &Lifestyle) -> Vec<String> {
    let mut recommendations: Vec<String> = Vec::new();

    if lifestyle.exercise.is_some_and(|e| e.is_sedentary()) {
        recommendations.push(
            "Start with light exercise (e.g., 15-minute walks) and gradually increase".to_string(),
        );
    }

    if lifestyle.sleep == Some(SleepPattern::LessThanSix) {
        recommendations.push("Aim for 7-9 hours of sleep per night for optimal health".to_string());
    }

    if lifestyle.diet == Some(DietQuality::Unhealthy) {
        recommendations.push(
            "Incorporate more fruits, vegetables, and whole grains into your diet".to_string(),
        );
    }

    if lifestyle.stress_level.is_some_and(|s| s.is_elevated()) {
        recommendations.push(
            "Practice stress-reduction techniques (e.g., meditation, deep breathing)".to_string(),
        );
        recommendations.push("Consider counseling or therapy for stress management".to_string());
    }

    if lifestyle.smoking {
        recommendations
            .push("Consider smoking cessation programs to reduce health risks".to_string());
    }

    if lifestyle.alcohol.is_some_and(|a| a.is_significant()) {
        recommendations.push("Limit alcohol consumption to recommended guidelines".to_string());
    }

    if recommendations.is_empty() {
        recommendations
            .push("No specific lifestyle changes recommended at this time.".to_string());
    }
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_tier_recommendation_wording() {
        let text = recommendation(ConditionId::FeverHeadache, Severity::MildToModerate, None, None);
        assert_eq!(text, "Rest and monitor symptoms. Stay hydrated.");
    }

    #[test]
    fn high_tier_recommendation_wording() {
        let text = recommendation(ConditionId::Hypertension, Severity::ModerateToSevere, None, None);
        assert_eq!(text, "Seek medical attention immediately. Avoid self-medication.");
    }

    #[test]
    fn age_bands_add_notes() {
        let infant = recommendation(
            ConditionId::FeverHeadache,
            Severity::MildToModerate,
            Some(1),
            None,
        );
        assert!(infant.contains("Contact pediatrician immediately"));

        let teen = recommendation(
            ConditionId::FeverHeadache,
            Severity::MildToModerate,
            Some(15),
            None,
        );
        assert!(teen.contains("Inform school/teachers"));

        let senior = recommendation(
            ConditionId::FeverHeadache,
            Severity::MildToModerate,
            Some(70),
            None,
        );
        assert!(senior.contains("Contact healthcare provider. Monitor for complications"));

        let adult = recommendation(
            ConditionId::FeverHeadache,
            Severity::MildToModerate,
            Some(30),
            None,
        );
        assert_eq!(adult, "Rest and monitor symptoms. Stay hydrated.");
    }

    #[test]
    fn female_patients_get_pregnancy_note() {
        let text = recommendation(
            ConditionId::FeverHeadache,
            Severity::MildToModerate,
            Some(30),
            Some(Gender::Female),
        );
        assert!(text.ends_with("Monitor for pregnancy-related symptoms."));
        let text = recommendation(
            ConditionId::FeverHeadache,
            Severity::MildToModerate,
            Some(30),
            Some(Gender::Male),
        );
        assert!(!text.contains("pregnancy"));
    }

    #[test]
    fn migraine_adds_condition_advice() {
        let text = recommendation(ConditionId::Migraine, Severity::ModerateToSevere, None, None);
        assert_eq!(
            text,
            "Seek medical attention immediately. Avoid self-medication. \
             Keep a headache diary. Identify and avoid triggers. Practice stress management."
        );
    }

    #[test]
    fn gastroenteritis_adds_condition_advice() {
        let text = recommendation(ConditionId::Gastroenteritis, Severity::MildToSevere, None, None);
        assert_eq!(
            text,
            "Schedule a doctor's appointment. Monitor symptoms closely. \
             Stay hydrated. Eat bland foods. Avoid dairy and fatty foods."
        );
    }

    #[test]
    fn follow_ups_start_with_base_instructions() {
        let instructions = follow_up_instructions(ConditionId::Migraine, 30);
        assert!(instructions[0].starts_with("Return immediately"));
        assert!(instructions[1].starts_with("Follow up with primary care physician"));
        assert!(instructions
            .iter()
            .any(|i| i.contains("neurologist")));
        assert_eq!(instructions.len(), 4);
    }

    #[test]
    fn follow_ups_include_age_bands() {
        let infant = follow_up_instructions(ConditionId::General, 1);
        assert!(infant.last().unwrap().starts_with("Pediatric follow-up"));

        let senior = follow_up_instructions(ConditionId::General, 80);
        assert!(senior.last().unwrap().starts_with("Geriatric follow-up"));

        // 65 exactly gets neither band.
        let at_threshold = follow_up_instructions(ConditionId::General, 65);
        assert_eq!(at_threshold.len(), 2);
    }

    #[test]
    fn lifestyle_recommendations_cover_each_habit() {
        use triage_core::patient::{AlcoholUse, ExerciseLevel, StressLevel};
        let lifestyle = Lifestyle {
            exercise: Some(ExerciseLevel::Rarely),
            sleep: Some(SleepPattern::LessThanSix),
            diet: Some(DietQuality::Unhealthy),
            stress_level: Some(StressLevel::High),
            smoking: true,
            alcohol: Some(AlcoholUse::Moderate),
        };
        let recs = lifestyle_recommendations(&lifestyle);
        assert_eq!(recs.len(), 7);
        assert!(recs[0].starts_with("Start with light exercise"));
        assert!(recs[1].starts_with("Aim for 7-9 hours"));
        assert!(recs[2].starts_with("Incorporate more fruits"));
        assert!(recs[3].starts_with("Practice stress-reduction"));
        assert!(recs[4].starts_with("Consider counseling"));
        assert!(recs[5].starts_with("Consider smoking cessation"));
        assert!(recs[6].starts_with("Limit alcohol"));
    }

    #[test]
    fn quiet_lifestyle_gets_the_default_note() {
        let recs = lifestyle_recommendations(&Lifestyle::default());
        assert_eq!(
            recs,
            vec!["No specific lifestyle changes recommended at this time.".to_string()]
        );
    }
}
