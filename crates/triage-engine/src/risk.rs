use triage_core::assessment::AssessmentRequest;
use triage_core::patient::{DietQuality, SleepPattern};

/// Screens demographics, lifestyle, and history for known risk factors.
/// `age` is the already-clamped age, not the raw request value.
pub fn risk_factors(request: &AssessmentRequest, age: i64) -> Vec<String> {
    let mut factors: Vec<String> = Vec::new();
    let lifestyle = &request.lifestyle;

    if age > 50 {
        factors.push("Age > 50: Increased risk for chronic conditions".to_string());
    }

    if lifestyle.smoking {
        factors.push(
            "Tobacco use: Increases risk of cardiovascular, respiratory diseases, and cancer"
                .to_string(),
        );
    }

    if lifestyle.alcohol.is_some_and(|a| a.is_significant()) {
        factors.push(
            "Alcohol consumption: May affect liver, cardiovascular, and mental health".to_string(),
        );
    }

    if lifestyle.exercise.is_some_and(|e| e.is_sedentary()) {
        factors.push(
            "Physical inactivity: Associated with increased risk of chronic diseases".to_string(),
        );
    }

    if lifestyle.diet == Some(DietQuality::Unhealthy) {
        factors.push("Poor diet: May contribute to obesity, diabetes, and heart disease".to_string());
    }

    match lifestyle.sleep {
        Some(SleepPattern::LessThanSix) => {
            factors.push("Insufficient sleep: Associated with various health risks".to_string());
        }
        Some(SleepPattern::MoreThanNine) => {
            factors.push("Excessive sleep: May indicate underlying health issues".to_string());
        }
        _ => {}
    }

    if lifestyle.stress_level.is_some_and(|s| s.is_elevated()) {
        factors.push("Chronic stress: May impact immune function and overall health".to_string());
    }

    let history = &request.medical_history;
    if history.iter().any(|h| h == "diabetes") {
        factors.push("Diabetes: Requires careful management to prevent complications".to_string());
    }
    if history.iter().any(|h| h == "hypertension") {
        factors.push("Hypertension: Increases cardiovascular risk".to_string());
    }
    if history.iter().any(|h| h == "high_cholesterol") {
        factors.push("High cholesterol: Contributes to cardiovascular disease risk".to_string());
    }

    let family = &request.family_history;
    if family.iter().any(|h| h == "heart_disease") {
        factors.push("Family history of heart disease: Increased cardiovascular risk".to_string());
    }
    if family.iter().any(|h| h == "diabetes") {
        factors.push(
            "Family history of diabetes: Increased risk of developing diabetes".to_string(),
        );
    }

    if factors.is_empty() {
        factors.push("No significant risk factors identified".to_string());
    }
    factors
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_core::patient::{AlcoholUse, DietQuality, ExerciseLevel, Lifestyle, StressLevel};

    #[test]
    fn clean_profile_has_no_risk_factors() {
        let request = AssessmentRequest::default();
        let factors = risk_factors(&request, 25);
        assert_eq!(factors, vec!["No significant risk factors identified".to_string()]);
    }

    #[test]
    fn age_over_fifty_is_a_risk_factor() {
        let request = AssessmentRequest::default();
        assert!(risk_factors(&request, 51)[0].starts_with("Age > 50"));
        // 50 itself is not past the threshold.
        assert_eq!(
            risk_factors(&request, 50),
            vec!["No significant risk factors identified".to_string()]
        );
    }

    #[test]
    fn lifestyle_risks_accumulate_in_order() {
        let request = AssessmentRequest {
            lifestyle: Lifestyle {
                exercise: Some(ExerciseLevel::Never),
                sleep: Some(SleepPattern::LessThanSix),
                diet: Some(DietQuality::Unhealthy),
                stress_level: Some(StressLevel::VeryHigh),
                smoking: true,
                alcohol: Some(AlcoholUse::Heavy),
            },
            ..AssessmentRequest::default()
        };
        let factors = risk_factors(&request, 60);
        let expected_prefixes = [
            "Age > 50",
            "Tobacco use",
            "Alcohol consumption",
            "Physical inactivity",
            "Poor diet",
            "Insufficient sleep",
            "Chronic stress",
        ];
        assert_eq!(factors.len(), expected_prefixes.len());
        for (factor, prefix) in factors.iter().zip(expected_prefixes) {
            assert!(factor.starts_with(prefix), "{factor} != {prefix}");
        }
    }

    #[test]
    fn light_drinking_and_moderate_stress_are_fine() {
        let request = AssessmentRequest {
            lifestyle: Lifestyle {
                alcohol: Some(AlcoholUse::Light),
                stress_level: Some(StressLevel::Moderate),
                sleep: Some(SleepPattern::SevenToEight),
                exercise: Some(ExerciseLevel::Daily),
                ..Lifestyle::default()
            },
            ..AssessmentRequest::default()
        };
        assert_eq!(
            risk_factors(&request, 30),
            vec!["No significant risk factors identified".to_string()]
        );
    }

    #[test]
    fn history_entries_are_recognized() {
        let request = AssessmentRequest {
            medical_history: vec!["hypertension".to_string(), "high_cholesterol".to_string()],
            family_history: vec!["diabetes".to_string()],
            ..AssessmentRequest::default()
        };
        let factors = risk_factors(&request, 40);
        assert_eq!(factors.len(), 3);
        assert!(factors[0].starts_with("Hypertension"));
        assert!(factors[1].starts_with("High cholesterol"));
        assert!(factors[2].starts_with("Family history of diabetes"));
    }

    #[test]
    fn unknown_history_entries_are_ignored() {
        let request = AssessmentRequest {
            medical_history: vec!["asthma".to_string()],
            family_history: vec!["cancer".to_string()],
            ..AssessmentRequest::default()
        };
        assert_eq!(
            risk_factors(&request, 30),
            vec!["No significant risk factors identified".to_string()]
        );
    }
}
