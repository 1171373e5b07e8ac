use chrono::Utc;
use tracing::{info, warn};

use triage_catalog::{advice, conditions, plans, tips};
use triage_core::assessment::{AssessmentRequest, BmiCategory, ConfidenceTier};
use triage_core::condition::ConditionId;
use triage_core::diagnosis::Diagnosis;
use triage_core::patient::{ExerciseLevel, Gender};
use triage_core::report::{
    Assessment, AssessmentMetadata, AssessmentResponse, AssessmentSummary, ClinicalInformation,
    HealthMetrics, PreventiveCare, TreatmentPlan,
};

use crate::{matcher, metrics, recommend, risk};

/// Stateless assessment engine. All reference data is static, so this is
/// cheap to construct and share behind the server state.
#[derive(Debug, Clone, Copy, Default)]
pub struct Assessor;

impl Assessor {
    pub fn new() -> Self {
        Assessor
    }

    /// Ranks conditions against the symptoms and builds the diagnosis
    /// payload. When nothing clears the similarity floor the general
    /// wellness profile is reported with zero confidence.
    pub fn diagnose(
        &self,
        symptoms: &[String],
        age: Option<i64>,
        gender: Option<Gender>,
    ) -> Diagnosis {
        let echoed: Vec<String> = symptoms
            .iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let mut matches = matcher::rank_conditions(symptoms);

        if matches.is_empty() {
            if !echoed.is_empty() {
                warn!("no condition matched {} symptoms, reporting general wellness", echoed.len());
            }
            let profile = conditions::profile(ConditionId::General);
            return Diagnosis {
                condition: profile.id,
                confidence: 0.0,
                severity: profile.severity,
                description: profile.description,
                recommendation: recommend::recommendation(
                    profile.id,
                    profile.severity,
                    age,
                    gender,
                ),
                alternative_conditions: Vec::new(),
                symptoms: echoed,
            };
        }

        let top = matches.remove(0);
        Diagnosis {
            condition: top.condition,
            confidence: top.similarity,
            severity: top.severity,
            description: top.description,
            recommendation: recommend::recommendation(top.condition, top.severity, age, gender),
            alternative_conditions: matches,
            symptoms: echoed,
        }
    }

    /// Runs the whole pipeline for one request: clamp demographics, match
    /// symptoms, compute health metrics, and assemble the response envelope
    /// with the catalogue advice for the winning condition.
    pub fn assess(&self, request: &AssessmentRequest) -> AssessmentResponse {
        let age = metrics::clamp_age(request.age);
        let weight = metrics::clamp_weight(request.weight);
        let height = metrics::clamp_height(request.height);
        let symptoms: Vec<String> = request
            .symptoms
            .iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let diagnosis = self.diagnose(&symptoms, Some(age), request.gender);
        let profile = conditions::profile(diagnosis.condition);

        let bmi = metrics::bmi(weight, height);
        let bmi_category = BmiCategory::from_bmi(bmi);
        let exercise = request.lifestyle.exercise.unwrap_or(ExerciseLevel::Rarely);

        let assessment = Assessment {
            assessment_summary: AssessmentSummary {
                primary_diagnosis: profile.diagnosis,
                severity: profile.severity,
                condition_description: profile.description,
                identified_symptoms: symptoms.clone(),
                urgency_level: profile.urgency,
            },
            clinical_information: ClinicalInformation {
                possible_causes: profile.possible_causes,
                differential_diagnosis: advice::differentials(profile.id),
                recommended_tests: profile.recommended_tests,
                red_flags: profile.when_to_seek_help,
            },
            treatment_plan: TreatmentPlan {
                medications: profile.medications,
                self_care: profile.self_care,
                follow_up_instructions: recommend::follow_up_instructions(profile.id, age),
            },
            preventive_care: PreventiveCare {
                lifestyle_recommendations: recommend::lifestyle_recommendations(
                    &request.lifestyle,
                ),
                preventive_measures: advice::preventive_measures(profile.id),
            },
            health_metrics: HealthMetrics {
                bmi,
                bmi_category,
                risk_factors: risk::risk_factors(request, age),
                vital_signs_interpretation: metrics::interpret_vitals(
                    request.vital_signs.as_ref(),
                ),
            },
            additional_resources: tips::ADDITIONAL_RESOURCES,
            metadata: AssessmentMetadata {
                assessment_timestamp: Utc::now().to_rfc3339(),
                symptoms_analyzed: symptoms.len(),
                condition_confidence: ConfidenceTier::from_symptom_count(symptoms.len()),
            },
        };

        info!("assessment completed for {age}y/o with {} symptoms", symptoms.len());

        AssessmentResponse {
            success: true,
            assessment,
            diet: *plans::diet_plan(bmi_category),
            fitness: *plans::fitness_plan(exercise),
        }
    }
}
