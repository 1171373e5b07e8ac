use serde::Serialize;

use crate::assessment::{BmiCategory, ConfidenceTier};
use crate::condition::{Medication, Severity};
use crate::patient::VitalInterpretation;
use crate::plan::{DietPlan, FitnessPlan};

/// Full body of a successful `POST /api/health-assessment` response.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentResponse {
    pub success: bool,
    pub assessment: Assessment,
    pub diet: DietPlan,
    pub fitness: FitnessPlan,
}

#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub assessment_summary: AssessmentSummary,
    pub clinical_information: ClinicalInformation,
    pub treatment_plan: TreatmentPlan,
    pub preventive_care: PreventiveCare,
    pub health_metrics: HealthMetrics,
    pub additional_resources: &'static [&'static str],
    pub metadata: AssessmentMetadata,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentSummary {
    pub primary_diagnosis: &'static str,
    pub severity: Severity,
    pub condition_description: &'static str,
    /// The symptoms as reported, trimmed, in request order.
    pub identified_symptoms: Vec<String>,
    pub urgency_level: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClinicalInformation {
    pub possible_causes: &'static [&'static str],
    pub differential_diagnosis: &'static [&'static str],
    pub recommended_tests: &'static [&'static str],
    pub red_flags: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct TreatmentPlan {
    pub medications: &'static [Medication],
    pub self_care: &'static [&'static str],
    pub follow_up_instructions: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PreventiveCare {
    pub lifestyle_recommendations: Vec<String>,
    pub preventive_measures: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthMetrics {
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub risk_factors: Vec<String>,
    pub vital_signs_interpretation: VitalInterpretation,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentMetadata {
    /// RFC 3339, UTC.
    pub assessment_timestamp: String,
    pub symptoms_analyzed: usize,
    pub condition_confidence: ConfidenceTier,
}
