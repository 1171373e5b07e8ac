use serde::Serialize;

use crate::condition::{ConditionId, Severity};

/// One scored candidate from the matcher. `similarity` is the average
/// best-match ratio over the reported symptoms, in `[0, 1]`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ConditionMatch {
    pub condition: ConditionId,
    pub similarity: f64,
    pub description: &'static str,
    pub severity: Severity,
}

/// Top-ranked condition plus the runners-up, with the recommendation text
/// already assembled for the patient's age and gender.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnosis {
    pub condition: ConditionId,
    pub confidence: f64,
    pub severity: Severity,
    pub description: &'static str,
    pub recommendation: String,
    pub alternative_conditions: Vec<ConditionMatch>,
    pub symptoms: Vec<String>,
}
