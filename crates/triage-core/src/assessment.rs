use std::fmt;

use serde::{Deserialize, Serialize};

use crate::patient::{Gender, Lifestyle, VitalSigns};

/// Body of `POST /api/health-assessment`. Everything is optional; missing
/// demographics fall back to defaults and out-of-range values are clamped
/// before any arithmetic runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssessmentRequest {
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    pub gender: Option<Gender>,
    /// Kilograms.
    #[serde(default)]
    pub weight: Option<f64>,
    /// Centimeters.
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub lifestyle: Lifestyle,
    #[serde(default)]
    pub vital_signs: Option<VitalSigns>,
    #[serde(default)]
    pub medical_history: Vec<String>,
    #[serde(default)]
    pub family_history: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    #[serde(rename = "Underweight")]
    Underweight,
    #[serde(rename = "Normal weight")]
    NormalWeight,
    #[serde(rename = "Overweight")]
    Overweight,
    #[serde(rename = "Obese (Class I)")]
    ObeseClassI,
    #[serde(rename = "Obese (Class II)")]
    ObeseClassII,
    #[serde(rename = "Obese (Class III)")]
    ObeseClassIII,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::NormalWeight
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else if bmi < 35.0 {
            BmiCategory::ObeseClassI
        } else if bmi < 40.0 {
            BmiCategory::ObeseClassII
        } else {
            BmiCategory::ObeseClassIII
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::ObeseClassI => "Obese (Class I)",
            BmiCategory::ObeseClassII => "Obese (Class II)",
            BmiCategory::ObeseClassIII => "Obese (Class III)",
        }
    }

    pub fn is_underweight(&self) -> bool {
        matches!(self, BmiCategory::Underweight)
    }

    pub fn is_overweight(&self) -> bool {
        matches!(
            self,
            BmiCategory::Overweight
                | BmiCategory::ObeseClassI
                | BmiCategory::ObeseClassII
                | BmiCategory::ObeseClassIII
        )
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse confidence reported alongside the assessment, derived from how
/// many symptoms the request carried rather than from match scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    pub fn from_symptom_count(count: usize) -> Self {
        if count > 2 {
            ConfidenceTier::High
        } else if count > 0 {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "high",
            ConfidenceTier::Medium => "medium",
            ConfidenceTier::Low => "low",
        }
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
