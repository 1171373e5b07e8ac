use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionId {
    FeverHeadache,
    CoughFatigue,
    Gastroenteritis,
    Migraine,
    Hypertension,
    Diabetes,
    General,
}

impl ConditionId {
    pub const ALL: &[ConditionId] = &[
        ConditionId::FeverHeadache,
        ConditionId::CoughFatigue,
        ConditionId::Gastroenteritis,
        ConditionId::Migraine,
        ConditionId::Hypertension,
        ConditionId::Diabetes,
        ConditionId::General,
    ];

    /// Conditions with canonical symptom lists, i.e. everything the matcher
    /// scores. `General` is the fallback and is never scored.
    pub const CLINICAL: &[ConditionId] = &[
        ConditionId::FeverHeadache,
        ConditionId::CoughFatigue,
        ConditionId::Gastroenteritis,
        ConditionId::Migraine,
        ConditionId::Hypertension,
        ConditionId::Diabetes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionId::FeverHeadache => "fever_headache",
            ConditionId::CoughFatigue => "cough_fatigue",
            ConditionId::Gastroenteritis => "gastroenteritis",
            ConditionId::Migraine => "migraine",
            ConditionId::Hypertension => "hypertension",
            ConditionId::Diabetes => "diabetes",
            ConditionId::General => "general",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "fever_headache" => Some(ConditionId::FeverHeadache),
            "cough_fatigue" => Some(ConditionId::CoughFatigue),
            "gastroenteritis" => Some(ConditionId::Gastroenteritis),
            "migraine" => Some(ConditionId::Migraine),
            "hypertension" => Some(ConditionId::Hypertension),
            "diabetes" => Some(ConditionId::Diabetes),
            "general" => Some(ConditionId::General),
            _ => None,
        }
    }
}

impl fmt::Display for ConditionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    #[serde(rename = "Mild")]
    Mild,
    #[serde(rename = "Mild to Moderate")]
    MildToModerate,
    #[serde(rename = "Mild to Severe")]
    MildToSevere,
    #[serde(rename = "Moderate to Severe")]
    ModerateToSevere,
    #[serde(rename = "Severe")]
    Severe,
    #[serde(rename = "Chronic")]
    Chronic,
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Mild => "Mild",
            Severity::MildToModerate => "Mild to Moderate",
            Severity::MildToSevere => "Mild to Severe",
            Severity::ModerateToSevere => "Moderate to Severe",
            Severity::Severe => "Severe",
            Severity::Chronic => "Chronic",
            Severity::NotApplicable => "N/A",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Mild" => Some(Severity::Mild),
            "Mild to Moderate" => Some(Severity::MildToModerate),
            "Mild to Severe" => Some(Severity::MildToSevere),
            "Moderate to Severe" => Some(Severity::ModerateToSevere),
            "Severe" => Some(Severity::Severe),
            "Chronic" => Some(Severity::Chronic),
            "N/A" => Some(Severity::NotApplicable),
            _ => None,
        }
    }

    /// Collapses the descriptive band into the three-level urgency scale that
    /// drives recommendation wording.
    pub fn tier(&self) -> SeverityTier {
        match self {
            Severity::Mild | Severity::MildToModerate | Severity::NotApplicable => SeverityTier::Low,
            Severity::MildToSevere | Severity::Chronic => SeverityTier::Moderate,
            Severity::ModerateToSevere | Severity::Severe => SeverityTier::High,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityTier {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Medication {
    pub name: &'static str,
    pub dosage: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_daily: Option<&'static str>,
    pub purpose: &'static str,
    pub warning: &'static str,
}

/// Everything the catalogue knows about one condition. Slices are borrowed
/// from static tables so profiles can be handed around by reference.
#[derive(Debug, Clone, Copy)]
pub struct ConditionProfile {
    pub id: ConditionId,
    pub diagnosis: &'static str,
    pub severity: Severity,
    pub description: &'static str,
    pub urgency: &'static str,
    pub symptoms: &'static [&'static str],
    pub possible_causes: &'static [&'static str],
    pub recommended_tests: &'static [&'static str],
    pub self_care: &'static [&'static str],
    pub when_to_seek_help: &'static [&'static str],
    pub medications: &'static [Medication],
}
