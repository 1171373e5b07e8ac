use std::fmt;

use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            "other" => Some(Gender::Other),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseLevel {
    Never,
    Rarely,
    Sometimes,
    Regularly,
    Daily,
}

impl ExerciseLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseLevel::Never => "never",
            ExerciseLevel::Rarely => "rarely",
            ExerciseLevel::Sometimes => "sometimes",
            ExerciseLevel::Regularly => "regularly",
            ExerciseLevel::Daily => "daily",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "never" => Some(ExerciseLevel::Never),
            "rarely" => Some(ExerciseLevel::Rarely),
            "sometimes" => Some(ExerciseLevel::Sometimes),
            "regularly" => Some(ExerciseLevel::Regularly),
            "daily" => Some(ExerciseLevel::Daily),
            _ => None,
        }
    }

    pub fn is_sedentary(&self) -> bool {
        matches!(self, ExerciseLevel::Never | ExerciseLevel::Rarely)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SleepPattern {
    #[serde(rename = "less than 6")]
    LessThanSix,
    #[serde(rename = "6-7")]
    SixToSeven,
    #[serde(rename = "7-8")]
    SevenToEight,
    #[serde(rename = "8-9")]
    EightToNine,
    #[serde(rename = "more than 9")]
    MoreThanNine,
}

impl SleepPattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            SleepPattern::LessThanSix => "less than 6",
            SleepPattern::SixToSeven => "6-7",
            SleepPattern::SevenToEight => "7-8",
            SleepPattern::EightToNine => "8-9",
            SleepPattern::MoreThanNine => "more than 9",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "less than 6" => Some(SleepPattern::LessThanSix),
            "6-7" => Some(SleepPattern::SixToSeven),
            "7-8" => Some(SleepPattern::SevenToEight),
            "8-9" => Some(SleepPattern::EightToNine),
            "more than 9" => Some(SleepPattern::MoreThanNine),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietQuality {
    Healthy,
    Mixed,
    Unhealthy,
}

impl DietQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            DietQuality::Healthy => "healthy",
            DietQuality::Mixed => "mixed",
            DietQuality::Unhealthy => "unhealthy",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "healthy" => Some(DietQuality::Healthy),
            "mixed" => Some(DietQuality::Mixed),
            "unhealthy" => Some(DietQuality::Unhealthy),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StressLevel {
    #[serde(rename = "low")]
    Low,
    #[serde(rename = "moderate")]
    Moderate,
    #[serde(rename = "high")]
    High,
    #[serde(rename = "very high")]
    VeryHigh,
}

impl StressLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StressLevel::Low => "low",
            StressLevel::Moderate => "moderate",
            StressLevel::High => "high",
            StressLevel::VeryHigh => "very high",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "low" => Some(StressLevel::Low),
            "moderate" => Some(StressLevel::Moderate),
            "high" => Some(StressLevel::High),
            "very high" => Some(StressLevel::VeryHigh),
            _ => None,
        }
    }

    pub fn is_elevated(&self) -> bool {
        matches!(self, StressLevel::High | StressLevel::VeryHigh)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlcoholUse {
    None,
    Light,
    Moderate,
    Heavy,
}

impl AlcoholUse {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlcoholUse::None => "none",
            AlcoholUse::Light => "light",
            AlcoholUse::Moderate => "moderate",
            AlcoholUse::Heavy => "heavy",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "none" => Some(AlcoholUse::None),
            "light" => Some(AlcoholUse::Light),
            "moderate" => Some(AlcoholUse::Moderate),
            "heavy" => Some(AlcoholUse::Heavy),
            _ => None,
        }
    }

    pub fn is_significant(&self) -> bool {
        matches!(self, AlcoholUse::Moderate | AlcoholUse::Heavy)
    }
}

/// Self-reported habits. Every field is optional on the wire; absent fields
/// simply produce no recommendations or risk factors.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Lifestyle {
    #[serde(default)]
    pub exercise: Option<ExerciseLevel>,
    #[serde(default)]
    pub sleep: Option<SleepPattern>,
    #[serde(default)]
    pub diet: Option<DietQuality>,
    #[serde(default)]
    pub stress_level: Option<StressLevel>,
    #[serde(default)]
    pub smoking: bool,
    #[serde(default)]
    pub alcohol: Option<AlcoholUse>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VitalSigns {
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub heart_rate: Option<i32>,
    /// Systolic/diastolic as reported, e.g. "120/80".
    #[serde(default)]
    pub blood_pressure: Option<String>,
    #[serde(default)]
    pub respiratory_rate: Option<i32>,
    #[serde(default)]
    pub oxygen_saturation: Option<f64>,
}

impl VitalSigns {
    pub fn is_empty(&self) -> bool {
        self.temperature.is_none()
            && self.heart_rate.is_none()
            && self.blood_pressure.is_none()
            && self.respiratory_rate.is_none()
            && self.oxygen_saturation.is_none()
    }
}

/// Outcome of the vital sign review. Serializes as a plain string for the
/// two summary cases and as a list of findings otherwise, which is the shape
/// clients already consume.
#[derive(Debug, Clone, PartialEq)]
pub enum VitalInterpretation {
    NotProvided,
    AllNormal,
    Findings(Vec<String>),
}

impl VitalInterpretation {
    pub const NOT_PROVIDED: &'static str = "No vital signs provided";
    pub const ALL_NORMAL: &'static str = "All vital signs within normal ranges";
}

impl Serialize for VitalInterpretation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            VitalInterpretation::NotProvided => serializer.serialize_str(Self::NOT_PROVIDED),
            VitalInterpretation::AllNormal => serializer.serialize_str(Self::ALL_NORMAL),
            VitalInterpretation::Findings(findings) => findings.serialize(serializer),
        }
    }
}
