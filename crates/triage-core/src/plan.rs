use serde::Serialize;

/// Meal suggestions grouped the way the assessment response reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DietPlan {
    pub breakfast: &'static [&'static str],
    pub lunch: &'static [&'static str],
    pub dinner: &'static [&'static str],
    pub snacks: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FitnessPlan {
    pub cardio: &'static [&'static str],
    pub strength: &'static [&'static str],
    pub flexibility: &'static [&'static str],
    pub rest: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmergencyContacts {
    pub emergency: &'static str,
    pub poison_control: &'static str,
    pub mental_health: &'static str,
    pub healthcare_provider: &'static str,
}
