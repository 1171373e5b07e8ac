use triage_core::assessment::BmiCategory;
use triage_core::patient::ExerciseLevel;
use triage_core::plan::{DietPlan, FitnessPlan};

static UNDERWEIGHT_DIET: DietPlan = DietPlan {
    breakfast: &[
        "Oatmeal with nuts and honey",
        "Banana smoothie with protein powder",
        "Whole grain toast with avocado",
    ],
    lunch: &[
        "Grilled chicken with quinoa",
        "Mixed vegetables",
        "Brown rice with lentils",
    ],
    dinner: &[
        "Salmon with sweet potato",
        "Steamed broccoli",
        "Greek yogurt with berries",
    ],
    snacks: &["Protein bars", "Mixed nuts", "Greek yogurt", "Fresh fruits"],
};

static OVERWEIGHT_DIET: DietPlan = DietPlan {
    breakfast: &["Greek yogurt with berries", "Green smoothie", "Whole grain cereal"],
    lunch: &["Grilled chicken salad", "Quinoa bowl with vegetables", "Lentil soup"],
    dinner: &["Grilled fish with vegetables", "Cauliflower rice", "Herbal tea"],
    snacks: &["Apple slices", "Almonds", "Carrot sticks", "Herbal tea"],
};

static NORMAL_DIET: DietPlan = DietPlan {
    breakfast: &["Oatmeal with fruits", "Green tea", "Whole grain toast"],
    lunch: &["Grilled chicken salad", "Brown rice", "Seasonal vegetables"],
    dinner: &["Fish with quinoa", "Steamed vegetables", "Herbal tea"],
    snacks: &["Greek yogurt", "Fruits", "Nuts", "Green tea"],
};

pub fn diet_plan(category: BmiCategory) -> &'static DietPlan {
    if category.is_underweight() {
        &UNDERWEIGHT_DIET
    } else if category.is_overweight() {
        &OVERWEIGHT_DIET
    } else {
        &NORMAL_DIET
    }
}

static BEGINNER_FITNESS: FitnessPlan = FitnessPlan {
    cardio: &["15-minute daily walks", "Light swimming 2x/week", "Stretching routine"],
    strength: &[
        "Bodyweight exercises 2x/week",
        "Light resistance bands",
        "Wall push-ups",
    ],
    flexibility: &[
        "10-minute daily stretching",
        "Basic yoga poses",
        "Neck and shoulder rolls",
    ],
    rest: &["8 hours sleep", "2 rest days per week", "Stress management"],
};

static INTERMEDIATE_FITNESS: FitnessPlan = FitnessPlan {
    cardio: &["30-minute walks daily", "Swimming 3x/week", "Cycling 2x/week"],
    strength: &[
        "Bodyweight exercises 3x/week",
        "Resistance training 2x/week",
        "Core strengthening",
    ],
    flexibility: &["15-minute yoga daily", "Full body stretching", "Foam rolling"],
    rest: &["7-8 hours sleep", "1-2 rest days per week", "Active recovery"],
};

static ADVANCED_FITNESS: FitnessPlan = FitnessPlan {
    cardio: &["45-minute runs 3x/week", "HIIT training 2x/week", "Swimming"],
    strength: &["Weight training 4x/week", "Compound movements", "Progressive overload"],
    flexibility: &["20-minute yoga daily", "Dynamic stretching", "Mobility work"],
    rest: &["7-8 hours sleep", "1 rest day per week", "Recovery techniques"],
};

/// Fitness plan keyed on self-reported activity. Callers that have no
/// exercise answer should pass the conservative default, `Rarely`.
pub fn fitness_plan(level: ExerciseLevel) -> &'static FitnessPlan {
    match level {
        ExerciseLevel::Never | ExerciseLevel::Rarely => &BEGINNER_FITNESS,
        ExerciseLevel::Sometimes => &INTERMEDIATE_FITNESS,
        ExerciseLevel::Regularly | ExerciseLevel::Daily => &ADVANCED_FITNESS,
    }
}
