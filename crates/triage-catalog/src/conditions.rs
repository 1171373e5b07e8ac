use triage_core::condition::{ConditionId, ConditionProfile, Medication, Severity};

static FEVER_HEADACHE: ConditionProfile = ConditionProfile {
    id: ConditionId::FeverHeadache,
    diagnosis: "Viral Upper Respiratory Infection (Common Cold) or Influenza",
    severity: Severity::MildToModerate,
    description: "Viral infection affecting the upper respiratory tract, often accompanied by systemic symptoms",
    urgency: "Low to Medium (Seek care if symptoms worsen or persist > 3 days)",
    symptoms: &[
        "fever",
        "headache",
        "body aches",
        "fatigue",
        "sore throat",
        "nasal congestion",
        "runny nose",
        "sneezing",
        "muscle aches",
    ],
    possible_causes: &[
        "Rhinovirus (most common)",
        "Influenza virus",
        "Coronavirus",
        "Adenovirus",
    ],
    recommended_tests: &[
        "Rapid Influenza Test (if within 48 hours of symptom onset)",
        "COVID-19 test",
        "Complete Blood Count (CBC) if symptoms persist",
        "Throat culture if strep throat is suspected",
    ],
    self_care: &[
        "Rest and adequate hydration",
        "Over-the-counter fever reducers",
        "Saline nasal spray",
        "Warm salt water gargles",
    ],
    when_to_seek_help: &[
        "Difficulty breathing or shortness of breath",
        "Persistent fever > 38.9°C (102°F) for more than 3 days",
        "Severe headache or neck stiffness",
        "Confusion or difficulty waking up",
        "Chest pain or pressure",
    ],
    medications: &[
        Medication {
            name: "Paracetamol (Acetaminophen)",
            dosage: "500-1000mg every 6 hours as needed",
            max_daily: Some("4000mg"),
            purpose: "Fever reduction and pain relief",
            warning: "Do not exceed maximum daily dose. Avoid in liver disease.",
        },
        Medication {
            name: "Ibuprofen",
            dosage: "200-400mg every 6-8 hours as needed",
            max_daily: Some("1200mg"),
            purpose: "Anti-inflammatory, fever and pain relief",
            warning: "Take with food. Avoid if history of stomach ulcers or kidney disease.",
        },
        Medication {
            name: "Pseudoephedrine (decongestant)",
            dosage: "30-60mg every 4-6 hours",
            max_daily: Some("240mg"),
            purpose: "Nasal congestion relief",
            warning: "Not recommended for patients with high blood pressure or heart conditions.",
        },
    ],
};

static COUGH_FATIGUE: ConditionProfile = ConditionProfile {
    id: ConditionId::CoughFatigue,
    diagnosis: "Acute Bronchitis or Viral Respiratory Infection",
    severity: Severity::MildToModerate,
    description: "Inflammation of the bronchial tubes causing cough, often following a cold or flu",
    urgency: "Low (unless severe symptoms develop)",
    symptoms: &[
        "cough",
        "fatigue",
        "chest discomfort",
        "slight fever",
        "sore throat",
    ],
    possible_causes: &[
        "Viral infection (90% of cases)",
        "Bacterial infection (less common)",
        "Environmental irritants",
        "Postnasal drip from allergies or cold",
    ],
    recommended_tests: &[
        "Chest X-ray if pneumonia is suspected",
        "Sputum culture if bacterial infection is suspected",
        "Pulse oximetry if breathing difficulties are present",
        "COVID-19 test",
    ],
    self_care: &[
        "Increase fluid intake",
        "Use a humidifier",
        "Honey (1-2 teaspoons) for cough relief",
        "Throat lozenges for throat irritation",
    ],
    when_to_seek_help: &[
        "Cough lasting more than 3 weeks",
        "High fever (>38.9°C or 102°F)",
        "Coughing up blood",
        "Wheezing or difficulty breathing",
        "Chest pain with breathing",
    ],
    medications: &[
        Medication {
            name: "Dextromethorphan",
            dosage: "10-20mg every 4 hours",
            max_daily: Some("120mg"),
            purpose: "Cough suppressant",
            warning: "Avoid with MAO inhibitors. May cause drowsiness.",
        },
        Medication {
            name: "Guaifenesin",
            dosage: "200-400mg every 4 hours",
            max_daily: Some("2400mg"),
            purpose: "Expectorant to loosen mucus",
            warning: "Drink plenty of fluids with this medication.",
        },
    ],
};

static GASTROENTERITIS: ConditionProfile = ConditionProfile {
    id: ConditionId::Gastroenteritis,
    diagnosis: "Acute Viral Gastroenteritis",
    severity: Severity::MildToSevere,
    description: "Inflammation of the stomach and intestines causing diarrhea and vomiting",
    urgency: "Medium (Seek care if signs of dehydration or blood in stool)",
    symptoms: &[
        "nausea",
        "vomiting",
        "diarrhea",
        "abdominal cramps",
        "abdominal pain",
        "fever",
    ],
    possible_causes: &[
        "Norovirus (most common)",
        "Rotavirus (in children)",
        "Food poisoning",
        "Bacterial infections (E. coli, Salmonella)",
    ],
    recommended_tests: &[
        "Stool culture if symptoms are severe or persistent",
        "Blood tests for electrolyte imbalance in severe cases",
        "Rapid antigen tests for specific pathogens",
    ],
    self_care: &[
        "Oral rehydration solutions",
        "BRAT diet (Bananas, Rice, Applesauce, Toast)",
        "Small, frequent sips of clear fluids",
        "Avoid dairy, caffeine, and fatty foods",
    ],
    when_to_seek_help: &[
        "Signs of dehydration (dry mouth, dizziness, dark urine)",
        "Blood in vomit or stool",
        "Severe abdominal pain",
        "Fever > 38.9°C (102°F)",
        "Symptoms persisting > 2 days",
    ],
    medications: &[
        Medication {
            name: "Loperamide",
            dosage: "4mg initially, then 2mg after each loose stool",
            max_daily: Some("16mg"),
            purpose: "Anti-diarrheal",
            warning: "Not recommended for children under 12 or if fever or bloody diarrhea is present.",
        },
        Medication {
            name: "Oral Rehydration Salts (ORS)",
            dosage: "As directed on package",
            max_daily: None,
            purpose: "Prevent dehydration",
            warning: "Continue breastfeeding for infants.",
        },
    ],
};

static MIGRAINE: ConditionProfile = ConditionProfile {
    id: ConditionId::Migraine,
    diagnosis: "Migraine Headache",
    severity: Severity::ModerateToSevere,
    description: "Recurrent headache disorder manifesting as moderate to severe headaches, often accompanied by nausea and light/sound sensitivity",
    urgency: "Medium (Seek immediate care for \"worst headache of life\" or neurological symptoms)",
    symptoms: &[
        "severe headache",
        "nausea",
        "vomiting",
        "light sensitivity",
        "sound sensitivity",
        "aura",
    ],
    possible_causes: &[
        "Genetic predisposition",
        "Hormonal changes",
        "Certain foods or food additives",
        "Stress and sleep disturbances",
        "Environmental factors (weather changes, strong smells)",
    ],
    recommended_tests: &[
        "Neurological examination",
        "MRI or CT scan if first severe headache or unusual symptoms",
        "Blood tests to rule out other conditions",
    ],
    self_care: &[
        "Rest in a quiet, dark room",
        "Cold compress on forehead or neck",
        "Hydration",
        "Caffeine in small amounts (may help some people)",
    ],
    when_to_seek_help: &[
        "Sudden, severe headache (\"thunderclap headache\")",
        "Headache after head injury",
        "Fever, stiff neck, confusion, or seizures",
        "Weakness, numbness, or trouble speaking",
        "Headache that worsens over days or changes pattern",
    ],
    medications: &[
        Medication {
            name: "Ibuprofen",
            dosage: "400-600mg at onset",
            max_daily: Some("1200mg"),
            purpose: "Pain relief for mild migraines",
            warning: "Take with food. Avoid if history of stomach ulcers.",
        },
        Medication {
            name: "Sumatriptan (prescription)",
            dosage: "25-100mg at onset",
            max_daily: Some("200mg"),
            purpose: "Migraine-specific medication",
            warning: "Not for patients with heart disease or uncontrolled hypertension.",
        },
        Medication {
            name: "Ondansetron (prescription)",
            dosage: "4-8mg as needed",
            max_daily: Some("24mg"),
            purpose: "For nausea and vomiting",
            warning: "May cause drowsiness or headache.",
        },
    ],
};

static HYPERTENSION: ConditionProfile = ConditionProfile {
    id: ConditionId::Hypertension,
    diagnosis: "Essential Hypertension (High Blood Pressure)",
    severity: Severity::ModerateToSevere,
    description: "Persistently elevated arterial blood pressure, often without noticeable symptoms",
    urgency: "Medium (Seek immediate care for chest pain, severe headache, or vision changes)",
    symptoms: &[
        "headache",
        "shortness of breath",
        "nosebleeds",
        "dizziness",
    ],
    possible_causes: &[
        "Genetic predisposition",
        "High sodium diet",
        "Obesity and physical inactivity",
        "Chronic stress",
        "Kidney disease (secondary hypertension)",
    ],
    recommended_tests: &[
        "Repeated blood pressure measurements on separate days",
        "Basic metabolic panel",
        "Lipid profile",
        "Electrocardiogram (ECG)",
        "Urinalysis",
    ],
    self_care: &[
        "Reduce sodium intake",
        "Regular aerobic exercise",
        "Limit alcohol consumption",
        "Home blood pressure monitoring",
    ],
    when_to_seek_help: &[
        "Blood pressure reading above 180/120",
        "Severe headache with confusion",
        "Chest pain or shortness of breath",
        "Sudden vision changes",
        "Blood in urine",
    ],
    medications: &[
        Medication {
            name: "Amlodipine (prescription)",
            dosage: "5-10mg once daily",
            max_daily: Some("10mg"),
            purpose: "Calcium channel blocker for blood pressure control",
            warning: "May cause ankle swelling. Do not stop abruptly.",
        },
        Medication {
            name: "Lisinopril (prescription)",
            dosage: "10-40mg once daily",
            max_daily: Some("40mg"),
            purpose: "ACE inhibitor for blood pressure control",
            warning: "Not for use in pregnancy. May cause a dry cough.",
        },
    ],
};

static DIABETES: ConditionProfile = ConditionProfile {
    id: ConditionId::Diabetes,
    diagnosis: "Suspected Type 2 Diabetes Mellitus",
    severity: Severity::Chronic,
    description: "Metabolic disorder affecting blood sugar regulation",
    urgency: "Medium (Seek prompt care for confusion, rapid breathing, or fruity breath odor)",
    symptoms: &[
        "increased thirst",
        "frequent urination",
        "fatigue",
        "blurred vision",
    ],
    possible_causes: &[
        "Insulin resistance",
        "Genetic predisposition",
        "Obesity and sedentary lifestyle",
        "Metabolic syndrome",
    ],
    recommended_tests: &[
        "Fasting blood glucose",
        "HbA1c (glycated hemoglobin)",
        "Oral glucose tolerance test",
        "Lipid profile and kidney function tests",
    ],
    self_care: &[
        "Monitor carbohydrate intake",
        "Regular physical activity",
        "Maintain a healthy weight",
        "Choose water over sugary drinks",
    ],
    when_to_seek_help: &[
        "Blood glucose persistently above 300 mg/dL",
        "Confusion or unusual drowsiness",
        "Rapid breathing or fruity breath odor",
        "Slow-healing wounds or numbness in the feet",
    ],
    medications: &[
        Medication {
            name: "Metformin (prescription)",
            dosage: "500-1000mg twice daily with meals",
            max_daily: Some("2550mg"),
            purpose: "First-line medication for blood sugar control",
            warning: "Take with food. Not for patients with severe kidney disease.",
        },
    ],
};

static GENERAL: ConditionProfile = ConditionProfile {
    id: ConditionId::General,
    diagnosis: "General Wellness Assessment",
    severity: Severity::NotApplicable,
    description: "Routine health assessment with no acute symptoms reported",
    urgency: "Low",
    symptoms: &[],
    possible_causes: &[],
    recommended_tests: &[],
    self_care: &[],
    when_to_seek_help: &[],
    medications: &[
        Medication {
            name: "Multivitamin",
            dosage: "As directed on label",
            max_daily: None,
            purpose: "Nutritional support",
            warning: "Not a substitute for a balanced diet.",
        },
        Medication {
            name: "Vitamin D",
            dosage: "1000-2000 IU daily",
            max_daily: None,
            purpose: "Bone health and immune function",
            warning: "Consult doctor for higher doses.",
        },
    ],
};

pub fn profile(id: ConditionId) -> &'static ConditionProfile {
    match id {
        ConditionId::FeverHeadache => &FEVER_HEADACHE,
        ConditionId::CoughFatigue => &COUGH_FATIGUE,
        ConditionId::Gastroenteritis => &GASTROENTERITIS,
        ConditionId::Migraine => &MIGRAINE,
        ConditionId::Hypertension => &HYPERTENSION,
        ConditionId::Diabetes => &DIABETES,
        ConditionId::General => &GENERAL,
    }
}

/// Profiles the matcher scores, in catalogue order. Order matters: ranking
/// is stable, so equal scores keep this order.
pub fn profiles() -> impl Iterator<Item = &'static ConditionProfile> {
    ConditionId::CLINICAL.iter().map(|id| profile(*id))
}
