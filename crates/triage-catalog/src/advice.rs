use triage_core::condition::ConditionId;

/// Alternative diagnoses worth ruling out for a condition. The fallback
/// single-entry list is part of the response contract, not an error.
pub fn differentials(id: ConditionId) -> &'static [&'static str] {
    match id {
        ConditionId::FeverHeadache => &[
            "Influenza (Flu)",
            "Common Cold",
            "COVID-19",
            "Sinusitis",
            "Meningitis (if severe headache and neck stiffness)",
            "Mononucleosis (in adolescents/young adults)",
        ],
        ConditionId::CoughFatigue => &[
            "Acute Bronchitis",
            "Pneumonia",
            "Asthma exacerbation",
            "Chronic Obstructive Pulmonary Disease (COPD)",
            "Postnasal Drip Syndrome",
            "Gastroesophageal Reflux Disease (GERD)",
        ],
        ConditionId::Gastroenteritis => &[
            "Food Poisoning",
            "Inflammatory Bowel Disease flare",
            "Appendicitis (if severe abdominal pain)",
            "Diverticulitis",
            "Bowel Obstruction",
            "Gastroparesis",
        ],
        ConditionId::Migraine => &[
            "Tension Headache",
            "Cluster Headache",
            "Sinus Headache",
            "Medication Overuse Headache",
            "Temporal Arteritis (in patients > 50 years)",
            "Intracranial Hemorrhage (if sudden onset)",
        ],
        ConditionId::Hypertension => &[
            "White Coat Hypertension",
            "Secondary Hypertension (renal or endocrine)",
            "Anxiety Disorder",
            "Hyperthyroidism",
            "Obstructive Sleep Apnea",
        ],
        ConditionId::Diabetes => &[
            "Type 1 Diabetes",
            "Prediabetes",
            "Diabetes Insipidus",
            "Hyperthyroidism",
            "Medication-induced hyperglycemia",
        ],
        ConditionId::General => &["No specific differentials available"],
    }
}

/// Condition-specific follow-up lines appended after the base instructions.
pub fn follow_ups(id: ConditionId) -> &'static [&'static str] {
    match id {
        ConditionId::FeverHeadache => &[
            "Return if fever > 38.9°C (102°F) persists > 3 days",
            "Seek care for severe headache, confusion, or neck stiffness",
        ],
        ConditionId::CoughFatigue => &[
            "Follow up if cough persists > 3 weeks",
            "Seek care for difficulty breathing or chest pain",
        ],
        ConditionId::Gastroenteritis => &[
            "Follow up if symptoms persist > 2 days",
            "Seek care for signs of dehydration or blood in stool",
        ],
        ConditionId::Migraine => &[
            "Follow up with neurologist if migraines are frequent or severe",
            "Keep a headache diary to identify triggers",
        ],
        ConditionId::Hypertension => &[
            "Recheck blood pressure within 1-2 weeks",
            "Keep a log of home blood pressure readings",
        ],
        ConditionId::Diabetes => &[
            "Schedule fasting glucose and HbA1c testing",
            "Seek care for persistent thirst, confusion, or rapid breathing",
        ],
        ConditionId::General => &[],
    }
}

pub fn preventive_measures(id: ConditionId) -> &'static [&'static str] {
    match id {
        ConditionId::FeverHeadache => &[
            "Annual flu vaccination",
            "Frequent hand washing",
            "Avoid close contact with sick individuals",
            "Stay home when feeling unwell",
        ],
        ConditionId::CoughFatigue => &[
            "Annual flu shot",
            "Pneumonia vaccine if eligible",
            "Avoid smoking and secondhand smoke",
            "Use a humidifier in dry environments",
        ],
        ConditionId::Gastroenteritis => &[
            "Frequent hand washing, especially before eating",
            "Proper food handling and preparation",
            "Avoid undercooked foods when traveling",
            "Stay hydrated",
        ],
        ConditionId::Migraine => &[
            "Identify and avoid personal triggers",
            "Maintain regular sleep schedule",
            "Stay hydrated and don't skip meals",
            "Consider preventive medications if migraines are frequent",
        ],
        ConditionId::Hypertension => &[
            "Reduce dietary sodium",
            "Maintain a healthy weight",
            "Regular aerobic exercise",
            "Limit alcohol and avoid smoking",
        ],
        ConditionId::Diabetes => &[
            "Maintain a healthy weight",
            "Limit refined sugars and processed foods",
            "Regular physical activity",
            "Routine blood sugar screening if at risk",
        ],
        ConditionId::General => &[
            "Regular health check-ups",
            "Balanced diet and regular exercise",
            "Adequate sleep and stress management",
        ],
    }
}
