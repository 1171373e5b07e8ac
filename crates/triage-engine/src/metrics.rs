use triage_core::patient::{VitalInterpretation, VitalSigns};

pub const DEFAULT_AGE: i64 = 25;
pub const DEFAULT_WEIGHT_KG: f64 = 70.0;
pub const DEFAULT_HEIGHT_CM: f64 = 170.0;

/// Missing ages fall back to the default; reported ages are clamped to a
/// plausible human range before any age-based branching.
pub fn clamp_age(age: Option<i64>) -> i64 {
    age.unwrap_or(DEFAULT_AGE).clamp(0, 120)
}

pub fn clamp_weight(weight: Option<f64>) -> f64 {
    weight.unwrap_or(DEFAULT_WEIGHT_KG).clamp(0.0, 300.0)
}

pub fn clamp_height(height: Option<f64>) -> f64 {
    height.unwrap_or(DEFAULT_HEIGHT_CM).clamp(50.0, 250.0)
}

/// Body mass index from weight in kilograms and height in centimeters,
/// rounded to one decimal place. Height is clamped upstream so the square
/// never reaches zero.
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let meters = height_cm / 100.0;
    let raw = weight_kg / (meters * meters);
    (raw * 10.0).round() / 10.0
}

/// Checks each provided vital against its normal range. Unparseable blood
/// pressure strings are skipped rather than failing the assessment.
pub fn interpret_vitals(vitals: Option<&VitalSigns>) -> VitalInterpretation {
    let Some(vitals) = vitals else {
        return VitalInterpretation::NotProvided;
    };
    if vitals.is_empty() {
        return VitalInterpretation::NotProvided;
    }

    let mut findings = Vec::new();

    if let Some(temp) = vitals.temperature {
        if temp < 36.1 {
            findings.push(format!(
                "Low body temperature ({temp}°C): May indicate hypothermia or other conditions"
            ));
        } else if temp > 37.2 {
            findings.push(format!("Elevated temperature ({temp}°C): May indicate fever"));
        }
    }

    if let Some(hr) = vitals.heart_rate {
        if hr < 60 {
            findings.push(format!("Low heart rate ({hr} bpm): Bradycardia"));
        } else if hr > 100 {
            findings.push(format!("High heart rate ({hr} bpm): Tachycardia"));
        }
    }

    if let Some(bp) = vitals.blood_pressure.as_deref() {
        if let Some((systolic, diastolic)) = parse_blood_pressure(bp) {
            if systolic < 90 || diastolic < 60 {
                findings.push(format!(
                    "Low blood pressure ({systolic}/{diastolic}): Hypotension"
                ));
            } else if systolic >= 140 || diastolic >= 90 {
                findings.push(format!(
                    "High blood pressure ({systolic}/{diastolic}): Hypertension"
                ));
            }
        }
    }

    if let Some(rr) = vitals.respiratory_rate {
        if rr < 12 {
            findings.push(format!("Low respiratory rate ({rr} breaths/min): Bradypnea"));
        } else if rr > 20 {
            findings.push(format!("High respiratory rate ({rr} breaths/min): Tachypnea"));
        }
    }

    if let Some(spo2) = vitals.oxygen_saturation {
        if spo2 < 92.0 {
            findings.push(format!(
                "Low oxygen saturation ({spo2}%): Hypoxemia - seek medical attention"
            ));
        }
    }

    if findings.is_empty() {
        VitalInterpretation::AllNormal
    } else {
        VitalInterpretation::Findings(findings)
    }
}

fn parse_blood_pressure(raw: &str) -> Option<(i32, i32)> {
    let (systolic, diastolic) = raw.split_once('/')?;
    let systolic = systolic.trim().parse().ok()?;
    let diastolic = diastolic.trim().parse().ok()?;
    Some((systolic, diastolic))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_clamp_and_default() {
        assert_eq!(clamp_age(None), 25);
        assert_eq!(clamp_age(Some(30)), 30);
        assert_eq!(clamp_age(Some(-5)), 0);
        assert_eq!(clamp_age(Some(500)), 120);
    }

    #[test]
    fn weight_and_height_clamps() {
        assert_eq!(clamp_weight(None), 70.0);
        assert_eq!(clamp_weight(Some(1000.0)), 300.0);
        assert_eq!(clamp_weight(Some(-10.0)), 0.0);
        assert_eq!(clamp_height(None), 170.0);
        assert_eq!(clamp_height(Some(10.0)), 50.0);
        assert_eq!(clamp_height(Some(400.0)), 250.0);
    }

    #[test]
    fn bmi_rounds_to_one_decimal() {
        assert_eq!(bmi(70.0, 170.0), 24.2);
        assert_eq!(bmi(65.0, 170.0), 22.5);
        assert_eq!(bmi(50.0, 180.0), 15.4);
        assert_eq!(bmi(120.0, 160.0), 46.9);
    }

    #[test]
    fn missing_vitals_are_reported_as_not_provided() {
        assert_eq!(interpret_vitals(None), VitalInterpretation::NotProvided);
        let empty = VitalSigns::default();
        assert_eq!(
            interpret_vitals(Some(&empty)),
            VitalInterpretation::NotProvided
        );
    }

    #[test]
    fn normal_vitals_are_all_normal() {
        let vitals = VitalSigns {
            temperature: Some(36.8),
            heart_rate: Some(72),
            blood_pressure: Some("120/80".to_string()),
            respiratory_rate: Some(16),
            oxygen_saturation: Some(98.0),
        };
        assert_eq!(interpret_vitals(Some(&vitals)), VitalInterpretation::AllNormal);
    }

    #[test]
    fn fever_and_tachycardia_are_flagged() {
        let vitals = VitalSigns {
            temperature: Some(38.5),
            heart_rate: Some(110),
            ..VitalSigns::default()
        };
        let VitalInterpretation::Findings(findings) = interpret_vitals(Some(&vitals)) else {
            panic!("expected findings");
        };
        assert_eq!(findings.len(), 2);
        assert!(findings[0].contains("Elevated temperature (38.5°C)"));
        assert!(findings[1].contains("Tachycardia"));
    }

    #[test]
    fn boundary_values_are_normal() {
        // 36.1 and 37.2 are inside the normal band, as are 60 and 100 bpm.
        let vitals = VitalSigns {
            temperature: Some(36.1),
            heart_rate: Some(60),
            respiratory_rate: Some(12),
            oxygen_saturation: Some(92.0),
            ..VitalSigns::default()
        };
        assert_eq!(interpret_vitals(Some(&vitals)), VitalInterpretation::AllNormal);
    }

    #[test]
    fn blood_pressure_extremes_are_flagged() {
        let low = VitalSigns {
            blood_pressure: Some("85/55".to_string()),
            ..VitalSigns::default()
        };
        let VitalInterpretation::Findings(findings) = interpret_vitals(Some(&low)) else {
            panic!("expected findings");
        };
        assert_eq!(findings, vec!["Low blood pressure (85/55): Hypotension".to_string()]);

        let high = VitalSigns {
            blood_pressure: Some("150/95".to_string()),
            ..VitalSigns::default()
        };
        let VitalInterpretation::Findings(findings) = interpret_vitals(Some(&high)) else {
            panic!("expected findings");
        };
        assert_eq!(
            findings,
            vec!["High blood pressure (150/95): Hypertension".to_string()]
        );
    }

    #[test]
    fn malformed_blood_pressure_is_skipped() {
        let vitals = VitalSigns {
            blood_pressure: Some("not-a-reading".to_string()),
            ..VitalSigns::default()
        };
        assert_eq!(interpret_vitals(Some(&vitals)), VitalInterpretation::AllNormal);

        let triple = VitalSigns {
            blood_pressure: Some("120/80/90".to_string()),
            ..VitalSigns::default()
        };
        assert_eq!(interpret_vitals(Some(&triple)), VitalInterpretation::AllNormal);
    }

    #[test]
    fn hypoxemia_is_flagged() {
        let vitals = VitalSigns {
            oxygen_saturation: Some(88.5),
            ..VitalSigns::default()
        };
        let VitalInterpretation::Findings(findings) = interpret_vitals(Some(&vitals)) else {
            panic!("expected findings");
        };
        assert_eq!(
            findings,
            vec!["Low oxygen saturation (88.5%): Hypoxemia - seek medical attention".to_string()]
        );
    }
}
