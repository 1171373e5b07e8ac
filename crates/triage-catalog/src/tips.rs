use triage_core::plan::EmergencyContacts;

pub static HEALTH_TIPS: &[&str] = &[
    "Stay hydrated by drinking at least 8 glasses of water daily",
    "Include fruits and vegetables in every meal",
    "Exercise for at least 30 minutes daily",
    "Get 7-8 hours of quality sleep",
    "Practice stress management techniques",
    "Avoid smoking and limit alcohol consumption",
    "Regular health check-ups are important",
    "Maintain a healthy weight",
    "Practice good hygiene",
    "Stay socially connected",
];

pub static EMERGENCY_CONTACTS: EmergencyContacts = EmergencyContacts {
    emergency: "911",
    poison_control: "1-800-222-1222",
    mental_health: "988",
    healthcare_provider: "Contact your primary care physician",
};

/// Fixed list appended to every assessment response.
pub static ADDITIONAL_RESOURCES: &[&str] = &[
    "Patient education materials",
    "Local healthcare providers",
    "Support groups if applicable",
    "Emergency contact information",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_health_tips() {
        assert_eq!(HEALTH_TIPS.len(), 10);
    }

    #[test]
    fn emergency_contacts_serialize_as_map() {
        let json = serde_json::to_value(EMERGENCY_CONTACTS).unwrap();
        assert_eq!(json["emergency"], "911");
        assert_eq!(json["poison_control"], "1-800-222-1222");
        assert_eq!(json["mental_health"], "988");
        assert_eq!(
            json["healthcare_provider"],
            "Contact your primary care physician"
        );
    }
}
