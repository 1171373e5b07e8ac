pub mod assessment;
pub mod condition;
pub mod diagnosis;
pub mod error;
pub mod patient;
pub mod plan;
pub mod report;

pub use assessment::{AssessmentRequest, BmiCategory, ConfidenceTier};
pub use condition::{ConditionId, ConditionProfile, Medication, Severity};
pub use diagnosis::{ConditionMatch, Diagnosis};
pub use error::TriageError;
pub use patient::{Gender, Lifestyle, VitalInterpretation, VitalSigns};
pub use report::AssessmentResponse;
