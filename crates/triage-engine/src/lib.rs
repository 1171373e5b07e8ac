//! Assessment engine: symptom matching, health metric arithmetic, and
//! assembly of the full assessment response from the static catalogue.

pub mod assessor;
pub mod matcher;
pub mod metrics;
pub mod recommend;
pub mod risk;

pub use assessor::Assessor;
pub use matcher::{rank_conditions, MAX_MATCHES, SIMILARITY_FLOOR};
