//! Static clinical reference data: the condition catalogue, advice tables,
//! and the canned diet/fitness plans. Nothing here is computed at runtime;
//! the engine crate does the scoring and assembly.

pub mod advice;
pub mod conditions;
pub mod plans;
pub mod tips;

pub use conditions::{profile, profiles};
