//! Field-name and hint based realism inference.

pub mod rules;
pub mod semantic;
