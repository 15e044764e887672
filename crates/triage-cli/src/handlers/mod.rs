pub mod rules;
pub mod triage;
