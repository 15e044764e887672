use serde::Serialize;
use triage_engine::Rule;

/// One row of the `rules` listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSummary {
    pub error_code: String,
    pub root_cause: String,
    pub reference_note: String,
    pub confidence: f64,
}

impl RuleSummary {
    pub fn new(code: &str, rule: &Rule) -> Self {
        Self {
            error_code: code.to_string(),
            root_cause: rule.root_cause.to_string(),
            reference_note: rule.reference_note.to_string(),
            confidence: rule.confidence,
        }
    }
}
