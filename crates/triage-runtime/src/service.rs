use crate::{InputSource, Result};
use triage_engine::diagnose;
use triage_types::DiagnosisResult;

/// Diagnosis of one input, labelled with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub source: String,
    pub result: DiagnosisResult,
}

/// Runs one triage per call: read the input, diagnose, report.
///
/// Stateless; every call is independent.
#[derive(Debug, Clone, Default)]
pub struct TriageService;

impl TriageService {
    pub fn new() -> Self {
        tracing::debug!(rules = triage_engine::known_codes().len(), "triage service ready");
        Self
    }

    pub fn triage(&self, input: &InputSource) -> Result<Report> {
        tracing::info!(source = %input, "triaging dump");

        let text = input.read()?;
        Ok(self.triage_text(input.to_string(), &text))
    }

    /// Triage text that the caller already holds in memory.
    pub fn triage_text(&self, source: impl Into<String>, text: &str) -> Report {
        let result = diagnose(text);

        tracing::info!(
            status = %result.status(),
            error_code = result.error_code().unwrap_or("-"),
            confidence = result.confidence(),
            "triage finished"
        );

        Report {
            source: source.into(),
            result,
        }
    }
}
