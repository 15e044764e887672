use crate::TriageStatus;
use serde::Serialize;

/// Program name reported when the dump names no ABAP program.
pub const UNKNOWN_PROGRAM: &str = "UNKNOWN";

/// Confidence attached to a runtime error that no rule covers.
pub const UNRESOLVED_CONFIDENCE: f64 = 0.4;

/// Canned explanation attached to a resolved diagnosis.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub root_cause: String,
    pub reasoning: String,
    pub reference_note: String,
    pub suggested_action: String,
    pub confidence: f64,
}

/// Structured outcome of triaging one dump.
///
/// Built only through [`DiagnosisResult::unknown`], [`DiagnosisResult::unresolved`]
/// and [`DiagnosisResult::resolved`], which keep `confidence == 0.0` tied to
/// [`TriageStatus::Unknown`]. Serializes with camelCase keys in declaration
/// order; absent fields are omitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisResult {
    status: TriageStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    program: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    root_cause: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reasoning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggested_action: Option<String>,
    confidence: f64,
}

impl DiagnosisResult {
    /// No runtime error could be extracted.
    pub fn unknown() -> Self {
        Self {
            status: TriageStatus::Unknown,
            error_code: None,
            program: None,
            root_cause: None,
            reasoning: None,
            reference_note: None,
            suggested_action: None,
            confidence: 0.0,
        }
    }

    /// A runtime error was extracted but is not covered by any rule.
    ///
    /// `program` falls back to [`UNKNOWN_PROGRAM`] when the dump names none.
    pub fn unresolved(error_code: impl Into<String>, program: Option<String>) -> Self {
        Self {
            status: TriageStatus::Unresolved,
            error_code: Some(error_code.into()),
            program: Some(program.unwrap_or_else(|| UNKNOWN_PROGRAM.to_string())),
            root_cause: None,
            reasoning: None,
            reference_note: None,
            suggested_action: None,
            confidence: UNRESOLVED_CONFIDENCE,
        }
    }

    /// A runtime error matched a rule.
    ///
    /// The confidence is clamped into `(0.0, 1.0]` so a resolved result can
    /// never be mistaken for an unknown one.
    pub fn resolved(
        error_code: impl Into<String>,
        program: Option<String>,
        resolution: Resolution,
    ) -> Self {
        Self {
            status: TriageStatus::Resolved,
            error_code: Some(error_code.into()),
            program: Some(program.unwrap_or_else(|| UNKNOWN_PROGRAM.to_string())),
            root_cause: Some(resolution.root_cause),
            reasoning: Some(resolution.reasoning),
            reference_note: Some(resolution.reference_note),
            suggested_action: Some(resolution.suggested_action),
            confidence: resolution.confidence.clamp(f64::MIN_POSITIVE, 1.0),
        }
    }

    pub fn status(&self) -> TriageStatus {
        self.status
    }

    pub fn error_code(&self) -> Option<&str> {
        self.error_code.as_deref()
    }

    pub fn program(&self) -> Option<&str> {
        self.program.as_deref()
    }

    pub fn root_cause(&self) -> Option<&str> {
        self.root_cause.as_deref()
    }

    pub fn reasoning(&self) -> Option<&str> {
        self.reasoning.as_deref()
    }

    pub fn reference_note(&self) -> Option<&str> {
        self.reference_note.as_deref()
    }

    pub fn suggested_action(&self) -> Option<&str> {
        self.suggested_action.as_deref()
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Present fields as `(key, value)` pairs in serialization order.
    ///
    /// Used by text renderers that want the same ordering as the JSON output.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("status", self.status.to_string())];
        let optional = [
            ("errorCode", &self.error_code),
            ("program", &self.program),
            ("rootCause", &self.root_cause),
            ("reasoning", &self.reasoning),
            ("referenceNote", &self.reference_note),
            ("suggestedAction", &self.suggested_action),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                fields.push((key, value.clone()));
            }
        }
        fields.push(("confidence", format!("{:?}", self.confidence)));
        fields
    }
}
