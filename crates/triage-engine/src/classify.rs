use crate::extract::Extraction;
use crate::rules::lookup;
use triage_types::DiagnosisResult;

/// Classify extracted identifiers against the rule table.
///
/// Unmatched codes keep the extracted `errorCode` and `program` so the
/// caller still sees what was found.
pub fn classify(extraction: &Extraction) -> DiagnosisResult {
    match lookup(&extraction.error_code) {
        Some(rule) => {
            tracing::debug!(
                error_code = %extraction.error_code,
                root_cause = rule.root_cause,
                "matched rule"
            );
            DiagnosisResult::resolved(
                extraction.error_code.clone(),
                extraction.program.clone(),
                rule.resolution(),
            )
        }
        None => {
            tracing::debug!(error_code = %extraction.error_code, "no rule for error code");
            DiagnosisResult::unresolved(extraction.error_code.clone(), extraction.program.clone())
        }
    }
}
