// Engine module - pure mapping from dump text to a diagnosis.
// Nothing here performs I/O; callers own reading and rendering.

mod classify;
mod extract;
mod rules;

pub use classify::classify;
pub use extract::{Extraction, extract};
pub use rules::{Rule, known_codes, lookup};

use triage_types::DiagnosisResult;

/// Diagnose a dump: extract the runtime error, then classify it.
///
/// Never fails. A dump without a `Runtime Errors` marker yields an
/// `UNKNOWN` result with zero confidence.
pub fn diagnose(log_text: &str) -> DiagnosisResult {
    match extract(log_text) {
        Some(extraction) => classify(&extraction),
        None => {
            tracing::debug!("no runtime error marker found");
            DiagnosisResult::unknown()
        }
    }
}
