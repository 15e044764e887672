// Types layer - the diagnosis record shared by the engine, runtime and CLI.
// No behavior beyond construction lives here.

mod diagnosis;
mod status;

pub use diagnosis::{DiagnosisResult, Resolution, UNKNOWN_PROGRAM, UNRESOLVED_CONFIDENCE};
pub use status::TriageStatus;
