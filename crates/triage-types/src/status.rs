use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome class of a single triage.
///
/// The three classes are mutually exclusive and terminal for one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TriageStatus {
    /// No runtime error marker was found in the dump.
    Unknown,
    /// A runtime error was found but no rule covers it.
    Unresolved,
    /// The runtime error matched a rule.
    Resolved,
}

impl TriageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TriageStatus::Unknown => "UNKNOWN",
            TriageStatus::Unresolved => "UNRESOLVED",
            TriageStatus::Resolved => "RESOLVED",
        }
    }
}

impl fmt::Display for TriageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_uppercase() {
        let json = serde_json::to_string(&TriageStatus::Unresolved).unwrap();
        assert_eq!(json, "\"UNRESOLVED\"");
    }

    #[test]
    fn test_display_matches_serialized_name() {
        for status in [
            TriageStatus::Unknown,
            TriageStatus::Unresolved,
            TriageStatus::Resolved,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json.trim_matches('"'), status.to_string());
        }
    }
}
