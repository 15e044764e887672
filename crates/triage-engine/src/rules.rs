use std::collections::HashMap;
use std::sync::LazyLock;
use triage_types::Resolution;

/// Canned diagnosis for one runtime error code.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub root_cause: &'static str,
    pub reasoning: &'static str,
    pub reference_note: &'static str,
    pub suggested_action: &'static str,
    pub confidence: f64,
}

impl Rule {
    pub fn resolution(&self) -> Resolution {
        Resolution {
            root_cause: self.root_cause.to_string(),
            reasoning: self.reasoning.to_string(),
            reference_note: self.reference_note.to_string(),
            suggested_action: self.suggested_action.to_string(),
            confidence: self.confidence,
        }
    }
}

static RULES: LazyLock<HashMap<&'static str, Rule>> = LazyLock::new(|| {
    HashMap::from([
        (
            "CONVT_NO_NUMBER",
            Rule {
                root_cause: "Data Type Mismatch",
                reasoning: "User attempted to pass a string-formatted date into a numeric field.",
                reference_note: "18293",
                suggested_action: "Advise user to use YYYYMMDD format.",
                confidence: 0.92,
            },
        ),
        (
            "RFC_NO_AUTHORITY",
            Rule {
                root_cause: "Authorization Failure",
                reasoning: "User ID lacks required remote-call permission object for target system.",
                reference_note: "94812",
                suggested_action: "Grant remote-call access through the authorization-profile maintenance transaction.",
                confidence: 0.98,
            },
        ),
        (
            "TIME_OUT",
            Rule {
                root_cause: "Infinite Loop / Resource Exhaustion",
                reasoning: "Process exceeded the configured maximum work-process runtime (600s); likely loop in a named custom routine.",
                reference_note: "N/A (Custom Code)",
                suggested_action: "Debug the loop termination condition in the custom report.",
                confidence: 0.85,
            },
        ),
    ])
});

/// Look up the rule for an error code.
///
/// Case-sensitive exact match on the whole token.
pub fn lookup(error_code: &str) -> Option<&'static Rule> {
    RULES.get(error_code)
}

/// Error codes covered by the rule table, sorted.
pub fn known_codes() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = RULES.keys().copied().collect();
    codes.sort_unstable();
    codes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_sorted() {
        assert_eq!(
            known_codes(),
            vec!["CONVT_NO_NUMBER", "RFC_NO_AUTHORITY", "TIME_OUT"]
        );
    }

    #[test]
    fn test_lookup_is_exact() {
        assert!(lookup("TIME_OUT").is_some());
        assert!(lookup("time_out").is_none());
        assert!(lookup("TIME_OUT_X").is_none());
        assert!(lookup("TIME").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_confidences_in_range() {
        for code in known_codes() {
            let rule = lookup(code).unwrap();
            assert!(rule.confidence > 0.0 && rule.confidence <= 1.0, "{}", code);
        }
    }

    #[test]
    fn test_resolution_copies_rule() {
        let rule = lookup("RFC_NO_AUTHORITY").unwrap();
        let resolution = rule.resolution();
        assert_eq!(resolution.reference_note, "94812");
        assert_eq!(resolution.confidence, 0.98);
    }
}
