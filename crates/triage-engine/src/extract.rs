use regex::Regex;
use std::sync::LazyLock;

/// Error code follows the `Runtime Errors` header of a short dump.
/// Example: "Runtime Errors         CONVT_NO_NUMBER"
/// The code is letters, digits and underscore only; `\w` would also take
/// combining marks and connector punctuation.
static ERROR_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Runtime Errors\s+([\p{L}\p{N}_]+)").unwrap());

/// Program name is the quoted token after `ABAP program`.
/// Example: `The exception occurred in ABAP program "Z_TEST_01"`
static PROGRAM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"ABAP program\s+"([^"]+)""#).unwrap());

/// Identifiers pulled out of a dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// First runtime error code in the text.
    pub error_code: String,
    /// First quoted ABAP program name, if the dump names one.
    pub program: Option<String>,
}

/// Extract the runtime error code and program name.
///
/// Returns `None` when the text has no error code; the program is not
/// looked up in that case. Only the first occurrence of each marker counts.
pub fn extract(log_text: &str) -> Option<Extraction> {
    let error_code = ERROR_CODE_REGEX
        .captures(log_text)
        .and_then(|caps| caps.get(1))?
        .as_str()
        .to_string();

    let program = PROGRAM_REGEX
        .captures(log_text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string());

    tracing::debug!(
        error_code = %error_code,
        program = program.as_deref().unwrap_or("-"),
        "detected runtime error"
    );

    Some(Extraction {
        error_code,
        program,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_without_marker() {
        assert_eq!(extract(""), None);
        assert_eq!(extract("no relevant markers here"), None);
    }

    #[test]
    fn test_marker_requires_whitespace() {
        assert_eq!(extract("Runtime ErrorsCONVT_NO_NUMBER"), None);
        assert_eq!(extract("Runtime Errors "), None);
    }

    #[test]
    fn test_extract_code_across_whitespace_run() {
        let extraction = extract("Runtime Errors \t\n   TIME_OUT\nDate and Time").unwrap();
        assert_eq!(extraction.error_code, "TIME_OUT");
        assert_eq!(extraction.program, None);
    }

    #[test]
    fn test_code_stops_at_non_word_character() {
        let extraction = extract("Runtime Errors DBIF_RSQL-SQL_ERROR").unwrap();
        assert_eq!(extraction.error_code, "DBIF_RSQL");
    }

    #[test]
    fn test_code_stops_at_combining_mark_and_connector() {
        let extraction = extract("Runtime Errors TIME_OUT\u{0301}").unwrap();
        assert_eq!(extraction.error_code, "TIME_OUT");

        let extraction = extract("Runtime Errors TIME_OUT\u{203F}X").unwrap();
        assert_eq!(extraction.error_code, "TIME_OUT");
    }

    #[test]
    fn test_code_accepts_non_ascii_letters_and_digits() {
        let extraction = extract("Runtime Errors FEHLER_ÄÖÜ_٣").unwrap();
        assert_eq!(extraction.error_code, "FEHLER_ÄÖÜ_٣");
    }

    #[test]
    fn test_first_occurrence_wins() {
        let text = "Runtime Errors TIME_OUT\n\
                    ABAP program \"ZFIRST\"\n\
                    Runtime Errors CONVT_NO_NUMBER\n\
                    ABAP program \"ZSECOND\"";
        let extraction = extract(text).unwrap();
        assert_eq!(extraction.error_code, "TIME_OUT");
        assert_eq!(extraction.program.as_deref(), Some("ZFIRST"));
    }

    #[test]
    fn test_program_captured_verbatim() {
        let text = "Runtime Errors X ABAP program   \"/ABC/SAPL Z-01 \"";
        let extraction = extract(text).unwrap();
        assert_eq!(extraction.program.as_deref(), Some("/ABC/SAPL Z-01 "));
    }

    #[test]
    fn test_empty_program_quotes_are_not_a_match() {
        let extraction = extract("Runtime Errors X in ABAP program \"\"").unwrap();
        assert_eq!(extraction.program, None);
    }

    #[test]
    fn test_program_marker_may_precede_error_marker() {
        let text = "ABAP program \"ZEARLY\" ... Runtime Errors RFC_NO_AUTHORITY";
        let extraction = extract(text).unwrap();
        assert_eq!(extraction.error_code, "RFC_NO_AUTHORITY");
        assert_eq!(extraction.program.as_deref(), Some("ZEARLY"));
    }
}
