use super::traits::TriageView;
use crate::presentation::view_models::RuleSummary;
use anyhow::Result;
use owo_colors::OwoColorize;
use triage_runtime::Report;
use triage_types::TriageStatus;

const KEY_WIDTH: usize = 17;

pub struct ConsoleView {
    color: bool,
}

impl ConsoleView {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl TriageView for ConsoleView {
    fn render_report(&self, report: &Report) -> Result<()> {
        print!("{}", format_report(report, self.color));
        Ok(())
    }

    fn render_rules(&self, rules: &[RuleSummary]) -> Result<()> {
        print!("{}", format_rules(rules));
        Ok(())
    }
}

pub fn format_report(report: &Report, color: bool) -> String {
    let mut out = String::new();
    out.push_str("--- TRIAGE RESULT ---\n");
    out.push_str(&format_line("source", &report.source));

    for (key, value) in report.result.fields() {
        let value = if key == "status" && color {
            paint_status(report.result.status(), &value)
        } else {
            value
        };
        out.push_str(&format_line(key, &value));
    }

    out
}

pub fn format_rules(rules: &[RuleSummary]) -> String {
    let code_width = rules
        .iter()
        .map(|rule| rule.error_code.len())
        .max()
        .unwrap_or(0);

    rules
        .iter()
        .map(|rule| {
            format!(
                "{:<width$}  {:.2}  {} (note: {})\n",
                rule.error_code,
                rule.confidence,
                rule.root_cause,
                rule.reference_note,
                width = code_width
            )
        })
        .collect()
}

fn format_line(key: &str, value: &str) -> String {
    format!("{:<width$}{}\n", format!("{}:", key), value, width = KEY_WIDTH)
}

fn paint_status(status: TriageStatus, label: &str) -> String {
    match status {
        TriageStatus::Resolved => label.green().bold().to_string(),
        TriageStatus::Unresolved => label.yellow().bold().to_string(),
        TriageStatus::Unknown => label.red().bold().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_types::DiagnosisResult;

    fn report(result: DiagnosisResult) -> Report {
        Report {
            source: "dump.txt".to_string(),
            result,
        }
    }

    #[test]
    fn test_format_unknown_report() {
        let out = format_report(&report(DiagnosisResult::unknown()), false);
        assert_eq!(
            out,
            "--- TRIAGE RESULT ---\n\
             source:          dump.txt\n\
             status:          UNKNOWN\n\
             confidence:      0.0\n"
        );
    }

    #[test]
    fn test_format_unresolved_report_field_order() {
        let result = DiagnosisResult::unresolved("WEIRD_CODE", Some("ZPROG".to_string()));
        let out = format_report(&report(result), false);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[2], "status:          UNRESOLVED");
        assert_eq!(lines[3], "errorCode:       WEIRD_CODE");
        assert_eq!(lines[4], "program:         ZPROG");
        assert_eq!(lines[5], "confidence:      0.4");
    }

    #[test]
    fn test_plain_output_has_no_escape_codes() {
        let out = format_report(&report(DiagnosisResult::unknown()), false);
        assert!(!out.contains('\u{1b}'));
    }

    #[test]
    fn test_colored_status() {
        let out = format_report(&report(DiagnosisResult::unknown()), true);
        assert!(out.contains('\u{1b}'));
    }

    #[test]
    fn test_format_rules_aligned() {
        let rules = vec![
            RuleSummary {
                error_code: "TIME_OUT".to_string(),
                root_cause: "Loop".to_string(),
                reference_note: "N/A".to_string(),
                confidence: 0.85,
            },
            RuleSummary {
                error_code: "CONVT_NO_NUMBER".to_string(),
                root_cause: "Mismatch".to_string(),
                reference_note: "18293".to_string(),
                confidence: 0.92,
            },
        ];

        let out = format_rules(&rules);
        assert_eq!(
            out,
            "TIME_OUT         0.85  Loop (note: N/A)\n\
             CONVT_NO_NUMBER  0.92  Mismatch (note: 18293)\n"
        );
    }
}
