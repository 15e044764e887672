use super::traits::TriageView;
use crate::presentation::view_models::RuleSummary;
use anyhow::Result;
use triage_runtime::Report;

/// Machine-readable output: stdout carries only the JSON document.
pub struct JsonView;

impl TriageView for JsonView {
    fn render_report(&self, report: &Report) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(&report.result)?);
        Ok(())
    }

    fn render_rules(&self, rules: &[RuleSummary]) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(rules)?);
        Ok(())
    }
}
