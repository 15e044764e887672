use crate::presentation::view_models::RuleSummary;
use anyhow::Result;
use triage_runtime::Report;

pub trait TriageView {
    fn render_report(&self, report: &Report) -> Result<()>;
    fn render_rules(&self, rules: &[RuleSummary]) -> Result<()>;
}
