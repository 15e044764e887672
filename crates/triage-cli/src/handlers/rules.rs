use crate::presentation::renderers::TriageView;
use crate::presentation::view_models::RuleSummary;
use anyhow::Result;

pub fn handle(view: &dyn TriageView) -> Result<()> {
    let rules: Vec<RuleSummary> = triage_engine::known_codes()
        .into_iter()
        .filter_map(|code| triage_engine::lookup(code).map(|rule| RuleSummary::new(code, rule)))
        .collect();

    view.render_rules(&rules)
}
