use crate::presentation::renderers::TriageView;
use anyhow::Result;
use triage_runtime::{InputSource, TriageService};

pub fn handle(input: &str, view: &dyn TriageView) -> Result<()> {
    let source = InputSource::from_arg(input);
    let service = TriageService::new();

    let report = service.triage(&source)?;

    view.render_report(&report)
}
