pub mod renderers;
pub mod view_models;

use crate::args::OutputFormat;
use is_terminal::IsTerminal;
use renderers::{ConsoleView, JsonView, TriageView};

/// Pick the renderer for the requested output format.
///
/// Plain output is coloured only when stdout is a terminal.
pub fn create_view(format: OutputFormat) -> Box<dyn TriageView> {
    match format {
        OutputFormat::Plain => Box::new(ConsoleView::new(std::io::stdout().is_terminal())),
        OutputFormat::Json => Box::new(JsonView),
    }
}
