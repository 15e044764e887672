mod console;
mod json;
mod traits;

pub use console::{ConsoleView, format_report, format_rules};
pub use json::JsonView;
pub use traits::TriageView;
