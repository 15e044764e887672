// NOTE: the binary is a thin shell around triage-engine.
// Reading the dump and loading config live in triage-runtime; this crate
// only parses arguments, sets up logging and renders the result.

mod args;
mod commands;
mod handlers;
mod logging;
pub mod presentation;

pub use args::{Cli, Commands, LogLevel, OutputFormat};
pub use commands::run;
