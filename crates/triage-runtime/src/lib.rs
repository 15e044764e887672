// Runtime layer - everything the caller owns around the engine:
// reading the dump, loading configuration and running a triage.

pub mod config;
pub mod error;
pub mod input;
pub mod service;

pub use config::{Config, LoggingConfig, OutputConfig, OutputFormat, resolve_config_path};
pub use error::{Error, Result};
pub use input::InputSource;
pub use service::{Report, TriageService};
