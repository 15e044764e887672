mod enums;

pub use enums::*;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "triage")]
#[command(about = "Incident triage for ABAP short dumps (ST22)", long_about = None)]
#[command(version)]
#[command(subcommand_negates_reqs = true)]
pub struct Cli {
    #[arg(
        short,
        long,
        required = true,
        value_name = "PATH",
        help = "Path to the ST22 dump text file (use - for stdin)"
    )]
    pub input: Option<String>,

    #[arg(long, global = true, help = "Output format [default: from config, else json]")]
    pub format: Option<OutputFormat>,

    #[arg(long, global = true, help = "Log level for diagnostics on stderr")]
    pub log_level: Option<LogLevel>,

    #[arg(long, global = true, value_name = "PATH", help = "Path to config.toml")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List the runtime errors the engine can resolve")]
    Rules,
}
