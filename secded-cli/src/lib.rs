//! Library entry for secded-cli used by integration tests and embedding.

pub mod commands;
pub mod render;

// Re-export commands for convenience
pub use commands::*;

/// Output format shared by every command
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Coloured, human-readable report
    #[default]
    Text,
    /// Pretty-printed JSON report
    Json,
}

/// Print a report either as JSON or through its text renderer
pub fn emit<T: serde::Serialize>(
    report: &T,
    format: OutputFormat,
    text: impl FnOnce(&T),
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Text => text(report),
    }
    Ok(())
}
