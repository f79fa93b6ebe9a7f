//! `ukmap export` - write map data in the widget's wire format.

use crate::cli::common::{load_registry, CliError, CliResult};
use crate::config::Config;
use crate::wire::WireFormat;
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Export map data as JSON or as the widget's mapdata script
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Read map data from this file instead of the built-in data
    #[arg(long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<WireFormat>,

    /// Global variable name for JS output (defaults to the configured name)
    #[arg(long, value_name = "NAME")]
    pub variable_name: Option<String>,

    /// Write compact output instead of indented
    #[arg(long)]
    pub compact: bool,

    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        let registry = load_registry(self.data.as_deref())?;

        let mut options = config.export.to_options();
        if let Some(format) = self.format {
            options.format = format;
        }
        if let Some(name) = &self.variable_name {
            options.variable_name.clone_from(name);
        }
        if self.compact {
            options.pretty = false;
        }

        let rendered = registry
            .render(&options)
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        match &self.output {
            Some(path) => {
                fs::write(path, rendered).map_err(|e| {
                    CliError::io(format!("Failed to write {}: {}", path.display(), e))
                })?;
                tracing::info!(path = %path.display(), format = %options.format, "Exported map data");
                eprintln!("Wrote {} map data to {}", options.format, path.display());
            }
            None => print!("{rendered}"),
        }

        Ok(())
    }
}
