//! `ukmap validate` - check a map data file.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::error::RegistryError;
use crate::registry::ConfigurationRegistry;
use crate::wire::WireFormat;
use clap::Args;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

/// Validate a map data file (.js mapdata script or .json)
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Path to the map data file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Force the input format instead of guessing from the extension
    #[arg(short, long, value_enum)]
    pub format: Option<WireFormat>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON validation report
#[derive(Debug, Serialize)]
struct ValidationResponse {
    valid: bool,
    format: WireFormat,
    regions: usize,
    errors: Vec<String>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let text = fs::read_to_string(&self.file).map_err(|e| {
            CliError::io(format!("Failed to read {}: {}", self.file.display(), e))
        })?;
        let format = self
            .format
            .unwrap_or_else(|| WireFormat::from_path(&self.file));

        let result = ConfigurationRegistry::from_wire(&text, format);
        let response = match &result {
            Ok(registry) => ValidationResponse {
                valid: true,
                format,
                regions: registry.region_table().len(),
                errors: Vec::new(),
            },
            Err(RegistryError::MalformedConfiguration { problems }) => ValidationResponse {
                valid: false,
                format,
                regions: 0,
                errors: problems.clone(),
            },
            Err(other) => ValidationResponse {
                valid: false,
                format,
                regions: 0,
                errors: vec![other.to_string()],
            },
        };

        if self.json {
            print_json(&response)?;
        } else if response.valid {
            println!(
                "✓ {} is valid ({} regions)",
                self.file.display(),
                response.regions
            );
        } else {
            println!("✗ {} is invalid:", self.file.display());
            for error in &response.errors {
                println!("  - {error}");
            }
        }

        if response.valid {
            Ok(())
        } else {
            Err(CliError::validation(format!(
                "Validation failed with {} error(s)",
                response.errors.len()
            )))
        }
    }
}
