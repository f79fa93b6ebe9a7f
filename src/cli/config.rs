//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use crate::wire::{is_js_identifier, WireFormat};
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Default export format
    #[arg(long, value_enum)]
    format: Option<WireFormat>,

    /// Global variable name for JS export
    #[arg(long, value_name = "NAME")]
    variable_name: Option<String>,

    /// Indent exported data (true or false)
    #[arg(long, value_name = "BOOL")]
    pretty: Option<bool>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    config_file: Option<String>,
    export: ExportOutput,
}

#[derive(Serialize, Debug)]
struct ExportOutput {
    format: WireFormat,
    variable_name: String,
    pretty: bool,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            print_json(&ConfigOutput {
                config_file: Config::config_file_path()
                    .ok()
                    .map(|p| p.to_string_lossy().to_string()),
                export: ExportOutput {
                    format: config.export.format,
                    variable_name: config.export.variable_name.clone(),
                    pretty: config.export.pretty,
                },
            })
        } else {
            output_human_readable(&config);
            Ok(())
        }
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.format.is_none() && self.variable_name.is_none() && self.pretty.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --format, --variable-name, or --pretty",
            ));
        }

        // Load current configuration
        let mut config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if let Some(format) = self.format {
            config.export.format = format;
        }

        if let Some(name) = &self.variable_name {
            if !is_js_identifier(name) {
                return Err(CliError::validation(format!(
                    "Invalid variable name '{name}': must be a JavaScript identifier"
                )));
            }
            config.export.variable_name.clone_from(name);
        }

        if let Some(pretty) = self.pretty {
            config.export.pretty = pretty;
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("ukmap Configuration");
    println!("===================");
    println!();

    match Config::config_file_path() {
        Ok(path) if path.exists() => println!("File: {}", path.display()),
        Ok(path) => println!("File: {} (not created, using defaults)", path.display()),
        Err(_) => println!("File: (unavailable)"),
    }
    println!();

    println!("Export:");
    println!("  Format: {}", config.export.format);
    println!("  Variable Name: {}", config.export.variable_name);
    println!("  Pretty: {}", config.export.pretty);
    println!();
}
