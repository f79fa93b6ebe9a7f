//! `ukmap regions` and `ukmap region` - list and look up map regions.

use crate::cli::common::{load_registry, print_json, CliResult};
use crate::models::RegionEntry;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// List every region in declaration order
#[derive(Debug, Clone, Args)]
pub struct RegionsArgs {
    /// Read map data from this file instead of the built-in data
    #[arg(long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Look up one region by code (exact, case-sensitive)
#[derive(Debug, Clone, Args)]
pub struct RegionArgs {
    /// Region code, e.g. "GL"
    #[arg(value_name = "CODE")]
    pub code: String,

    /// Read map data from this file instead of the built-in data
    #[arg(long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON shape of a region in CLI output
#[derive(Debug, Serialize)]
struct RegionOutput<'a> {
    code: &'a str,
    name: &'a str,
    description: &'a str,
}

impl<'a> From<&'a RegionEntry> for RegionOutput<'a> {
    fn from(entry: &'a RegionEntry) -> Self {
        Self {
            code: &entry.code,
            name: &entry.name,
            description: &entry.description,
        }
    }
}

impl RegionsArgs {
    /// Execute the regions command
    pub fn execute(&self) -> CliResult<()> {
        let registry = load_registry(self.data.as_deref())?;

        if self.json {
            let output: Vec<RegionOutput<'_>> =
                registry.list_regions().map(RegionOutput::from).collect();
            return print_json(&output);
        }

        for entry in registry.list_regions() {
            println!("{}", format_region_line(entry));
        }
        println!();
        println!("{} regions", registry.list_regions().len());
        Ok(())
    }
}

impl RegionArgs {
    /// Execute the region command
    pub fn execute(&self) -> CliResult<()> {
        let registry = load_registry(self.data.as_deref())?;
        let entry = registry.get_region(&self.code)?;

        if self.json {
            return print_json(&RegionOutput::from(entry));
        }

        println!("{}", format_region_line(entry));
        Ok(())
    }
}

/// One-line summary: code, name and description when present.
fn format_region_line(entry: &RegionEntry) -> String {
    if entry.has_description() {
        format!("{}  {} - {}", entry.code, entry.name, entry.description.trim())
    } else {
        format!("{}  {}", entry.code, entry.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_region_line() {
        let entry = RegionEntry::new("GL", "Greater London", " ");
        assert_eq!(format_region_line(&entry), "GL  Greater London");

        let entry = RegionEntry::new("NI", "Northern Ireland", " Six counties ");
        assert_eq!(format_region_line(&entry), "NI  Northern Ireland - Six counties");
    }
}
