//! Subcommand arguments and handlers

pub mod generate;
pub mod options;
pub mod prompt;
pub mod tags;

use std::path::PathBuf;

use clap::Args;

use crate::nomenclature::{EquipmentChoice, RoomStyle};

#[derive(Args)]
pub struct OptionsArgs {
    /// Reference workbook (first sheet holds the location table)
    pub reference: PathBuf,

    #[arg(long)]
    pub location: Option<String>,

    #[arg(long, requires = "location")]
    pub building: Option<String>,

    #[arg(long, requires = "building")]
    pub floor: Option<String>,

    /// Print the options as a JSON array
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct TagsArgs {
    /// System workbook with the Tag Summary and equipment sheets
    pub workbook: PathBuf,

    /// Print the table as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct SheetArgs {
    /// System workbook with the Tag Summary and equipment sheets
    pub workbook: PathBuf,

    /// Equipment sheet name (an equipment term)
    pub sheet: String,

    /// Print the table as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Reference workbook (first sheet holds the location table)
    pub reference: PathBuf,

    /// System workbook with the Tag Summary and equipment sheets
    pub workbook: PathBuf,

    #[arg(long)]
    pub location: Option<String>,

    #[arg(long)]
    pub building: Option<String>,

    #[arg(long)]
    pub floor: Option<String>,

    #[arg(long)]
    pub room: Option<String>,

    /// Equipment as TERM=ASSET, repeatable (e.g. -e "Fan Coil Unit=001")
    #[arg(short, long = "equipment", value_parser = parse_equipment)]
    pub equipment: Vec<EquipmentChoice>,

    /// Room cleaning style (overrides the config file)
    #[arg(long, value_enum)]
    pub room_style: Option<RoomStyle>,

    /// Excel output path (overrides the config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also export the table as CSV
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Leave out the explanatory note row
    #[arg(long)]
    pub no_note: bool,

    /// Fail instead of prompting for missing choices
    #[arg(long)]
    pub no_prompt: bool,

    /// Don't print the generated table
    #[arg(short, long)]
    pub quiet: bool,
}

/// Parse `TERM=ASSET`; a bare `TERM` leaves the asset number empty
fn parse_equipment(raw: &str) -> Result<EquipmentChoice, String> {
    let (term, asset) = match raw.rsplit_once('=') {
        Some((term, asset)) => (term.trim(), asset.trim()),
        None => (raw.trim(), ""),
    };

    if term.is_empty() {
        return Err(format!("missing equipment term in '{}'", raw));
    }

    Ok(EquipmentChoice::new(term, asset))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_equipment() {
        assert_eq!(
            parse_equipment("Fan Coil Unit=001").unwrap(),
            EquipmentChoice::new("Fan Coil Unit", "001")
        );
        assert_eq!(
            parse_equipment(" AHU = A7 ").unwrap(),
            EquipmentChoice::new("AHU", "A7")
        );
        assert_eq!(parse_equipment("Pump").unwrap(), EquipmentChoice::new("Pump", ""));
        assert!(parse_equipment("=001").is_err());
    }
}
