//! Optional TOML configuration
//!
//! Looked up at `~/.config/nomenclature-cli/config.toml` unless `--config`
//! points elsewhere. Every key is optional; command-line flags win over the
//! file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::nomenclature::RoomStyle;
use crate::workbook::TAG_SUMMARY_PATTERN;

const DEFAULT_OUTPUT: &str = "Final_Nomenclature_Output.xlsx";

const DIGITS_NOTE: &str =
    "Note: Room codes are trimmed to numeric parts only; sensor names ignore numeric values.";

const SEGMENTS_NOTE: &str =
    "Note: Room codes are reduced to their last delimited segment; sensor names ignore numeric values.";

const ANNOTATION: &str = "If there is any numeric value in the TagAbbreviation then that numeric value need not be considered in final tagging.";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// How room codes are cleaned
    pub room_style: RoomStyle,
    /// Where the Excel output goes
    pub output_path: PathBuf,
    /// Prepend the explanatory note row
    pub include_note: bool,
    /// Note row text for every room style, overriding the per-style texts
    pub note: Option<String>,
    /// Note row text for the digits room style
    pub digits_note: String,
    /// Note row text for the segments room style
    pub segments_note: String,
    /// Annotation attached to the "Final Nomenclature" header cell
    pub annotation: String,
    /// Regex (case-insensitive) locating the Tag Summary sheet
    pub tag_summary_pattern: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            room_style: RoomStyle::default(),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            include_note: true,
            note: None,
            digits_note: DIGITS_NOTE.to_string(),
            segments_note: SEGMENTS_NOTE.to_string(),
            annotation: ANNOTATION.to_string(),
            tag_summary_pattern: TAG_SUMMARY_PATTERN.to_string(),
        }
    }
}

impl Config {
    /// Default config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("nomenclature-cli").join("config.toml"))
    }

    /// Load the config
    ///
    /// An explicit path must exist. The default path is optional and falls
    /// back to built-in defaults when absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => {
                    log::debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = Self::parse(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Note row text matching a room style
    pub fn note_for(&self, style: RoomStyle) -> &str {
        if let Some(note) = &self.note {
            return note;
        }
        match style {
            RoomStyle::Digits => &self.digits_note,
            RoomStyle::Segments => &self.segments_note,
        }
    }
}
