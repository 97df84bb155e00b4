//! Nomenclature generation for one selection and a set of equipment choices

use anyhow::Result;

use crate::workbook::{WorkbookSource, find_tag_summary_sheet};

use super::error::NomenclatureError;
use super::extract::{PairTable, TableLabels, extract};
use super::format::NomenclatureParts;
use super::room::RoomStyle;
use super::tag::clean_tag_abbreviation;

/// Abbreviation used when a term is missing from the Tag Summary table
pub const UNKNOWN_ABBREVIATION: &str = "N/A";

/// Output column headers, in row order
pub const COLUMNS: [&str; 9] = [
    "Location code",
    "Building code",
    "Floor code",
    "Room code",
    "Equipment Term",
    "Equipment Abbreviation",
    "Name",
    "Tag Abbreviation",
    "Final Nomenclature",
];

/// Location picked from the reference table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub location: String,
    pub building: String,
    pub floor: String,
    pub room: String,
}

/// One selected equipment term and the asset number typed for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipmentChoice {
    pub term: String,
    pub asset_number: String,
}

impl EquipmentChoice {
    pub fn new(term: impl Into<String>, asset_number: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            asset_number: asset_number.into(),
        }
    }
}

/// One generated row of the output table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NomenclatureRow {
    pub location: String,
    pub building: String,
    pub floor: String,
    pub room: String,
    pub equipment_term: String,
    pub equipment_abbreviation: String,
    pub tag_name: String,
    pub tag_abbreviation: String,
    pub nomenclature: String,
}

impl NomenclatureRow {
    /// Cells in `COLUMNS` order
    pub fn cells(&self) -> [&str; 9] {
        [
            &self.location,
            &self.building,
            &self.floor,
            &self.room,
            &self.equipment_term,
            &self.equipment_abbreviation,
            &self.tag_name,
            &self.tag_abbreviation,
            &self.nomenclature,
        ]
    }
}

/// Rows produced by a generation run, plus the equipment that was skipped
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub rows: Vec<NomenclatureRow>,
    pub warnings: Vec<NomenclatureError>,
}

/// The Term/Abbreviation table of the workbook's Tag Summary sheet
#[derive(Debug, Clone)]
pub struct TagSummary {
    pub sheet: String,
    pub table: PairTable,
}

impl TagSummary {
    /// Locate and extract the Tag Summary sheet
    ///
    /// Fails when no sheet matches `pattern` or the sheet holds no
    /// Term/Abbreviation table.
    pub fn load(workbook: &mut impl WorkbookSource, pattern: &str) -> Result<Self> {
        let sheet = find_tag_summary_sheet(&workbook.sheet_names(), pattern)?
            .ok_or(NomenclatureError::NoTagSummarySheet)?;

        let grid = workbook.read_grid(&sheet)?;
        let table = extract(&grid, &TableLabels::TERM_ABBREVIATION);

        if table.is_empty() {
            return Err(NomenclatureError::EmptyExtraction {
                sheet,
                key: "Term".to_string(),
                value: "Abbreviation".to_string(),
            }
            .into());
        }

        log::info!("Tag Summary '{}': {} terms", sheet, table.len());
        Ok(Self { sheet, table })
    }

    /// Terms offered for selection
    pub fn terms(&self) -> Vec<String> {
        self.table.keys()
    }

    pub fn abbreviation(&self, term: &str) -> &str {
        self.table.lookup(term).unwrap_or(UNKNOWN_ABBREVIATION)
    }
}

/// One generation workflow: an open workbook, its Tag Summary and the room style
pub struct Session<W> {
    workbook: W,
    tag_summary: TagSummary,
    room_style: RoomStyle,
}

impl<W: WorkbookSource> Session<W> {
    pub fn open(mut workbook: W, tag_summary_pattern: &str, room_style: RoomStyle) -> Result<Self> {
        let tag_summary = TagSummary::load(&mut workbook, tag_summary_pattern)?;
        Ok(Self {
            workbook,
            tag_summary,
            room_style,
        })
    }

    pub fn tag_summary(&self) -> &TagSummary {
        &self.tag_summary
    }

    /// Name/Abbreviation table of one equipment sheet
    ///
    /// A missing sheet or an empty table is reported as the error kind the
    /// generator records as a warning.
    pub fn equipment_tags(&mut self, term: &str) -> Result<PairTable> {
        if !self.workbook.has_sheet(term) {
            return Err(NomenclatureError::MissingSheet(term.to_string()).into());
        }

        let grid = self.workbook.read_grid(term)?;
        let table = extract(&grid, &TableLabels::NAME_ABBREVIATION);
        if table.is_empty() {
            return Err(NomenclatureError::EmptyExtraction {
                sheet: term.to_string(),
                key: "Name".to_string(),
                value: "Abbreviation".to_string(),
            }
            .into());
        }

        log::debug!("Sheet '{}': {} tags", term, table.len());
        Ok(table)
    }

    /// Generate one row per (equipment, tag) pair
    ///
    /// Every choice must carry an asset number before anything is read.
    /// Asset numbers are trimmed, so a whitespace-only one counts as missing.
    /// Equipment without a sheet or without a tag table is skipped and
    /// recorded in the report's warnings.
    pub fn generate(
        &mut self,
        selection: &Selection,
        choices: &[EquipmentChoice],
    ) -> Result<GenerationReport> {
        if choices.is_empty() {
            return Err(NomenclatureError::NoEquipmentSelected.into());
        }

        let missing: Vec<String> = choices
            .iter()
            .filter(|c| c.asset_number.trim().is_empty())
            .map(|c| c.term.clone())
            .collect();
        if !missing.is_empty() {
            return Err(NomenclatureError::MissingAsset(missing).into());
        }

        let room_clean = self
            .room_style
            .clean(&selection.building, &selection.floor, &selection.room);
        let room_display = self.room_style.display_room(&selection.room, &room_clean);

        let mut report = GenerationReport::default();

        for choice in choices {
            let asset_number = choice.asset_number.trim();
            let equipment_abbreviation = self.tag_summary.abbreviation(&choice.term).to_string();

            let tags = match self.equipment_tags(&choice.term) {
                Ok(tags) => tags,
                Err(err) => match err.downcast::<NomenclatureError>() {
                    Ok(skip) => {
                        log::info!("{}, skipping...", skip);
                        report.warnings.push(skip);
                        continue;
                    }
                    Err(other) => return Err(other),
                },
            };

            for tag in tags.rows() {
                let tag_abbreviation = clean_tag_abbreviation(&tag.value);

                let nomenclature = NomenclatureParts {
                    location: &selection.location,
                    building: &selection.building,
                    floor: &selection.floor,
                    room: &room_clean,
                    equipment_abbreviation: &equipment_abbreviation,
                    asset_number,
                    tag_abbreviation: &tag_abbreviation,
                }
                .format();

                report.rows.push(NomenclatureRow {
                    location: selection.location.clone(),
                    building: selection.building.clone(),
                    floor: selection.floor.clone(),
                    room: room_display.clone(),
                    equipment_term: choice.term.clone(),
                    equipment_abbreviation: equipment_abbreviation.clone(),
                    tag_name: tag.key.clone(),
                    tag_abbreviation,
                    nomenclature,
                });
            }
        }

        if report.rows.is_empty() {
            return Err(NomenclatureError::NoResults.into());
        }

        log::info!(
            "Generated {} nomenclatures ({} equipment skipped)",
            report.rows.len(),
            report.warnings.len()
        );
        Ok(report)
    }
}
