//! Sheet access behind a narrow "read grid of strings" interface

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use calamine::{Reader, Xlsx, open_workbook};
use regex::Regex;

use super::grid::Grid;

/// Default pattern for locating the Tag Summary sheet
pub const TAG_SUMMARY_PATTERN: &str = r"tag\s*summary";

/// Anything that can list sheets and hand out a sheet as a string grid
pub trait WorkbookSource {
    /// Sheet names in workbook order
    fn sheet_names(&self) -> Vec<String>;

    /// Read one sheet as a grid, failing if the sheet does not exist
    fn read_grid(&mut self, sheet: &str) -> Result<Grid>;

    fn has_sheet(&self, sheet: &str) -> bool {
        self.sheet_names().iter().any(|s| s == sheet)
    }
}

/// Workbook backed by an .xlsx file on disk
pub struct XlsxWorkbook {
    path: PathBuf,
    inner: Xlsx<BufReader<File>>,
}

impl XlsxWorkbook {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let inner: Xlsx<_> = open_workbook(&path)
            .with_context(|| format!("Failed to open Excel file: {}", path.display()))?;

        log::debug!(
            "Opened workbook {} with sheets {:?}",
            path.display(),
            inner.sheet_names()
        );

        Ok(Self { path, inner })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the first sheet, whatever it is called
    pub fn read_first_grid(&mut self) -> Result<Grid> {
        let sheet_name = self
            .inner
            .sheet_names()
            .first()
            .with_context(|| format!("Excel file has no sheets: {}", self.path.display()))?
            .clone();

        self.read_grid(&sheet_name)
    }
}

impl WorkbookSource for XlsxWorkbook {
    fn sheet_names(&self) -> Vec<String> {
        self.inner.sheet_names()
    }

    fn read_grid(&mut self, sheet: &str) -> Result<Grid> {
        let range = self
            .inner
            .worksheet_range(sheet)
            .with_context(|| format!("Failed to read sheet: {}", sheet))?;

        Ok(Grid::from_range(&range))
    }
}

/// First sheet whose name matches `pattern` (case-insensitive, unanchored)
pub fn find_tag_summary_sheet(names: &[String], pattern: &str) -> Result<Option<String>> {
    let re = Regex::new(&format!("(?i){}", pattern))
        .with_context(|| format!("Invalid Tag Summary sheet pattern: {}", pattern))?;

    Ok(names.iter().find(|name| re.is_match(name)).cloned())
}

/// In-memory workbook used to drive the generator without files
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryWorkbook {
    sheets: Vec<(String, Grid)>,
}

#[cfg(test)]
impl MemoryWorkbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sheet(mut self, name: &str, rows: Vec<Vec<&str>>) -> Self {
        self.sheets.push((name.to_string(), Grid::from_rows(rows)));
        self
    }
}

#[cfg(test)]
impl WorkbookSource for MemoryWorkbook {
    fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|(name, _)| name.clone()).collect()
    }

    fn read_grid(&mut self, sheet: &str) -> Result<Grid> {
        self.sheets
            .iter()
            .find(|(name, _)| name == sheet)
            .map(|(_, grid)| grid.clone())
            .with_context(|| format!("Failed to read sheet: {}", sheet))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nomenclature::{EquipmentChoice, RoomStyle, Selection, Session};
    use rust_xlsxwriter::Workbook;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_find_tag_summary_case_and_spacing() {
        let sheets = names(&["Intro", "TAG  Summary (v2)", "Tag Summary"]);
        let found = find_tag_summary_sheet(&sheets, TAG_SUMMARY_PATTERN).unwrap();
        assert_eq!(found.as_deref(), Some("TAG  Summary (v2)"));
    }

    #[test]
    fn test_find_tag_summary_without_space() {
        let sheets = names(&["tagsummary"]);
        let found = find_tag_summary_sheet(&sheets, TAG_SUMMARY_PATTERN).unwrap();
        assert_eq!(found.as_deref(), Some("tagsummary"));
    }

    #[test]
    fn test_find_tag_summary_missing() {
        let sheets = names(&["AHU", "FCU"]);
        assert!(find_tag_summary_sheet(&sheets, TAG_SUMMARY_PATTERN).unwrap().is_none());
    }

    #[test]
    fn test_invalid_pattern_is_error() {
        assert!(find_tag_summary_sheet(&names(&["x"]), "tag(").is_err());
    }

    #[test]
    fn test_memory_workbook_has_sheet() {
        let wb = MemoryWorkbook::new().with_sheet("AHU", vec![vec!["Name"]]);
        assert!(wb.has_sheet("AHU"));
        assert!(!wb.has_sheet("ahu"));
    }

    /// Tag Summary away from A1 with staggered headers, and an equipment
    /// sheet with numeric cells
    fn write_system_workbook(path: &Path) {
        let mut workbook = Workbook::new();

        let summary = workbook.add_worksheet().set_name("Tag Summary").unwrap();
        summary.write_string(2, 1, " Term ").unwrap();
        summary.write_string(3, 2, "Abbreviation").unwrap();
        summary.write_string(4, 1, "Fan Coil Unit").unwrap();
        summary.write_string(4, 2, "FCU").unwrap();
        summary.write_string(5, 1, "Air Handling Unit").unwrap();
        summary.write_string(5, 2, "AHU").unwrap();

        let fcu = workbook.add_worksheet().set_name("Fan Coil Unit").unwrap();
        fcu.write_string(1, 2, "Name").unwrap();
        fcu.write_string(1, 3, "Tag Abbreviation").unwrap();
        fcu.write_string(2, 2, "Room Temperature").unwrap();
        fcu.write_string(2, 3, "T1").unwrap();
        fcu.write_number(3, 2, 101.0).unwrap();
        fcu.write_string(3, 3, "V2").unwrap();
        fcu.write_string(4, 2, "Setpoint").unwrap();
        fcu.write_number(4, 3, 5.0).unwrap();

        workbook.save(path).unwrap();
    }

    #[test]
    fn test_xlsx_workbook_drives_generation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("system.xlsx");
        write_system_workbook(&path);

        let workbook = XlsxWorkbook::open(&path).unwrap();
        assert!(workbook.has_sheet("Fan Coil Unit"));

        let mut session = Session::open(workbook, TAG_SUMMARY_PATTERN, RoomStyle::Digits).unwrap();
        assert_eq!(
            session.tag_summary().terms(),
            vec!["Air Handling Unit", "Fan Coil Unit"]
        );

        let selection = Selection {
            location: "LOC-AE-ABUS2".to_string(),
            building: "BLD-1".to_string(),
            floor: "2".to_string(),
            room: "Room-204B".to_string(),
        };
        let report = session
            .generate(&selection, &[EquipmentChoice::new("Fan Coil Unit", "001")])
            .unwrap();

        let rows: Vec<(&str, &str)> = report
            .rows
            .iter()
            .map(|r| (r.tag_name.as_str(), r.nomenclature.as_str()))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("Room Temperature", "AE_ABUS2_1_2_FCU001_204_T"),
                ("101", "AE_ABUS2_1_2_FCU001_204_V"),
                ("Setpoint", "AE_ABUS2_1_2_FCU001_204_"),
            ]
        );
    }

    #[test]
    fn test_xlsx_read_first_grid_starts_at_first_used_cell() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("system.xlsx");
        write_system_workbook(&path);

        let grid = XlsxWorkbook::open(&path).unwrap().read_first_grid().unwrap();
        assert_eq!(grid.cell(0, 0), "Term");
        assert_eq!(grid.cell(1, 1), "Abbreviation");
    }

    #[test]
    fn test_open_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(XlsxWorkbook::open(dir.path().join("missing.xlsx")).is_err());
    }
}
