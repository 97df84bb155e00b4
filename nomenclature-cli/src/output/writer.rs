//! Write the nomenclature table to Excel format

use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Note, Workbook, Worksheet};

use crate::nomenclature::COLUMNS;

use super::OutputTable;

const SHEET_NAME: &str = "Nomenclature";

/// Author shown on the header annotation
const NOTE_AUTHOR: &str = "System";

/// Column of the generated strings (cell I1 carries the annotation)
const FINAL_COL: u16 = 8;

/// Write the table to an .xlsx file, annotating the "Final Nomenclature"
/// header cell with `annotation` when one is given
pub fn write_nomenclature_excel(
    table: &OutputTable,
    annotation: Option<&str>,
    path: &Path,
) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.set_name(SHEET_NAME)?;
    write_header(worksheet)?;

    for (row_idx, record) in table.records().iter().enumerate() {
        let row = (row_idx + 1) as u32;
        for (col, value) in record.iter().enumerate() {
            if !value.is_empty() {
                worksheet.write_string(row, col as u16, *value)?;
            }
        }
    }

    if let Some(text) = annotation {
        let note = Note::new(text).set_author(NOTE_AUTHOR);
        worksheet.insert_note(0, FINAL_COL, &note)?;
    }

    worksheet.autofit();

    workbook
        .save(path)
        .with_context(|| format!("Failed to save Excel file: {}", path.display()))?;

    log::info!("Excel file written to: {}", path.display());
    Ok(())
}

fn write_header(ws: &mut Worksheet) -> Result<()> {
    let bold = Format::new().set_bold();
    for (col, name) in COLUMNS.iter().enumerate() {
        ws.write_string_with_format(0, col as u16, *name, &bold)?;
    }
    Ok(())
}
