//! CSV export of the nomenclature table

use std::path::Path;

use anyhow::{Context, Result};
use csv::Writer;

use crate::nomenclature::COLUMNS;

use super::OutputTable;

/// Write the table (header, optional note row, rows) to a CSV file
pub fn write_nomenclature_csv(table: &OutputTable, path: &Path) -> Result<()> {
    let mut wtr = Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;

    wtr.write_record(COLUMNS)
        .context("Failed to write CSV header")?;

    for record in table.records() {
        wtr.write_record(&record)
            .context("Failed to write CSV row")?;
    }

    wtr.flush().context("Failed to flush CSV writer")?;

    log::info!("CSV file exported to: {}", path.display());
    Ok(())
}
