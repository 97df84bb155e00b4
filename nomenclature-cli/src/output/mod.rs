//! Output table, Excel/CSV export and terminal rendering

mod csv_exporter;
mod table;
mod writer;

pub use csv_exporter::write_nomenclature_csv;
pub use table::print_table;
pub use writer::write_nomenclature_excel;

use crate::nomenclature::{COLUMNS, NomenclatureRow};

/// Generated rows, optionally preceded by a note row
#[derive(Debug, Clone, Default)]
pub struct OutputTable {
    pub note: Option<String>,
    pub rows: Vec<NomenclatureRow>,
}

impl OutputTable {
    pub fn new(rows: Vec<NomenclatureRow>) -> Self {
        Self { note: None, rows }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// All body rows as cells, the note row first when present
    pub fn records(&self) -> Vec<Vec<&str>> {
        let mut records = Vec::with_capacity(self.rows.len() + 1);

        if let Some(ref note) = self.note {
            let mut note_row = vec![""; COLUMNS.len()];
            note_row[0] = note.as_str();
            records.push(note_row);
        }

        records.extend(self.rows.iter().map(|r| r.cells().to_vec()));
        records
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::nomenclature::NomenclatureRow;

    pub fn row(tag: &str, nomenclature: &str) -> NomenclatureRow {
        NomenclatureRow {
            location: "LOC-AE-ABUS2".to_string(),
            building: "BLD-1".to_string(),
            floor: "2".to_string(),
            room: "204".to_string(),
            equipment_term: "Fan Coil Unit".to_string(),
            equipment_abbreviation: "FCU".to_string(),
            tag_name: tag.to_string(),
            tag_abbreviation: "T".to_string(),
            nomenclature: nomenclature.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::row;
    use super::*;

    #[test]
    fn test_records_with_note() {
        let table = OutputTable::new(vec![row("Room Temperature", "AE_ABUS2_1_2_FCU001_204_T")])
            .with_note("Note: rooms trimmed");

        let records = table.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0][0], "Note: rooms trimmed");
        assert!(records[0][1..].iter().all(|c| c.is_empty()));
        assert_eq!(records[1][8], "AE_ABUS2_1_2_FCU001_204_T");
    }

    #[test]
    fn test_records_without_note() {
        let table = OutputTable::new(vec![row("A", "x"), row("B", "y")]);
        let records = table.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0][6], "A");
    }
}
