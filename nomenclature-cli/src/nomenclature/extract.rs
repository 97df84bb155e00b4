//! Label-anchored two-column table extraction
//!
//! Sheets in the system workbook carry their tables somewhere inside a loosely
//! laid out grid: a header cell for the key column and another for the value
//! column, not necessarily adjacent or on the same row, with the data running
//! down beneath them until a run of blank rows.

use std::collections::HashSet;

use serde::Serialize;

use crate::workbook::Grid;

/// Consecutive fully-blank rows that end a table
const BLANK_RUN_LIMIT: usize = 3;

/// How a cell is compared against a header label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelMatch {
    /// Match-key form equals the label
    Exact,
    /// Match-key form contains the label anywhere
    Contains,
}

impl LabelMatch {
    fn matches(self, key: &str, label: &str) -> bool {
        match self {
            LabelMatch::Exact => key == label,
            LabelMatch::Contains => key.contains(label),
        }
    }
}

/// Header labels of one table shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLabels {
    pub key: &'static str,
    pub value: &'static str,
    pub value_match: LabelMatch,
}

impl TableLabels {
    /// Term/Abbreviation table of the Tag Summary sheet
    pub const TERM_ABBREVIATION: TableLabels = TableLabels {
        key: "term",
        value: "abbreviation",
        value_match: LabelMatch::Exact,
    };

    /// Name/Abbreviation table of an equipment sheet; the value header only
    /// has to mention "abbreviation"
    pub const NAME_ABBREVIATION: TableLabels = TableLabels {
        key: "name",
        value: "abbreviation",
        value_match: LabelMatch::Contains,
    };
}

/// One extracted (key, value) record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PairRow {
    pub key: String,
    pub value: String,
}

/// Ordered, de-duplicated pairs pulled out of a grid
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PairTable {
    rows: Vec<PairRow>,
}

impl PairTable {
    pub fn rows(&self) -> &[PairRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Value of the first row whose key equals `key`
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|r| r.key == key)
            .map(|r| r.value.as_str())
    }

    /// Sorted distinct non-empty keys
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .rows
            .iter()
            .filter(|r| !r.key.is_empty())
            .map(|r| r.key.clone())
            .collect();
        keys.sort();
        keys.dedup();
        keys
    }
}

/// Match-key form: whitespace runs collapsed, trimmed, lowercased
pub fn match_key(cell: &str) -> String {
    cell.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Row-major position of the first cell matching each label
fn find_headers(grid: &Grid, labels: &TableLabels) -> (Option<(usize, usize)>, Option<(usize, usize)>) {
    let mut key_pos = None;
    let mut value_pos = None;

    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let key = match_key(grid.cell(row, col));
            if key_pos.is_none() && key == labels.key {
                key_pos = Some((row, col));
            }
            if value_pos.is_none() && labels.value_match.matches(&key, labels.value) {
                value_pos = Some((row, col));
            }
        }
        if key_pos.is_some() && value_pos.is_some() {
            break;
        }
    }

    (key_pos, value_pos)
}

/// Extract the table anchored at the `labels` header cells
///
/// Returns an empty table when either header cell is missing. Data starts
/// below the lower of the two header cells and ends at the third consecutive
/// row where both cells are blank. Repeated header rows inside the data are
/// skipped and duplicate pairs keep their first position.
pub fn extract(grid: &Grid, labels: &TableLabels) -> PairTable {
    let (Some(key_pos), Some(value_pos)) = find_headers(grid, labels) else {
        return PairTable::default();
    };

    let start_row = key_pos.0.max(value_pos.0) + 1;
    let (key_col, value_col) = (key_pos.1, value_pos.1);

    let mut rows = Vec::new();
    let mut blanks = 0;

    for row in start_row..grid.height() {
        let key = grid.cell(row, key_col);
        let value = grid.cell(row, value_col);

        if key.is_empty() && value.is_empty() {
            blanks += 1;
        } else {
            blanks = 0;
        }
        if blanks >= BLANK_RUN_LIMIT {
            break;
        }

        if match_key(key) == labels.key || labels.value_match.matches(&match_key(value), labels.value) {
            continue;
        }

        if !key.is_empty() || !value.is_empty() {
            rows.push(PairRow {
                key: key.to_string(),
                value: value.to_string(),
            });
        }
    }

    let mut seen = HashSet::new();
    rows.retain(|r| seen.insert(r.clone()));

    PairTable { rows }
}
