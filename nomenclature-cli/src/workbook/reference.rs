//! Reference table of locations, buildings, floors and rooms
//!
//! The first row of the reference sheet is the header. Only the four
//! location columns are consumed; everything else is ignored.

use std::collections::BTreeSet;

use crate::nomenclature::NomenclatureError;

use super::grid::Grid;

/// Required header names (compared after trimming)
mod cols {
    pub const LOCATION: &str = "Location code";
    pub const BUILDING: &str = "Building code";
    pub const FLOOR: &str = "Floor Code";
    pub const ROOM: &str = "Room code";

    pub const REQUIRED: [&str; 4] = [LOCATION, BUILDING, FLOOR, ROOM];
}

/// One row of the reference table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceRow {
    pub location: String,
    pub building: String,
    pub floor: String,
    pub room: String,
}

#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    rows: Vec<ReferenceRow>,
}

impl ReferenceTable {
    /// Parse a reference grid, failing when a required column is absent
    pub fn from_grid(grid: &Grid) -> Result<Self, NomenclatureError> {
        let mut rows_iter = grid.rows();
        let header: Vec<&str> = rows_iter
            .next()
            .map(|row| row.iter().map(|h| h.trim()).collect())
            .unwrap_or_default();

        let find = |name: &str| header.iter().position(|h| *h == name);

        let mut indices = [0usize; 4];
        let mut missing = Vec::new();
        for (slot, name) in indices.iter_mut().zip(cols::REQUIRED) {
            match find(name) {
                Some(idx) => *slot = idx,
                None => missing.push(name.to_string()),
            }
        }

        if !missing.is_empty() {
            return Err(NomenclatureError::MissingColumns {
                required: cols::REQUIRED.iter().map(|s| s.to_string()).collect(),
                missing,
            });
        }

        let [loc, bld, flr, room] = indices;

        let rows = rows_iter
            .map(|row| ReferenceRow {
                location: cell(row, loc),
                building: cell(row, bld),
                floor: cell(row, flr),
                room: cell(row, room),
            })
            .collect::<Vec<_>>();

        log::debug!("Loaded {} reference rows", rows.len());

        Ok(Self { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn locations(&self) -> Vec<String> {
        distinct(self.rows.iter().map(|r| &r.location))
    }

    pub fn buildings(&self, location: &str) -> Vec<String> {
        distinct(
            self.rows
                .iter()
                .filter(|r| r.location == location)
                .map(|r| &r.building),
        )
    }

    pub fn floors(&self, location: &str, building: &str) -> Vec<String> {
        distinct(
            self.rows
                .iter()
                .filter(|r| r.location == location && r.building == building)
                .map(|r| &r.floor),
        )
    }

    pub fn rooms(&self, location: &str, building: &str, floor: &str) -> Vec<String> {
        distinct(
            self.rows
                .iter()
                .filter(|r| r.location == location && r.building == building && r.floor == floor)
                .map(|r| &r.room),
        )
    }
}

fn cell(row: &[String], col: usize) -> String {
    row.get(col).cloned().unwrap_or_default()
}

/// Sorted, de-duplicated, non-blank values
fn distinct<'a>(values: impl Iterator<Item = &'a String>) -> Vec<String> {
    values
        .filter(|v| !v.is_empty())
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
