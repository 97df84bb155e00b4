//! Plain terminal rendering of the output table

use colored::*;

use crate::nomenclature::COLUMNS;

use super::OutputTable;

/// Print the table with aligned columns; the note row is printed above it
pub fn print_table(table: &OutputTable) {
    if let Some(ref note) = table.note {
        println!("{}", note.yellow());
        println!();
    }

    let rows: Vec<[&str; 9]> = table.rows.iter().map(|r| r.cells()).collect();
    let widths = column_widths(&rows);

    let header = COLUMNS
        .iter()
        .zip(&widths)
        .map(|(name, w)| format!("{:<width$}", name, width = *w))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{}", header.bold());

    for row in &rows {
        let line = row
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(col, (cell, w))| {
                let padded = format!("{:<width$}", cell, width = *w);
                if col == COLUMNS.len() - 1 {
                    padded.bright_green().to_string()
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        println!("{}", line.trim_end());
    }
}

fn column_widths(rows: &[[&str; 9]]) -> Vec<usize> {
    COLUMNS
        .iter()
        .enumerate()
        .map(|(col, name)| {
            rows.iter()
                .map(|r| r[col].chars().count())
                .chain(std::iter::once(name.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect()
}
