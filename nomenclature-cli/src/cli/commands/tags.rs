//! Tags and sheet commands: inspect the tables the generator will read

use anyhow::Result;
use colored::*;

use crate::config::Config;
use crate::nomenclature::{NomenclatureError, PairTable, TableLabels, TagSummary, extract};
use crate::workbook::{WorkbookSource, XlsxWorkbook};

use super::{SheetArgs, TagsArgs};

pub fn handle_tags_command(args: TagsArgs, config: &Config) -> Result<()> {
    let mut workbook = XlsxWorkbook::open(&args.workbook)?;
    let summary = TagSummary::load(&mut workbook, &config.tag_summary_pattern)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary.table)?);
        return Ok(());
    }

    println!("{} {}", "Sheet:".bold(), summary.sheet);
    print_pairs(&summary.table, "Term", "Abbreviation");
    Ok(())
}

pub fn handle_sheet_command(args: SheetArgs) -> Result<()> {
    let mut workbook = XlsxWorkbook::open(&args.workbook)?;
    if !workbook.has_sheet(&args.sheet) {
        return Err(NomenclatureError::MissingSheet(args.sheet).into());
    }

    let grid = workbook.read_grid(&args.sheet)?;
    let table = extract(&grid, &TableLabels::NAME_ABBREVIATION);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    if table.is_empty() {
        println!("{}", "No Name/Abbreviation table found".yellow());
        return Ok(());
    }

    print_pairs(&table, "Name", "Abbreviation");
    Ok(())
}

fn print_pairs(table: &PairTable, key_label: &str, value_label: &str) {
    let width = table
        .rows()
        .iter()
        .map(|r| r.key.chars().count())
        .chain(std::iter::once(key_label.len()))
        .max()
        .unwrap_or(0);

    println!(
        "{}",
        format!("{:<width$}  {}", key_label, value_label, width = width).bold()
    );
    for row in table.rows() {
        println!("{:<width$}  {}", row.key, row.value.cyan(), width = width);
    }
    println!("{} rows", table.len());
}
