//! Generate command: pick a location and equipment, then write the nomenclature table

use std::path::Path;

use anyhow::{Result, bail};
use colored::*;
use is_terminal::IsTerminal;

use crate::config::Config;
use crate::nomenclature::{Selection, Session};
use crate::output::{OutputTable, print_table, write_nomenclature_csv, write_nomenclature_excel};
use crate::workbook::{ReferenceTable, XlsxWorkbook};

use super::GenerateArgs;
use super::prompt;

/// Read the reference table from the first sheet of `path`
pub fn load_reference(path: &Path) -> Result<ReferenceTable> {
    let mut workbook = XlsxWorkbook::open(path)?;
    let grid = workbook.read_first_grid()?;
    let table = ReferenceTable::from_grid(&grid)?;

    log::info!(
        "Reference table {}: {} rows",
        workbook.path().display(),
        table.len()
    );
    Ok(table)
}

pub fn handle_generate_command(args: GenerateArgs, config: &Config) -> Result<()> {
    let interactive = !args.no_prompt && std::io::stdin().is_terminal();
    let room_style = args.room_style.unwrap_or(config.room_style);

    let reference = load_reference(&args.reference)?;
    let selection = resolve_selection(&reference, &args, interactive)?;

    log::info!(
        "Selection: location={} building={} floor={} room={}",
        selection.location,
        selection.building,
        selection.floor,
        selection.room
    );

    let workbook = XlsxWorkbook::open(&args.workbook)?;
    let mut session = Session::open(workbook, &config.tag_summary_pattern, room_style)?;

    let choices = if !args.equipment.is_empty() {
        args.equipment
    } else if interactive {
        prompt::select_equipment(&session.tag_summary().terms())?
    } else {
        Vec::new()
    };

    let report = session.generate(&selection, &choices)?;

    for warning in &report.warnings {
        eprintln!("{} {}, skipping...", "Warning:".yellow().bold(), warning);
    }

    let mut table = OutputTable::new(report.rows);
    if config.include_note && !args.no_note {
        table = table.with_note(config.note_for(room_style));
    }

    if !args.quiet {
        print_table(&table);
        println!();
    }

    let output = args.output.unwrap_or_else(|| config.output_path.clone());
    let annotation = (!config.annotation.is_empty()).then_some(config.annotation.as_str());
    write_nomenclature_excel(&table, annotation, &output)?;

    if let Some(ref csv_path) = args.csv {
        write_nomenclature_csv(&table, csv_path)?;
    }

    println!(
        "{} {} nomenclatures written to {}",
        "Final Nomenclatures Generated:".green().bold(),
        table.rows.len(),
        output.display().to_string().cyan()
    );
    if let Some(text) = annotation {
        println!("{}", text.yellow());
    }

    Ok(())
}

/// Fill in location, building, floor and room, one cascading level at a time
fn resolve_selection(
    reference: &ReferenceTable,
    args: &GenerateArgs,
    interactive: bool,
) -> Result<Selection> {
    let location = choose(
        "Location code",
        "location",
        args.location.as_ref(),
        reference.locations(),
        interactive,
    )?;
    let building = choose(
        "Building code",
        "building",
        args.building.as_ref(),
        reference.buildings(&location),
        interactive,
    )?;
    let floor = choose(
        "Floor code",
        "floor",
        args.floor.as_ref(),
        reference.floors(&location, &building),
        interactive,
    )?;
    let room = choose(
        "Room code",
        "room",
        args.room.as_ref(),
        reference.rooms(&location, &building, &floor),
        interactive,
    )?;

    Ok(Selection {
        location,
        building,
        floor,
        room,
    })
}

/// Use the flag value when given, prompt when interactive, otherwise fail
/// listing the valid choices
fn choose(
    label: &str,
    flag: &str,
    given: Option<&String>,
    options: Vec<String>,
    interactive: bool,
) -> Result<String> {
    if let Some(value) = given {
        if !options.contains(value) {
            log::warn!("{} '{}' is not in the reference table", label, value);
        }
        return Ok(value.clone());
    }

    if interactive {
        return prompt::select_one(label, &options);
    }

    if options.is_empty() {
        bail!("No {} choices available in the reference table", label);
    }
    bail!("--{} is required; choices: {}", flag, options.join(", "))
}
