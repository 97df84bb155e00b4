//! Options command: walk the reference table one level at a time

use anyhow::Result;
use colored::*;

use super::OptionsArgs;
use super::generate::load_reference;

pub fn handle_options_command(args: OptionsArgs) -> Result<()> {
    let table = load_reference(&args.reference)?;

    let (level, options) = match (&args.location, &args.building, &args.floor) {
        (None, _, _) => ("Location code", table.locations()),
        (Some(loc), None, _) => ("Building code", table.buildings(loc)),
        (Some(loc), Some(bld), None) => ("Floor Code", table.floors(loc, bld)),
        (Some(loc), Some(bld), Some(floor)) => ("Room code", table.rooms(loc, bld, floor)),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&options)?);
        return Ok(());
    }

    println!("{} ({})", level.bold(), options.len());
    for option in &options {
        println!("  {}", option);
    }

    Ok(())
}
