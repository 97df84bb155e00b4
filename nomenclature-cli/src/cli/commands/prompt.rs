//! Interactive prompts standing in for the cascading dropdowns

use anyhow::{Result, bail};
use dialoguer::{Input, MultiSelect, Select, theme::ColorfulTheme};

use crate::nomenclature::EquipmentChoice;

/// Pick one of `items`
pub fn select_one(prompt: &str, items: &[String]) -> Result<String> {
    if items.is_empty() {
        bail!("No choices available for {}", prompt);
    }

    let idx = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()?;

    Ok(items[idx].clone())
}

/// Pick any number of equipment terms, then ask for an asset number each
///
/// Empty asset numbers are accepted here; the generator rejects them.
pub fn select_equipment(terms: &[String]) -> Result<Vec<EquipmentChoice>> {
    let picked = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Select equipments (space to toggle, enter to confirm)")
        .items(terms)
        .interact()?;

    picked
        .into_iter()
        .map(|idx| {
            let term = &terms[idx];
            let asset: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(format!("Asset number for {}", term))
                .allow_empty(true)
                .interact_text()?;
            Ok(EquipmentChoice::new(term.as_str(), asset.trim()))
        })
        .collect()
}
