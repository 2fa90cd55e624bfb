use dialoguer::{Confirm, Input, MultiSelect};
use strsim::jaro_winkler;

use crate::error::Result;
use crate::models::MealCatalog;

/// Let the user tick the meals to total. Previously chosen names come
/// back pre-checked.
pub fn prompt_meal_selection(
    catalog: &MealCatalog,
    preselected: &[String],
) -> Result<Vec<String>> {
    let labels: Vec<String> = catalog
        .iter()
        .map(|meal| format!("{} ({:.0} kcal)", meal.name, meal.macros.calories))
        .collect();
    let defaults: Vec<bool> = catalog
        .iter()
        .map(|meal| preselected.iter().any(|name| name == &meal.name))
        .collect();

    let picked = MultiSelect::new()
        .with_prompt("Pick your meals (space toggles, enter confirms)")
        .items(&labels)
        .defaults(&defaults)
        .interact()?;

    let names = catalog.names();
    Ok(picked.into_iter().map(|i| names[i].to_string()).collect())
}

/// Ask for a name to save the current selection under. Returns None
/// when the user backs out (blank name, or declining to overwrite an
/// existing one).
pub fn prompt_selection_name(existing: &[&str]) -> Result<Option<String>> {
    let input: String = Input::new()
        .with_prompt("Save this selection as (blank to skip)")
        .allow_empty(true)
        .interact_text()?;

    let name = input.trim().to_string();
    if name.is_empty() {
        return Ok(None);
    }

    if existing.contains(&name.as_str()) {
        let overwrite = prompt_yes_no(&format!("'{}' already exists. Overwrite?", name), false)?;
        if !overwrite {
            return Ok(None);
        }
    }

    Ok(Some(name))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Closest stored selection name to a missed lookup, if any name is
/// close enough to plausibly be what the user meant.
pub fn nearest_selection<'a>(input: &str, names: &[&'a str]) -> Option<&'a str> {
    names
        .iter()
        .map(|name| (*name, jaro_winkler(&name.to_lowercase(), &input.to_lowercase())))
        .filter(|(_, score)| *score > 0.7)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(name, _)| name)
}
