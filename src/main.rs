use clap::Parser;
use std::path::Path;

use diet_calc_rs::aggregate::aggregate_meals;
use diet_calc_rs::cli::{Cli, Command};
use diet_calc_rs::error::{DietError, Result};
use diet_calc_rs::interface::{
    display_breakdown, display_catalog, display_selection, nearest_selection,
    prompt_meal_selection, prompt_selection_name, prompt_yes_no,
};
use diet_calc_rs::models::MealCatalog;
use diet_calc_rs::parser::{ParseOptions, ParsePolicy};
use diet_calc_rs::state::{CatalogCache, SelectionStore};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();
    let options = parse_options(cli.single_pass);
    let sheet = Path::new(&cli.sheet);
    let selections = Path::new(&cli.selections);

    match command {
        Command::Totals { from } => cmd_totals(sheet, selections, &options, from.as_deref()),
        Command::Meals { items } => cmd_meals(sheet, &options, items),
        Command::Selections => cmd_selections(sheet, selections, &options),
        Command::Show { name } => cmd_show(sheet, selections, &options, &name),
        Command::Delete { name } => cmd_delete(selections, &name),
    }
}

fn parse_options(single_pass: bool) -> ParseOptions {
    let policy = if single_pass {
        ParsePolicy::SinglePass
    } else {
        ParsePolicy::TwoPass
    };
    ParseOptions {
        policy,
        ..ParseOptions::default()
    }
}

/// Load the catalog through the cache. A sheet that opens but does not
/// decode as rows is reported and treated as empty; a missing sheet is
/// fatal.
fn load_or_empty(
    cache: &mut CatalogCache,
    sheet: &Path,
    options: &ParseOptions,
) -> Result<MealCatalog> {
    match cache.load(sheet, options) {
        Ok(catalog) => Ok(catalog.clone()),
        Err(DietError::MalformedSource(msg)) => {
            eprintln!("Warning: diet sheet is not tabular data: {}", msg);
            Ok(MealCatalog::default())
        }
        Err(e) => Err(e),
    }
}

/// Build the not-found error, hinting at a close name when one exists.
fn not_found(name: &str, store: &SelectionStore) -> DietError {
    let names = store.names();
    if let Some(similar) = nearest_selection(name, &names) {
        println!("Did you mean '{}'?", similar);
    }
    DietError::SelectionNotFound(name.to_string())
}

/// Interactive loop: pick meals, show totals, optionally save the pick.
fn cmd_totals(
    sheet: &Path,
    selections_path: &Path,
    options: &ParseOptions,
    from: Option<&str>,
) -> Result<()> {
    let mut cache = CatalogCache::new();
    let mut store = SelectionStore::load(selections_path)?;

    let mut preselected: Vec<String> = match from {
        Some(name) => match store.get(name) {
            Some(meals) => meals.clone(),
            None => return Err(not_found(name, &store)),
        },
        None => Vec::new(),
    };

    loop {
        // Reload through the cache so mid-session sheet edits are seen.
        let catalog = load_or_empty(&mut cache, sheet, options)?;
        if catalog.is_empty() {
            println!("No meals found in the sheet.");
            return Ok(());
        }

        let selected = prompt_meal_selection(&catalog, &preselected)?;
        if selected.is_empty() {
            println!("Nothing selected.");
        } else {
            let (totals, breakdown) = aggregate_meals(&catalog, &selected);
            display_breakdown(&breakdown, &totals);

            if prompt_yes_no("Save this selection?", false)? {
                let chosen = prompt_selection_name(&store.names())?;
                if let Some(name) = chosen {
                    store.save(&name, selected.clone())?;
                    println!("Saved '{}'.", name);
                }
            }
        }

        preselected = selected;

        if !prompt_yes_no("Pick again?", true)? {
            break;
        }
    }

    Ok(())
}

/// Print the parsed catalog.
fn cmd_meals(sheet: &Path, options: &ParseOptions, items: bool) -> Result<()> {
    let mut cache = CatalogCache::new();
    let catalog = load_or_empty(&mut cache, sheet, options)?;
    display_catalog(&catalog, items);
    Ok(())
}

/// List saved selections with their meal lists.
fn cmd_selections(sheet: &Path, selections_path: &Path, options: &ParseOptions) -> Result<()> {
    let store = SelectionStore::load(selections_path)?;
    if store.is_empty() {
        println!("No saved selections.");
        return Ok(());
    }

    let mut cache = CatalogCache::new();
    let catalog = load_or_empty(&mut cache, sheet, options)?;

    println!();
    println!("=== Saved selections ({}) ===", store.len());
    println!();
    for name in store.names() {
        if let Some(meals) = store.get(name) {
            display_selection(name, meals, &catalog);
        }
    }
    println!();

    Ok(())
}

/// Total a saved selection without prompting.
fn cmd_show(
    sheet: &Path,
    selections_path: &Path,
    options: &ParseOptions,
    name: &str,
) -> Result<()> {
    let store = SelectionStore::load(selections_path)?;
    let meals = match store.get(name) {
        Some(meals) => meals.clone(),
        None => return Err(not_found(name, &store)),
    };

    let mut cache = CatalogCache::new();
    let catalog = load_or_empty(&mut cache, sheet, options)?;

    println!("Selection '{}': {}", name, meals.join(", "));
    let (totals, breakdown) = aggregate_meals(&catalog, &meals);
    display_breakdown(&breakdown, &totals);

    Ok(())
}

/// Confirm and delete a saved selection.
fn cmd_delete(selections_path: &Path, name: &str) -> Result<()> {
    let mut store = SelectionStore::load(selections_path)?;
    if store.get(name).is_none() {
        return Err(not_found(name, &store));
    }

    let confirm = prompt_yes_no(&format!("Delete selection '{}'?", name), false)?;
    if !confirm {
        println!("Kept '{}'.", name);
        return Ok(());
    }

    store.delete(name)?;
    println!("Deleted '{}'.", name);
    Ok(())
}
