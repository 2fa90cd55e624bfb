use crate::aggregate::MealBreakdown;
use crate::models::{MacroTotals, MealCatalog};

/// Display the parsed catalog, optionally with each meal's food items.
pub fn display_catalog(catalog: &MealCatalog, show_items: bool) {
    if catalog.is_empty() {
        println!("No meals found in the sheet.");
        return;
    }

    println!();
    println!("=== Meals ({}) ===", catalog.len());
    println!();

    // Find max meal name length for alignment
    let max_name_len = catalog.iter().map(|m| m.name.len()).max().unwrap_or(10);

    for meal in catalog.iter() {
        println!(
            "  {:<width$}  {:>6.0} kcal | carbs {:>6.1} g | protein {:>6.1} g | fat {:>6.1} g",
            meal.name,
            meal.macros.calories,
            meal.macros.carbs,
            meal.macros.protein,
            meal.macros.fat,
            width = max_name_len
        );
        if show_items {
            for item in &meal.items {
                match &item.substitution {
                    Some(sub) => println!("      - {} (or {})", item.description, sub),
                    None => println!("      - {}", item.description),
                }
            }
        }
    }

    println!();
}

/// Display per-meal contributions followed by the summed totals.
pub fn display_breakdown(breakdown: &[MealBreakdown], totals: &MacroTotals) {
    if breakdown.is_empty() {
        println!("No meals selected; totals are zero.");
        return;
    }

    println!();
    let max_name_len = breakdown.iter().map(|b| b.name.len()).max().unwrap_or(10);

    for (i, entry) in breakdown.iter().enumerate() {
        println!(
            "{:>3}. {:<width$}  {:>6.0} kcal | carbs {:>6.1} g | protein {:>6.1} g | fat {:>6.1} g",
            i + 1,
            entry.name,
            entry.macros.calories,
            entry.macros.carbs,
            entry.macros.protein,
            entry.macros.fat,
            width = max_name_len
        );
    }

    println!();
    println!("--- Totals ---");
    println!("Calories: {:.0} kcal", totals.calories);
    println!("Carbs:    {:.1} g", totals.carbs);
    println!("Protein:  {:.1} g", totals.protein);
    println!("Fat:      {:.1} g", totals.fat);
    println!();
}

/// Display one saved selection, flagging meals the sheet no longer has.
pub fn display_selection(name: &str, meals: &[String], catalog: &MealCatalog) {
    let listed: Vec<String> = meals
        .iter()
        .map(|meal| {
            if catalog.contains(meal) {
                meal.clone()
            } else {
                format!("{} (missing)", meal)
            }
        })
        .collect();

    println!("  {}: {}", name, listed.join(", "));
}
