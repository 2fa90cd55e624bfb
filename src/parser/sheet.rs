use std::collections::HashMap;

use crate::models::{FoodItem, Meal, MealCatalog};
use crate::parser::cell::{
    COL_CALORIES, COL_CARBS, COL_FAT, COL_FOOD_NAME, COL_MEAL_LABEL, COL_PROTEIN, COL_QUANTITY,
    COL_SUBSTITUTION, Cell, MIN_ROW_CELLS, Row,
};
use crate::parser::keywords::{default_ignore_keywords, default_meal_priority, priority_rank};

/// Which row-walking strategy the parser uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParsePolicy {
    /// Candidate-filtering pass plus an item-collecting pass.
    #[default]
    TwoPass,

    /// A single walk that only accumulates macros: no header filtering,
    /// no item detail, rows shorter than the macro columns skipped
    /// outright.
    SinglePass,
}

/// Configuration for a parse pass.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    pub policy: ParsePolicy,

    /// Lowercase substrings that disqualify a label from naming a meal.
    pub ignore_keywords: Vec<String>,

    /// Name fragments defining meal display order, first match wins.
    pub meal_priority: Vec<String>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            policy: ParsePolicy::TwoPass,
            ignore_keywords: default_ignore_keywords(),
            meal_priority: default_meal_priority(),
        }
    }
}

/// Parse sheet rows into an ordered meal catalog.
///
/// Never fails: rows that fit no rule contribute nothing, and a sheet
/// with no recognizable meals yields an empty catalog.
pub fn parse_rows(rows: &[Row], options: &ParseOptions) -> MealCatalog {
    let meals = match options.policy {
        ParsePolicy::TwoPass => parse_two_pass(rows, options),
        ParsePolicy::SinglePass => parse_single_pass(rows),
    };
    into_catalog(meals, &options.meal_priority)
}

/// Sort meals by priority rank, ties by name, and build the catalog.
fn into_catalog(mut meals: Vec<Meal>, priority: &[String]) -> MealCatalog {
    meals.sort_by(|a, b| {
        priority_rank(&a.name, priority)
            .cmp(&priority_rank(&b.name, priority))
            .then_with(|| a.name.cmp(&b.name))
    });
    MealCatalog::from_meals(meals)
}

/// Canonical policy: collect candidate meal names first, then walk the
/// rows again gathering items and macros.
fn parse_two_pass(rows: &[Row], options: &ParseOptions) -> Vec<Meal> {
    // Pass 1: distinct labels from full-width rows, headers filtered out,
    // first-seen order.
    let mut names: Vec<String> = Vec::new();
    for row in rows {
        if row.len() < MIN_ROW_CELLS {
            continue;
        }
        let label = match row[COL_MEAL_LABEL].label() {
            Some(label) => label,
            None => continue,
        };
        if is_ignored(label, &options.ignore_keywords) {
            continue;
        }
        if !names.iter().any(|n| n == label) {
            names.push(label.to_string());
        }
    }

    let mut meals: Vec<Meal> = names.iter().map(|name| Meal::new(name.as_str())).collect();
    let index: HashMap<&str, usize> = names
        .iter()
        .enumerate()
        .map(|(i, name)| (name.as_str(), i))
        .collect();

    // Pass 2: walk every row, short ones included. A label matching a
    // surviving candidate switches the current meal; other labels leave
    // it untouched.
    let mut current: Option<usize> = None;
    for row in rows {
        if let Some(label) = row.get(COL_MEAL_LABEL).and_then(Cell::label) {
            if let Some(&i) = index.get(label) {
                current = Some(i);
            }
        }
        let i = match current {
            Some(i) => i,
            None => continue,
        };
        let meal = &mut meals[i];

        if let Some(food) = row.get(COL_FOOD_NAME).and_then(Cell::label) {
            let quantity = row
                .get(COL_QUANTITY)
                .map(Cell::display_text)
                .unwrap_or_default();
            let substitution = row
                .get(COL_SUBSTITUTION)
                .and_then(Cell::label)
                .map(str::to_string);
            meal.items.push(FoodItem::new(food, &quantity, substitution));
        }

        if row.len() >= MIN_ROW_CELLS {
            accumulate_macros(meal, row);
        }
    }

    meals
}

/// Degenerate policy: one walk with a current-meal pointer, macros only.
fn parse_single_pass(rows: &[Row]) -> Vec<Meal> {
    let mut meals: Vec<Meal> = Vec::new();
    let mut current: Option<usize> = None;

    for row in rows {
        if row.len() < MIN_ROW_CELLS {
            continue;
        }
        if let Some(label) = row[COL_MEAL_LABEL].label() {
            let i = match meals.iter().position(|m| m.name == label) {
                Some(i) => i,
                None => {
                    meals.push(Meal::new(label));
                    meals.len() - 1
                }
            };
            current = Some(i);
        }
        let i = match current {
            Some(i) => i,
            None => continue,
        };
        accumulate_macros(&mut meals[i], row);
    }

    meals
}

fn accumulate_macros(meal: &mut Meal, row: &Row) {
    meal.macros.fat += row[COL_FAT].macro_value();
    meal.macros.carbs += row[COL_CARBS].macro_value();
    meal.macros.protein += row[COL_PROTEIN].macro_value();
    meal.macros.calories += row[COL_CALORIES].macro_value();
}

fn is_ignored(label: &str, keywords: &[String]) -> bool {
    let lower = label.to_lowercase();
    keywords.iter().any(|keyword| lower.contains(keyword.as_str()))
}
