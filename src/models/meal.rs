use std::hash::{Hash, Hasher};

use crate::models::MacroTotals;

/// A single food entry within a meal.
///
/// The description joins quantity and food name as they appear on the sheet
/// ("100g Rice"). The substitution, when present, suggests an equivalent
/// swap for that food.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodItem {
    pub description: String,
    pub substitution: Option<String>,
}

impl FoodItem {
    /// Build an item from a food name, a quantity (may be empty), and an
    /// optional substitution.
    pub fn new(food: &str, quantity: &str, substitution: Option<String>) -> Self {
        let description = if quantity.is_empty() {
            food.to_string()
        } else {
            format!("{} {}", quantity, food)
        };

        Self {
            description,
            substitution,
        }
    }
}

/// A named meal with aggregated macros and the food items it comprises.
///
/// Built once during a parse pass and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Meal {
    /// Trimmed sheet label; unique within a catalog.
    pub name: String,

    pub macros: MacroTotals,

    pub items: Vec<FoodItem>,
}

impl Meal {
    /// Create an empty meal with zeroed macros and no items.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            macros: MacroTotals::default(),
            items: Vec::new(),
        }
    }
}

// Meal identity is the exact name; macros and items never take part.
impl PartialEq for Meal {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Meal {}

impl Hash for Meal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
