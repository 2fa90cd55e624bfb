use std::collections::HashMap;

use crate::models::Meal;

/// Ordered, immutable set of parsed meals.
///
/// Iteration follows insertion order; the parser sorts meals by priority
/// before building the catalog, so catalog order is display order. Lookup
/// is by exact (trimmed) name.
#[derive(Debug, Clone, Default)]
pub struct MealCatalog {
    meals: Vec<Meal>,
    index: HashMap<String, usize>,
}

impl MealCatalog {
    /// Build a catalog preserving the given meal order.
    ///
    /// A repeated name keeps its first occurrence; the parser merges
    /// duplicates before this point.
    pub fn from_meals(meals: Vec<Meal>) -> Self {
        let mut catalog = Self::default();
        for meal in meals {
            if !catalog.index.contains_key(&meal.name) {
                catalog.index.insert(meal.name.clone(), catalog.meals.len());
                catalog.meals.push(meal);
            }
        }
        catalog
    }

    /// Look up a meal by its exact name.
    pub fn get(&self, name: &str) -> Option<&Meal> {
        self.index.get(name).map(|&i| &self.meals[i])
    }

    /// Whether a meal with this exact name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Meals in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Meal> {
        self.meals.iter()
    }

    /// Meal names in catalog order.
    pub fn names(&self) -> Vec<&str> {
        self.meals.iter().map(|m| m.name.as_str()).collect()
    }

    /// Number of meals in the catalog.
    pub fn len(&self) -> usize {
        self.meals.len()
    }

    /// Check if the catalog holds no meals.
    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}
