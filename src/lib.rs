pub mod aggregate;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod parser;
pub mod state;

pub use error::{DietError, Result};
pub use models::{FoodItem, MacroTotals, Meal, MealCatalog};
