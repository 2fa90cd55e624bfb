mod catalog;
mod macros;
mod meal;

pub use catalog::MealCatalog;
pub use macros::MacroTotals;
pub use meal::{FoodItem, Meal};
