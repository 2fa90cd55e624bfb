pub mod prompts;
pub mod render;

pub use prompts::{
    nearest_selection, prompt_meal_selection, prompt_selection_name, prompt_yes_no,
};
pub use render::{display_breakdown, display_catalog, display_selection};
