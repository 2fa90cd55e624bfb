pub mod cell;
pub mod keywords;
pub mod sheet;
pub mod source;

pub use cell::{Cell, Row};
pub use keywords::{
    IGNORE_KEYWORDS, MEAL_PRIORITY, default_ignore_keywords, default_meal_priority, ignore_reason,
    priority_rank,
};
pub use sheet::{ParseOptions, ParsePolicy, parse_rows};
pub use source::{load_catalog, load_rows};
