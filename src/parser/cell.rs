/// One cell of a sheet row, resolved into a tagged value when the raw
/// field is read.
///
/// Classification happens exactly once, at load time: a field that is
/// empty after trimming is `Empty`, a field that parses to a finite number
/// is `Number`, anything else is `Text`. The rest of the parser never
/// re-interprets cell contents.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Number(f64),
    Text(String),
}

/// One sheet row. May carry fewer than the seven tracked columns.
pub type Row = Vec<Cell>;

// Column layout of the diet sheet. Anything past the substitution column
// is ignored.
pub const COL_MEAL_LABEL: usize = 0;
pub const COL_FOOD_NAME: usize = 1;
pub const COL_QUANTITY: usize = 2;
pub const COL_FAT: usize = 3;
pub const COL_CARBS: usize = 4;
pub const COL_PROTEIN: usize = 5;
pub const COL_CALORIES: usize = 6;
pub const COL_SUBSTITUTION: usize = 7;

/// Minimum cells a row needs to carry the four macro columns.
pub const MIN_ROW_CELLS: usize = 7;

impl Cell {
    /// Classify one raw field.
    ///
    /// "NaN" and "inf" parse as floats but are not finite, so they stay
    /// text and contribute nothing to macros.
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Cell::Empty;
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => Cell::Number(n),
            _ => Cell::Text(raw.to_string()),
        }
    }

    /// Trimmed text content, if this cell can name a meal or a food.
    ///
    /// Only text cells qualify; numbers never act as labels.
    pub fn label(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() { None } else { Some(trimmed) }
            }
            _ => None,
        }
    }

    /// Numeric contribution to a macro column.
    ///
    /// The value for a finite number, zero for everything else. Never
    /// fails; unparseable macro cells are policy, not errors.
    pub fn macro_value(&self) -> f64 {
        match self {
            Cell::Number(n) if n.is_finite() => *n,
            _ => 0.0,
        }
    }

    /// Human-readable form, used for quantities.
    ///
    /// Integral numbers drop the decimal point ("100", not "100.0").
    pub fn display_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Number(n) if n.fract() == 0.0 => format!("{:.0}", n),
            Cell::Number(n) => n.to_string(),
            Cell::Text(s) => s.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_classification() {
        assert_eq!(Cell::from_raw(""), Cell::Empty);
        assert_eq!(Cell::from_raw("   "), Cell::Empty);
        assert_eq!(Cell::from_raw("2"), Cell::Number(2.0));
        assert_eq!(Cell::from_raw(" 30.5 "), Cell::Number(30.5));
        assert_eq!(Cell::from_raw("-1.5"), Cell::Number(-1.5));
        assert_eq!(Cell::from_raw("Rice"), Cell::Text("Rice".to_string()));
        assert_eq!(Cell::from_raw("100g"), Cell::Text("100g".to_string()));
    }

    #[test]
    fn test_from_raw_rejects_non_finite_numbers() {
        assert_eq!(Cell::from_raw("NaN"), Cell::Text("NaN".to_string()));
        assert_eq!(Cell::from_raw("inf"), Cell::Text("inf".to_string()));
        assert_eq!(Cell::from_raw("-inf"), Cell::Text("-inf".to_string()));
    }

    #[test]
    fn test_label_only_for_text() {
        assert_eq!(Cell::from_raw(" Lunch ").label(), Some("Lunch"));
        assert_eq!(Cell::from_raw("42").label(), None);
        assert_eq!(Cell::from_raw("").label(), None);
    }

    #[test]
    fn test_macro_value_zero_on_failure() {
        assert_eq!(Cell::from_raw("5").macro_value(), 5.0);
        assert_eq!(Cell::from_raw("").macro_value(), 0.0);
        assert_eq!(Cell::from_raw("n/a").macro_value(), 0.0);
        assert_eq!(Cell::Number(f64::NAN).macro_value(), 0.0);
    }

    #[test]
    fn test_display_text() {
        assert_eq!(Cell::from_raw("100").display_text(), "100");
        assert_eq!(Cell::from_raw("2.5").display_text(), "2.5");
        assert_eq!(Cell::from_raw(" 100g ").display_text(), "100g");
        assert_eq!(Cell::Empty.display_text(), "");
    }
}
