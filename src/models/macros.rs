/// Aggregated nutritional macros for a meal or a whole selection.
///
/// Fat, carbs and protein are grams; calories are kcal. Totals start at
/// zero and only ever grow by field-wise addition during a parse or an
/// aggregation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MacroTotals {
    pub fat: f64,
    pub carbs: f64,
    pub protein: f64,
    pub calories: f64,
}

impl MacroTotals {
    /// Add another set of totals field-wise.
    pub fn accumulate(&mut self, other: &MacroTotals) {
        self.fat += other.fat;
        self.carbs += other.carbs;
        self.protein += other.protein;
        self.calories += other.calories;
    }

    /// True when every field is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.fat == 0.0 && self.carbs == 0.0 && self.protein == 0.0 && self.calories == 0.0
    }
}
