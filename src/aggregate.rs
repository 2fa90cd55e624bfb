use crate::models::{MacroTotals, MealCatalog};

/// One meal's contribution to an aggregation, in selection order.
#[derive(Debug, Clone, PartialEq)]
pub struct MealBreakdown {
    pub name: String,
    pub macros: MacroTotals,
}

/// Sum the macros of the selected meal names over a catalog.
///
/// Names missing from the catalog are skipped without comment; a stale
/// selection still totals whatever meals remain. Duplicate names count
/// once per appearance.
pub fn aggregate_meals(
    catalog: &MealCatalog,
    selected: &[String],
) -> (MacroTotals, Vec<MealBreakdown>) {
    let mut totals = MacroTotals::default();
    let mut breakdown = Vec::new();

    for name in selected {
        let meal = match catalog.get(name) {
            Some(meal) => meal,
            None => continue,
        };
        totals.accumulate(&meal.macros);
        breakdown.push(MealBreakdown {
            name: meal.name.clone(),
            macros: meal.macros,
        });
    }

    (totals, breakdown)
}

#[cfg(test)]
mod tests {
    use crate::models::Meal;

    use super::*;

    fn sample_catalog() -> MealCatalog {
        let mut lunch = Meal::new("Lunch");
        lunch.macros = MacroTotals {
            fat: 7.0,
            carbs: 30.0,
            protein: 30.0,
            calories: 380.0,
        };
        let mut dinner = Meal::new("Dinner");
        dinner.macros = MacroTotals {
            fat: 15.0,
            carbs: 2.0,
            protein: 18.0,
            calories: 210.0,
        };
        MealCatalog::from_meals(vec![lunch, dinner])
    }

    #[test]
    fn test_totals_are_additive() {
        let catalog = sample_catalog();
        let selected = vec!["Lunch".to_string(), "Dinner".to_string()];

        let (totals, breakdown) = aggregate_meals(&catalog, &selected);

        assert!((totals.fat - 22.0).abs() < 1e-9);
        assert!((totals.carbs - 32.0).abs() < 1e-9);
        assert!((totals.protein - 48.0).abs() < 1e-9);
        assert!((totals.calories - 590.0).abs() < 1e-9);
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].name, "Lunch");
        assert_eq!(breakdown[1].name, "Dinner");
    }

    #[test]
    fn test_empty_selection_totals_zero() {
        let catalog = sample_catalog();
        let (totals, breakdown) = aggregate_meals(&catalog, &[]);

        assert!(totals.is_zero());
        assert!(breakdown.is_empty());
    }

    #[test]
    fn test_duplicates_count_per_appearance() {
        let catalog = sample_catalog();
        let selected = vec!["Lunch".to_string(), "Lunch".to_string()];

        let (totals, breakdown) = aggregate_meals(&catalog, &selected);

        assert!((totals.calories - 760.0).abs() < 1e-9);
        assert_eq!(breakdown.len(), 2);
    }

    #[test]
    fn test_stale_names_are_skipped() {
        let catalog = sample_catalog();
        let selected = vec![
            "Lunch".to_string(),
            "Brunch".to_string(),
            "Dinner".to_string(),
        ];

        let (totals, breakdown) = aggregate_meals(&catalog, &selected);

        assert!((totals.calories - 590.0).abs() < 1e-9);
        assert_eq!(breakdown.len(), 2);
    }

    #[test]
    fn test_selection_order_is_kept() {
        let catalog = sample_catalog();
        let selected = vec!["Dinner".to_string(), "Lunch".to_string()];

        let (_, breakdown) = aggregate_meals(&catalog, &selected);

        assert_eq!(breakdown[0].name, "Dinner");
        assert_eq!(breakdown[1].name, "Lunch");
    }
}
