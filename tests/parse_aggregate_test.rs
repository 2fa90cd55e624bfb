use std::fs;
use std::path::{Path, PathBuf};

use assert_float_eq::*;
use tempfile::tempdir;

use diet_calc_rs::aggregate::aggregate_meals;
use diet_calc_rs::parser::{ParseOptions, ParsePolicy, load_catalog};

// A sheet export the way the plan spreadsheet actually comes out:
// title row, column header, meals with continuation rows, an options
// header, and a substitution in the eighth column.
const SHEET: &str = "\
Diet Plan week 32,,,,,,
Meal,Food,Quantity,Fat,Carbs,Protein,Calories
Breakfast,Oats,50g,5,30,7,190
,Milk,200ml,4,10,7,100
,Banana,1,0.3,23,1.1,90
Workout Shake,Whey,1 scoop,2,3,24,120
Lunch,Rice,100g,2,30,5,180
,Chicken,150g,5,0,25,200
,Olive Oil,1 tbsp,14,0,0,120
Dinner,Eggs,3,15,2,18,210
,Toast,2 slices,2,30,6,160,Rice cakes
Food Options,,,,,,
Late Snack,Yogurt,150g,3,12,15,140
";

fn write_sheet(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("diet.csv");
    fs::write(&path, content).expect("write sheet");
    path
}

#[test]
fn test_catalog_from_realistic_sheet() {
    let dir = tempdir().expect("temp dir");
    let path = write_sheet(dir.path(), SHEET);

    let catalog = load_catalog(&path, &ParseOptions::default()).expect("catalog loads");

    // Title, column header and options header never become meals.
    assert_eq!(catalog.len(), 5, "expected five meals, got {:?}", catalog.names());
    assert!(catalog.get("Diet Plan week 32").is_none());
    assert!(catalog.get("Meal").is_none());
    assert!(catalog.get("Food Options").is_none());

    // Priority order: Breakfast, Workout, Lunch, Snack fragments, then
    // the rest.
    assert_eq!(
        catalog.names(),
        vec!["Breakfast", "Workout Shake", "Lunch", "Late Snack", "Dinner"]
    );
}

#[test]
fn test_label_row_and_continuations_accumulate() {
    let dir = tempdir().expect("temp dir");
    let path = write_sheet(dir.path(), SHEET);

    let catalog = load_catalog(&path, &ParseOptions::default()).expect("catalog loads");
    let breakfast = catalog.get("Breakfast").expect("breakfast parsed");

    assert_float_absolute_eq!(breakfast.macros.fat, 9.3);
    assert_float_absolute_eq!(breakfast.macros.carbs, 63.0);
    assert_float_absolute_eq!(breakfast.macros.protein, 15.1);
    assert_float_absolute_eq!(breakfast.macros.calories, 380.0);
    assert_eq!(breakfast.items.len(), 3);
    assert_eq!(breakfast.items[0].description, "50g Oats");
    assert_eq!(breakfast.items[2].description, "1 Banana");
}

#[test]
fn test_substitution_column_reaches_items() {
    let dir = tempdir().expect("temp dir");
    let path = write_sheet(dir.path(), SHEET);

    let catalog = load_catalog(&path, &ParseOptions::default()).expect("catalog loads");
    let dinner = catalog.get("Dinner").expect("dinner parsed");

    assert_eq!(dinner.items.len(), 2);
    assert_eq!(dinner.items[0].substitution, None);
    assert_eq!(dinner.items[1].substitution.as_deref(), Some("Rice cakes"));
}

#[test]
fn test_aggregate_selection_over_catalog() {
    let dir = tempdir().expect("temp dir");
    let path = write_sheet(dir.path(), SHEET);

    let catalog = load_catalog(&path, &ParseOptions::default()).expect("catalog loads");
    let selected = vec!["Breakfast".to_string(), "Late Snack".to_string()];

    let (totals, breakdown) = aggregate_meals(&catalog, &selected);

    assert_float_absolute_eq!(totals.fat, 12.3);
    assert_float_absolute_eq!(totals.carbs, 75.0);
    assert_float_absolute_eq!(totals.protein, 30.1);
    assert_float_absolute_eq!(totals.calories, 520.0);
    assert_eq!(breakdown.len(), 2);
    assert_eq!(breakdown[0].name, "Breakfast");
    assert_eq!(breakdown[1].name, "Late Snack");
}

#[test]
fn test_policies_agree_on_clean_full_width_sheet() {
    // No keyword labels, no short rows: the two walks must agree on
    // every macro.
    let clean = "\
Lunch,Rice,100g,2,30,5,180
,Chicken,150g,5,0,25,200
Dinner,Eggs,3,15,2,18,210
";
    let dir = tempdir().expect("temp dir");
    let path = write_sheet(dir.path(), clean);

    let two_pass = load_catalog(&path, &ParseOptions::default()).expect("two-pass loads");
    let single_pass = load_catalog(
        &path,
        &ParseOptions {
            policy: ParsePolicy::SinglePass,
            ..ParseOptions::default()
        },
    )
    .expect("single-pass loads");

    assert_eq!(two_pass.len(), single_pass.len());
    for meal in two_pass.iter() {
        let other = single_pass
            .get(&meal.name)
            .expect("meal present under both policies");
        assert_float_absolute_eq!(meal.macros.fat, other.macros.fat);
        assert_float_absolute_eq!(meal.macros.carbs, other.macros.carbs);
        assert_float_absolute_eq!(meal.macros.protein, other.macros.protein);
        assert_float_absolute_eq!(meal.macros.calories, other.macros.calories);
    }
}
