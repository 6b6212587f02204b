//! Snapshot file to reports, through the public API only

use std::io::Write;

use chrono::NaiveDate;
use mealplan::nutrition::{parse_totals, Scope};
use mealplan::store::Catalog;
use mealplan::tools;
use mealplan::MealplanError;

const SNAPSHOT: &str = r#"{
    "foods": [
        {"id": 1, "name": "Granola", "brand": "Acme", "serving_size": "34", "serving_unit": "g",
         "calories": 125, "protein": 3, "carbs": 22, "fat": 3.5, "fiber": 2, "sugar": 7, "sodium": 65, "calcium": 0},
        {"id": 2, "name": "Skyr", "serving_size": "170", "serving_unit": "g",
         "calories": 100, "protein": 17, "carbs": 6, "fat": 0, "fiber": 0, "sugar": 6, "sodium": 60, "calcium": 200},
        {"id": 3, "name": "Mystery bar", "serving_size": "", "serving_unit": "g",
         "calories": 200, "protein": 10, "carbs": 20, "fat": 8, "fiber": null, "sugar": null, "sodium": null, "calcium": null}
    ],
    "meals": [
        {"id": 1, "name": "Skyr and granola", "meal_type": "breakfast", "meal_time": "Breakfast",
         "meal_foods": [{"food_id": 1, "quantity": 34}, {"food_id": 2, "quantity": 170}]},
        {"id": 2, "name": "Bar", "meal_type": "snack", "meal_time": "Snack 2",
         "meal_foods": [{"food_id": 3, "quantity": 60}]}
    ],
    "plans": [
        {"id": 1, "person": "Sarah", "date": "2025-10-08", "meal_id": 1, "meal_time": "Breakfast"},
        {"id": 2, "person": "Sarah", "date": "2025-10-08", "meal_id": 2, "meal_time": "Snack 2"}
    ],
    "templates": [],
    "weekly_menus": [],
    "tracked_days": [
        {"id": 1, "person": "Sarah", "date": "2025-10-08", "is_modified": true, "tracked_meals": [
            {"meal_id": 1, "meal_time": "Breakfast", "tracked_foods": [
                {"food_id": 1, "quantity": 68, "is_override": true, "is_deleted": false}]}]}
    ]
}"#;

fn write_snapshot(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn test_snapshot_to_plan_and_tracker_reports() {
    let file = write_snapshot(SNAPSHOT);
    let catalog = Catalog::load(file.path()).unwrap();

    // The bar has no usable serving size and contributes nothing
    let bar = tools::get_meal(&catalog, 2).unwrap();
    assert_eq!(bar.nutrition.nutrients.calories, 0.0);
    assert_eq!(bar.foods[0].servings_label(), "n/a");

    let day = tools::plan_day_detail(&catalog.plan_day("Sarah", date("2025-10-08")));
    assert!((day.nutrition.nutrients.calories - 225.0).abs() < 1e-9);
    assert!((day.nutrition.nutrients.protein - 20.0).abs() < 1e-9);
    assert_eq!(day.meals[0].meal.foods[0].grams_label(), "34.0g");
    assert_eq!(day.meals[0].meal.foods[0].servings_label(), "1.00 × 34.0g");

    let week = tools::week_plan(&catalog, "Sarah", date("2025-10-08"));
    assert_eq!(week.days[2].date, "2025-10-08");
    assert_eq!(week.days[2].nutrition, day.nutrition);

    // Granola doubled to 68g: 250 + 100
    let tracked = tools::get_tracked_day(&catalog, "Sarah", date("2025-10-08")).unwrap();
    assert!((tracked.nutrition.nutrients.calories - 350.0).abs() < 1e-9);
    assert!((tracked.meals[0].base_nutrition.nutrients.calories - 225.0).abs() < 1e-9);

    let history = tools::calorie_history(&catalog, "Sarah", date("2025-10-10"), 7).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].calories, 350.0);
}

#[test]
fn test_text_totals_parse_back() {
    let file = write_snapshot(SNAPSHOT);
    let catalog = Catalog::load(file.path()).unwrap();
    let totals = catalog.plan_day("Sarah", date("2025-10-08")).totals();

    let line = totals.to_string();
    assert!(line.starts_with("Calories: 225.0 kcal | Protein: 20.0g"));
    assert_eq!(parse_totals(&line).unwrap(), totals.rounded());
}

#[test]
fn test_load_failures() {
    let missing = Catalog::load("/nonexistent/mealplan/snapshot.json");
    assert!(matches!(missing, Err(MealplanError::Io(_))));

    let file = write_snapshot("{ not json");
    assert!(matches!(Catalog::load(file.path()), Err(MealplanError::Json(_))));

    let file = write_snapshot(&SNAPSHOT.replace(r#""quantity": 170"#, r#""quantity": -5"#));
    let err = Catalog::load(file.path()).unwrap_err();
    assert!(matches!(err, MealplanError::InvalidQuantity { value, .. } if value == -5.0));
}
