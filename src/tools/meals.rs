//! Meal views

use serde::Serialize;

use crate::error::{MealplanError, MealplanResult};
use crate::models::Meal;
use crate::nutrition::{breakdown, LineItemBreakdown, NutrientTotals, Scope};
use crate::store::Catalog;

/// A meal with one row per food and its totals
#[derive(Debug, Clone, Serialize)]
pub struct MealDetail {
    pub id: i64,
    pub name: String,
    pub meal_type: String,
    pub meal_time: String,
    pub foods: Vec<LineItemBreakdown>,
    pub nutrition: NutrientTotals,
}

pub fn meal_detail(meal: &Meal) -> MealDetail {
    MealDetail {
        id: meal.id,
        name: meal.name.clone(),
        meal_type: meal.meal_type.as_str().to_string(),
        meal_time: meal.meal_time.as_str().to_string(),
        foods: breakdown(&meal.items),
        nutrition: meal.totals(),
    }
}

/// Look up a meal by id and build its detail
pub fn get_meal(catalog: &Catalog, id: i64) -> MealplanResult<MealDetail> {
    catalog
        .meal(id)
        .map(|meal| meal_detail(meal))
        .ok_or(MealplanError::UnknownMeal(id))
}
