//! Snapshot document
//!
//! The "export all" JSON layout: flat records that reference each other by
//! id. [`Catalog`](super::Catalog) resolves them into model values.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::MealplanResult;
use crate::models::{lenient, FoodItem, MealTime, MealType};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub foods: Vec<FoodItem>,
    #[serde(default)]
    pub meals: Vec<MealRecord>,
    #[serde(default)]
    pub plans: Vec<PlanRecord>,
    #[serde(default)]
    pub templates: Vec<TemplateRecord>,
    #[serde(default)]
    pub weekly_menus: Vec<WeeklyMenuRecord>,
    #[serde(default)]
    pub tracked_days: Vec<TrackedDayRecord>,
}

impl Snapshot {
    /// Read and parse a snapshot file
    pub fn load<P: AsRef<Path>>(path: P) -> MealplanResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealFoodRecord {
    pub food_id: i64,
    /// Grams; `None` if the stored value was not a number
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub quantity: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub meal_type: MealType,
    #[serde(default)]
    pub meal_time: MealTime,
    #[serde(default)]
    pub meal_foods: Vec<MealFoodRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRecord {
    #[serde(default)]
    pub id: i64,
    pub person: String,
    pub date: NaiveDate,
    pub meal_id: i64,
    #[serde(default)]
    pub meal_time: MealTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateMealRecord {
    pub meal_id: i64,
    #[serde(default)]
    pub meal_time: MealTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub template_meals: Vec<TemplateMealRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyMenuDayRecord {
    /// 0 = Monday .. 6 = Sunday
    pub day_of_week: i64,
    pub template_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyMenuRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub weekly_menu_days: Vec<WeeklyMenuDayRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedFoodRecord {
    pub food_id: i64,
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub quantity: Option<f64>,
    /// Exported alongside each tracked food but not read when resolving:
    /// whether a change overrides or adds follows from the base meal
    #[serde(default)]
    pub is_override: bool,
    /// Removes the food from the base meal; quantity is ignored
    #[serde(default)]
    pub is_deleted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedMealRecord {
    pub meal_id: i64,
    #[serde(default)]
    pub meal_time: MealTime,
    #[serde(default)]
    pub tracked_foods: Vec<TrackedFoodRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedDayRecord {
    #[serde(default)]
    pub id: i64,
    pub person: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub is_modified: bool,
    #[serde(default)]
    pub tracked_meals: Vec<TrackedMealRecord>,
}
