//! Tracker views
//!
//! What was actually eaten: tracked days with their changes resolved, and
//! the calorie history behind the chart.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::error::{MealplanError, MealplanResult};
use crate::models::{TrackedDay, TrackedMeal};
use crate::nutrition::{round_to_hundredth, LineItemBreakdown, NutrientTotals, Scope};
use crate::store::Catalog;

/// Longest calorie history a caller may ask for, in days
pub const MAX_HISTORY_DAYS: i64 = 30;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct TrackedMealDetail {
    pub meal_id: i64,
    pub meal_name: String,
    pub meal_time: String,
    pub is_modified: bool,
    /// Totals of the meal as planned
    pub base_nutrition: NutrientTotals,
    /// Totals of what was eaten
    pub nutrition: NutrientTotals,
    pub foods: Vec<LineItemBreakdown>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrackedDayDetail {
    pub person: String,
    pub date: String,
    pub is_modified: bool,
    pub meals: Vec<TrackedMealDetail>,
    pub nutrition: NutrientTotals,
}

/// One point of the calorie chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaloriePoint {
    pub date: String,
    pub calories: f64,
}

// ============================================================================
// Views
// ============================================================================

pub fn tracked_meal_detail(meal: &TrackedMeal) -> TrackedMealDetail {
    let lines = meal.effective_items();
    TrackedMealDetail {
        meal_id: meal.meal.id,
        meal_name: meal.meal.name.clone(),
        meal_time: meal.meal_time.as_str().to_string(),
        is_modified: meal.is_modified(),
        base_nutrition: NutrientTotals::from_nutrients(meal.base_nutrients()),
        nutrition: meal.totals(),
        foods: lines.iter().map(LineItemBreakdown::from_tracked).collect(),
    }
}

pub fn tracked_day_detail(day: &TrackedDay) -> TrackedDayDetail {
    TrackedDayDetail {
        person: day.person.clone(),
        date: day.date.to_string(),
        is_modified: day.is_modified,
        meals: day.meals.iter().map(tracked_meal_detail).collect(),
        nutrition: day.totals(),
    }
}

/// Tracked day of `person` on `date`, if one was logged
pub fn get_tracked_day(catalog: &Catalog, person: &str, date: NaiveDate) -> Option<TrackedDayDetail> {
    catalog.tracked_day(person, date).map(tracked_day_detail)
}

/// Daily calories over the `days` days ending at `end_date`, newest first
///
/// Only days that were tracked appear. `days` must be between 1 and 30.
pub fn calorie_history(
    catalog: &Catalog,
    person: &str,
    end_date: NaiveDate,
    days: i64,
) -> MealplanResult<Vec<CaloriePoint>> {
    if !(1..=MAX_HISTORY_DAYS).contains(&days) {
        return Err(MealplanError::InvalidRange(format!(
            "days must be between 1 and {}, got {}",
            MAX_HISTORY_DAYS, days
        )));
    }

    let start_date = end_date - Duration::days(days - 1);
    let points: Vec<CaloriePoint> = catalog
        .tracked_days_between(person, start_date, end_date)
        .into_iter()
        .rev()
        .map(|day| CaloriePoint {
            date: day.date.to_string(),
            calories: round_to_hundredth(day.nutrients().calories),
        })
        .collect();

    tracing::debug!(
        person,
        start = %start_date,
        end = %end_date,
        points = points.len(),
        "Calorie history"
    );

    Ok(points)
}
