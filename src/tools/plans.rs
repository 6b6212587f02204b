//! Plan views
//!
//! Day, week, template and weekly menu views over planned meals.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;

use super::meals::{meal_detail, MealDetail};
use crate::error::{MealplanError, MealplanResult};
use crate::models::{Nutrients, PlanDay, PlannedMeal, Template, WeeklyMenu};
use crate::nutrition::{NutrientTotals, Scope};
use crate::store::Catalog;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct PlannedMealDetail {
    pub meal_time: String,
    pub meal: MealDetail,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanDayDetail {
    pub person: String,
    pub date: String,
    pub day_of_week: String,
    pub meals: Vec<PlannedMealDetail>,
    pub nutrition: NutrientTotals,
}

/// One column of the week view
#[derive(Debug, Clone, Serialize)]
pub struct WeekDay {
    pub date: String,
    pub name: String,
    /// Short label, e.g. "Oct 06"
    pub display: String,
    pub meal_count: usize,
    pub nutrition: NutrientTotals,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeekPlan {
    pub person: String,
    pub week_start: String,
    pub prev_week: String,
    pub next_week: String,
    /// e.g. "Oct 06 - Oct 12, 2025"
    pub week_range: String,
    pub days: Vec<WeekDay>,
    pub nutrition: NutrientTotals,
}

#[derive(Debug, Clone, Serialize)]
pub struct TemplateDetail {
    pub id: i64,
    pub name: String,
    pub meals: Vec<PlannedMealDetail>,
    pub nutrition: NutrientTotals,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeeklyMenuDayDetail {
    /// 0 = Monday .. 6 = Sunday
    pub day_of_week: u32,
    pub day_name: String,
    pub template_id: i64,
    pub template_name: String,
    pub nutrition: NutrientTotals,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeeklyMenuDetail {
    pub id: i64,
    pub name: String,
    pub days: Vec<WeeklyMenuDayDetail>,
    pub nutrition: NutrientTotals,
}

// ============================================================================
// Helpers
// ============================================================================

fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Monday of the week containing `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

fn planned_meal_details(meals: &[PlannedMeal]) -> Vec<PlannedMealDetail> {
    meals
        .iter()
        .map(|p| PlannedMealDetail {
            meal_time: p.meal_time.as_str().to_string(),
            meal: meal_detail(&p.meal),
        })
        .collect()
}

// ============================================================================
// Views
// ============================================================================

pub fn plan_day_detail(day: &PlanDay) -> PlanDayDetail {
    PlanDayDetail {
        person: day.person.clone(),
        date: day.date.to_string(),
        day_of_week: day_name(day.date.weekday()).to_string(),
        meals: planned_meal_details(&day.meals),
        nutrition: day.totals(),
    }
}

/// The Monday-to-Sunday week of `person` containing `date`
pub fn week_plan(catalog: &Catalog, person: &str, date: NaiveDate) -> WeekPlan {
    let start = week_start(date);
    let mut week_total = Nutrients::zero();

    let days: Vec<WeekDay> = start
        .iter_days()
        .take(7)
        .map(|day_date| {
            let day = catalog.plan_day(person, day_date);
            let nutrients = day.nutrients();
            week_total += nutrients;
            WeekDay {
                date: day_date.to_string(),
                name: day_name(day_date.weekday()).to_string(),
                display: day_date.format("%b %d").to_string(),
                meal_count: day.meals.len(),
                nutrition: NutrientTotals::from_nutrients(nutrients),
            }
        })
        .collect();

    let week_range = match (days.first(), days.last()) {
        (Some(first), Some(last)) => format!("{} - {}, {}", first.display, last.display, start.year()),
        _ => String::new(),
    };

    WeekPlan {
        person: person.to_string(),
        week_start: start.to_string(),
        prev_week: (start - Duration::days(7)).to_string(),
        next_week: (start + Duration::days(7)).to_string(),
        week_range,
        days,
        nutrition: NutrientTotals::from_nutrients(week_total),
    }
}

pub fn template_detail(template: &Template) -> TemplateDetail {
    TemplateDetail {
        id: template.id,
        name: template.name.clone(),
        meals: planned_meal_details(&template.meals),
        nutrition: template.totals(),
    }
}

pub fn get_template(catalog: &Catalog, id: i64) -> MealplanResult<TemplateDetail> {
    catalog
        .template(id)
        .map(|t| template_detail(t))
        .ok_or(MealplanError::UnknownTemplate(id))
}

/// Weekly menu with one row per assigned weekday, Monday first
pub fn weekly_menu_detail(menu: &WeeklyMenu) -> WeeklyMenuDetail {
    let mut days: Vec<WeeklyMenuDayDetail> = menu
        .days
        .iter()
        .map(|d| WeeklyMenuDayDetail {
            day_of_week: d.day_of_week.num_days_from_monday(),
            day_name: day_name(d.day_of_week).to_string(),
            template_id: d.template.id,
            template_name: d.template.name.clone(),
            nutrition: d.template.totals(),
        })
        .collect();
    days.sort_by_key(|d| d.day_of_week);

    WeeklyMenuDetail {
        id: menu.id,
        name: menu.name.clone(),
        days,
        nutrition: menu.totals(),
    }
}
