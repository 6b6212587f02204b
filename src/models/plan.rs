//! Plan models
//!
//! Planned days, day templates and weekly menus. All of them are lists of
//! meals placed in a meal time slot.

use std::sync::Arc;

use chrono::{NaiveDate, Weekday};
use serde::Serialize;

use super::{Meal, MealTime, Nutrients};
use crate::nutrition::Scope;

/// A meal placed in a slot of a day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedMeal {
    pub meal_time: MealTime,
    pub meal: Arc<Meal>,
}

/// Meals planned for one person on one calendar date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanDay {
    pub person: String,
    pub date: NaiveDate,
    pub meals: Vec<PlannedMeal>,
}

impl PlanDay {
    /// An empty plan for a date nobody has planned yet
    pub fn empty(person: &str, date: NaiveDate) -> Self {
        Self {
            person: person.to_string(),
            date,
            meals: Vec::new(),
        }
    }
}

impl Scope for PlanDay {
    fn nutrients(&self) -> Nutrients {
        sum_planned(&self.meals)
    }
}

/// A reusable day of meals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Template {
    pub id: i64,
    pub name: String,
    pub meals: Vec<PlannedMeal>,
}

impl Scope for Template {
    fn nutrients(&self) -> Nutrients {
        sum_planned(&self.meals)
    }
}

/// A template assigned to a weekday
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyMenuDay {
    pub day_of_week: Weekday,
    pub template: Arc<Template>,
}

/// A week of day templates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyMenu {
    pub id: i64,
    pub name: String,
    pub days: Vec<WeeklyMenuDay>,
}

impl WeeklyMenu {
    /// Template assigned to `day`, if any
    pub fn template_for(&self, day: Weekday) -> Option<&Template> {
        self.days
            .iter()
            .find(|d| d.day_of_week == day)
            .map(|d| d.template.as_ref())
    }
}

impl Scope for WeeklyMenu {
    fn nutrients(&self) -> Nutrients {
        self.days.iter().map(|d| d.template.nutrients()).sum()
    }
}

fn sum_planned(meals: &[PlannedMeal]) -> Nutrients {
    meals.iter().map(|p| p.meal.nutrients()).sum()
}
