//! Meal model
//!
//! A reusable meal template: a named list of line items.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{LineItem, Nutrients};
use crate::nutrition::{aggregate_nutrients, Scope};

/// Slot of the day a meal is eaten in
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MealTime {
    #[default]
    Breakfast,
    Lunch,
    Dinner,
    Snack1,
    Snack2,
    Beverage1,
    Beverage2,
    /// Any label outside the standard slots, kept verbatim
    Other(String),
}

impl MealTime {
    pub fn as_str(&self) -> &str {
        match self {
            MealTime::Breakfast => "Breakfast",
            MealTime::Lunch => "Lunch",
            MealTime::Dinner => "Dinner",
            MealTime::Snack1 => "Snack 1",
            MealTime::Snack2 => "Snack 2",
            MealTime::Beverage1 => "Beverage 1",
            MealTime::Beverage2 => "Beverage 2",
            MealTime::Other(label) => label,
        }
    }

    pub fn from_str(s: &str) -> Self {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "breakfast" => MealTime::Breakfast,
            "lunch" => MealTime::Lunch,
            "dinner" => MealTime::Dinner,
            "snack 1" | "snack1" => MealTime::Snack1,
            "snack 2" | "snack2" => MealTime::Snack2,
            "beverage 1" | "beverage1" => MealTime::Beverage1,
            "beverage 2" | "beverage2" => MealTime::Beverage2,
            _ => MealTime::Other(trimmed.to_string()),
        }
    }
}

impl fmt::Display for MealTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for MealTime {
    fn from(s: String) -> Self {
        MealTime::from_str(&s)
    }
}

impl From<MealTime> for String {
    fn from(time: MealTime) -> Self {
        time.as_str().to_string()
    }
}

/// Kind of meal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    #[default]
    Custom,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
            MealType::Custom => "custom",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => MealType::Breakfast,
            "lunch" => MealType::Lunch,
            "dinner" => MealType::Dinner,
            "snack" => MealType::Snack,
            _ => MealType::Custom,
        }
    }
}

impl From<String> for MealType {
    fn from(s: String) -> Self {
        MealType::from_str(&s)
    }
}

impl From<MealType> for String {
    fn from(kind: MealType) -> Self {
        kind.as_str().to_string()
    }
}

/// A named, reusable collection of line items
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Meal {
    pub id: i64,
    pub name: String,
    pub meal_type: MealType,
    pub meal_time: MealTime,
    pub items: Vec<LineItem>,
}

impl Meal {
    /// Whether any line item refers to `food_id`
    pub fn contains_food(&self, food_id: i64) -> bool {
        self.items.iter().any(|item| item.food_id() == food_id)
    }
}

impl Scope for Meal {
    fn nutrients(&self) -> Nutrients {
        aggregate_nutrients(&self.items)
    }
}
