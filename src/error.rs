//! Error types
//!
//! Errors raised at the boundaries around the aggregator: line item
//! validation, snapshot loading and report parameters. Aggregation
//! itself never fails.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MealplanError {
    #[error("Invalid quantity {value} for {context}: quantity must be a positive number of grams")]
    InvalidQuantity { value: f64, context: String },

    #[error("Food not found: food_id {0}")]
    UnknownFood(i64),

    #[error("Meal not found: meal_id {0}")]
    UnknownMeal(i64),

    #[error("Template not found: template_id {0}")]
    UnknownTemplate(i64),

    #[error("Invalid day of week {0}: expected 0 (Monday) to 6 (Sunday)")]
    InvalidWeekday(i64),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for fallible mealplan operations
pub type MealplanResult<T> = Result<T, MealplanError>;
