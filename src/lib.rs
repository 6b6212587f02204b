//! Meal Planner Library
//!
//! Nutrition aggregation for meals, planned days, templates, weekly menus
//! and tracked days, over a snapshot of the meal planner's data.

pub mod build_info;
pub mod config;
pub mod error;
pub mod models;
pub mod nutrition;
pub mod store;
pub mod tools;

pub use error::{MealplanError, MealplanResult};
