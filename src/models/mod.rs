//! Data models
//!
//! In-memory records handed to the aggregator. They are plain values: a
//! storage layer loads them, nothing in here fetches anything.

mod food_item;
pub(crate) mod lenient;
mod line_item;
mod meal;
mod nutrition;
mod plan;
mod tracked;

pub use food_item::{FoodItem, FoodSource};
pub use line_item::{Grams, LineItem};
pub use meal::{Meal, MealTime, MealType};
pub use nutrition::Nutrients;
pub use plan::{PlanDay, PlannedMeal, Template, WeeklyMenu, WeeklyMenuDay};
pub use tracked::{ItemOrigin, TrackedDay, TrackedFoodChange, TrackedLine, TrackedMeal};
