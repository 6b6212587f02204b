//! Report tools
//!
//! Read-only views over a [`Catalog`](crate::store::Catalog). Every view is
//! a plain serializable struct so the binaries can print it as JSON or text.

pub mod meals;
pub mod plans;
pub mod tracker;

pub use meals::{get_meal, meal_detail, MealDetail};
pub use plans::{
    get_template, plan_day_detail, template_detail, week_plan, week_start, weekly_menu_detail,
    PlanDayDetail, PlannedMealDetail, TemplateDetail, WeekDay, WeekPlan, WeeklyMenuDayDetail,
    WeeklyMenuDetail,
};
pub use tracker::{
    calorie_history, get_tracked_day, tracked_day_detail, tracked_meal_detail, CaloriePoint,
    TrackedDayDetail, TrackedMealDetail, MAX_HISTORY_DAYS,
};
