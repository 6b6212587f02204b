//! Snapshot loading
//!
//! A [`Snapshot`] is the raw "export all" document; a [`Catalog`] is the
//! same data with every reference resolved.

pub mod catalog;
pub mod snapshot;

pub use catalog::Catalog;
pub use snapshot::{
    MealFoodRecord, MealRecord, PlanRecord, Snapshot, TemplateMealRecord, TemplateRecord,
    TrackedDayRecord, TrackedFoodRecord, TrackedMealRecord, WeeklyMenuDayRecord,
    WeeklyMenuRecord,
};
