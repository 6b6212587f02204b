//! Nutrition calculation module
//!
//! Aggregates line items into nutrient totals and formats them for display.

pub mod aggregator;
pub mod breakdown;
pub mod display;
pub mod totals;

pub use aggregator::{aggregate, aggregate_nutrients, serving_multiplier, Scope};
pub use breakdown::{breakdown, LineItemBreakdown};
pub use display::parse_totals;
pub use totals::{
    round_to_hundredth, round_to_tenth, NutrientTotals, CARBS_KCAL_PER_GRAM, FAT_KCAL_PER_GRAM,
    PROTEIN_KCAL_PER_GRAM,
};
