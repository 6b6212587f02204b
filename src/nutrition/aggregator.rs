//! Nutrition aggregation
//!
//! Turns line items (food + grams) into nutrient totals. This is the only
//! place a serving multiplier is derived; everything that needs one calls
//! [`serving_multiplier`].
//!
//! Callers must hand in line items whose quantity is a positive number of
//! grams (enforced by [`Grams`](crate::models::Grams)). Bad reference data on
//! the food side never fails an aggregation: an unusable serving size makes
//! that item contribute nothing.

use crate::models::{LineItem, Nutrients};

use super::NutrientTotals;

/// Anything nutrient totals can be computed for: a meal, a tracked meal, a day
pub trait Scope {
    /// Accumulated nutrient amounts, before any derived fields
    fn nutrients(&self) -> Nutrients;

    /// Accumulated amounts plus macro percentages and net carbs
    fn totals(&self) -> NutrientTotals {
        NutrientTotals::from_nutrients(self.nutrients())
    }
}

/// Servings-equivalent of `quantity` grams of a food whose nutrients are
/// given per `serving_size` grams
///
/// Returns 0 when the serving size is missing, not finite, or not positive.
pub fn serving_multiplier(quantity: f64, serving_size: Option<f64>) -> f64 {
    match serving_size {
        Some(size) if size.is_finite() && size > 0.0 => quantity / size,
        _ => 0.0,
    }
}

/// Sum the nutrients of `items`
pub fn aggregate_nutrients(items: &[LineItem]) -> Nutrients {
    let mut total = Nutrients::zero();

    for item in items {
        if item.food.usable_serving_size().is_none() {
            tracing::warn!(
                food_id = item.food.id,
                food = %item.food.name,
                serving_size = ?item.food.serving_size,
                "Unusable serving size, item contributes nothing"
            );
            continue;
        }
        total += item.nutrients();
    }

    tracing::debug!(items = items.len(), calories = total.calories, "Aggregated line items");
    total
}

/// Nutrient totals with derived fields for a list of line items
pub fn aggregate(items: &[LineItem]) -> NutrientTotals {
    NutrientTotals::from_nutrients(aggregate_nutrients(items))
}
