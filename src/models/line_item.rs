//! Line item model
//!
//! One food at a quantity inside a meal or tracked meal. The quantity is
//! always grams of the food actually used, never a serving count.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use super::{FoodItem, Nutrients};
use crate::error::{MealplanError, MealplanResult};

/// A strictly positive, finite weight in grams
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Grams(f64);

impl Grams {
    /// Validate a raw quantity. `context` names the record in the error.
    pub fn new(value: f64, context: impl Into<String>) -> MealplanResult<Self> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(MealplanError::InvalidQuantity {
                value,
                context: context.into(),
            })
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Grams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}g", self.0)
    }
}

/// A food with the grams of it used
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    pub food: Arc<FoodItem>,
    pub quantity: Grams,
}

impl LineItem {
    pub fn new(food: Arc<FoodItem>, quantity: Grams) -> Self {
        Self { food, quantity }
    }

    /// Build from a raw gram value, rejecting non-positive or non-finite quantities
    pub fn from_grams(food: Arc<FoodItem>, grams: f64) -> MealplanResult<Self> {
        let context = format!("food_id {} ({})", food.id, food.name);
        Ok(Self::new(food, Grams::new(grams, context)?))
    }

    pub fn food_id(&self) -> i64 {
        self.food.id
    }

    /// Servings-equivalent of this item: grams / serving_size, or 0 if the
    /// food's serving size is unusable
    pub fn multiplier(&self) -> f64 {
        self.food.multiplier_for(self.quantity.value())
    }

    pub fn nutrients(&self) -> Nutrients {
        self.food.nutrients_for(self.quantity.value())
    }
}
