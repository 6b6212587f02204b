//! Food Item model
//!
//! Reference nutrition record. Every nutrient is defined per
//! `serving_size` grams of the food.

use serde::{Deserialize, Serialize};

use super::{lenient, Nutrients};
use crate::nutrition::serving_multiplier;

/// Where a food record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum FoodSource {
    #[default]
    Manual,
    Csv,
    OpenFoodFacts,
}

impl FoodSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            FoodSource::Manual => "manual",
            FoodSource::Csv => "csv",
            FoodSource::OpenFoodFacts => "openfoodfacts",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "csv" => FoodSource::Csv,
            "openfoodfacts" => FoodSource::OpenFoodFacts,
            _ => FoodSource::Manual,
        }
    }
}

impl From<String> for FoodSource {
    fn from(s: String) -> Self {
        FoodSource::from_str(&s)
    }
}

impl From<FoodSource> for String {
    fn from(source: FoodSource) -> Self {
        source.as_str().to_string()
    }
}

/// A food item with per-serving nutrition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub brand: String,
    /// Grams per serving. `None` when the stored value was missing or not a number.
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub serving_size: Option<f64>,
    /// Display only
    #[serde(default)]
    pub serving_unit: String,
    #[serde(flatten)]
    pub nutrition: Nutrients,
    #[serde(default)]
    pub source: FoodSource,
}

impl FoodItem {
    /// Serving size in grams if it can be used as a divisor
    pub fn usable_serving_size(&self) -> Option<f64> {
        self.serving_size.filter(|s| s.is_finite() && *s > 0.0)
    }

    /// Servings-equivalent of `grams` of this food
    pub fn multiplier_for(&self, grams: f64) -> f64 {
        serving_multiplier(grams, self.serving_size)
    }

    /// Nutrients contained in `grams` of this food
    pub fn nutrients_for(&self, grams: f64) -> Nutrients {
        self.nutrition.scale(self.multiplier_for(grams))
    }
}
