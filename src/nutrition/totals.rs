//! Nutrient totals
//!
//! Accumulated nutrients plus the fields derived from them. Templates and
//! JSON consumers key off these field names directly.

use serde::{Deserialize, Serialize};

use crate::models::Nutrients;

/// Energy per gram of protein (kcal)
pub const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;
/// Energy per gram of carbohydrate (kcal)
pub const CARBS_KCAL_PER_GRAM: f64 = 4.0;
/// Energy per gram of fat (kcal)
pub const FAT_KCAL_PER_GRAM: f64 = 9.0;

/// Aggregated nutrients of a scope with derived macro split
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientTotals {
    #[serde(flatten)]
    pub nutrients: Nutrients,
    /// Share of calories from protein, percent, one decimal
    pub protein_pct: f64,
    /// Share of calories from carbs, percent, one decimal
    pub carbs_pct: f64,
    /// Share of calories from fat, percent, one decimal
    pub fat_pct: f64,
    /// Carbs minus fiber, grams
    pub net_carbs: f64,
}

impl NutrientTotals {
    pub fn zero() -> Self {
        Self::default()
    }

    /// Derive percentages and net carbs from accumulated nutrients
    ///
    /// With no calories every derived field is 0, net carbs included.
    pub fn from_nutrients(nutrients: Nutrients) -> Self {
        let calories = nutrients.calories;
        if calories.is_nan() || calories <= 0.0 {
            return Self {
                nutrients,
                ..Self::default()
            };
        }

        Self {
            nutrients,
            protein_pct: macro_percent(nutrients.protein, PROTEIN_KCAL_PER_GRAM, calories),
            carbs_pct: macro_percent(nutrients.carbs, CARBS_KCAL_PER_GRAM, calories),
            fat_pct: macro_percent(nutrients.fat, FAT_KCAL_PER_GRAM, calories),
            net_carbs: nutrients.carbs - nutrients.fiber,
        }
    }

    /// Every field rounded to one decimal, the precision used for display
    pub fn rounded(&self) -> Self {
        Self {
            nutrients: self.nutrients.map(round_to_tenth),
            protein_pct: round_to_tenth(self.protein_pct),
            carbs_pct: round_to_tenth(self.carbs_pct),
            fat_pct: round_to_tenth(self.fat_pct),
            net_carbs: round_to_tenth(self.net_carbs),
        }
    }
}

impl From<Nutrients> for NutrientTotals {
    fn from(nutrients: Nutrients) -> Self {
        Self::from_nutrients(nutrients)
    }
}

fn macro_percent(grams: f64, kcal_per_gram: f64, calories: f64) -> f64 {
    round_to_tenth(grams * kcal_per_gram / calories * 100.0)
}

/// Round to one decimal place
///
/// Rounds the exact binary value rather than `value * 10`, so a product
/// that happens to land on .5 cannot flip the result.
pub fn round_to_tenth(value: f64) -> f64 {
    round_to_places(value, 1)
}

/// Round to two decimal places, from the exact binary value
pub fn round_to_hundredth(value: f64) -> f64 {
    round_to_places(value, 2)
}

fn round_to_places(value: f64, places: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", places, value).parse().unwrap_or(value)
}
