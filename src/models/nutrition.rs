//! Shared nutrient record
//!
//! Used for food items (per serving), line items, meals and days.

use serde::{Deserialize, Serialize};

use super::lenient;

/// Nutrient amounts
///
/// On a food item these are per `serving_size` grams; everywhere else they
/// are accumulated amounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrients {
    #[serde(default, deserialize_with = "lenient::amount")]
    pub calories: f64,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub protein: f64,  // grams
    #[serde(default, deserialize_with = "lenient::amount")]
    pub carbs: f64,    // grams
    #[serde(default, deserialize_with = "lenient::amount")]
    pub fat: f64,      // grams
    #[serde(default, deserialize_with = "lenient::amount")]
    pub fiber: f64,    // grams
    #[serde(default, deserialize_with = "lenient::amount")]
    pub sugar: f64,    // grams
    #[serde(default, deserialize_with = "lenient::amount")]
    pub sodium: f64,   // milligrams
    #[serde(default, deserialize_with = "lenient::amount")]
    pub calcium: f64,  // milligrams
}

impl Nutrients {
    pub fn zero() -> Self {
        Self::default()
    }

    /// Scale every amount by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            calories: self.calories * multiplier,
            protein: self.protein * multiplier,
            carbs: self.carbs * multiplier,
            fat: self.fat * multiplier,
            fiber: self.fiber * multiplier,
            sugar: self.sugar * multiplier,
            sodium: self.sodium * multiplier,
            calcium: self.calcium * multiplier,
        }
    }

    /// Field-wise sum
    pub fn add(&self, other: &Nutrients) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
            fiber: self.fiber + other.fiber,
            sugar: self.sugar + other.sugar,
            sodium: self.sodium + other.sodium,
            calcium: self.calcium + other.calcium,
        }
    }

    /// Apply `f` to every amount
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            calories: f(self.calories),
            protein: f(self.protein),
            carbs: f(self.carbs),
            fat: f(self.fat),
            fiber: f(self.fiber),
            sugar: f(self.sugar),
            sodium: f(self.sodium),
            calcium: f(self.calcium),
        }
    }
}

impl std::ops::Add for Nutrients {
    type Output = Nutrients;

    fn add(self, other: Nutrients) -> Nutrients {
        Nutrients::add(&self, &other)
    }
}

impl std::ops::AddAssign for Nutrients {
    fn add_assign(&mut self, other: Nutrients) {
        *self = Nutrients::add(self, &other);
    }
}

impl std::ops::Mul<f64> for Nutrients {
    type Output = Nutrients;

    fn mul(self, multiplier: f64) -> Nutrients {
        self.scale(multiplier)
    }
}

impl std::iter::Sum for Nutrients {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Nutrients::zero(), |acc, n| acc + n)
    }
}
