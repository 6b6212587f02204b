//! Tracker models
//!
//! A tracked meal is a logged instance of a meal. It starts from the base
//! meal's line items and applies per-food changes: a base food can be given
//! a different quantity or removed, and foods outside the base meal can be
//! added. Changes are keyed by food id; the last change for a food wins.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use super::{FoodItem, Grams, LineItem, Meal, MealTime, Nutrients};
use crate::nutrition::{aggregate_nutrients, Scope};

/// A change to one food of a tracked meal
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "change", rename_all = "lowercase")]
pub enum TrackedFoodChange {
    /// Use this quantity for the food (replacing the base quantity, or adding it)
    Set { food: Arc<FoodItem>, quantity: Grams },
    /// Drop the food from the base meal
    Remove { food_id: i64 },
}

impl TrackedFoodChange {
    pub fn food_id(&self) -> i64 {
        match self {
            TrackedFoodChange::Set { food, .. } => food.id,
            TrackedFoodChange::Remove { food_id } => *food_id,
        }
    }
}

/// How an effective line item came to be in a tracked meal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemOrigin {
    /// Unchanged from the base meal
    Base,
    /// Base food with a tracked quantity
    Override,
    /// Food not in the base meal
    Addition,
}

impl ItemOrigin {
    pub fn is_custom(&self) -> bool {
        !matches!(self, ItemOrigin::Base)
    }
}

/// An effective line item of a tracked meal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackedLine {
    pub item: LineItem,
    pub origin: ItemOrigin,
}

/// A meal as actually eaten on a tracked day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackedMeal {
    pub meal_time: MealTime,
    pub meal: Arc<Meal>,
    pub changes: Vec<TrackedFoodChange>,
}

impl TrackedMeal {
    /// Track a meal exactly as planned
    pub fn from_meal(meal: Arc<Meal>, meal_time: MealTime) -> Self {
        Self {
            meal_time,
            meal,
            changes: Vec::new(),
        }
    }

    pub fn is_modified(&self) -> bool {
        !self.changes.is_empty()
    }

    /// Resolve the base meal and the changes into the items actually eaten
    ///
    /// Base items come first in base order, then additions in the order
    /// their last change was recorded.
    pub fn effective_items(&self) -> Vec<TrackedLine> {
        let latest: HashMap<i64, &TrackedFoodChange> =
            self.changes.iter().map(|c| (c.food_id(), c)).collect();

        let mut lines = Vec::with_capacity(self.meal.items.len() + self.changes.len());
        let mut overridden = HashSet::new();

        for item in &self.meal.items {
            match latest.get(&item.food_id()) {
                None => lines.push(TrackedLine {
                    item: item.clone(),
                    origin: ItemOrigin::Base,
                }),
                Some(TrackedFoodChange::Remove { .. }) => {}
                Some(TrackedFoodChange::Set { food, quantity }) => {
                    // A food listed twice in the base meal is replaced once
                    if overridden.insert(food.id) {
                        lines.push(TrackedLine {
                            item: LineItem::new(Arc::clone(food), *quantity),
                            origin: ItemOrigin::Override,
                        });
                    }
                }
            }
        }

        for change in &self.changes {
            let TrackedFoodChange::Set { food, quantity } = change else {
                continue;
            };
            let is_latest = latest
                .get(&food.id)
                .is_some_and(|c| std::ptr::eq(*c, change));
            if is_latest && !self.meal.contains_food(food.id) {
                lines.push(TrackedLine {
                    item: LineItem::new(Arc::clone(food), *quantity),
                    origin: ItemOrigin::Addition,
                });
            }
        }

        lines
    }

    /// Nutrients of the base meal, ignoring tracked changes
    pub fn base_nutrients(&self) -> Nutrients {
        self.meal.nutrients()
    }
}

impl Scope for TrackedMeal {
    fn nutrients(&self) -> Nutrients {
        let items: Vec<LineItem> = self.effective_items().into_iter().map(|l| l.item).collect();
        aggregate_nutrients(&items)
    }
}

/// Everything one person logged on one date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackedDay {
    pub person: String,
    pub date: NaiveDate,
    /// Whether the day was changed after being copied from the plan
    pub is_modified: bool,
    pub meals: Vec<TrackedMeal>,
}

impl Scope for TrackedDay {
    fn nutrients(&self) -> Nutrients {
        self.meals.iter().map(|m| m.nutrients()).sum()
    }
}
