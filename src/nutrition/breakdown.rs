//! Per-item breakdown for display
//!
//! Carries both the grams eaten and the servings-equivalent so views never
//! derive the multiplier themselves.

use serde::Serialize;

use crate::models::{ItemOrigin, LineItem, Nutrients, TrackedLine};

/// One food row of a meal view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItemBreakdown {
    pub food_id: i64,
    pub name: String,
    pub total_grams: f64,
    /// Same multiplier the aggregator applies to this item
    pub num_servings: f64,
    pub serving_size: Option<f64>,
    pub serving_unit: String,
    pub nutrition: Nutrients,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<ItemOrigin>,
    pub is_custom: bool,
}

impl LineItemBreakdown {
    pub fn from_item(item: &LineItem) -> Self {
        let multiplier = item.multiplier();
        Self {
            food_id: item.food.id,
            name: item.food.name.clone(),
            total_grams: item.quantity.value(),
            num_servings: multiplier,
            serving_size: item.food.serving_size,
            serving_unit: item.food.serving_unit.clone(),
            nutrition: item.food.nutrition.scale(multiplier),
            origin: None,
            is_custom: false,
        }
    }

    pub fn from_tracked(line: &TrackedLine) -> Self {
        Self {
            origin: Some(line.origin),
            is_custom: line.origin.is_custom(),
            ..Self::from_item(&line.item)
        }
    }

    /// Grams eaten, e.g. "34.0g"
    pub fn grams_label(&self) -> String {
        format!("{:.1}g", self.total_grams)
    }

    /// Servings-equivalent against the food's serving, e.g. "1.00 × 34.0g"
    pub fn servings_label(&self) -> String {
        match self.serving_size.filter(|s| s.is_finite() && *s > 0.0) {
            Some(size) => format!("{:.2} × {:.1}g", self.num_servings, size),
            None => "n/a".to_string(),
        }
    }
}

/// Breakdown rows for a list of line items
pub fn breakdown(items: &[LineItem]) -> Vec<LineItemBreakdown> {
    items.iter().map(LineItemBreakdown::from_item).collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::models::{FoodItem, FoodSource};
    use crate::nutrition::aggregate;

    fn granola(serving_size: Option<f64>) -> Arc<FoodItem> {
        Arc::new(FoodItem {
            id: 9,
            name: "Granola".to_string(),
            brand: "Acme".to_string(),
            serving_size,
            serving_unit: "g".to_string(),
            nutrition: Nutrients { calories: 125.0, protein: 3.0, ..Nutrients::zero() },
            source: FoodSource::Manual,
        })
    }

    #[test]
    fn test_labels_use_grams_not_grams_times_grams() {
        let item = LineItem::from_grams(granola(Some(34.0)), 34.0).unwrap();
        let row = LineItemBreakdown::from_item(&item);

        assert_eq!(row.grams_label(), "34.0g");
        assert_eq!(row.servings_label(), "1.00 × 34.0g");
        assert_eq!(row.num_servings, 1.0);
        assert_eq!(row.nutrition.calories, 125.0);
    }

    #[test]
    fn test_rows_add_up_to_aggregate() {
        let items = vec![
            LineItem::from_grams(granola(Some(34.0)), 51.0).unwrap(),
            LineItem::from_grams(granola(Some(34.0)), 17.0).unwrap(),
        ];
        let rows = breakdown(&items);
        let row_sum: Nutrients = rows.iter().map(|r| r.nutrition).sum();
        assert_eq!(row_sum, aggregate(&items).nutrients);
    }

    #[test]
    fn test_unusable_serving_size_row() {
        let item = LineItem::from_grams(granola(None), 40.0).unwrap();
        let row = LineItemBreakdown::from_item(&item);
        assert_eq!(row.num_servings, 0.0);
        assert_eq!(row.servings_label(), "n/a");
        assert_eq!(row.grams_label(), "40.0g");
        assert_eq!(row.nutrition, Nutrients::zero());
    }

    #[test]
    fn test_tracked_rows_carry_origin() {
        let line = TrackedLine {
            item: LineItem::from_grams(granola(Some(34.0)), 20.0).unwrap(),
            origin: ItemOrigin::Addition,
        };
        let row = LineItemBreakdown::from_tracked(&line);
        assert!(row.is_custom);
        assert_eq!(row.origin, Some(ItemOrigin::Addition));
    }
}
