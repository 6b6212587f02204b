//! Text rendering of nutrient totals
//!
//! One line, one decimal per value:
//!
//! `Calories: 300.0 kcal | Protein: 15.0g (20.0%) | Carbs: 30.0g (40.0%) | Fat: 7.5g (22.5%) | Net carbs: 28.0g | Fiber: 2.0g | Sugar: 0.0g | Sodium: 0.0mg | Calcium: 0.0mg`
//!
//! [`parse_totals`] reads that line back. Values are rounded before they
//! are printed, so parsing returns exactly [`NutrientTotals::rounded`].

use std::fmt;

use crate::error::{MealplanError, MealplanResult};
use crate::models::Nutrients;

use super::NutrientTotals;

const SEPARATOR: &str = " | ";

impl fmt::Display for NutrientTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.rounded();
        let n = &r.nutrients;
        write!(
            f,
            "Calories: {:.1} kcal | Protein: {:.1}g ({:.1}%) | Carbs: {:.1}g ({:.1}%) | Fat: {:.1}g ({:.1}%) | Net carbs: {:.1}g | Fiber: {:.1}g | Sugar: {:.1}g | Sodium: {:.1}mg | Calcium: {:.1}mg",
            n.calories,
            n.protein,
            r.protein_pct,
            n.carbs,
            r.carbs_pct,
            n.fat,
            r.fat_pct,
            r.net_carbs,
            n.fiber,
            n.sugar,
            n.sodium,
            n.calcium,
        )
    }
}

/// Parse a line produced by `NutrientTotals`'s `Display` impl
pub fn parse_totals(line: &str) -> MealplanResult<NutrientTotals> {
    let mut nutrients = Nutrients::zero();
    let mut totals = NutrientTotals::zero();

    for segment in line.trim().split(SEPARATOR) {
        let (label, rest) = segment
            .split_once(':')
            .ok_or_else(|| MealplanError::Parse(format!("missing ':' in '{}'", segment)))?;
        let (amount, rest) = leading_number(rest.trim_start())
            .ok_or_else(|| MealplanError::Parse(format!("no amount in '{}'", segment)))?;

        match label.trim() {
            "Calories" => nutrients.calories = amount,
            "Protein" => {
                nutrients.protein = amount;
                totals.protein_pct = percent(rest, segment)?;
            }
            "Carbs" => {
                nutrients.carbs = amount;
                totals.carbs_pct = percent(rest, segment)?;
            }
            "Fat" => {
                nutrients.fat = amount;
                totals.fat_pct = percent(rest, segment)?;
            }
            "Net carbs" => totals.net_carbs = amount,
            "Fiber" => nutrients.fiber = amount,
            "Sugar" => nutrients.sugar = amount,
            "Sodium" => nutrients.sodium = amount,
            "Calcium" => nutrients.calcium = amount,
            other => return Err(MealplanError::Parse(format!("unknown field '{}'", other))),
        }
    }

    totals.nutrients = nutrients;
    Ok(totals)
}

/// Split a leading decimal number off `s`
fn leading_number(s: &str) -> Option<(f64, &str)> {
    let end = s
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (c == '-' && i == 0)))
        .map_or(s.len(), |(i, _)| i);
    let value = s[..end].parse().ok()?;
    Some((value, &s[end..]))
}

/// Read the "(20.0%)" part following an amount
fn percent(rest: &str, segment: &str) -> MealplanResult<f64> {
    let inner = rest
        .split_once('(')
        .and_then(|(_, s)| s.trim_end().strip_suffix("%)"))
        .ok_or_else(|| MealplanError::Parse(format!("no percentage in '{}'", segment)))?;
    inner
        .trim()
        .parse()
        .map_err(|_| MealplanError::Parse(format!("bad percentage in '{}'", segment)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NutrientTotals {
        NutrientTotals::from_nutrients(Nutrients {
            calories: 300.0,
            protein: 15.0,
            carbs: 30.0,
            fat: 7.5,
            fiber: 2.0,
            sugar: 0.0,
            sodium: 0.0,
            calcium: 0.0,
        })
    }

    #[test]
    fn test_display_format() {
        assert_eq!(
            sample().to_string(),
            "Calories: 300.0 kcal | Protein: 15.0g (20.0%) | Carbs: 30.0g (40.0%) | Fat: 7.5g (22.5%) | Net carbs: 28.0g | Fiber: 2.0g | Sugar: 0.0g | Sodium: 0.0mg | Calcium: 0.0mg"
        );
    }

    #[test]
    fn test_parse_recovers_rounded_values() {
        let awkward = NutrientTotals::from_nutrients(Nutrients {
            calories: 487.333333,
            protein: 21.05,
            carbs: 3.14159,
            fat: 40.96,
            fiber: 7.25,
            sugar: 0.049,
            sodium: 1234.56,
            calcium: 99.95,
        });

        for totals in [sample(), awkward, NutrientTotals::zero()] {
            let parsed = parse_totals(&totals.to_string()).unwrap();
            assert_eq!(parsed, totals.rounded());
        }
    }

    #[test]
    fn test_negative_net_carbs() {
        let totals = NutrientTotals::from_nutrients(Nutrients { calories: 50.0, carbs: 1.0, fiber: 3.0, ..Nutrients::zero() });
        assert!(totals.to_string().contains("Net carbs: -2.0g"));
        assert_eq!(parse_totals(&totals.to_string()).unwrap().net_carbs, -2.0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_totals("Calories 300").is_err());
        assert!(parse_totals("Calories: lots").is_err());
        assert!(parse_totals("Protein: 15.0g").is_err());
        assert!(parse_totals("Vitamin C: 1.0mg").is_err());
    }
}
