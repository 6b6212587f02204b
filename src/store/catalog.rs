//! Resolved snapshot
//!
//! Checks every id reference and every quantity once, up front, and turns
//! the flat records into shared model values. After that, every scope a
//! report asks for is ready to aggregate with nothing left to look up.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::Arc;

use chrono::{NaiveDate, Weekday};

use super::snapshot::{MealRecord, Snapshot, TrackedDayRecord, TrackedFoodRecord};
use crate::error::{MealplanError, MealplanResult};
use crate::models::{
    FoodItem, Grams, LineItem, Meal, PlanDay, PlannedMeal, Template, TrackedDay,
    TrackedFoodChange, TrackedMeal, WeeklyMenu, WeeklyMenuDay,
};

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

type DayKey = (String, NaiveDate);

/// All foods, meals, plans and tracked days of a snapshot, cross-linked
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    foods: HashMap<i64, Arc<FoodItem>>,
    meals: HashMap<i64, Arc<Meal>>,
    plan_days: BTreeMap<DayKey, PlanDay>,
    templates: HashMap<i64, Arc<Template>>,
    weekly_menus: Vec<WeeklyMenu>,
    tracked_days: BTreeMap<DayKey, TrackedDay>,
}

impl Catalog {
    /// Load a snapshot file and resolve it
    pub fn load<P: AsRef<Path>>(path: P) -> MealplanResult<Self> {
        Self::from_snapshot(Snapshot::load(path)?)
    }

    /// Resolve a snapshot, failing on the first dangling reference or bad quantity
    pub fn from_snapshot(snapshot: Snapshot) -> MealplanResult<Self> {
        let mut catalog = Catalog::default();

        for food in snapshot.foods {
            let id = food.id;
            if catalog.foods.insert(id, Arc::new(food)).is_some() {
                tracing::warn!(food_id = id, "Duplicate food id in snapshot, keeping the last one");
            }
        }

        for record in &snapshot.meals {
            let meal = catalog.resolve_meal(record)?;
            if catalog.meals.insert(meal.id, Arc::new(meal)).is_some() {
                tracing::warn!(meal_id = record.id, "Duplicate meal id in snapshot, keeping the last one");
            }
        }

        for plan in &snapshot.plans {
            let meal = catalog.meal_ref(plan.meal_id)?;
            catalog
                .plan_days
                .entry((plan.person.clone(), plan.date))
                .or_insert_with(|| PlanDay::empty(&plan.person, plan.date))
                .meals
                .push(PlannedMeal {
                    meal_time: plan.meal_time.clone(),
                    meal,
                });
        }

        for record in &snapshot.templates {
            let meals = record
                .template_meals
                .iter()
                .map(|tm| {
                    Ok(PlannedMeal {
                        meal_time: tm.meal_time.clone(),
                        meal: catalog.meal_ref(tm.meal_id)?,
                    })
                })
                .collect::<MealplanResult<Vec<_>>>()?;
            let template = Template {
                id: record.id,
                name: record.name.clone(),
                meals,
            };
            catalog.templates.insert(template.id, Arc::new(template));
        }

        for record in &snapshot.weekly_menus {
            let mut days = Vec::with_capacity(record.weekly_menu_days.len());
            for day in &record.weekly_menu_days {
                let day_of_week = usize::try_from(day.day_of_week)
                    .ok()
                    .and_then(|i| WEEKDAYS.get(i).copied())
                    .ok_or(MealplanError::InvalidWeekday(day.day_of_week))?;
                let template = catalog
                    .templates
                    .get(&day.template_id)
                    .cloned()
                    .ok_or(MealplanError::UnknownTemplate(day.template_id))?;
                days.push(WeeklyMenuDay { day_of_week, template });
            }
            days.sort_by_key(|d| d.day_of_week.num_days_from_monday());
            catalog.weekly_menus.push(WeeklyMenu {
                id: record.id,
                name: record.name.clone(),
                days,
            });
        }

        for record in &snapshot.tracked_days {
            let day = catalog.resolve_tracked_day(record)?;
            let key = (day.person.clone(), day.date);
            if catalog.tracked_days.insert(key, day).is_some() {
                tracing::warn!(
                    person = %record.person,
                    date = %record.date,
                    "Duplicate tracked day in snapshot, keeping the last one"
                );
            }
        }

        tracing::info!(
            foods = catalog.foods.len(),
            meals = catalog.meals.len(),
            plan_days = catalog.plan_days.len(),
            templates = catalog.templates.len(),
            weekly_menus = catalog.weekly_menus.len(),
            tracked_days = catalog.tracked_days.len(),
            "Snapshot resolved"
        );

        Ok(catalog)
    }

    fn food_ref(&self, food_id: i64) -> MealplanResult<Arc<FoodItem>> {
        self.foods
            .get(&food_id)
            .cloned()
            .ok_or(MealplanError::UnknownFood(food_id))
    }

    fn meal_ref(&self, meal_id: i64) -> MealplanResult<Arc<Meal>> {
        self.meals
            .get(&meal_id)
            .cloned()
            .ok_or(MealplanError::UnknownMeal(meal_id))
    }

    fn resolve_meal(&self, record: &MealRecord) -> MealplanResult<Meal> {
        let items = record
            .meal_foods
            .iter()
            .map(|mf| {
                let food = self.food_ref(mf.food_id)?;
                let context = format!("meal {} food_id {}", record.id, mf.food_id);
                let quantity = Grams::new(mf.quantity.unwrap_or(f64::NAN), context)?;
                Ok(LineItem::new(food, quantity))
            })
            .collect::<MealplanResult<Vec<_>>>()?;

        Ok(Meal {
            id: record.id,
            name: record.name.clone(),
            meal_type: record.meal_type,
            meal_time: record.meal_time.clone(),
            items,
        })
    }

    fn resolve_change(
        &self,
        day: &TrackedDayRecord,
        record: &TrackedFoodRecord,
    ) -> MealplanResult<TrackedFoodChange> {
        let food = self.food_ref(record.food_id)?;
        if record.is_deleted {
            return Ok(TrackedFoodChange::Remove { food_id: food.id });
        }
        let context = format!(
            "tracked food_id {} on {} for {}",
            record.food_id, day.date, day.person
        );
        let quantity = Grams::new(record.quantity.unwrap_or(f64::NAN), context)?;
        Ok(TrackedFoodChange::Set { food, quantity })
    }

    fn resolve_tracked_day(&self, record: &TrackedDayRecord) -> MealplanResult<TrackedDay> {
        let mut meals = Vec::with_capacity(record.tracked_meals.len());
        for tm in &record.tracked_meals {
            let meal = self.meal_ref(tm.meal_id)?;
            let changes = tm
                .tracked_foods
                .iter()
                .map(|tf| self.resolve_change(record, tf))
                .collect::<MealplanResult<Vec<_>>>()?;
            meals.push(TrackedMeal {
                meal_time: tm.meal_time.clone(),
                meal,
                changes,
            });
        }

        Ok(TrackedDay {
            person: record.person.clone(),
            date: record.date,
            is_modified: record.is_modified,
            meals,
        })
    }

    pub fn food(&self, id: i64) -> Option<&Arc<FoodItem>> {
        self.foods.get(&id)
    }

    pub fn meal(&self, id: i64) -> Option<&Arc<Meal>> {
        self.meals.get(&id)
    }

    pub fn template(&self, id: i64) -> Option<&Arc<Template>> {
        self.templates.get(&id)
    }

    pub fn weekly_menu(&self, id: i64) -> Option<&WeeklyMenu> {
        self.weekly_menus.iter().find(|m| m.id == id)
    }

    pub fn weekly_menus(&self) -> &[WeeklyMenu] {
        &self.weekly_menus
    }

    /// Planned meals for a person on a date; empty if nothing is planned
    pub fn plan_day(&self, person: &str, date: NaiveDate) -> PlanDay {
        self.plan_days
            .get(&(person.to_string(), date))
            .cloned()
            .unwrap_or_else(|| PlanDay::empty(person, date))
    }

    pub fn tracked_day(&self, person: &str, date: NaiveDate) -> Option<&TrackedDay> {
        self.tracked_days.get(&(person.to_string(), date))
    }

    /// Tracked days of a person with `start <= date <= end`, oldest first
    pub fn tracked_days_between(
        &self,
        person: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<&TrackedDay> {
        if start > end {
            return Vec::new();
        }
        self.tracked_days
            .range((person.to_string(), start)..=(person.to_string(), end))
            .map(|(_, day)| day)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemOrigin;
    use crate::nutrition::Scope;

    fn snapshot(json: &str) -> Snapshot {
        serde_json::from_str(json).unwrap()
    }

    const BASE: &str = r#"{
        "foods": [
            {"id": 1, "name": "Oats", "serving_size": "40", "serving_unit": "g",
             "calories": 150, "protein": 5, "carbs": 27, "fat": 3, "fiber": 4},
            {"id": 2, "name": "Milk", "serving_size": 240, "serving_unit": "ml",
             "calories": 120, "protein": 8, "carbs": 12, "fat": 5, "calcium": 300}
        ],
        "meals": [
            {"id": 10, "name": "Porridge", "meal_type": "breakfast", "meal_time": "Breakfast",
             "meal_foods": [{"food_id": 1, "quantity": 80}, {"food_id": 2, "quantity": 240}]}
        ],
        "plans": [
            {"id": 1, "person": "Sarah", "date": "2025-10-06", "meal_id": 10, "meal_time": "Breakfast"},
            {"id": 2, "person": "Sarah", "date": "2025-10-06", "meal_id": 10, "meal_time": "Snack 1"}
        ],
        "templates": [
            {"id": 5, "name": "Light day", "template_meals": [{"meal_id": 10, "meal_time": "Breakfast"}]}
        ],
        "weekly_menus": [
            {"id": 7, "name": "Default week", "weekly_menu_days": [
                {"day_of_week": 6, "template_id": 5},
                {"day_of_week": 0, "template_id": 5}
            ]}
        ],
        "tracked_days": [
            {"id": 1, "person": "Sarah", "date": "2025-10-06", "is_modified": true,
             "tracked_meals": [{"meal_id": 10, "meal_time": "Breakfast",
                "tracked_foods": [{"food_id": 2, "quantity": 0, "is_override": true, "is_deleted": true}]}]}
        ]
    }"#;

    #[test]
    fn test_resolves_all_scopes() {
        let catalog = Catalog::from_snapshot(snapshot(BASE)).unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 10, 6).unwrap();

        let porridge = catalog.meal(10).unwrap();
        assert_eq!(porridge.items.len(), 2);
        // 80g oats = 2 servings = 300 kcal; 240g milk = 1 serving = 120 kcal
        assert!((porridge.nutrients().calories - 420.0).abs() < 1e-9);

        let plan = catalog.plan_day("Sarah", date);
        assert_eq!(plan.meals.len(), 2);
        assert!((plan.nutrients().calories - 840.0).abs() < 1e-9);

        let tracked = catalog.tracked_day("Sarah", date).unwrap();
        assert!((tracked.nutrients().calories - 300.0).abs() < 1e-9);

        let menu = catalog.weekly_menu(7).unwrap();
        assert_eq!(menu.days[0].day_of_week, Weekday::Mon);
        assert_eq!(menu.days[1].day_of_week, Weekday::Sun);
        assert!(menu.template_for(Weekday::Tue).is_none());
    }

    #[test]
    fn test_missing_plan_is_empty() {
        let catalog = Catalog::from_snapshot(snapshot(BASE)).unwrap();
        let plan = catalog.plan_day("Stuart", NaiveDate::from_ymd_opt(2025, 10, 6).unwrap());
        assert!(plan.meals.is_empty());
        assert_eq!(plan.totals().nutrients.calories, 0.0);
    }

    #[test]
    fn test_unknown_references() {
        let bad_food = BASE.replace(r#""food_id": 2, "quantity": 240"#, r#""food_id": 99, "quantity": 240"#);
        assert!(matches!(
            Catalog::from_snapshot(snapshot(&bad_food)),
            Err(MealplanError::UnknownFood(99))
        ));

        let bad_meal = BASE.replace(r#""meal_id": 10, "meal_time": "Snack 1""#, r#""meal_id": 11, "meal_time": "Snack 1""#);
        assert!(matches!(
            Catalog::from_snapshot(snapshot(&bad_meal)),
            Err(MealplanError::UnknownMeal(11))
        ));

        let bad_template = BASE.replace(r#""day_of_week": 6, "template_id": 5"#, r#""day_of_week": 6, "template_id": 6"#);
        assert!(matches!(
            Catalog::from_snapshot(snapshot(&bad_template)),
            Err(MealplanError::UnknownTemplate(6))
        ));

        let bad_weekday = BASE.replace(r#""day_of_week": 6"#, r#""day_of_week": 7"#);
        assert!(matches!(
            Catalog::from_snapshot(snapshot(&bad_weekday)),
            Err(MealplanError::InvalidWeekday(7))
        ));
    }

    #[test]
    fn test_rejects_bad_quantities() {
        for quantity in ["0", "-80", "\"lots\"", "null"] {
            let json = BASE.replace(r#""food_id": 1, "quantity": 80"#, &format!(r#""food_id": 1, "quantity": {}"#, quantity));
            assert!(
                matches!(
                    Catalog::from_snapshot(snapshot(&json)),
                    Err(MealplanError::InvalidQuantity { .. })
                ),
                "quantity {} accepted",
                quantity
            );
        }
    }

    #[test]
    fn test_duplicate_ids_keep_last() {
        let json = BASE
            .replace(
                r#""calories": 120, "protein": 8"#,
                r#""calories": 120, "protein": 8}, {"id": 2, "name": "Oat milk", "serving_size": 240, "calories": 90"#,
            )
            .replace(
                r#""meals": ["#,
                r#""meals": [{"id": 10, "name": "Old porridge", "meal_foods": []},"#,
            );
        let catalog = Catalog::from_snapshot(snapshot(&json)).unwrap();

        assert_eq!(catalog.food(2).unwrap().name, "Oat milk");
        let porridge = catalog.meal(10).unwrap();
        assert_eq!(porridge.name, "Porridge");
        // 300 kcal oats + one serving of the surviving milk record
        assert!((porridge.nutrients().calories - 390.0).abs() < 1e-9);
    }

    #[test]
    fn test_override_flag_does_not_decide_origin() {
        let json = BASE.replace(
            r#""tracked_foods": [{"food_id": 2, "quantity": 0, "is_override": true, "is_deleted": true}]"#,
            r#""tracked_foods": [
                {"food_id": 1, "quantity": 40, "is_override": false},
                {"food_id": 2, "quantity": 120, "is_override": true}]"#,
        );
        let catalog = Catalog::from_snapshot(snapshot(&json)).unwrap();
        let day = catalog
            .tracked_day("Sarah", NaiveDate::from_ymd_opt(2025, 10, 6).unwrap())
            .unwrap();

        let origins: Vec<ItemOrigin> = day.meals[0].effective_items().iter().map(|l| l.origin).collect();
        assert_eq!(origins, vec![ItemOrigin::Override, ItemOrigin::Override]);
        // 40g oats = 150 kcal, 120ml milk = 60 kcal
        assert!((day.nutrients().calories - 210.0).abs() < 1e-9);
    }

    #[test]
    fn test_tracked_days_between() {
        let mut snap = snapshot(BASE);
        let mut second = snap.tracked_days[0].clone();
        second.date = NaiveDate::from_ymd_opt(2025, 10, 8).unwrap();
        second.tracked_meals[0].tracked_foods.clear();
        snap.tracked_days.push(second);
        let mut other_person = snap.tracked_days[0].clone();
        other_person.person = "Stuart".to_string();
        snap.tracked_days.push(other_person);

        let catalog = Catalog::from_snapshot(snap).unwrap();
        let days = catalog.tracked_days_between(
            "Sarah",
            NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 10, 31).unwrap(),
        );
        let dates: Vec<String> = days.iter().map(|d| d.date.to_string()).collect();
        assert_eq!(dates, vec!["2025-10-06", "2025-10-08"]);
        assert!(days.iter().all(|d| d.person == "Sarah"));
    }
}
