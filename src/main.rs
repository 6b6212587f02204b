//! Meal Planner
//!
//! Prints nutrition reports from a meal planner snapshot.
//!
//! ```text
//! mealplan day [date]        planned meals for a day
//! mealplan week [date]       the Monday-to-Sunday week containing a date
//! mealplan tracked [date]    what was actually eaten on a day
//! mealplan meal <id>         one meal with its foods
//! mealplan version           build information
//! ```
//!
//! Dates are `YYYY-MM-DD` and default to today.

use chrono::NaiveDate;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use mealplan::build_info::{self, BuildInfo};
use mealplan::config::{Config, OutputFormat};
use mealplan::nutrition::LineItemBreakdown;
use mealplan::store::Catalog;
use mealplan::tools::{self, MealDetail, PlanDayDetail, TrackedDayDetail, WeekPlan};
use mealplan::MealplanError;

const USAGE: &str = "usage: mealplan <day|week|tracked> [YYYY-MM-DD] | mealplan meal <id> | mealplan version";

enum Report {
    Day(NaiveDate),
    Week(NaiveDate),
    Tracked(NaiveDate),
    Meal(i64),
    Version,
}

fn parse_date(arg: Option<&String>) -> Result<NaiveDate, MealplanError> {
    match arg {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| MealplanError::Parse(format!("invalid date '{}': {}", s, e))),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

fn parse_args(args: &[String]) -> Result<Report, MealplanError> {
    let report = match args.first().map(String::as_str) {
        Some("day") => Report::Day(parse_date(args.get(1))?),
        Some("week") => Report::Week(parse_date(args.get(1))?),
        Some("tracked") => Report::Tracked(parse_date(args.get(1))?),
        Some("meal") => {
            let id = args
                .get(1)
                .and_then(|s| s.parse().ok())
                .ok_or_else(|| MealplanError::Parse(format!("meal needs a numeric id\n{}", USAGE)))?;
            Report::Meal(id)
        }
        Some("version") => Report::Version,
        _ => return Err(MealplanError::Parse(USAGE.to_string())),
    };
    Ok(report)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_foods(foods: &[LineItemBreakdown]) {
    for food in foods {
        let marker = if food.is_custom { " *" } else { "" };
        println!(
            "    {} {} ({}){}: {:.1} kcal",
            food.grams_label(),
            food.name,
            food.servings_label(),
            marker,
            food.nutrition.calories
        );
    }
}

fn print_meal(meal: &MealDetail) {
    println!("  {} [{}]", meal.name, meal.meal_time);
    print_foods(&meal.foods);
    println!("    {}", meal.nutrition);
}

fn print_day(day: &PlanDayDetail) {
    println!("{} {} for {}", day.day_of_week, day.date, day.person);
    for planned in &day.meals {
        println!("{}:", planned.meal_time);
        print_meal(&planned.meal);
    }
    println!("Total: {}", day.nutrition);
}

fn print_week(week: &WeekPlan) {
    println!("Week of {} for {}", week.week_range, week.person);
    for day in &week.days {
        println!(
            "  {:<9} {}  {} meals  {:.1} kcal",
            day.name, day.display, day.meal_count, day.nutrition.nutrients.calories
        );
    }
    println!("Total: {}", week.nutrition);
}

fn print_tracked(day: &TrackedDayDetail) {
    let modified = if day.is_modified { " (modified)" } else { "" };
    println!("Tracked {} for {}{}", day.date, day.person, modified);
    for meal in &day.meals {
        println!("  {} [{}]", meal.meal_name, meal.meal_time);
        print_foods(&meal.foods);
        println!("    Planned: {}", meal.base_nutrition);
        println!("    Eaten:   {}", meal.nutrition);
    }
    println!("Total: {}", day.nutrition);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays machine readable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("mealplan=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let report = parse_args(&args)?;
    let config = Config::from_env()?;

    if let Report::Version = report {
        let info = BuildInfo::current();
        return match config.output {
            OutputFormat::Json => print_json(&info),
            OutputFormat::Text => {
                println!("{}", info);
                Ok(())
            }
        };
    }

    build_info::print_startup_banner(&config.snapshot_path);
    let catalog = Catalog::load(&config.snapshot_path)?;

    match (report, config.output) {
        (Report::Day(date), output) => {
            let detail = tools::plan_day_detail(&catalog.plan_day(&config.person, date));
            match output {
                OutputFormat::Json => print_json(&detail)?,
                OutputFormat::Text => print_day(&detail),
            }
        }
        (Report::Week(date), output) => {
            let week = tools::week_plan(&catalog, &config.person, date);
            match output {
                OutputFormat::Json => print_json(&week)?,
                OutputFormat::Text => print_week(&week),
            }
        }
        (Report::Tracked(date), output) => match tools::get_tracked_day(&catalog, &config.person, date) {
            Some(detail) => match output {
                OutputFormat::Json => print_json(&detail)?,
                OutputFormat::Text => print_tracked(&detail),
            },
            None => eprintln!("Nothing tracked for {} on {}", config.person, date),
        },
        (Report::Meal(id), output) => {
            let meal = tools::get_meal(&catalog, id)?;
            match output {
                OutputFormat::Json => print_json(&meal)?,
                OutputFormat::Text => print_meal(&meal),
            }
        }
        (Report::Version, _) => {}
    }

    Ok(())
}
