//! Daily calories for the calorie chart
//!
//! `calorie_history [days] [end-date]` prints `{date, calories}` points for
//! the configured person, newest first. `days` defaults to 7 and the end
//! date to today.

use chrono::NaiveDate;
use tracing_subscriber::EnvFilter;

use mealplan::config::{Config, OutputFormat};
use mealplan::store::Catalog;
use mealplan::tools::calorie_history;
use mealplan::MealplanError;

const DEFAULT_DAYS: i64 = 7;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("mealplan=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let days = match args.first() {
        Some(s) => s
            .parse()
            .map_err(|_| MealplanError::Parse(format!("days must be a whole number, got '{}'", s)))?,
        None => DEFAULT_DAYS,
    };
    let end_date = match args.get(1) {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| MealplanError::Parse(format!("invalid date '{}': {}", s, e)))?,
        None => chrono::Local::now().date_naive(),
    };

    let config = Config::from_env()?;
    let catalog = Catalog::load(&config.snapshot_path)?;
    let points = calorie_history(&catalog, &config.person, end_date, days)?;

    match config.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&points)?),
        OutputFormat::Text => {
            println!("Calories for {} ({} days to {})", config.person, days, end_date);
            for point in &points {
                println!("  {}  {:>8.2} kcal", point.date, point.calories);
            }
        }
    }

    Ok(())
}
