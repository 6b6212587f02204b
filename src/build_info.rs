//! Build metadata
//!
//! `build.rs` bumps a build counter and stamps the compile time into
//! `MEALPLAN_BUILD_NUMBER` / `MEALPLAN_BUILD_TIMESTAMP`.

use std::fmt;
use std::path::Path;

use serde::Serialize;

const RAW_BUILD_NUMBER: Option<&str> = option_env!("MEALPLAN_BUILD_NUMBER");
const RAW_BUILD_TIMESTAMP: Option<&str> = option_env!("MEALPLAN_BUILD_TIMESTAMP");

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    /// 0 when built without the build script's counter
    pub build_number: u64,
    pub build_timestamp: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self::from_raw(RAW_BUILD_NUMBER, RAW_BUILD_TIMESTAMP)
    }

    fn from_raw(number: Option<&str>, timestamp: Option<&'static str>) -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            build_number: number.and_then(|n| n.trim().parse().ok()).unwrap_or(0),
            build_timestamp: timestamp.unwrap_or("unknown"),
        }
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (build {}, {})",
            self.name, self.version, self.build_number, self.build_timestamp
        )
    }
}

/// Banner on stderr naming the build and the snapshot being read
pub fn print_startup_banner(snapshot_path: &Path) {
    let rule = "=".repeat(47);
    eprintln!("{}", rule);
    eprintln!("  Meal Planner: {}", BuildInfo::current());
    eprintln!("  Snapshot: {}", snapshot_path.display());
    eprintln!("{}", rule);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_values() {
        let info = BuildInfo::from_raw(Some("42"), Some("2025-10-06T08:00:00Z"));
        assert_eq!(info.build_number, 42);
        assert_eq!(info.to_string(), format!("mealplan {} (build 42, 2025-10-06T08:00:00Z)", info.version));

        let bare = BuildInfo::from_raw(Some("not a number"), None);
        assert_eq!(bare.build_number, 0);
        assert_eq!(bare.build_timestamp, "unknown");
    }

    #[test]
    fn test_current_build_info() {
        let info = BuildInfo::current();
        assert_eq!(info.name, "mealplan");
        assert!(!info.version.is_empty());
    }
}
