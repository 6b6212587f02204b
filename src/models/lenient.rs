//! Lenient numeric deserializers
//!
//! Exported documents carry serving sizes as strings and may leave
//! nutrient columns null. These helpers settle that at the boundary so the
//! typed records never hold anything but plain numbers.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

impl RawNumber {
    fn into_f64(self) -> Option<f64> {
        let value = match self {
            RawNumber::Number(n) => n,
            RawNumber::Text(s) => s.trim().parse::<f64>().ok()?,
            RawNumber::Other(_) => return None,
        };
        value.is_finite().then_some(value)
    }
}

/// Number, numeric string, or `None` for anything else (null, bool, "abc", NaN)
pub fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(RawNumber::deserialize(deserializer)?.into_f64())
}

/// Nutrient amount; anything that is not a finite number reads as zero
pub fn amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_number(deserializer)?.unwrap_or(0.0))
}
