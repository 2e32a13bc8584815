//! Year labels
//!
//! The `year` field is kept exactly as it appears in the source document.
//! `2023` and `"2023"` are different labels; no normalization happens here.
//! Any JSON scalar decodes: integral floats become numbers, other floats and
//! booleans become text, so one odd record never sinks the whole document.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw year value of a project
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum YearLabel {
    /// Integer year, e.g. `2024`
    Number(i64),
    /// Free-form label, e.g. `"2024"` or `"Fall 2023"`
    Text(String),
}

impl YearLabel {
    /// Parse user input: integers become [`YearLabel::Number`], anything else
    /// stays text.
    #[must_use]
    pub fn parse_loose(input: &str) -> Self {
        match input.parse::<i64>() {
            Ok(n) => Self::Number(n),
            Err(_) => Self::Text(input.to_string()),
        }
    }

    /// Whether the label carries a value usable as a grouping key
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Text(s) if s.is_empty())
    }
}

impl fmt::Display for YearLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

struct YearLabelVisitor;

impl Visitor<'_> for YearLabelVisitor {
    type Value = YearLabel;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a year as a number, string or boolean")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<YearLabel, E> {
        Ok(YearLabel::Number(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<YearLabel, E> {
        Ok(i64::try_from(v).map_or_else(|_| YearLabel::Text(v.to_string()), YearLabel::Number))
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::float_cmp)]
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<YearLabel, E> {
        // 2024.0 and 2024 are the same number in the page script.
        if v.fract() == 0.0 && v.abs() < i64::MAX as f64 {
            Ok(YearLabel::Number(v as i64))
        } else {
            Ok(YearLabel::Text(v.to_string()))
        }
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<YearLabel, E> {
        Ok(YearLabel::Text(v.to_string()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<YearLabel, E> {
        Ok(YearLabel::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<YearLabel, E> {
        Ok(YearLabel::Text(v))
    }
}

impl<'de> Deserialize<'de> for YearLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(YearLabelVisitor)
    }
}

impl From<i64> for YearLabel {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for YearLabel {
    fn from(value: i32) -> Self {
        Self::Number(i64::from(value))
    }
}

impl From<&str> for YearLabel {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for YearLabel {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_and_text_are_distinct() {
        assert_ne!(YearLabel::Number(2023), YearLabel::Text("2023".into()));
        assert_eq!(YearLabel::Number(2023).to_string(), "2023");
        assert_eq!(YearLabel::Text("2023".into()).to_string(), "2023");
    }

    #[test]
    fn deserializes_either_shape() {
        let n: YearLabel = serde_json::from_str("2024").unwrap();
        let t: YearLabel = serde_json::from_str("\"Spring 2024\"").unwrap();
        assert_eq!(n, YearLabel::Number(2024));
        assert_eq!(t, YearLabel::Text("Spring 2024".into()));
    }

    #[test]
    fn deserializes_other_scalars() {
        let whole: YearLabel = serde_json::from_str("2024.0").unwrap();
        let frac: YearLabel = serde_json::from_str("2024.5").unwrap();
        let flag: YearLabel = serde_json::from_str("true").unwrap();
        assert_eq!(whole, YearLabel::Number(2024));
        assert_eq!(frac, YearLabel::Text("2024.5".into()));
        assert_eq!(flag, YearLabel::Text("true".into()));
        assert!(serde_json::from_str::<YearLabel>("[2024]").is_err());
    }

    #[test]
    fn parse_loose_prefers_integers() {
        assert_eq!(YearLabel::parse_loose("2022"), YearLabel::Number(2022));
        assert_eq!(YearLabel::parse_loose("c. 2022"), YearLabel::Text("c. 2022".into()));
    }

    #[test]
    fn only_empty_text_is_empty() {
        assert!(YearLabel::Text(String::new()).is_empty());
        assert!(!YearLabel::Number(0).is_empty());
    }
}
