//! Scalar cell values
//!
//! Row mappings carry loosely typed scalars (whatever the caller put in a JS
//! object or JSON document). `CellValue` keeps that shape and knows how to
//! print itself the way the page would show it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single scalar read from a row mapping
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum CellValue {
    Bool(bool),
    Number(f64),
    Text(String),
    Null,
}

impl CellValue {
    /// Display text, or `None` for null so callers can substitute a placeholder
    pub fn as_display(&self) -> Option<String> {
        match self {
            CellValue::Null => None,
            other => Some(other.to_string()),
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Null
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Number(n) => write!(f, "{}", format_number(*n)),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Null => Ok(()),
        }
    }
}

/// Whole numbers print without a fractional part (30, not 30.0)
fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_numbers_have_no_fraction() {
        assert_eq!(CellValue::from(30).to_string(), "30");
        assert_eq!(CellValue::from(-4.0).to_string(), "-4");
        assert_eq!(CellValue::from(2.5).to_string(), "2.5");
    }

    #[test]
    fn test_untagged_json_values() {
        let values: Vec<CellValue> =
            serde_json::from_str(r#"[true, 25, "London", null, 1.5]"#).unwrap();
        assert_eq!(
            values,
            vec![
                CellValue::Bool(true),
                CellValue::Number(25.0),
                CellValue::Text("London".to_string()),
                CellValue::Null,
                CellValue::Number(1.5),
            ]
        );
    }

    #[test]
    fn test_null_has_no_display() {
        assert_eq!(CellValue::Null.as_display(), None);
        assert_eq!(CellValue::from("x").as_display(), Some("x".to_string()));
    }
}
