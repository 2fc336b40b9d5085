//! Tolerant numeric coercion.
//!
//! Monetary and quantity fields may arrive absent or malformed in persisted
//! records (partially-migrated data, hand-edited files). Every computation
//! site treats such values as zero, and every tolerant serde field funnels
//! through this one helper so the behavior never diverges.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Coerce an arbitrary JSON value into a finite `f64`, treating anything
/// non-numeric as zero.
pub fn safe_f64(value: &Value) -> f64 {
    let n = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    };
    if n.is_finite() { n } else { 0.0 }
}

/// Serde deserializer for numeric fields that must never fail the record.
///
/// Combine with `#[serde(default)]` so a missing field also reads as zero.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(safe_f64(&value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_pass_through() {
        assert_eq!(safe_f64(&json!(12.5)), 12.5);
        assert_eq!(safe_f64(&json!(-3)), -3.0);
        assert_eq!(safe_f64(&json!(0)), 0.0);
    }

    #[test]
    fn numeric_strings_coerce() {
        assert_eq!(safe_f64(&json!("42")), 42.0);
        assert_eq!(safe_f64(&json!(" 7.25 ")), 7.25);
    }

    #[test]
    fn non_numeric_values_coerce_to_zero() {
        assert_eq!(safe_f64(&json!(null)), 0.0);
        assert_eq!(safe_f64(&json!("n/a")), 0.0);
        assert_eq!(safe_f64(&json!({"nested": true})), 0.0);
        assert_eq!(safe_f64(&json!([1, 2])), 0.0);
        assert_eq!(safe_f64(&json!(true)), 0.0);
    }

    #[test]
    fn non_finite_strings_coerce_to_zero() {
        assert_eq!(safe_f64(&json!("NaN")), 0.0);
        assert_eq!(safe_f64(&json!("inf")), 0.0);
    }

    #[test]
    fn lenient_field_tolerates_malformed_input() {
        #[derive(Debug, serde::Deserialize)]
        struct Rec {
            #[serde(default, deserialize_with = "super::lenient_f64")]
            amount: f64,
        }

        let ok: Rec = serde_json::from_value(json!({"amount": 9.99})).unwrap();
        assert_eq!(ok.amount, 9.99);

        let bad: Rec = serde_json::from_value(json!({"amount": "oops"})).unwrap();
        assert_eq!(bad.amount, 0.0);

        let missing: Rec = serde_json::from_value(json!({})).unwrap();
        assert_eq!(missing.amount, 0.0);
    }
}
