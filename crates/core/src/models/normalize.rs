//! Lenient field decoders shared by the entity models.
//!
//! The backend serializes the same field differently depending on the endpoint
//! (numbers as strings, dates with or without a time part, flags as 0/1). These
//! helpers fold every spelling into one canonical Rust value.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Identifier: number or numeric string; `null`/missing/garbage become 0
pub fn id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(integer(&Value::deserialize(deserializer)?).unwrap_or_default())
}

/// Optional foreign key: 0, `null`, empty strings and garbage become `None`
pub fn opt_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(integer(&Value::deserialize(deserializer)?).filter(|id| *id != 0))
}

/// Optional small integer (semester, counts)
pub fn opt_int<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(integer(&Value::deserialize(deserializer)?).and_then(|n| i32::try_from(n).ok()))
}

/// Date given as `YYYY-MM-DD` or an ISO-8601 timestamp; anything else is `None`
pub fn opt_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => parse_date(&s),
        _ => None,
    })
}

/// Boolean flag accepting `true`/`false`, 0/1 and their string forms.
/// A missing field keeps the declared default; an explicit `null` reads as false.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match &value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_i64().is_some_and(|n| n != 0),
        Value::String(s) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "1" | "si" | "sí" | "s" | "activo"
        ),
        _ => false,
    })
}

/// Money amount given as number or string; `null` becomes zero
pub fn amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Decimal>::deserialize(deserializer)?.unwrap_or_default())
}

/// Text that may be `null`; `null` becomes the empty string
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Optional text; blank strings become `None`
pub fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

pub(crate) fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let date_part = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

fn integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "id")]
        id: i64,
        #[serde(default, deserialize_with = "opt_id")]
        fk: Option<i64>,
        #[serde(default, deserialize_with = "opt_date")]
        date: Option<NaiveDate>,
        #[serde(default, deserialize_with = "flag")]
        active: bool,
        #[serde(default, deserialize_with = "opt_text")]
        note: Option<String>,
    }

    fn probe(value: serde_json::Value) -> Probe {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_ids_from_numbers_and_strings() {
        assert_eq!(probe(json!({"id": 5})).id, 5);
        assert_eq!(probe(json!({"id": "17"})).id, 17);
        assert_eq!(probe(json!({"id": null})).id, 0);
        assert_eq!(probe(json!({})).id, 0);
    }

    #[test]
    fn test_zero_foreign_key_is_absent() {
        assert_eq!(probe(json!({"fk": 0})).fk, None);
        assert_eq!(probe(json!({"fk": ""})).fk, None);
        assert_eq!(probe(json!({"fk": "3"})).fk, Some(3));
    }

    #[test]
    fn test_dates_with_and_without_time() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 1);
        assert_eq!(probe(json!({"date": "2024-03-01"})).date, expected);
        assert_eq!(probe(json!({"date": "2024-03-01T00:00:00"})).date, expected);
        assert_eq!(probe(json!({"date": "01/03/2024"})).date, None);
        assert_eq!(probe(json!({"date": 12})).date, None);
    }

    #[test]
    fn test_flags() {
        assert!(probe(json!({"active": 1})).active);
        assert!(probe(json!({"active": "true"})).active);
        assert!(!probe(json!({"active": "0"})).active);
        assert!(!probe(json!({})).active);
    }

    #[test]
    fn test_blank_text_is_absent() {
        assert_eq!(probe(json!({"note": "  "})).note, None);
        assert_eq!(probe(json!({"note": " ok "})).note.as_deref(), Some("ok"));
    }
}
