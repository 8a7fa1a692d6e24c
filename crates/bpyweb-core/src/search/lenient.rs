//! Field decoders tolerant of inconsistent upstream schemas.
//!
//! Mirrors disagree on whether numbers arrive as numbers, strings or null.
//! Anything unusable decodes to the type's zero value instead of failing the
//! whole response.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub fn string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

pub fn f64<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    Ok(value_to_f64(&Value::deserialize(d)?).unwrap_or_default())
}

pub fn i64<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    Ok(value_to_i64(&Value::deserialize(d)?).unwrap_or_default())
}

pub fn opt_i64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
    Ok(value_to_i64(&Value::deserialize(d)?))
}

/// Sequences that may be `null`.
pub fn seq<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(d)?.unwrap_or_default())
}

fn value_to_f64(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

fn value_to_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse()
                .ok()
                .or_else(|| s.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f as i64))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "super::string")]
        name: String,
        #[serde(default, deserialize_with = "super::f64")]
        stars: f64,
        #[serde(default, deserialize_with = "super::i64")]
        id: i64,
        #[serde(default, deserialize_with = "super::opt_i64")]
        status: Option<i64>,
        #[serde(default, deserialize_with = "super::seq")]
        tags: Vec<String>,
    }

    #[test]
    fn test_well_formed() {
        let row: Row = serde_json::from_str(
            r#"{"name":"Insane","stars":5.25,"id":42,"status":2,"tags":["a"]}"#,
        )
        .unwrap();
        assert_eq!(row.name, "Insane");
        assert_eq!(row.stars, 5.25);
        assert_eq!(row.id, 42);
        assert_eq!(row.status, Some(2));
        assert_eq!(row.tags, vec!["a".to_string()]);
    }

    #[test]
    fn test_strings_and_nulls() {
        let row: Row = serde_json::from_str(
            r#"{"name":null,"stars":"4.5","id":"17","status":null,"tags":null}"#,
        )
        .unwrap();
        assert_eq!(row.name, "");
        assert_eq!(row.stars, 4.5);
        assert_eq!(row.id, 17);
        assert_eq!(row.status, None);
        assert!(row.tags.is_empty());
    }

    #[test]
    fn test_missing_and_garbage() {
        let row: Row = serde_json::from_str(r#"{"stars":"lots","id":12.9}"#).unwrap();
        assert_eq!(row.name, "");
        assert_eq!(row.stars, 0.0);
        assert_eq!(row.id, 12);
        assert_eq!(row.status, None);
    }
}
