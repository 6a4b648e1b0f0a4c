//! Student record and request payload
//!
//! `StudentPayload` is what arrives over the wire; `NewStudent` only exists
//! once every field has passed validation.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use sqlx::FromRow;

use super::ValidationError;

/// Stored student record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i64,
    pub gender: String,
}

/// Validated field set for insert and full update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub age: i64,
    pub gender: String,
}

/// Raw add/edit request body.
///
/// Text fields must be JSON strings. `age` may be a number or a numeric
/// string, so it stays untyped until [`StudentPayload::validate`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<JsonValue>,
    pub gender: Option<String>,
}

impl StudentPayload {
    /// Check presence of all four fields, then the age.
    ///
    /// # Example
    /// ```
    /// use roster_server::models::{StudentPayload, ValidationError};
    ///
    /// let payload = StudentPayload {
    ///     name: Some("Ann".into()),
    ///     email: Some("ann@x.com".into()),
    ///     age: Some(serde_json::json!("20")),
    ///     gender: Some("F".into()),
    /// };
    /// assert_eq!(payload.validate().unwrap().age, 20);
    ///
    /// let missing = StudentPayload::default();
    /// assert_eq!(missing.validate().unwrap_err(), ValidationError::MissingFields);
    /// ```
    pub fn validate(self) -> Result<NewStudent, ValidationError> {
        let (Some(name), Some(email), Some(age), Some(gender)) = (
            present(self.name),
            present(self.email),
            present_age(self.age),
            present(self.gender),
        ) else {
            return Err(ValidationError::MissingFields);
        };

        Ok(NewStudent {
            name,
            email,
            age: parse_age(&age)?,
            gender,
        })
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn present_age(value: Option<JsonValue>) -> Option<JsonValue> {
    match value {
        Some(JsonValue::Null) => None,
        Some(JsonValue::String(s)) if s.is_empty() => None,
        other => other,
    }
}

/// Parse an age from a JSON number or numeric string, truncating toward zero.
///
/// The result must land in `1..=i32::MAX` to fit the INT column.
fn parse_age(value: &JsonValue) -> Result<i64, ValidationError> {
    let number = match value {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite() && *n > 0.0)
    .ok_or(ValidationError::InvalidAge)?;

    let whole = number.trunc();
    if whole < 1.0 || whole > f64::from(i32::MAX) {
        return Err(ValidationError::InvalidAge);
    }

    Ok(whole as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(age: JsonValue) -> StudentPayload {
        StudentPayload {
            name: Some("Ann".into()),
            email: Some("ann@x.com".into()),
            age: Some(age),
            gender: Some("F".into()),
        }
    }

    #[test]
    fn accepts_complete_payload() {
        let student = payload(json!(20)).validate().unwrap();
        assert_eq!(
            student,
            NewStudent {
                name: "Ann".into(),
                email: "ann@x.com".into(),
                age: 20,
                gender: "F".into(),
            }
        );
    }

    #[test]
    fn accepts_numeric_string_age() {
        assert_eq!(payload(json!("42")).validate().unwrap().age, 42);
        assert_eq!(payload(json!(" 7 ")).validate().unwrap().age, 7);
    }

    #[test]
    fn truncates_fractional_age() {
        assert_eq!(payload(json!(20.9)).validate().unwrap().age, 20);
        assert_eq!(payload(json!("19.5")).validate().unwrap().age, 19);
    }

    #[test]
    fn rejects_each_missing_field() {
        let mut p = payload(json!(20));
        p.name = None;
        assert_eq!(p.validate().unwrap_err(), ValidationError::MissingFields);

        let mut p = payload(json!(20));
        p.email = Some(String::new());
        assert_eq!(p.validate().unwrap_err(), ValidationError::MissingFields);

        let mut p = payload(json!(20));
        p.age = None;
        assert_eq!(p.validate().unwrap_err(), ValidationError::MissingFields);

        let p = payload(json!(""));
        assert_eq!(p.validate().unwrap_err(), ValidationError::MissingFields);

        let mut p = payload(json!(20));
        p.gender = None;
        assert_eq!(p.validate().unwrap_err(), ValidationError::MissingFields);
    }

    #[test]
    fn presence_is_checked_before_age() {
        let mut p = payload(json!("abc"));
        p.name = None;
        assert_eq!(p.validate().unwrap_err(), ValidationError::MissingFields);
    }

    #[test]
    fn rejects_bad_ages() {
        for age in [
            json!("abc"),
            json!(0),
            json!(-3),
            json!("0"),
            json!(0.5),
            json!(true),
            json!([20]),
            json!(1e12),
            json!("NaN"),
            json!("inf"),
        ] {
            assert_eq!(
                payload(age.clone()).validate().unwrap_err(),
                ValidationError::InvalidAge,
                "age {age} should be rejected"
            );
        }
    }

    #[test]
    fn deserializes_with_missing_and_extra_fields() {
        let p: StudentPayload =
            serde_json::from_value(json!({"name": "Ann", "nickname": "A"})).unwrap();
        assert_eq!(p.name.as_deref(), Some("Ann"));
        assert!(p.email.is_none());
        assert!(p.age.is_none());
    }

    #[test]
    fn non_string_text_field_fails_to_deserialize() {
        let result: Result<StudentPayload, _> =
            serde_json::from_value(json!({"name": 5, "email": "a@b.com"}));
        assert!(result.is_err());
    }
}
