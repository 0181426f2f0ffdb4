//! Structural validation of request bodies against a table definition.

use crate::config::{FieldDef, FieldKind, TableDef};
use crate::error::{AppError, FieldError};
use serde_json::{Map, Value};

pub struct RequestValidator;

impl RequestValidator {
    /// Every field of the table must be present, non-null and of its kind; strings must not be blank.
    /// All failing fields are reported together. Unknown keys are ignored.
    pub fn validate(body: &Map<String, Value>, table: &TableDef) -> Result<(), AppError> {
        let failures: Vec<FieldError> = table
            .fields
            .iter()
            .filter_map(|field| check_field(field, body.get(field.name)))
            .collect();
        if failures.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(failures))
        }
    }

    /// Validate any JSON value; anything other than an object is rejected outright.
    pub fn validate_value(body: &Value, table: &TableDef) -> Result<(), AppError> {
        match body {
            Value::Object(map) => Self::validate(map, table),
            _ => Err(AppError::Validation(vec![FieldError::new(
                "body",
                "request body must be a JSON object",
            )])),
        }
    }
}

fn check_field(field: &FieldDef, value: Option<&Value>) -> Option<FieldError> {
    let name = field.name;
    match (field.kind, value) {
        (_, None | Some(Value::Null)) => Some(FieldError::new(name, format!("{} is required", name))),
        (FieldKind::Text, Some(Value::String(s))) if s.trim().is_empty() => {
            Some(FieldError::new(name, format!("{} must not be empty", name)))
        }
        (FieldKind::Text, Some(Value::String(_))) => None,
        (FieldKind::Integer, Some(v)) if v.as_i64().is_some_and(|n| i32::try_from(n).is_ok()) => None,
        (kind, Some(_)) => Some(FieldError::new(
            name,
            format!("{} must be {}", name, kind.describe()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{MOVIES_TABLE, USERS_TABLE};
    use serde_json::json;

    fn failures(body: Value, table: &TableDef) -> Vec<FieldError> {
        match RequestValidator::validate_value(&body, table) {
            Err(AppError::Validation(f)) => f,
            Err(other) => panic!("unexpected error: {other}"),
            Ok(()) => Vec::new(),
        }
    }

    fn fields(f: &[FieldError]) -> Vec<&str> {
        f.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn complete_user_passes() {
        let body = json!({
            "firstname": "Marie",
            "lastname": "Martin",
            "email": "marie@wild.co",
            "city": "Paris",
            "language": "French",
            "nickname": "extra keys are ignored"
        });
        assert!(failures(body, &USERS_TABLE).is_empty());
    }

    #[test]
    fn reports_every_missing_field() {
        let f = failures(json!({ "firstname": "Pierre Adrien" }), &USERS_TABLE);
        assert_eq!(fields(&f), vec!["lastname", "email", "city", "language"]);
        assert_eq!(f[0].message, "lastname is required");
    }

    #[test]
    fn null_and_blank_strings_fail() {
        let body = json!({
            "firstname": null,
            "lastname": "   ",
            "email": "",
            "city": "Paris",
            "language": "French"
        });
        let f = failures(body, &USERS_TABLE);
        assert_eq!(fields(&f), vec!["firstname", "lastname", "email"]);
        assert_eq!(f[1].message, "lastname must not be empty");
    }

    #[test]
    fn wrong_kinds_fail() {
        let body = json!({
            "title": 12,
            "director": "Alfred Hitchcock",
            "year": "1960",
            "color": "0",
            "duration": "109"
        });
        let f = failures(body, &MOVIES_TABLE);
        assert_eq!(fields(&f), vec!["title", "duration"]);
        assert_eq!(f[1].message, "duration must be an integer");
    }

    #[test]
    fn integer_must_fit_column() {
        let body = json!({
            "title": "Psycho",
            "director": "Alfred Hitchcock",
            "year": "1960",
            "color": "0",
            "duration": 10_000_000_000i64
        });
        assert_eq!(fields(&failures(body, &MOVIES_TABLE)), vec!["duration"]);

        let body = json!({
            "title": "Psycho",
            "director": "Alfred Hitchcock",
            "year": "1960",
            "color": "0",
            "duration": 109.5
        });
        assert_eq!(fields(&failures(body, &MOVIES_TABLE)), vec!["duration"]);
    }

    #[test]
    fn non_object_body_fails() {
        let f = failures(json!([1, 2, 3]), &USERS_TABLE);
        assert_eq!(fields(&f), vec!["body"]);
    }
}
