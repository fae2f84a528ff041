use formulate_i18n_core::Value;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ValueArgError {
    #[error("object values are not supported")]
    Object,
}

/// Reads a `--value` argument. JSON scalars and arrays map onto [`Value`];
/// anything that is not valid JSON is taken as plain text.
pub fn parse_value(text: &str) -> Result<Value, ValueArgError> {
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(json) => from_json(json),
        Err(_) => Ok(Value::Str(text.to_string())),
    }
}

fn from_json(json: serde_json::Value) -> Result<Value, ValueArgError> {
    Ok(match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(flag) => Value::Bool(flag),
        serde_json::Value::Number(number) => match number.as_f64() {
            Some(number) => Value::Num(number),
            None => Value::Str(number.to_string()),
        },
        serde_json::Value::String(text) => Value::Str(text),
        serde_json::Value::Array(items) => Value::List(
            items
                .into_iter()
                .map(from_json)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        serde_json::Value::Object(_) => return Err(ValueArgError::Object),
    })
}

#[cfg(test)]
mod tests {
    use formulate_i18n_core::Value;

    use super::{ValueArgError, parse_value};

    #[test]
    fn numbers_and_lists() {
        assert_eq!(parse_value("15").expect("value"), Value::Num(15.0));
        assert_eq!(
            parse_value(r#"["a", 2, null]"#).expect("value"),
            Value::List(vec![Value::from("a"), Value::Num(2.0), Value::Null])
        );
    }

    #[test]
    fn quoted_string_is_unwrapped() {
        assert_eq!(parse_value(r#""jon""#).expect("value"), Value::from("jon"));
    }

    #[test]
    fn invalid_json_is_plain_text() {
        assert_eq!(
            parse_value("jon@example.com").expect("value"),
            Value::from("jon@example.com")
        );
        assert_eq!(parse_value("").expect("value"), Value::from(""));
    }

    #[test]
    fn objects_are_rejected() {
        assert_eq!(parse_value(r#"{"a": 1}"#), Err(ValueArgError::Object));
        assert_eq!(parse_value(r#"[{"a": 1}]"#), Err(ValueArgError::Object));
    }
}
