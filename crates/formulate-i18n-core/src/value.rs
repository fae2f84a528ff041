use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

/// A field value as the host form hands it over.
///
/// Coercion helpers mirror the loose semantics of browser form values: a
/// string such as `"15"` counts as numeric, an empty string is falsy, and a
/// single-element list coerces through its only element.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Num(f64),
    Str(String),
    List(Vec<Value>),
}

impl Value {
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(value) => *value,
            Value::Num(number) => *number != 0.0 && !number.is_nan(),
            Value::Str(text) => !text.is_empty(),
            Value::List(_) => true,
        }
    }

    /// True when numeric coercion of the value does not produce NaN.
    pub fn is_numeric(&self) -> bool {
        match self {
            Value::Null | Value::Bool(_) => true,
            Value::Num(number) => !number.is_nan(),
            Value::Str(text) => is_numeric_text(text),
            Value::List(items) => match items.as_slice() {
                [] => true,
                // coerced through the list's own text, so `[null]` reads as ""
                [_] => is_numeric_text(&self.to_string()),
                _ => false,
            },
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(value) => write!(f, "{value}"),
            Value::Num(number) => write_number(f, *number),
            Value::Str(text) => f.write_str(text),
            Value::List(items) => {
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(",")?;
                    }
                    // nulls inside a list print as nothing
                    if !matches!(item, Value::Null) {
                        write!(f, "{item}")?;
                    }
                }
                Ok(())
            }
        }
    }
}

fn write_number(f: &mut fmt::Formatter<'_>, number: f64) -> fmt::Result {
    if number.is_nan() {
        f.write_str("NaN")
    } else if number.is_infinite() {
        f.write_str(if number > 0.0 { "Infinity" } else { "-Infinity" })
    } else if number == 0.0 {
        f.write_str("0")
    } else if number.abs() >= 1e21 || number.abs() < 1e-6 {
        // host exponent form: `1e+21`, `1.5e-7`
        let text = format!("{number:e}");
        match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                write!(f, "{mantissa}e+{exponent}")
            }
            _ => f.write_str(&text),
        }
    } else {
        write!(f, "{number}")
    }
}

fn is_numeric_text(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return true;
    }
    if matches!(trimmed, "Infinity" | "+Infinity" | "-Infinity") {
        return true;
    }

    let radix_digits = [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)]
        .into_iter()
        .find_map(|(prefix, radix)| trimmed.strip_prefix(prefix).map(|rest| (rest, radix)));
    if let Some((digits, radix)) = radix_digits {
        return !digits.is_empty() && digits.chars().all(|ch| ch.is_digit(radix));
    }

    trimmed
        .chars()
        .all(|ch| ch.is_ascii_digit() || matches!(ch, '+' | '-' | '.' | 'e' | 'E'))
        && trimmed.parse::<f64>().is_ok()
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Num(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Num(value as f64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Num(f64::from(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::List(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;

    use super::Value;

    #[test]
    fn numbers_print_without_trailing_zero() {
        assert_eq!(Value::from(15).to_string(), "15");
        assert_eq!(Value::from(2.5).to_string(), "2.5");
        assert_eq!(Value::from(-0.0).to_string(), "0");
        assert_eq!(Value::from(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(Value::from(f64::NAN).to_string(), "NaN");
    }

    #[test]
    fn extreme_numbers_use_exponent_form() {
        assert_eq!(Value::from(1e21).to_string(), "1e+21");
        assert_eq!(Value::from(-2e22).to_string(), "-2e+22");
        assert_eq!(Value::from(1.5e300).to_string(), "1.5e+300");
        assert_eq!(Value::from(1e-7).to_string(), "1e-7");
        assert_eq!(Value::from(1.5e-7).to_string(), "1.5e-7");
        assert_eq!(Value::from(1e20).to_string(), "100000000000000000000");
        assert_eq!(Value::from(0.000001).to_string(), "0.000001");
        assert_eq!(Value::from(123.5).to_string(), "123.5");
    }

    #[test]
    fn lists_join_with_commas() {
        let value = Value::List(vec![Value::from("a"), Value::Null, Value::from(3)]);
        assert_eq!(value.to_string(), "a,,3");
    }

    #[test]
    fn truthiness() {
        assert!(!Value::Null.is_truthy());
        assert!(!Value::from("").is_truthy());
        assert!(!Value::from(0).is_truthy());
        assert!(!Value::from(f64::NAN).is_truthy());
        assert!(!Value::from(false).is_truthy());
        assert!(Value::from("0").is_truthy());
        assert!(Value::List(Vec::new()).is_truthy());
    }

    #[test]
    fn numeric_strings() {
        for text in ["15", " 2.5 ", "", "-3", "+4", "1e3", ".5", "0x1F", "0b101", "Infinity"] {
            assert!(Value::from(text).is_numeric(), "{text:?} should be numeric");
        }
        for text in ["abc", "12px", "inf", "NaN", "0x", "1e", "-0x1", "1 2"] {
            assert!(!Value::from(text).is_numeric(), "{text:?} should not be numeric");
        }
    }

    #[test]
    fn numeric_lists_follow_their_single_element() {
        assert!(Value::List(Vec::new()).is_numeric());
        assert!(Value::from(vec!["7"]).is_numeric());
        assert!(!Value::from(vec!["seven"]).is_numeric());
        assert!(!Value::from(vec!["1", "2"]).is_numeric());
    }

    #[test]
    fn lone_null_in_list_coerces_like_empty_text() {
        assert!(Value::List(vec![Value::Null]).is_numeric());
        assert!(Value::List(vec![Value::List(vec![Value::Null])]).is_numeric());
        assert!(!Value::List(vec![Value::from(vec!["1", "2"])]).is_numeric());
    }

    #[test]
    fn scalars_other_than_nan_are_numeric() {
        assert!(Value::Null.is_numeric());
        assert!(Value::from(true).is_numeric());
        assert!(Value::from(15).is_numeric());
        assert!(!Value::from(f64::NAN).is_numeric());
    }
}
