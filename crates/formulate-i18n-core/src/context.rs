use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::Value;

/// How a bound such as `max:10` is read for the current value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Measure {
    /// The value is a number and the bound is compared against it.
    Magnitude,
    /// The bound limits the number of characters.
    Length,
    /// The value is a list and the bound limits how many items are chosen.
    Selection,
}

/// Everything a formatter may read about the failing field.
///
/// Built fresh for each validation attempt. Formatters only ever see a
/// shared reference, so the value stays untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationContext {
    name: String,
    value: Option<Value>,
    args: Vec<String>,
    form_values: BTreeMap<String, Value>,
}

impl ValidationContext {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_form_value(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.form_values.insert(field.into(), value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    pub fn form_value(&self, field: &str) -> Option<&Value> {
        self.form_values.get(field)
    }

    pub fn form_values(&self) -> &BTreeMap<String, Value> {
        &self.form_values
    }

    /// The value unless it is missing or falsy.
    pub fn truthy_value(&self) -> Option<&Value> {
        self.value.as_ref().filter(|value| value.is_truthy())
    }

    /// The value when it is a non-empty string.
    pub fn text_value(&self) -> Option<&str> {
        self.value
            .as_ref()
            .and_then(Value::as_str)
            .filter(|text| !text.is_empty())
    }

    /// Measure for single-bound rules (`max`, `min`), whose override sits in
    /// the second argument. A list value always reads as a selection.
    pub fn bound_measure(&self) -> Measure {
        if self.value.as_ref().and_then(Value::as_list).is_some() {
            return Measure::Selection;
        }
        self.scalar_measure(1)
    }

    /// Measure for `between`, whose override sits in the third argument.
    /// Never a selection.
    pub fn range_measure(&self) -> Measure {
        self.scalar_measure(2)
    }

    fn scalar_measure(&self, override_index: usize) -> Measure {
        match self.arg(override_index) {
            Some("value") => return Measure::Magnitude,
            Some("length") => return Measure::Length,
            _ => {}
        }
        if self.value.as_ref().is_some_and(Value::is_numeric) {
            Measure::Magnitude
        } else {
            Measure::Length
        }
    }
}
