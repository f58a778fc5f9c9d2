//! Dynamic bound object backed by a JSON map
//!
//! Useful when form data does not come from a dedicated model type, e.g.
//! re-rendering a submitted form with the values and errors it came back with.

use std::borrow::Cow;

use serde_json::{Map, Value};

use super::binding::BoundObject;
use super::error::{ErrorLookup, ErrorMessages, FieldErrors};

/// A named bag of attribute values with optional errors and record state
///
/// # Examples
///
/// ```rust
/// use acton_forms::forms::{BoundObject, Record};
/// use serde_json::json;
///
/// let record = Record::new("Person")
///     .set("name", "Ada")
///     .set("age", 36)
///     .persisted();
///
/// assert_eq!(record.attribute("name"), Some(json!("Ada")));
/// assert_eq!(record.new_record(), Some(false));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    type_name: String,
    values: Map<String, Value>,
    errors: Option<FieldErrors>,
    new_record: Option<bool>,
}

impl Record {
    /// Create an empty record of the given type
    #[must_use]
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            ..Self::default()
        }
    }

    /// Create a record from a JSON object; non-object values yield no attributes
    #[must_use]
    pub fn from_json(type_name: impl Into<String>, value: Value) -> Self {
        let values = match value {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self {
            type_name: type_name.into(),
            values,
            ..Self::default()
        }
    }

    /// Set an attribute value
    #[must_use]
    pub fn set(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Attach validation errors
    #[must_use]
    pub fn with_errors(mut self, errors: FieldErrors) -> Self {
        self.errors = Some(errors);
        self
    }

    /// Mark the record as not yet persisted
    #[must_use]
    pub const fn new_record_state(mut self) -> Self {
        self.new_record = Some(true);
        self
    }

    /// Mark the record as persisted
    #[must_use]
    pub const fn persisted(mut self) -> Self {
        self.new_record = Some(false);
        self
    }

    /// Attached errors, if any
    #[must_use]
    pub const fn field_errors(&self) -> Option<&FieldErrors> {
        self.errors.as_ref()
    }
}

impl BoundObject for Record {
    fn type_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.type_name)
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        self.values.get(name).cloned()
    }

    fn new_record(&self) -> Option<bool> {
        self.new_record
    }

    fn errors(&self) -> Option<&dyn ErrorLookup> {
        self.errors.as_ref().map(|errors| errors as &dyn ErrorLookup)
    }
}

impl ErrorMessages for Record {
    fn error_messages(&self) -> Vec<(String, String)> {
        self.errors
            .as_ref()
            .map(ErrorMessages::error_messages)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_values() {
        let record = Record::from_json("FakeModel", json!({ "foo": "foowee", "bar": 7 }));
        assert_eq!(record.attribute("foo"), Some(json!("foowee")));
        assert_eq!(record.attribute("bar"), Some(json!(7)));
        assert_eq!(record.attribute("baz"), None);
        assert_eq!(record.type_name(), "FakeModel");
        assert_eq!(record.new_record(), None);
        assert!(record.errors().is_none());
    }

    #[test]
    fn test_record_non_object_json() {
        let record = Record::from_json("Thing", json!([1, 2]));
        assert_eq!(record.attribute("0"), None);
    }

    #[test]
    fn test_record_errors() {
        let mut errors = FieldErrors::new();
        errors.add("foo", "is invalid");
        let record = Record::new("Thing").set("foo", "x").with_errors(errors);

        assert!(record.errors().is_some_and(|e| e.on("foo")));
        assert_eq!(
            record.error_messages(),
            vec![("foo".to_string(), "is invalid".to_string())]
        );
        assert!(Record::new("Thing").error_messages().is_empty());
    }

    #[test]
    fn test_record_state() {
        assert_eq!(Record::new("A").new_record_state().new_record(), Some(true));
        assert_eq!(Record::new("A").persisted().new_record(), Some(false));
    }
}
