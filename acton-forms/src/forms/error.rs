//! Validation error state consumed by the helpers
//!
//! The helpers never run validation; they only read results. Two narrow
//! traits describe what they need: [`ErrorLookup`] to errorify a single
//! control, and [`ErrorMessages`] to render an error summary.

use indexmap::IndexMap;

/// Per-attribute error lookup used to decide whether a control gets the
/// error class
pub trait ErrorLookup {
    /// Whether `attribute` has at least one error
    fn on(&self, attribute: &str) -> bool;
}

/// Flat `(field label, message)` pairs rendered by `error_messages_for`
pub trait ErrorMessages {
    /// All error pairs in display order
    fn error_messages(&self) -> Vec<(String, String)>;
}

impl ErrorMessages for [(String, String)] {
    fn error_messages(&self) -> Vec<(String, String)> {
        self.to_vec()
    }
}

impl ErrorMessages for Vec<(String, String)> {
    fn error_messages(&self) -> Vec<(String, String)> {
        self.clone()
    }
}

impl ErrorMessages for [(&str, &str)] {
    fn error_messages(&self) -> Vec<(String, String)> {
        self.iter()
            .map(|(field, message)| ((*field).to_string(), (*message).to_string()))
            .collect()
    }
}

impl<const N: usize> ErrorMessages for [(&str, &str); N] {
    fn error_messages(&self) -> Vec<(String, String)> {
        self.as_slice().error_messages()
    }
}

/// Collection of validation errors keyed by attribute name
///
/// Insertion order of attributes is kept so summaries list errors in the
/// order they were recorded.
///
/// # Examples
///
/// ```rust
/// use acton_forms::forms::{ErrorLookup, ErrorMessages, FieldErrors};
///
/// let mut errors = FieldErrors::new();
/// errors.add("email", "is required");
/// errors.add("email", "must be a valid email address");
/// errors.add("password", "must be at least 8 characters");
///
/// assert!(errors.on("email"));
/// assert!(!errors.on("name"));
/// assert_eq!(errors.for_field("email").len(), 2);
/// assert_eq!(errors.error_messages()[0], ("email".into(), "is required".into()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: IndexMap<String, Vec<String>>,
}

impl FieldErrors {
    /// Empty collection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against an attribute
    pub fn add(&mut self, attribute: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(attribute.into())
            .or_default()
            .push(message.into());
    }

    /// Messages recorded for an attribute, empty when there are none
    #[must_use]
    pub fn for_field(&self, attribute: &str) -> &[String] {
        self.errors.get(attribute).map_or(&[], Vec::as_slice)
    }

    /// Attributes with their messages, in recording order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.errors
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl ErrorLookup for FieldErrors {
    fn on(&self, attribute: &str) -> bool {
        !self.for_field(attribute).is_empty()
    }
}

impl ErrorMessages for FieldErrors {
    fn error_messages(&self) -> Vec<(String, String)> {
        self.iter()
            .flat_map(|(attribute, messages)| {
                messages
                    .iter()
                    .map(move |message| (attribute.to_string(), message.clone()))
            })
            .collect()
    }
}

/// Messages fall back to the validation code when no message is set.
/// Attributes are sorted by name since the validator map is unordered.
impl From<validator::ValidationErrors> for FieldErrors {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut result = Self::new();
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));
        for (field, field_errors) in fields {
            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string);
                result.add(field.to_string(), message);
            }
        }
        result
    }
}
