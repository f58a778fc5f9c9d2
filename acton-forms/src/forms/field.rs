//! Field value types, input kinds and select option types

use heck::ToTitleCase;
use indexmap::IndexMap;
use serde_json::Value;

/// HTML input types emitted by the control library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputType {
    /// Text input (default)
    #[default]
    Text,
    /// Password input (masked, never pre-filled)
    Password,
    /// Hidden input
    Hidden,
    /// File upload
    File,
    /// Checkbox
    Checkbox,
    /// Radio button
    Radio,
    /// Submit button
    Submit,
}

impl InputType {
    /// Get the HTML type attribute value
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::Hidden => "hidden",
            Self::File => "file",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Submit => "submit",
        }
    }

    /// Whether a current value is rendered into the `value` attribute
    #[must_use]
    pub const fn renders_value(&self) -> bool {
        !matches!(self, Self::Password)
    }

    /// Whether a `<label>` may precede the control
    #[must_use]
    pub const fn takes_label(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

impl std::fmt::Display for InputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Render a field value as attribute text
///
/// `null` becomes the empty string; strings are used as-is; everything else
/// uses its JSON form.
#[must_use]
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Checkbox truthiness of a column value
///
/// `null`, `false`, `0` and `"0"` are false; everything else is true.
///
/// ```rust
/// use acton_forms::forms::checkbox_truthy;
/// use serde_json::json;
///
/// assert!(!checkbox_truthy(&json!(null)));
/// assert!(!checkbox_truthy(&json!("0")));
/// assert!(checkbox_truthy(&json!("1")));
/// ```
#[must_use]
pub fn checkbox_truthy(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => s != "0",
        _ => true,
    }
}

/// Humanize a key for display: underscores become spaces and every word is
/// capitalized (`some_snake_case_key` → `Some Snake Case Key`)
#[must_use]
pub fn humanize(key: &str) -> String {
    key.to_title_case()
}

/// Conversion of model attribute types into field values
///
/// Used by `#[derive(BoundObject)]` to read struct fields.
pub trait ToFieldValue {
    /// Convert to a field value
    fn to_field_value(&self) -> Value;
}

macro_rules! impl_to_field_value {
    ($($ty:ty),* $(,)?) => {
        $(impl ToFieldValue for $ty {
            fn to_field_value(&self) -> Value {
                Value::from(*self)
            }
        })*
    };
}

impl_to_field_value!(bool, i8, i16, i32, i64, u8, u16, u32, u64, isize, usize, f32, f64);

impl ToFieldValue for str {
    fn to_field_value(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl ToFieldValue for String {
    fn to_field_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl ToFieldValue for Value {
    fn to_field_value(&self) -> Value {
        self.clone()
    }
}

impl<T: ToFieldValue + ?Sized> ToFieldValue for &T {
    fn to_field_value(&self) -> Value {
        (**self).to_field_value()
    }
}

impl<T: ToFieldValue> ToFieldValue for Option<T> {
    fn to_field_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, ToFieldValue::to_field_value)
    }
}

/// One `<option>` of a select
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionEntry {
    /// Value attribute
    pub value: String,
    /// Display text
    pub text: String,
    /// Whether this option is selected
    pub selected: bool,
}

impl OptionEntry {
    /// Create an unselected option
    #[must_use]
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
            selected: false,
        }
    }
}

/// A labelled `<optgroup>` of options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionGroup {
    /// Humanized group label
    pub label: String,
    /// Options in the group
    pub entries: Vec<OptionEntry>,
}

/// Select choices, either flat or grouped
///
/// # Examples
///
/// ```rust
/// use acton_forms::forms::Choices;
///
/// let flat = Choices::from_pairs([("rabbit", "Rabbit"), ("horse", "Horse")]);
/// let grouped = Choices::grouped([
///     ("fruit", vec![("orange", "Orange")]),
///     ("root_vegetables", vec![("carrot", "Carrot")]),
/// ]);
///
/// assert_eq!(flat.len(), 2);
/// assert_eq!(grouped.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choices {
    /// Options without grouping
    Flat(Vec<OptionEntry>),
    /// Options nested in `<optgroup>`s
    Grouped(Vec<OptionGroup>),
}

impl Default for Choices {
    fn default() -> Self {
        Self::Flat(Vec::new())
    }
}

impl Choices {
    /// Flat choices from `(value, text)` pairs
    pub fn from_pairs<V, T>(pairs: impl IntoIterator<Item = (V, T)>) -> Self
    where
        V: Into<String>,
        T: Into<String>,
    {
        Self::Flat(
            pairs
                .into_iter()
                .map(|(value, text)| OptionEntry::new(value, text))
                .collect(),
        )
    }

    /// Grouped choices from a group key → pairs mapping
    ///
    /// Group labels are humanized from the keys.
    pub fn grouped<K, P, V, T>(groups: impl IntoIterator<Item = (K, P)>) -> Self
    where
        K: AsRef<str>,
        P: IntoIterator<Item = (V, T)>,
        V: Into<String>,
        T: Into<String>,
    {
        Self::Grouped(
            groups
                .into_iter()
                .map(|(key, pairs)| OptionGroup {
                    label: humanize(key.as_ref()),
                    entries: pairs
                        .into_iter()
                        .map(|(value, text)| OptionEntry::new(value, text))
                        .collect(),
                })
                .collect(),
        )
    }

    /// Number of top-level items (options or groups)
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Flat(entries) => entries.len(),
            Self::Grouped(groups) => groups.len(),
        }
    }

    /// Whether there are no choices
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Mark every option whose value equals `selected`
    #[must_use]
    pub fn select(mut self, selected: &str) -> Self {
        let mark = |entry: &mut OptionEntry| entry.selected = entry.value == selected;
        match &mut self {
            Self::Flat(entries) => entries.iter_mut().for_each(mark),
            Self::Grouped(groups) => groups
                .iter_mut()
                .flat_map(|group| group.entries.iter_mut())
                .for_each(mark),
        }
        self
    }
}

impl<V, T> From<Vec<(V, T)>> for Choices
where
    V: Into<String>,
    T: Into<String>,
{
    fn from(pairs: Vec<(V, T)>) -> Self {
        Self::from_pairs(pairs)
    }
}

impl<V, T> From<IndexMap<String, Vec<(V, T)>>> for Choices
where
    V: Into<String>,
    T: Into<String>,
{
    fn from(groups: IndexMap<String, Vec<(V, T)>>) -> Self {
        Self::grouped(groups)
    }
}
