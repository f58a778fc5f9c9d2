//! Ordered HTML attribute sets and the merge rules between defaults and
//! caller overrides.

use indexmap::IndexMap;

/// Keys that configure a helper instead of becoming HTML attributes
pub const CONTROL_KEYS: [&str; 10] = [
    "label",
    "boolean",
    "on",
    "off",
    "include_blank",
    "prompt",
    "collection",
    "text_method",
    "value_method",
    "selected",
];

/// Attributes rendered as `key="key"` when truthy and omitted otherwise
pub const BOOLEAN_KEYS: [&str; 5] = ["checked", "selected", "multiple", "disabled", "readonly"];

/// A single attribute value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// Literal string value
    Text(String),
    /// Presence flag
    Flag(bool),
}

impl AttrValue {
    /// Whether the value counts as "on" for boolean attributes
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Flag(flag) => *flag,
            Self::Text(text) => !text.is_empty() && text != "false",
        }
    }

    /// String form, if this is a text value
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Flag(_) => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// Ordered mapping of attribute name to value
///
/// Insertion order is render order. Re-inserting an existing key keeps its
/// original position.
///
/// # Examples
///
/// ```rust
/// use acton_forms::attrs;
/// use acton_forms::forms::AttributeSet;
///
/// let defaults = attrs! { "type" => "text", "class" => "input" };
/// let overrides = attrs! { "class" => "wide", "value" => "x" };
/// let merged = AttributeSet::merge(&defaults, &overrides);
///
/// assert_eq!(merged.text("class"), Some("input wide"));
/// assert_eq!(merged.keys().collect::<Vec<_>>(), ["type", "class", "value"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSet {
    entries: IndexMap<String, AttrValue>,
}

impl AttributeSet {
    /// Create an empty attribute set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace an attribute
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Insert only when the attribute is not already present
    pub fn insert_default(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.entries.entry(name.into()).or_insert_with(|| value.into());
    }

    /// Remove an attribute, preserving the order of the rest
    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        self.entries.shift_remove(name)
    }

    /// Remove an attribute and return its text form
    pub fn remove_text(&mut self, name: &str) -> Option<String> {
        match self.remove(name)? {
            AttrValue::Text(text) => Some(text),
            AttrValue::Flag(_) => None,
        }
    }

    /// Look up a raw value
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries.get(name)
    }

    /// Look up a text value
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(AttrValue::as_text)
    }

    /// Whether an attribute is present
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of attributes
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Attribute names in render order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Attributes in render order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Append a class token after any existing classes
    pub fn add_class(&mut self, token: &str) {
        let joined = join_classes(self.text("class"), Some(token));
        self.insert("class", joined);
    }

    /// Put a class token in front of any existing classes
    pub fn prepend_class(&mut self, token: &str) {
        let joined = join_classes(Some(token), self.text("class"));
        self.insert("class", joined);
    }

    /// Merge caller overrides onto defaults
    ///
    /// Overrides win on collision, except `class`, whose tokens are
    /// concatenated (defaults first).
    #[must_use]
    pub fn merge(defaults: &Self, overrides: &Self) -> Self {
        let mut merged = defaults.clone();
        for (name, value) in overrides.iter() {
            if name == "class" {
                if let (Some(base), Some(extra)) = (merged.text("class"), value.as_text()) {
                    let joined = join_classes(Some(base), Some(extra));
                    merged.insert("class", joined);
                    continue;
                }
            }
            merged.insert(name, value.clone());
        }
        merged
    }

    /// Strip every control key out of the set
    pub fn take_control(&mut self) -> ControlOptions {
        let options = ControlOptions {
            label: self.remove_text("label"),
            boolean: self.remove("boolean").map(|v| v.is_truthy()),
            on: self.remove_text("on"),
            off: self.remove_text("off"),
            include_blank: self.remove("include_blank").is_some_and(|v| v.is_truthy()),
            prompt: self.remove_text("prompt"),
            text_method: self.remove_text("text_method"),
            value_method: self.remove_text("value_method"),
            selected: self.remove_text("selected"),
        };
        // `collection` only carries meaning as a typed argument
        self.remove("collection");
        options
    }
}

impl<K, V> FromIterator<(K, V)> for AttributeSet
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (name, value) in iter {
            set.insert(name, value);
        }
        set
    }
}

/// Control options stripped from an [`AttributeSet`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlOptions {
    /// Text of the `<label>` rendered before the control
    pub label: Option<String>,
    /// Whether a checkbox uses on/off values
    pub boolean: Option<bool>,
    /// Checkbox "on" value
    pub on: Option<String>,
    /// Checkbox "off" value
    pub off: Option<String>,
    /// Prepend an empty option
    pub include_blank: bool,
    /// Prepend an empty option carrying this text
    pub prompt: Option<String>,
    /// Accessor used for option text
    pub text_method: Option<String>,
    /// Accessor used for option values
    pub value_method: Option<String>,
    /// Value of the selected option
    pub selected: Option<String>,
}

fn join_classes(first: Option<&str>, second: Option<&str>) -> String {
    let mut tokens: Vec<&str> = Vec::new();
    for token in first
        .into_iter()
        .chain(second)
        .flat_map(str::split_whitespace)
    {
        if !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    tokens.join(" ")
}

/// Build an [`AttributeSet`] from `name => value` pairs
///
/// ```rust
/// use acton_forms::attrs;
///
/// let set = attrs! { "name" => "foo", "checked" => true };
/// assert_eq!(set.text("name"), Some("foo"));
/// assert!(attrs!().is_empty());
/// ```
#[macro_export]
macro_rules! attrs {
    () => {
        $crate::forms::AttributeSet::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut set = $crate::forms::AttributeSet::new();
        $(set.insert($name, $value);)+
        set
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs;

    #[test]
    fn test_override_wins() {
        let defaults = attrs! { "type" => "text", "value" => "a" };
        let overrides = attrs! { "value" => "b" };
        let merged = AttributeSet::merge(&defaults, &overrides);
        assert_eq!(merged.text("value"), Some("b"));
        assert_eq!(merged.keys().collect::<Vec<_>>(), ["type", "value"]);
    }

    #[test]
    fn test_class_concatenated() {
        let defaults = attrs! { "class" => "checkbox" };
        let overrides = attrs! { "class" => "big checkbox" };
        let merged = AttributeSet::merge(&defaults, &overrides);
        assert_eq!(merged.text("class"), Some("checkbox big"));
    }

    #[test]
    fn test_add_and_prepend_class() {
        let mut set = attrs! { "class" => "wide" };
        set.add_class("error");
        assert_eq!(set.text("class"), Some("wide error"));

        let mut set = attrs! { "class" => "checkbox" };
        set.prepend_class("error");
        assert_eq!(set.text("class"), Some("error checkbox"));

        let mut set = AttributeSet::new();
        set.add_class("error");
        assert_eq!(set.text("class"), Some("error"));
    }

    #[test]
    fn test_take_control_strips_reserved_keys() {
        let mut set = attrs! {
            "name" => "foo",
            "label" => "LABEL",
            "boolean" => false,
            "on" => "yes",
            "include_blank" => true,
            "selected" => "b",
            "collection" => "ignored",
        };
        let control = set.take_control();
        assert_eq!(set.keys().collect::<Vec<_>>(), ["name"]);
        assert_eq!(control.label.as_deref(), Some("LABEL"));
        assert_eq!(control.boolean, Some(false));
        assert_eq!(control.on.as_deref(), Some("yes"));
        assert!(control.include_blank);
        assert_eq!(control.selected.as_deref(), Some("b"));
        for key in CONTROL_KEYS {
            assert!(!set.contains(key));
        }
    }

    #[test]
    fn test_truthiness() {
        assert!(AttrValue::Flag(true).is_truthy());
        assert!(!AttrValue::Flag(false).is_truthy());
        assert!(AttrValue::from("checked").is_truthy());
        assert!(!AttrValue::from("false").is_truthy());
        assert!(!AttrValue::from("").is_truthy());
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut set = attrs! { "a" => "1", "b" => "2", "c" => "3" };
        set.remove("b");
        assert_eq!(set.keys().collect::<Vec<_>>(), ["a", "c"]);
    }
}
