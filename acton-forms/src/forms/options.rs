//! `<option>` generation for selects
//!
//! Choices come either as literal `(value, text)` pairs ([`Choices`]) or as
//! a [`Collection`] of bound objects read through accessor names.

use indexmap::IndexMap;
use serde_json::Value;

use super::attrs::{AttributeSet, ControlOptions};
use super::binding::BoundObject;
use super::field::{humanize, value_text, Choices, OptionEntry, OptionGroup};
use super::render::{tag, text_tag};

/// Bound objects offered as select options
pub enum Collection<'c> {
    /// Objects without grouping
    Flat(Vec<&'c dyn BoundObject>),
    /// Objects grouped under labels (humanized when rendered)
    Grouped(Vec<(String, Vec<&'c dyn BoundObject>)>),
}

impl<'c> Collection<'c> {
    /// Flat collection
    #[must_use]
    pub fn flat(items: impl IntoIterator<Item = &'c dyn BoundObject>) -> Self {
        Self::Flat(items.into_iter().collect())
    }

    /// Group objects by a key, keeping first-seen group order
    ///
    /// ```rust
    /// use acton_forms::forms::{BoundObject, Collection, Record};
    ///
    /// let mustang = Record::new("Car").set("make", "Ford").set("model", "Mustang");
    /// let commodore = Record::new("Car").set("make", "Holden").set("model", "Commodore");
    /// let items: Vec<&dyn BoundObject> = vec![&mustang, &commodore];
    ///
    /// let grouped = Collection::group_by(items, |car| {
    ///     car.attribute("make").and_then(|v| v.as_str().map(String::from)).unwrap_or_default()
    /// });
    /// assert!(matches!(grouped, Collection::Grouped(ref groups) if groups.len() == 2));
    /// ```
    pub fn group_by<F>(items: impl IntoIterator<Item = &'c dyn BoundObject>, key: F) -> Self
    where
        F: Fn(&dyn BoundObject) -> String,
    {
        let mut groups: IndexMap<String, Vec<&'c dyn BoundObject>> = IndexMap::new();
        for item in items {
            groups.entry(key(item)).or_default().push(item);
        }
        Self::Grouped(groups.into_iter().collect())
    }

    /// Read option values and texts through the given accessors
    ///
    /// A missing accessor name falls back to the object's display text.
    #[must_use]
    pub fn to_choices(&self, text_method: Option<&str>, value_method: Option<&str>) -> Choices {
        let entry = |item: &&'c dyn BoundObject| {
            let read = |method: Option<&str>| {
                method.map_or_else(
                    || item.display_text(),
                    |name| value_text(&item.attribute(name).unwrap_or(Value::Null)),
                )
            };
            OptionEntry::new(read(value_method), read(text_method))
        };
        match self {
            Self::Flat(items) => Choices::Flat(items.iter().map(&entry).collect()),
            Self::Grouped(groups) => Choices::Grouped(
                groups
                    .iter()
                    .map(|(label, items)| OptionGroup {
                        label: humanize(label),
                        entries: items.iter().map(&entry).collect(),
                    })
                    .collect(),
            ),
        }
    }
}

impl std::fmt::Debug for Collection<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flat(items) => f.debug_tuple("Flat").field(&items.len()).finish(),
            Self::Grouped(groups) => f
                .debug_tuple("Grouped")
                .field(&groups.iter().map(|(label, _)| label).collect::<Vec<_>>())
                .finish(),
        }
    }
}

/// Where a select's options come from
#[derive(Debug)]
pub enum SelectSource<'c> {
    /// Literal choices
    Choices(Choices),
    /// Bound objects read through `text_method` / `value_method`
    Collection(Collection<'c>),
}

impl Default for SelectSource<'_> {
    fn default() -> Self {
        Self::Choices(Choices::default())
    }
}

impl From<Choices> for SelectSource<'_> {
    fn from(choices: Choices) -> Self {
        Self::Choices(choices)
    }
}

impl<'c> From<Collection<'c>> for SelectSource<'c> {
    fn from(collection: Collection<'c>) -> Self {
        Self::Collection(collection)
    }
}

impl SelectSource<'_> {
    /// Normalize into choices
    #[must_use]
    pub fn into_choices(self, options: &ControlOptions) -> Choices {
        match self {
            Self::Choices(choices) => choices,
            Self::Collection(collection) => collection.to_choices(
                options.text_method.as_deref(),
                options.value_method.as_deref(),
            ),
        }
    }
}

/// Render `<option>` (and `<optgroup>`) tags for choices
///
/// `prompt` prepends an empty-valued option carrying the prompt text;
/// otherwise `include_blank` prepends an empty option. `selected` marks
/// matching values.
///
/// # Examples
///
/// ```rust
/// use acton_forms::forms::{options_for_select, Choices, ControlOptions};
///
/// let choices = Choices::from_pairs([("rabbit", "Rabbit"), ("chicken", "Chicken")]);
/// let html = options_for_select(
///     &choices,
///     &ControlOptions { selected: Some("rabbit".into()), ..Default::default() },
/// );
/// assert_eq!(
///     html,
///     r#"<option value="rabbit" selected="selected">Rabbit</option><option value="chicken">Chicken</option>"#
/// );
/// ```
#[must_use]
pub fn options_for_select(choices: &Choices, options: &ControlOptions) -> String {
    let mut html = String::with_capacity(64);
    if let Some(prompt) = &options.prompt {
        html.push_str(&text_tag("option", &blank_attrs(), prompt));
    } else if options.include_blank {
        html.push_str(&tag("option", &blank_attrs(), None));
    }

    let selected = options.selected.as_deref();
    match choices {
        Choices::Flat(entries) => write_entries(&mut html, entries, selected),
        Choices::Grouped(groups) => {
            for group in groups {
                let mut inner = String::new();
                write_entries(&mut inner, &group.entries, selected);
                let attrs = AttributeSet::new().with("label", group.label.as_str());
                html.push_str(&tag("optgroup", &attrs, Some(&inner)));
            }
        }
    }
    html
}

/// Render options for a collection of bound objects
#[must_use]
pub fn options_from_collection_for_select(
    collection: &Collection<'_>,
    options: &ControlOptions,
) -> String {
    let choices = collection.to_choices(
        options.text_method.as_deref(),
        options.value_method.as_deref(),
    );
    options_for_select(&choices, options)
}

fn blank_attrs() -> AttributeSet {
    AttributeSet::new().with("value", "")
}

fn write_entries(html: &mut String, entries: &[OptionEntry], selected: Option<&str>) {
    for entry in entries {
        let is_selected = entry.selected || selected == Some(entry.value.as_str());
        let attrs = AttributeSet::new()
            .with("value", entry.value.as_str())
            .with("selected", is_selected);
        html.push_str(&text_tag("option", &attrs, &entry.text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::Record;

    fn animals() -> Choices {
        Choices::from_pairs([("rabbit", "Rabbit"), ("horse", "Horse"), ("bird", "Bird")])
    }

    #[test]
    fn test_one_option_per_item() {
        let html = options_for_select(&animals(), &ControlOptions::default());
        assert_eq!(html.matches("<option").count(), 3);
        assert!(!html.contains("selected"));
    }

    #[test]
    fn test_include_blank() {
        let options = ControlOptions {
            include_blank: true,
            ..Default::default()
        };
        let html = options_for_select(&animals(), &options);
        assert!(html.starts_with(r#"<option value=""></option>"#));
    }

    #[test]
    fn test_prompt_wins_over_blank() {
        let options = ControlOptions {
            include_blank: true,
            prompt: Some("Choose".into()),
            ..Default::default()
        };
        let html = options_for_select(&Choices::default(), &options);
        assert_eq!(html, r#"<option value="">Choose</option>"#);
    }

    #[test]
    fn test_grouped_options() {
        let choices = Choices::grouped([
            ("fruit", vec![("orange", "Orange"), ("banana", "Banana")]),
            ("vegatables", vec![("corn", "Corn")]),
        ]);
        let options = ControlOptions {
            selected: Some("banana".into()),
            ..Default::default()
        };
        let html = options_for_select(&choices, &options);
        assert_eq!(
            html,
            concat!(
                r#"<optgroup label="Fruit"><option value="orange">Orange</option>"#,
                r#"<option value="banana" selected="selected">Banana</option></optgroup>"#,
                r#"<optgroup label="Vegatables"><option value="corn">Corn</option></optgroup>"#,
            )
        );
    }

    #[test]
    fn test_collection_accessors() {
        let first = Record::new("FakeModel").set("foo", "foowee").set("bar", 7);
        let second = Record::new("FakeModel2").set("foo", "foowee2").set("bar", "barbar");
        let collection = Collection::flat([&first as &dyn BoundObject, &second]);
        let options = ControlOptions {
            text_method: Some("foo".into()),
            value_method: Some("bar".into()),
            ..Default::default()
        };
        let html = options_from_collection_for_select(&collection, &options);
        assert!(html.contains(r#"<option value="7">foowee</option>"#));
        assert!(html.contains(r#"<option value="barbar">foowee2</option>"#));
    }

    #[test]
    fn test_collection_without_methods_uses_display_text() {
        let model = Record::new("FakeModel");
        let collection = Collection::flat([&model as &dyn BoundObject]);
        let html = options_from_collection_for_select(&collection, &ControlOptions::default());
        assert_eq!(html, r#"<option value="FakeModel">FakeModel</option>"#);
    }

    #[test]
    fn test_grouped_collection() {
        let mustang = Record::new("Car").set("make", "Ford").set("model", "Mustang").set("vin", "1");
        let falcon = Record::new("Car").set("make", "Ford").set("model", "Falcon").set("vin", "2");
        let commodore = Record::new("Car")
            .set("make", "Holden")
            .set("model", "Commodore")
            .set("vin", "3");
        let cars: Vec<&dyn BoundObject> = vec![&mustang, &falcon, &commodore];
        let collection = Collection::group_by(cars, |car| {
            value_text(&car.attribute("make").unwrap_or(Value::Null))
        });
        let options = ControlOptions {
            text_method: Some("model".into()),
            value_method: Some("vin".into()),
            selected: Some("1".into()),
            ..Default::default()
        };
        let html = options_from_collection_for_select(&collection, &options);
        assert_eq!(
            html,
            concat!(
                r#"<optgroup label="Ford"><option value="1" selected="selected">Mustang</option>"#,
                r#"<option value="2">Falcon</option></optgroup>"#,
                r#"<optgroup label="Holden"><option value="3">Commodore</option></optgroup>"#,
            )
        );
    }

    #[test]
    fn test_option_text_escaped() {
        let choices = Choices::from_pairs([("a&b", "<A & B>")]);
        let html = options_for_select(&choices, &ControlOptions::default());
        assert_eq!(html, r#"<option value="a&amp;b">&lt;A &amp; B&gt;</option>"#);
    }
}
