//! Tag assertions over rendered markup

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z_:][-A-Za-z0-9_:.\[\]]*)="([^"]*)""#).expect("attribute pattern is valid")
});

/// Attributes of every `<name ...>` tag in `html`, in document order
///
/// Attribute values are entity-decoded.
///
/// # Panics
///
/// Panics if the tag name produces an invalid pattern, which cannot happen
/// since the name is escaped.
#[must_use]
pub fn find_tags(html: &str, name: &str) -> Vec<IndexMap<String, String>> {
    let pattern = format!(r"<{}(\s[^>]*?)?/?>", regex::escape(name));
    let tag = Regex::new(&pattern).expect("escaped tag pattern is valid");
    tag.captures_iter(html)
        .map(|captures| {
            let attrs = captures.get(1).map_or("", |m| m.as_str());
            ATTRIBUTE
                .captures_iter(attrs)
                .map(|attr| {
                    (
                        attr[1].to_string(),
                        html_escape::decode_html_entities(&attr[2]).into_owned(),
                    )
                })
                .collect()
        })
        .collect()
}

/// Whether `html` has a `<name>` tag carrying every expected attribute
#[must_use]
pub fn match_tag(html: &str, name: &str, expected: &[(&str, &str)]) -> bool {
    find_tags(html, name).iter().any(|attrs| {
        expected
            .iter()
            .all(|(key, value)| attrs.get(*key).is_some_and(|actual| actual == value))
    })
}

/// Assert that `html` has a `<name>` tag carrying every expected attribute
///
/// # Panics
///
/// Panics if no such tag exists
pub fn assert_tag(html: &str, name: &str, expected: &[(&str, &str)]) {
    assert!(
        match_tag(html, name, expected),
        "Expected <{name}> with attributes {expected:?} in:\n{html}"
    );
}

/// Assert that `html` has no `<name>` tag at all
///
/// # Panics
///
/// Panics if the tag is present
pub fn assert_no_tag(html: &str, name: &str) {
    let found = find_tags(html, name);
    assert!(
        found.is_empty(),
        "Expected no <{name}> tags, found {}:\n{html}",
        found.len()
    );
}
