//! Tag rendering to HTML
//!
//! Serializes a tag name plus an [`AttributeSet`] into markup with proper
//! escaping. Attribute order is the set's insertion order.

use std::borrow::Cow;

use super::attrs::{AttrValue, AttributeSet, BOOLEAN_KEYS};

/// Elements that never take content and always self-close
pub const VOID_ELEMENTS: [&str; 6] = ["input", "br", "hr", "img", "meta", "link"];

/// Whether `name` is a void element
#[must_use]
pub fn is_void(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

/// Render a complete tag
///
/// Void elements self-close and ignore `content`. Every other element gets
/// an open and a close tag, even with no content. `content` is markup and is
/// emitted verbatim.
///
/// # Examples
///
/// ```rust
/// use acton_forms::attrs;
/// use acton_forms::forms::render::tag;
///
/// assert_eq!(tag("input", &attrs! { "type" => "text" }, None), r#"<input type="text"/>"#);
/// assert_eq!(tag("textarea", &attrs!(), None), "<textarea></textarea>");
/// ```
#[must_use]
pub fn tag(name: &str, attrs: &AttributeSet, content: Option<&str>) -> String {
    let mut html = String::with_capacity(64);
    html.push('<');
    html.push_str(name);
    write_attrs(&mut html, attrs);
    if is_void(name) {
        html.push_str("/>");
        return html;
    }
    html.push('>');
    if let Some(content) = content {
        html.push_str(content);
    }
    html.push_str(&close_tag(name));
    html
}

/// Render only the opening tag
#[must_use]
pub fn open_tag(name: &str, attrs: &AttributeSet) -> String {
    let mut html = String::with_capacity(48);
    html.push('<');
    html.push_str(name);
    write_attrs(&mut html, attrs);
    html.push('>');
    html
}

/// Render a closing tag
#[must_use]
pub fn close_tag(name: &str) -> String {
    format!("</{name}>")
}

/// Render a tag whose content is plain text
#[must_use]
pub fn text_tag(name: &str, attrs: &AttributeSet, text: &str) -> String {
    tag(name, attrs, Some(&escape_html(text)))
}

/// Prefix `control` with `<label>text</label>` when a label is given
#[must_use]
pub fn with_label(label: Option<&str>, control: String) -> String {
    match label {
        Some(text) => {
            let mut html = text_tag("label", &AttributeSet::new(), text);
            html.push_str(&control);
            html
        }
        None => control,
    }
}

fn write_attrs(html: &mut String, attrs: &AttributeSet) {
    for (name, value) in attrs.iter() {
        if BOOLEAN_KEYS.contains(&name) {
            if value.is_truthy() {
                write_attr(html, name, name);
            }
            continue;
        }
        match value {
            AttrValue::Text(text) => write_attr(html, name, text),
            AttrValue::Flag(true) => write_attr(html, name, name),
            AttrValue::Flag(false) => {}
        }
    }
}

fn write_attr(html: &mut String, name: &str, value: &str) {
    html.push(' ');
    html.push_str(name);
    html.push_str("=\"");
    html.push_str(&escape_attr(value));
    html.push('"');
}

/// Escape a string for use in a double-quoted attribute value
#[must_use]
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(s)
}

/// Escape a string for use as element content
#[must_use]
pub fn escape_html(s: &str) -> Cow<'_, str> {
    html_escape::encode_text(s)
}
