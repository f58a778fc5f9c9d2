//! Basic (unbound) controls
//!
//! Each function takes the caller's attributes, strips the control keys
//! and renders one control. Nothing here reads a bound object; the bound
//! variants live on [`FormView`](super::FormView).

use crate::config::CheckboxSettings;

use super::attrs::{AttributeSet, ControlOptions};
use super::field::{Choices, InputType};
use super::options::options_for_select;
use super::render::{tag, text_tag, with_label};

/// `<input type="text"/>`
///
/// ```rust
/// use acton_forms::attrs;
/// use acton_forms::forms::text_field;
///
/// assert_eq!(
///     text_field(attrs! { "name" => "foo", "value" => "bar" }),
///     r#"<input type="text" name="foo" value="bar"/>"#
/// );
/// assert_eq!(
///     text_field(attrs! { "label" => "LABEL" }),
///     r#"<label>LABEL</label><input type="text"/>"#
/// );
/// ```
#[must_use]
pub fn text_field(attrs: AttributeSet) -> String {
    input(InputType::Text, attrs)
}

/// `<input type="password"/>`; a `value` is never rendered
#[must_use]
pub fn password_field(attrs: AttributeSet) -> String {
    input(InputType::Password, attrs)
}

/// `<input type="hidden"/>`; never labelled
#[must_use]
pub fn hidden_field(attrs: AttributeSet) -> String {
    input(InputType::Hidden, attrs)
}

/// `<input type="file"/>`
#[must_use]
pub fn file_field(attrs: AttributeSet) -> String {
    input(InputType::File, attrs)
}

/// `<input type="radio"/>`
#[must_use]
pub fn radio_field(attrs: AttributeSet) -> String {
    input(InputType::Radio, attrs)
}

/// `<input type="submit"/>`, named `submit` unless the caller says otherwise
#[must_use]
pub fn submit_field(mut attrs: AttributeSet) -> String {
    attrs.insert_default("name", "submit");
    input(InputType::Submit, attrs)
}

/// `<input type="checkbox"/>` using the built-in on/off values
///
/// See [`checkbox_field_with`].
#[must_use]
pub fn checkbox_field(attrs: AttributeSet) -> String {
    checkbox_field_with(&CheckboxSettings::default(), attrs)
}

/// `<input type="checkbox"/>` with configured class and on/off values
///
/// In boolean mode (the default) a missing `value` is filled from the
/// on/off values according to `checked`. With `boolean => false` the
/// caller's `value` passes through untouched.
///
/// ```rust
/// use acton_forms::attrs;
/// use acton_forms::forms::checkbox_field;
///
/// assert_eq!(
///     checkbox_field(attrs! { "name" => "foo", "checked" => true }),
///     r#"<input type="checkbox" class="checkbox" name="foo" checked="checked" value="1"/>"#
/// );
/// ```
#[must_use]
pub fn checkbox_field_with(settings: &CheckboxSettings, mut attrs: AttributeSet) -> String {
    let control = attrs.take_control();
    if control.boolean.unwrap_or(true) && !attrs.contains("value") {
        let checked = attrs.get("checked").is_some_and(|v| v.is_truthy());
        let value = if checked {
            control.on.as_deref().unwrap_or(&settings.on)
        } else {
            control.off.as_deref().unwrap_or(&settings.off)
        };
        attrs.insert("value", value);
    }

    let defaults = AttributeSet::new()
        .with("type", InputType::Checkbox.as_str())
        .with("class", settings.class.as_str());
    let merged = AttributeSet::merge(&defaults, &attrs);
    with_label(control.label.as_deref(), tag("input", &merged, None))
}

/// `<textarea>` with escaped content
///
/// ```rust
/// use acton_forms::attrs;
/// use acton_forms::forms::text_area_field;
///
/// assert_eq!(
///     text_area_field(None, attrs! { "name" => "foo" }),
///     r#"<textarea name="foo"></textarea>"#
/// );
/// ```
#[must_use]
pub fn text_area_field(content: Option<&str>, mut attrs: AttributeSet) -> String {
    let control = attrs.take_control();
    let html = text_tag("textarea", &attrs, content.unwrap_or_default());
    with_label(control.label.as_deref(), html)
}

/// `<select>` populated from literal choices
///
/// `selected`, `include_blank` and `prompt` in `attrs` drive the options.
#[must_use]
pub fn select_field(choices: &Choices, mut attrs: AttributeSet) -> String {
    let control = attrs.take_control();
    select_markup(choices, &attrs, &control)
}

pub(crate) fn select_markup(
    choices: &Choices,
    attrs: &AttributeSet,
    control: &ControlOptions,
) -> String {
    let options = options_for_select(choices, control);
    with_label(control.label.as_deref(), tag("select", attrs, Some(&options)))
}

fn input(kind: InputType, mut attrs: AttributeSet) -> String {
    let control = attrs.take_control();
    if !kind.renders_value() {
        attrs.remove("value");
    }
    let defaults = AttributeSet::new().with("type", kind.as_str());
    let html = tag("input", &AttributeSet::merge(&defaults, &attrs), None);
    if kind.takes_label() {
        with_label(control.label.as_deref(), html)
    } else {
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs;

    #[test]
    fn test_text_field_attrs() {
        assert_eq!(
            text_field(attrs! { "name" => "foo", "value" => "bar" }),
            r#"<input type="text" name="foo" value="bar"/>"#
        );
    }

    #[test]
    fn test_password_drops_value() {
        assert_eq!(
            password_field(attrs! { "name" => "foo", "value" => "secret" }),
            r#"<input type="password" name="foo"/>"#
        );
        assert_eq!(
            password_field(attrs! { "label" => "LABEL" }),
            r#"<label>LABEL</label><input type="password"/>"#
        );
    }

    #[test]
    fn test_hidden_field_never_labelled() {
        assert_eq!(
            hidden_field(attrs! { "name" => "foo", "label" => "LABEL" }),
            r#"<input type="hidden" name="foo"/>"#
        );
    }

    #[test]
    fn test_file_field() {
        assert_eq!(
            file_field(attrs! { "name" => "upload", "label" => "LABEL" }),
            r#"<label>LABEL</label><input type="file" name="upload"/>"#
        );
    }

    #[test]
    fn test_radio_field() {
        assert_eq!(
            radio_field(attrs! { "name" => "choice", "value" => "a", "checked" => true }),
            r#"<input type="radio" name="choice" value="a" checked="checked"/>"#
        );
    }

    #[test]
    fn test_submit_field_defaults_name() {
        assert_eq!(
            submit_field(attrs! { "value" => "Go" }),
            r#"<input type="submit" value="Go" name="submit"/>"#
        );
        assert_eq!(
            submit_field(attrs! { "name" => "commit", "label" => "LABEL" }),
            r#"<label>LABEL</label><input type="submit" name="commit"/>"#
        );
    }

    #[test]
    fn test_checkbox_unchecked_gets_off_value() {
        assert_eq!(
            checkbox_field(attrs! { "name" => "foo" }),
            r#"<input type="checkbox" class="checkbox" name="foo" value="0"/>"#
        );
    }

    #[test]
    fn test_checkbox_custom_on_off() {
        let html = checkbox_field(attrs! {
            "name" => "foo",
            "checked" => "checked",
            "on" => "yes",
            "off" => "no",
        });
        assert!(html.contains(r#"value="yes""#));
        assert!(!html.contains("on="));
    }

    #[test]
    fn test_checkbox_non_boolean_passes_value() {
        let html = checkbox_field(attrs! { "name" => "foo", "boolean" => false, "value" => "bar" });
        assert_eq!(
            html,
            r#"<input type="checkbox" class="checkbox" name="foo" value="bar"/>"#
        );
        let html = checkbox_field(attrs! { "boolean" => false });
        assert!(!html.contains("value="));
    }

    #[test]
    fn test_checkbox_caller_class_appended() {
        let html = checkbox_field(attrs! { "class" => "big" });
        assert!(html.contains(r#"class="checkbox big""#));
    }

    #[test]
    fn test_checkbox_configured_class() {
        let settings = CheckboxSettings {
            class: "toggle".into(),
            ..CheckboxSettings::default()
        };
        let html = checkbox_field_with(&settings, attrs!());
        assert!(html.contains(r#"class="toggle""#));
    }

    #[test]
    fn test_text_area_content_escaped() {
        assert_eq!(
            text_area_field(Some("<b>&</b>"), attrs! { "name" => "foo", "label" => "LABEL" }),
            r#"<label>LABEL</label><textarea name="foo">&lt;b&gt;&amp;&lt;/b&gt;</textarea>"#
        );
    }

    #[test]
    fn test_select_field() {
        let choices = Choices::from_pairs([("a", "A"), ("b", "B")]);
        let html = select_field(
            &choices,
            attrs! { "name" => "letter", "selected" => "b", "include_blank" => true },
        );
        assert_eq!(
            html,
            concat!(
                r#"<select name="letter"><option value=""></option>"#,
                r#"<option value="a">A</option>"#,
                r#"<option value="b" selected="selected">B</option></select>"#,
            )
        );
    }
}
