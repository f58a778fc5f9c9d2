//! Bound controls
//!
//! Same markup as the basic controls, but `name`, `id` and the current
//! value come from the object on top of the binding stack, and attributes
//! with errors get the configured error class.

use super::attrs::{AttributeSet, ControlOptions};
use super::controls::select_markup;
use super::field::{checkbox_truthy, humanize, InputType};
use super::options::SelectSource;
use super::render::{tag, text_tag, with_label};
use super::view::FormView;

/// Defaults computed for one bound control
struct Bound {
    name: String,
    id: String,
    value: String,
    raw: serde_json::Value,
    has_error: bool,
}

impl FormView<'_> {
    fn bound(&self, attribute: &str) -> Bound {
        let resolution = self.bindings.resolve(attribute);
        let (name, id) = self.bindings.current_scope().map_or_else(
            || (attribute.to_string(), attribute.to_string()),
            |scope| (scope.param_name(attribute), scope.dom_id(attribute)),
        );
        Bound {
            name,
            id,
            value: resolution.text(),
            raw: resolution.value,
            has_error: resolution.has_error,
        }
    }

    fn bound_input(&self, kind: InputType, attribute: &str, mut attrs: AttributeSet) -> String {
        let control = attrs.take_control();
        let bound = self.bound(attribute);

        let mut defaults = AttributeSet::new()
            .with("type", kind.as_str())
            .with("name", bound.name)
            .with("id", bound.id);
        if kind.renders_value() {
            defaults.insert("value", bound.value);
        } else {
            attrs.remove("value");
        }

        let mut merged = AttributeSet::merge(&defaults, &attrs);
        if bound.has_error {
            merged.add_class(&self.config.error_class);
        }
        let html = tag("input", &merged, None);
        if kind.takes_label() {
            with_label(control.label.as_deref(), html)
        } else {
            html
        }
    }

    /// Bound `<input type="text"/>`
    ///
    /// ```rust
    /// use acton_forms::attrs;
    /// use acton_forms::forms::{FormView, Record};
    ///
    /// let model = Record::new("FakeModel").set("foo", "foowee");
    /// let mut view = FormView::new();
    /// view.bind(&model);
    ///
    /// assert_eq!(
    ///     view.text_control("foo", attrs!()),
    ///     r#"<input type="text" name="fake_model[foo]" id="fake_model_foo" value="foowee"/>"#
    /// );
    /// ```
    #[must_use]
    pub fn text_control(&self, attribute: &str, attrs: AttributeSet) -> String {
        self.bound_input(InputType::Text, attribute, attrs)
    }

    /// Bound `<input type="password"/>`; the current value is never rendered
    #[must_use]
    pub fn password_control(&self, attribute: &str, attrs: AttributeSet) -> String {
        self.bound_input(InputType::Password, attribute, attrs)
    }

    /// Bound `<input type="hidden"/>`; never labelled
    #[must_use]
    pub fn hidden_control(&self, attribute: &str, attrs: AttributeSet) -> String {
        self.bound_input(InputType::Hidden, attribute, attrs)
    }

    /// Bound `<input type="file"/>`
    #[must_use]
    pub fn file_control(&self, attribute: &str, attrs: AttributeSet) -> String {
        self.bound_input(InputType::File, attribute, attrs)
    }

    /// Bound `<input type="checkbox"/>`
    ///
    /// Checked when the current value equals the on value, or otherwise
    /// coerces to true. The rendered `value` is the on or off value matching
    /// that state. With errors, the error class goes in front of the
    /// checkbox class.
    #[must_use]
    pub fn checkbox_control(&self, attribute: &str, mut attrs: AttributeSet) -> String {
        let control = attrs.take_control();
        let bound = self.bound(attribute);
        let settings = &self.config.checkbox;
        let on = control.on.as_deref().unwrap_or(&settings.on);
        let off = control.off.as_deref().unwrap_or(&settings.off);

        let checked = if bound.value == on {
            true
        } else if bound.value == off {
            false
        } else {
            checkbox_truthy(&bound.raw)
        };

        let defaults = AttributeSet::new()
            .with("type", InputType::Checkbox.as_str())
            .with("name", bound.name)
            .with("id", bound.id)
            .with("class", settings.class.as_str())
            .with("value", if checked { on } else { off })
            .with("checked", checked);

        let mut merged = AttributeSet::merge(&defaults, &attrs);
        if bound.has_error {
            merged.prepend_class(&self.config.error_class);
        }
        with_label(control.label.as_deref(), tag("input", &merged, None))
    }

    /// Bound `<input type="radio"/>` for one candidate value
    ///
    /// Checked when the current value equals `candidate`. The id gets the
    /// candidate appended so sibling radios stay distinct.
    #[must_use]
    pub fn radio_control(&self, attribute: &str, candidate: &str, mut attrs: AttributeSet) -> String {
        let control = attrs.take_control();
        let bound = self.bound(attribute);

        let defaults = AttributeSet::new()
            .with("type", InputType::Radio.as_str())
            .with("name", bound.name)
            .with("id", format!("{}_{}", bound.id, dom_token(candidate)))
            .with("value", candidate)
            .with("checked", bound.value == candidate);

        let mut merged = AttributeSet::merge(&defaults, &attrs);
        if bound.has_error {
            merged.add_class(&self.config.error_class);
        }
        with_label(control.label.as_deref(), tag("input", &merged, None))
    }

    /// One labelled radio per candidate
    ///
    /// Labels are the humanized candidates; the radio whose value equals the
    /// current value is checked.
    #[must_use]
    pub fn radio_group_control<S: AsRef<str>>(
        &self,
        attribute: &str,
        candidates: &[S],
        attrs: AttributeSet,
    ) -> String {
        candidates
            .iter()
            .map(|candidate| {
                let candidate = candidate.as_ref();
                let mut radio_attrs = attrs.clone();
                radio_attrs.insert("label", humanize(candidate));
                self.radio_control(attribute, candidate, radio_attrs)
            })
            .collect()
    }

    /// Bound `<textarea>` holding the escaped current value
    #[must_use]
    pub fn text_area_control(&self, attribute: &str, mut attrs: AttributeSet) -> String {
        let control = attrs.take_control();
        attrs.remove("value");
        let bound = self.bound(attribute);

        let defaults = AttributeSet::new()
            .with("name", bound.name)
            .with("id", bound.id);
        let mut merged = AttributeSet::merge(&defaults, &attrs);
        if bound.has_error {
            merged.add_class(&self.config.error_class);
        }
        with_label(
            control.label.as_deref(),
            text_tag("textarea", &merged, &bound.value),
        )
    }

    /// Bound `<select>`
    ///
    /// Options come from literal choices or a collection of objects; the
    /// option matching the current value is selected unless `selected` is
    /// given explicitly.
    #[must_use]
    pub fn select_control<'c>(
        &self,
        attribute: &str,
        source: impl Into<SelectSource<'c>>,
        mut attrs: AttributeSet,
    ) -> String {
        let mut control = attrs.take_control();
        let bound = self.bound(attribute);
        if control.selected.is_none() {
            control.selected = Some(bound.value);
        }
        let choices = source.into().into_choices(&control);

        let defaults = AttributeSet::new()
            .with("name", bound.name)
            .with("id", bound.id);
        let mut merged = AttributeSet::merge(&defaults, &attrs);
        if bound.has_error {
            merged.add_class(&self.config.error_class);
        }
        select_markup(&choices, &merged, &control)
    }

    /// Options for a bound select, without the `<select>` wrapper
    #[must_use]
    pub fn options_control<'c>(
        &self,
        attribute: &str,
        source: impl Into<SelectSource<'c>>,
        mut control: ControlOptions,
    ) -> String {
        if control.selected.is_none() {
            control.selected = Some(self.bound(attribute).value);
        }
        let choices = source.into().into_choices(&control);
        super::options::options_for_select(&choices, &control)
    }
}

/// Reduce a value to characters safe inside an id
fn dom_token(value: &str) -> String {
    value
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs;
    use crate::forms::{Choices, FieldErrors, Record};

    fn fake_model() -> Record {
        let mut errors = FieldErrors::new();
        errors.add("foobad", "is bad");
        errors.add("bazbad", "is bad");
        Record::new("FakeModel")
            .set("foo", "foowee")
            .set("foobad", "foowee")
            .set("bar", 7)
            .set("baz", true)
            .set("bat", false)
            .set("bazbad", true)
            .with_errors(errors)
    }

    #[test]
    fn test_text_control_error_class() {
        let model = fake_model();
        let mut view = FormView::new();
        view.bind(&model);
        assert_eq!(
            view.text_control("foobad", attrs! { "class" => "wide" }),
            r#"<input type="text" name="fake_model[foobad]" id="fake_model_foobad" value="foowee" class="wide error"/>"#
        );
    }

    #[test]
    fn test_password_control_hides_value() {
        let model = fake_model();
        let mut view = FormView::new();
        view.bind(&model);
        assert_eq!(
            view.password_control("foo", attrs! { "label" => "LABEL" }),
            r#"<label>LABEL</label><input type="password" name="fake_model[foo]" id="fake_model_foo"/>"#
        );
    }

    #[test]
    fn test_hidden_control_ignores_label() {
        let model = fake_model();
        let mut view = FormView::new();
        view.bind(&model);
        let html = view.hidden_control("foo", attrs! { "label" => "LABEL" });
        assert!(!html.contains("label"));
        assert!(html.contains(r#"value="foowee""#));
    }

    #[test]
    fn test_checkbox_control_states() {
        let model = fake_model();
        let mut view = FormView::new();
        view.bind(&model);

        assert_eq!(
            view.checkbox_control("baz", attrs!()),
            r#"<input type="checkbox" name="fake_model[baz]" id="fake_model_baz" class="checkbox" value="1" checked="checked"/>"#
        );
        assert_eq!(
            view.checkbox_control("bat", attrs!()),
            r#"<input type="checkbox" name="fake_model[bat]" id="fake_model_bat" class="checkbox" value="0"/>"#
        );
        assert!(view
            .checkbox_control("bazbad", attrs!())
            .contains(r#"class="error checkbox""#));
    }

    #[test]
    fn test_checkbox_control_custom_values() {
        let model = Record::new("FakeModel").set("flag", "yes").set("other", "no");
        let mut view = FormView::new();
        view.bind(&model);

        let html = view.checkbox_control("flag", attrs! { "on" => "yes", "off" => "no" });
        assert!(html.contains(r#"value="yes" checked="checked""#));
        let html = view.checkbox_control("other", attrs! { "on" => "yes", "off" => "no" });
        assert!(html.contains(r#"value="no""#));
        assert!(!html.contains("checked"));
    }

    #[test]
    fn test_radio_group() {
        let model = fake_model();
        let mut view = FormView::new();
        view.bind(&model);

        let html = view.radio_group_control("foo", &["foowee", "baree"], attrs!());
        assert_eq!(
            html,
            concat!(
                r#"<label>Foowee</label><input type="radio" name="fake_model[foo]" id="fake_model_foo_foowee" value="foowee" checked="checked"/>"#,
                r#"<label>Baree</label><input type="radio" name="fake_model[foo]" id="fake_model_foo_baree" value="baree"/>"#,
            )
        );
    }

    #[test]
    fn test_text_area_control() {
        let model = Record::new("FakeModel").set("foo", "a < b");
        let mut view = FormView::new();
        view.bind(&model);
        assert_eq!(
            view.text_area_control("foo", attrs!()),
            r#"<textarea name="fake_model[foo]" id="fake_model_foo">a &lt; b</textarea>"#
        );
    }

    #[test]
    fn test_select_control_selects_current() {
        let model = fake_model();
        let mut view = FormView::new();
        view.bind(&model);

        let choices = Choices::from_pairs([("foowee", "Foowee"), ("other", "Other")]);
        let html = view.select_control("foo", choices, attrs! { "prompt" => "Choose" });
        assert_eq!(
            html,
            concat!(
                r#"<select name="fake_model[foo]" id="fake_model_foo">"#,
                r#"<option value="">Choose</option>"#,
                r#"<option value="foowee" selected="selected">Foowee</option>"#,
                r#"<option value="other">Other</option></select>"#,
            )
        );
    }

    #[test]
    fn test_select_control_empty_source() {
        let model = fake_model();
        let mut view = FormView::new();
        view.bind(&model);
        assert_eq!(
            view.select_control("foo", SelectSource::default(), attrs!()),
            r#"<select name="fake_model[foo]" id="fake_model_foo"></select>"#
        );
    }

    #[test]
    fn test_unbound_control_uses_attribute_name() {
        let view = FormView::new();
        assert_eq!(
            view.text_control("foo", attrs!()),
            r#"<input type="text" name="foo" id="foo" value=""/>"#
        );
    }

    #[test]
    fn test_dom_token() {
        assert_eq!(dom_token("Foo Bar"), "foo_bar");
        assert_eq!(dom_token("a-1"), "a-1");
    }
}
