//! Form wrappers: `form_tag`, `form_for`, `fieldset` and `delete_button`
//!
//! Browsers only submit GET and POST. Any other verb is sent as POST with a
//! hidden override field (named by `method_param`, `_method` by default)
//! carrying the real verb.

use std::fmt;

use crate::error::Result;

use super::attrs::AttributeSet;
use super::binding::BoundObject;
use super::controls::hidden_field;
use super::render::{close_tag, open_tag, text_tag};
use super::view::{FormView, ObjectRef, ViewScope};

/// Encoding used for forms with file uploads
pub const MULTIPART: &str = "multipart/form-data";

/// Requested form method
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMethod {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT, sent as POST with an override field
    Put,
    /// DELETE, sent as POST with an override field
    Delete,
    /// Anything else; downgraded to a plain POST
    Other(String),
}

impl FormMethod {
    /// Parse a verb, case-insensitively
    ///
    /// ```rust
    /// use acton_forms::forms::FormMethod;
    ///
    /// assert_eq!(FormMethod::parse("PUT"), FormMethod::Put);
    /// assert_eq!(FormMethod::parse("get"), FormMethod::Get);
    /// assert_eq!(FormMethod::parse("dance"), FormMethod::Other("dance".into()));
    /// ```
    #[must_use]
    pub fn parse(verb: &str) -> Self {
        match http::Method::from_bytes(verb.to_ascii_uppercase().as_bytes()) {
            Ok(method) => Self::from(method),
            Err(_) => Self::Other(verb.to_ascii_lowercase()),
        }
    }

    /// Verb written into the form's `method` attribute
    #[must_use]
    pub const fn http_method(&self) -> &'static str {
        match self {
            Self::Get => "get",
            _ => "post",
        }
    }

    /// Verb carried by the hidden override field, if one is needed
    #[must_use]
    pub const fn override_verb(&self) -> Option<&'static str> {
        match self {
            Self::Put => Some("put"),
            Self::Delete => Some("delete"),
            _ => None,
        }
    }
}

impl From<http::Method> for FormMethod {
    fn from(method: http::Method) -> Self {
        if method == http::Method::GET {
            Self::Get
        } else if method == http::Method::POST {
            Self::Post
        } else if method == http::Method::PUT {
            Self::Put
        } else if method == http::Method::DELETE {
            Self::Delete
        } else {
            Self::Other(method.as_str().to_ascii_lowercase())
        }
    }
}

impl From<&str> for FormMethod {
    fn from(verb: &str) -> Self {
        Self::parse(verb)
    }
}

impl fmt::Display for FormMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => f.write_str("get"),
            Self::Post => f.write_str("post"),
            Self::Put => f.write_str("put"),
            Self::Delete => f.write_str("delete"),
            Self::Other(verb) => f.write_str(verb),
        }
    }
}

/// Options for a `<form>` wrapper
///
/// # Examples
///
/// ```rust
/// use acton_forms::forms::{FormMethod, FormOptions};
///
/// let options = FormOptions::new()
///     .action("/uploads")
///     .method("put")
///     .multipart()
///     .attr("class", "upload");
///
/// assert_eq!(options.requested_method(), Some(&FormMethod::Put));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormOptions {
    action: Option<String>,
    method: Option<FormMethod>,
    multipart: bool,
    attrs: AttributeSet,
}

impl FormOptions {
    /// Empty options: no action, method chosen by the helper
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the form action
    #[must_use]
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Request a method
    #[must_use]
    pub fn method(mut self, method: impl Into<FormMethod>) -> Self {
        self.method = Some(method.into());
        self
    }

    /// Send as `multipart/form-data`
    #[must_use]
    pub const fn multipart(mut self) -> Self {
        self.multipart = true;
        self
    }

    /// Add an extra attribute to the `<form>` tag
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: &str) -> Self {
        self.attrs.insert(name, value);
        self
    }

    /// Add extra attributes to the `<form>` tag
    #[must_use]
    pub fn attrs(mut self, attrs: AttributeSet) -> Self {
        self.attrs = AttributeSet::merge(&self.attrs, &attrs);
        self
    }

    /// Method explicitly requested, if any
    #[must_use]
    pub const fn requested_method(&self) -> Option<&FormMethod> {
        self.method.as_ref()
    }
}

impl<'a> FormView<'a> {
    fn open_form(&mut self, options: &FormOptions, fallback: FormMethod) {
        let method = options.method.clone().unwrap_or(fallback);
        if let FormMethod::Other(verb) = &method {
            tracing::debug!(verb = %verb, "unsupported form method, sending as post");
        }

        let mut defaults = AttributeSet::new();
        if let Some(action) = &options.action {
            defaults.insert("action", action);
        }
        defaults.insert("method", method.http_method());
        if options.multipart {
            defaults.insert("enctype", MULTIPART);
        }
        let mut attrs = AttributeSet::merge(&defaults, &options.attrs);
        attrs.insert("method", method.http_method());

        let mut html = open_tag("form", &attrs);
        if let Some(verb) = method.override_verb() {
            html.push_str(&self.method_override(verb));
        }
        self.buffer.push(&html);
    }

    fn method_override(&self, verb: &str) -> String {
        hidden_field(
            AttributeSet::new()
                .with("name", self.config.method_param.as_str())
                .with("value", verb),
        )
    }

    /// Open a `<form>`; the returned guard closes it
    ///
    /// The method defaults to POST.
    pub fn enter_form(&mut self, options: FormOptions) -> ViewScope<'_, 'a> {
        self.open_form(&options, FormMethod::Post);
        ViewScope::new(self, None, Some("form"))
    }

    /// Wrap `body`'s output in a `<form>`
    ///
    /// ```rust
    /// use acton_forms::forms::{FormOptions, FormView};
    ///
    /// let mut view = FormView::new();
    /// view.form_tag(FormOptions::new().action("/foo").method("put"), |form| {
    ///     form.push("CONTENT");
    /// });
    /// assert_eq!(
    ///     view.into_string(),
    ///     r#"<form action="/foo" method="post"><input type="hidden" name="_method" value="put"/>CONTENT</form>"#
    /// );
    /// ```
    pub fn form_tag<R>(&mut self, options: FormOptions, body: impl FnOnce(&mut FormView<'a>) -> R) -> R {
        let mut scope = self.enter_form(options);
        body(&mut scope)
    }

    /// Bind an object and open a `<form>` for it; the guard closes both
    ///
    /// Without an explicit method, new records POST and persisted records
    /// PUT. Objects that cannot report their state follow
    /// `unknown_record_state`.
    pub fn enter_form_for(
        &mut self,
        target: impl Into<ObjectRef<'a>>,
        options: FormOptions,
    ) -> ViewScope<'_, 'a> {
        let (name, object) = self.lookup(target.into());
        let depth = self.bindings.depth();
        self.bindings.push(name, object);

        let reported = self
            .bindings
            .current_scope()
            .and_then(|scope| scope.capabilities().new_record);
        let fallback = if self.config.unknown_record_state.is_new(reported) {
            FormMethod::Post
        } else {
            FormMethod::Put
        };
        self.open_form(&options, fallback);
        ViewScope::new(self, Some(depth), Some("form"))
    }

    /// Bind an object and wrap `body`'s output in a `<form>`
    pub fn form_for<R>(
        &mut self,
        target: impl Into<ObjectRef<'a>>,
        options: FormOptions,
        body: impl FnOnce(&mut FormView<'a>) -> R,
    ) -> R {
        let mut scope = self.enter_form_for(target, options);
        body(&mut scope)
    }

    /// Open a `<fieldset>` with an optional `<legend>`; the guard closes it
    pub fn enter_fieldset(&mut self, mut attrs: AttributeSet) -> ViewScope<'_, 'a> {
        let legend = attrs.remove_text("legend");
        let mut html = open_tag("fieldset", &attrs);
        if let Some(legend) = legend {
            html.push_str(&text_tag("legend", &AttributeSet::new(), &legend));
        }
        self.buffer.push(&html);
        ViewScope::new(self, None, Some("fieldset"))
    }

    /// Wrap `body`'s output in a `<fieldset>`
    ///
    /// A `legend` attribute becomes a `<legend>` element.
    pub fn fieldset<R>(&mut self, attrs: AttributeSet, body: impl FnOnce(&mut FormView<'a>) -> R) -> R {
        let mut scope = self.enter_fieldset(attrs);
        body(&mut scope)
    }

    /// A self-contained form that DELETEs `object`
    ///
    /// The action comes from the view's URL builder; `contents` defaults to
    /// the configured button text.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL builder cannot produce a path.
    ///
    /// ```rust
    /// use acton_forms::forms::{FormView, Record};
    ///
    /// let obj = Record::new("Obj").set("id", 5);
    /// let view = FormView::new();
    /// assert_eq!(
    ///     view.delete_button("obj", &obj, None).unwrap(),
    ///     concat!(
    ///         r#"<form action="/objs/5" method="post">"#,
    ///         r#"<input type="hidden" name="_method" value="delete"/>"#,
    ///         r#"<button type="submit">Delete</button></form>"#,
    ///     )
    /// );
    /// ```
    pub fn delete_button(
        &self,
        resource: &str,
        object: &dyn BoundObject,
        contents: Option<&str>,
    ) -> Result<String> {
        let action = self.routes.resource_path(resource, object)?;
        let method = FormMethod::Delete;

        let form_attrs = AttributeSet::new()
            .with("action", action)
            .with("method", method.http_method());
        let mut html = open_tag("form", &form_attrs);
        if let Some(verb) = method.override_verb() {
            html.push_str(&self.method_override(verb));
        }
        let text = contents.unwrap_or(&self.config.delete_button_text);
        html.push_str(&text_tag(
            "button",
            &AttributeSet::new().with("type", "submit"),
            text,
        ));
        html.push_str(&close_tag("form"));
        Ok(html)
    }
}

/// Self-contained `<form>` markup around prebuilt content
///
/// Usable without a [`FormView`]; no binding happens.
#[must_use]
pub fn form_tag_markup(options: &FormOptions, content: &str) -> String {
    let mut view = FormView::new();
    view.form_tag(options.clone(), |form| form.push(content));
    view.into_string()
}
