//! Per-render view state
//!
//! A [`FormView`] owns the output buffer, the binding stack, the objects
//! assigned to the view and the URL builder. Block helpers hand out a
//! [`ViewScope`] guard; dropping it writes the closing tag and restores the
//! binding stack, so scopes are balanced on every exit path.

use std::borrow::Cow;
use std::fmt;
use std::ops::{Deref, DerefMut};

use indexmap::IndexMap;

use crate::config::FormHelpersConfig;

use super::binding::{BindingContext, BoundObject, Resolution};
use super::render::close_tag;
use super::url::{ResourceRoutes, UrlBuilder};

/// Append-only output buffer for one render pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputBuffer {
    html: String,
}

impl OutputBuffer {
    /// Create an empty buffer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append markup
    pub fn push(&mut self, markup: &str) {
        self.html.push_str(markup);
    }

    /// Markup written so far
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.html
    }

    /// Whether nothing has been written
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }

    /// Consume the buffer
    #[must_use]
    pub fn into_string(self) -> String {
        self.html
    }
}

impl fmt::Write for OutputBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push(s);
        Ok(())
    }
}

impl fmt::Display for OutputBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.html)
    }
}

/// How a block helper names the object it binds
///
/// A name is looked up among the objects assigned to the view; an object is
/// bound directly.
#[derive(Clone)]
pub enum ObjectRef<'a> {
    /// Look up an assigned object by name
    Named(Cow<'a, str>),
    /// Bind this object
    Object(&'a dyn BoundObject),
}

impl<'a> ObjectRef<'a> {
    /// Refer to an assigned object by name
    #[must_use]
    pub fn named(name: impl Into<Cow<'a, str>>) -> Self {
        Self::Named(name.into())
    }

    /// Refer to an object directly
    #[must_use]
    pub fn object<T: BoundObject>(object: &'a T) -> Self {
        Self::Object(object)
    }
}

impl<'a> From<&'a str> for ObjectRef<'a> {
    fn from(name: &'a str) -> Self {
        Self::Named(Cow::Borrowed(name))
    }
}

impl From<String> for ObjectRef<'_> {
    fn from(name: String) -> Self {
        Self::Named(Cow::Owned(name))
    }
}

impl<'a> From<&'a dyn BoundObject> for ObjectRef<'a> {
    fn from(object: &'a dyn BoundObject) -> Self {
        Self::Object(object)
    }
}

impl fmt::Debug for ObjectRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.debug_tuple("Named").field(name).finish(),
            Self::Object(object) => f.debug_tuple("Object").field(&object.type_name()).finish(),
        }
    }
}

/// Rendering state shared by every helper in one template render
///
/// # Examples
///
/// ```rust
/// use acton_forms::attrs;
/// use acton_forms::forms::{FormOptions, FormView, ObjectRef, Record};
///
/// let person = Record::new("Person").set("name", "Ada").persisted();
/// let mut view = FormView::new();
///
/// view.form_for(ObjectRef::object(&person), FormOptions::new().action("/people/1"), |form| {
///     let field = form.text_control("name", attrs!());
///     form.push(&field);
/// });
///
/// assert_eq!(
///     view.into_string(),
///     concat!(
///         r#"<form action="/people/1" method="post">"#,
///         r#"<input type="hidden" name="_method" value="put"/>"#,
///         r#"<input type="text" name="person[name]" id="person_name" value="Ada"/>"#,
///         "</form>",
///     )
/// );
/// ```
pub struct FormView<'a> {
    pub(crate) buffer: OutputBuffer,
    pub(crate) bindings: BindingContext<'a>,
    assigns: IndexMap<String, &'a dyn BoundObject>,
    pub(crate) routes: Box<dyn UrlBuilder + 'a>,
    pub(crate) config: FormHelpersConfig,
}

impl Default for FormView<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> FormView<'a> {
    /// View with default configuration and conventional resource routes
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(FormHelpersConfig::default())
    }

    /// View with the given configuration
    #[must_use]
    pub fn with_config(config: FormHelpersConfig) -> Self {
        Self {
            buffer: OutputBuffer::new(),
            bindings: BindingContext::new(),
            assigns: IndexMap::new(),
            routes: Box::new(ResourceRoutes::new()),
            config,
        }
    }

    /// Replace the URL builder used by `delete_button`
    #[must_use]
    pub fn with_routes(mut self, routes: impl UrlBuilder + 'a) -> Self {
        self.routes = Box::new(routes);
        self
    }

    /// Make an object available to block helpers by name
    pub fn assign<T: BoundObject>(&mut self, name: impl Into<String>, object: &'a T) {
        self.assigns.insert(name.into(), object);
    }

    /// Bind the initially active object
    ///
    /// Bound controls used outside any `form_for`/`fields_for` block resolve
    /// against it.
    pub fn bind<T: BoundObject>(&mut self, object: &'a T) {
        let name = super::binding::model_name(&object.type_name());
        self.bindings.push(name, Some(object));
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &FormHelpersConfig {
        &self.config
    }

    /// Binding stack
    #[must_use]
    pub const fn bindings(&self) -> &BindingContext<'a> {
        &self.bindings
    }

    /// Resolve an attribute against the current binding
    #[must_use]
    pub fn resolve(&self, attribute: &str) -> Resolution {
        self.bindings.resolve(attribute)
    }

    /// Append markup to the output
    pub fn push(&mut self, markup: &str) {
        self.buffer.push(markup);
    }

    /// Output written so far
    #[must_use]
    pub const fn buffer(&self) -> &OutputBuffer {
        &self.buffer
    }

    /// Consume the view, returning its output
    #[must_use]
    pub fn into_string(self) -> String {
        self.buffer.into_string()
    }

    /// Resolve a reference to a scope name and object
    ///
    /// Unknown names bind no object; controls in such a scope render with
    /// empty values.
    pub(crate) fn lookup(&self, target: ObjectRef<'a>) -> (String, Option<&'a dyn BoundObject>) {
        match target {
            ObjectRef::Object(object) => {
                let name = super::binding::model_name(&object.type_name());
                (name, Some(object))
            }
            ObjectRef::Named(name) => {
                let object = self.assigns.get(&*name).copied();
                if object.is_none() {
                    tracing::warn!(name = %name, "no object assigned under this name; binding nothing");
                }
                (name.into_owned(), object)
            }
        }
    }

    /// Enter a nested binding scope without emitting a wrapper
    ///
    /// The scope is left when the returned guard drops.
    pub fn enter_fields_for(&mut self, target: impl Into<ObjectRef<'a>>) -> ViewScope<'_, 'a> {
        let (name, object) = self.lookup(target.into());
        let depth = self.bindings.depth();
        self.bindings.push(name, object);
        ViewScope::new(self, Some(depth), None)
    }

    /// Rebind to another object for the duration of `body`
    ///
    /// Emits no wrapper markup.
    pub fn fields_for<R>(
        &mut self,
        target: impl Into<ObjectRef<'a>>,
        body: impl FnOnce(&mut FormView<'a>) -> R,
    ) -> R {
        let mut scope = self.enter_fields_for(target);
        body(&mut scope)
    }
}

impl fmt::Debug for FormView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormView")
            .field("buffer", &self.buffer)
            .field("bindings", &self.bindings)
            .field("assigns", &self.assigns.keys().collect::<Vec<_>>())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Guard for an open block helper
///
/// Derefs to the [`FormView`], so controls are rendered through it. On drop
/// it writes the pending closing tag, then pops binding scopes back to the
/// depth recorded on entry.
pub struct ViewScope<'v, 'a> {
    view: &'v mut FormView<'a>,
    depth: Option<usize>,
    close: Option<&'static str>,
}

impl<'v, 'a> ViewScope<'v, 'a> {
    pub(crate) fn new(
        view: &'v mut FormView<'a>,
        depth: Option<usize>,
        close: Option<&'static str>,
    ) -> Self {
        Self { view, depth, close }
    }

    /// Close the block now
    pub fn close(self) {}
}

impl<'a> Deref for ViewScope<'_, 'a> {
    type Target = FormView<'a>;

    fn deref(&self) -> &Self::Target {
        &*self.view
    }
}

impl DerefMut for ViewScope<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.view
    }
}

impl Drop for ViewScope<'_, '_> {
    fn drop(&mut self) {
        if let Some(name) = self.close.take() {
            self.view.buffer.push(&close_tag(name));
        }
        if let Some(depth) = self.depth.take() {
            self.view.bindings.truncate(depth);
        }
    }
}

impl fmt::Debug for ViewScope<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewScope")
            .field("depth", &self.depth)
            .field("close", &self.close)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::Record;
    use std::fmt::Write as _;

    #[test]
    fn test_output_buffer_write() {
        let mut buffer = OutputBuffer::new();
        assert!(buffer.is_empty());
        buffer.push("<p>");
        write!(buffer, "{}", 42).unwrap();
        buffer.push("</p>");
        assert_eq!(buffer.as_str(), "<p>42</p>");
        assert_eq!(buffer.to_string(), "<p>42</p>");
    }

    #[test]
    fn test_fields_for_restores_binding() {
        let outer = Record::new("Outer").set("foo", "outer");
        let inner = Record::new("Inner").set("foo", "inner");
        let mut view = FormView::new();
        view.bind(&outer);

        view.fields_for(ObjectRef::object(&inner), |scope| {
            assert_eq!(scope.resolve("foo").text(), "inner");
            assert_eq!(scope.bindings().depth(), 2);
        });

        assert_eq!(view.resolve("foo").text(), "outer");
        assert_eq!(view.bindings().depth(), 1);
    }

    #[test]
    fn test_scope_restored_on_panic() {
        let outer = Record::new("Outer").set("foo", "outer");
        let inner = Record::new("Inner").set("foo", "inner");
        let mut view = FormView::new();
        view.bind(&outer);

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            view.fields_for(ObjectRef::object(&inner), |_| panic!("body failed"));
        }));
        assert!(result.is_err());
        assert_eq!(view.resolve("foo").text(), "outer");
    }

    #[test]
    fn test_named_lookup() {
        let model = Record::new("FakeModel").set("foo", "foowee");
        let mut view = FormView::new();
        view.assign("obj", &model);

        view.fields_for("obj", |scope| {
            assert_eq!(scope.resolve("foo").text(), "foowee");
            let scope_name = scope.bindings().current_scope().map(|s| s.model_name().to_string());
            assert_eq!(scope_name.as_deref(), Some("fake_model"));
        });

        view.fields_for("missing", |scope| {
            assert_eq!(scope.resolve("foo").text(), "");
            let scope_name = scope.bindings().current_scope().map(|s| s.model_name().to_string());
            assert_eq!(scope_name.as_deref(), Some("missing"));
        });
    }

    #[test]
    fn test_explicit_close() {
        let model = Record::new("FakeModel");
        let mut view = FormView::new();
        let scope = view.enter_fields_for(ObjectRef::object(&model));
        scope.close();
        assert_eq!(view.bindings().depth(), 0);
    }
}
