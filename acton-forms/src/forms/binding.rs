//! Bound objects and the binding context stack
//!
//! Bound controls resolve an attribute name against the object on top of the
//! stack. `form_for` and `fields_for` push scopes; the guards returned by
//! [`FormView`](super::FormView) pop them on every exit path.

use std::borrow::Cow;

use heck::ToSnakeCase;
use serde_json::Value;

use super::error::ErrorLookup;

/// A model object controls can be bound to
///
/// Only [`type_name`](Self::type_name) and [`attribute`](Self::attribute)
/// are required. The optional capabilities default to "not supported".
///
/// # Examples
///
/// ```rust
/// use std::borrow::Cow;
/// use acton_forms::forms::BoundObject;
/// use serde_json::{json, Value};
///
/// struct Widget {
///     name: String,
/// }
///
/// impl BoundObject for Widget {
///     fn type_name(&self) -> Cow<'_, str> {
///         Cow::Borrowed("Widget")
///     }
///
///     fn attribute(&self, name: &str) -> Option<Value> {
///         (name == "name").then(|| json!(self.name))
///     }
/// }
/// ```
pub trait BoundObject {
    /// Type name of the model, e.g. `FakeModel`
    fn type_name(&self) -> Cow<'_, str>;

    /// Current value of an attribute, `None` when there is no such accessor
    fn attribute(&self, name: &str) -> Option<Value>;

    /// Whether the object has not been persisted yet, `None` when unknown
    fn new_record(&self) -> Option<bool> {
        None
    }

    /// Error state, `None` when the object carries no error information
    fn errors(&self) -> Option<&dyn ErrorLookup> {
        None
    }

    /// String form used when the object itself is listed as a select option
    fn display_text(&self) -> String {
        self.type_name().into_owned()
    }
}

/// Parameter prefix derived from a type name (`FakeModel` → `fake_model`)
#[must_use]
pub fn model_name(type_name: &str) -> String {
    type_name.to_snake_case()
}

/// Optional capabilities of a bound object, resolved once when bound
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// Object exposes an error lookup
    pub errors: bool,
    /// Reported record state, `None` when the object cannot tell
    pub new_record: Option<bool>,
}

impl Capabilities {
    /// Probe an object's optional capabilities
    #[must_use]
    pub fn of(object: &dyn BoundObject) -> Self {
        Self {
            errors: object.errors().is_some(),
            new_record: object.new_record(),
        }
    }
}

/// One entry on the binding stack
#[derive(Clone)]
pub struct BindingScope<'a> {
    name: String,
    object: Option<&'a dyn BoundObject>,
    model_name: String,
    capabilities: Capabilities,
}

impl<'a> BindingScope<'a> {
    /// Create a scope for an object (or for nothing)
    #[must_use]
    pub fn new(name: impl Into<String>, object: Option<&'a dyn BoundObject>) -> Self {
        let name = name.into();
        let (model, capabilities) = object.map_or_else(
            || (model_name(&name), Capabilities::default()),
            |object| (model_name(&object.type_name()), Capabilities::of(object)),
        );
        Self {
            name,
            object,
            model_name: model,
            capabilities,
        }
    }

    /// Name the scope was entered under
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bound object, if any
    #[must_use]
    pub fn object(&self) -> Option<&'a dyn BoundObject> {
        self.object
    }

    /// Snake-cased model name used for `name`/`id` defaults
    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Capabilities resolved at binding time
    #[must_use]
    pub const fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Default `name` attribute for a bound attribute
    #[must_use]
    pub fn param_name(&self, attribute: &str) -> String {
        format!("{}[{attribute}]", self.model_name)
    }

    /// Default `id` attribute for a bound attribute
    #[must_use]
    pub fn dom_id(&self, attribute: &str) -> String {
        format!("{}_{attribute}", self.model_name)
    }

    /// Resolve an attribute against this scope's object
    #[must_use]
    pub fn resolve(&self, attribute: &str) -> Resolution {
        let Some(object) = self.object else {
            return Resolution::default();
        };
        let value = object.attribute(attribute).unwrap_or(Value::Null);
        let has_error = self.capabilities.errors
            && object.errors().is_some_and(|errors| errors.on(attribute));
        Resolution { value, has_error }
    }
}

impl std::fmt::Debug for BindingScope<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BindingScope")
            .field("name", &self.name)
            .field("bound", &self.object.is_some())
            .field("model_name", &self.model_name)
            .field("capabilities", &self.capabilities)
            .finish()
    }
}

/// Result of resolving an attribute
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolution {
    /// Current value (`null` when unbound or missing)
    pub value: Value,
    /// Whether the attribute has validation errors
    pub has_error: bool,
}

impl Resolution {
    /// Value as attribute text (`null` → empty string)
    #[must_use]
    pub fn text(&self) -> String {
        super::field::value_text(&self.value)
    }
}

/// Stack of binding scopes for one render pass
#[derive(Debug, Default, Clone)]
pub struct BindingContext<'a> {
    stack: Vec<BindingScope<'a>>,
}

impl<'a> BindingContext<'a> {
    /// Create an empty context
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a scope
    pub fn push(&mut self, name: impl Into<String>, object: Option<&'a dyn BoundObject>) {
        let scope = BindingScope::new(name, object);
        tracing::trace!(scope = scope.name(), depth = self.stack.len() + 1, "binding scope entered");
        self.stack.push(scope);
    }

    /// Leave the innermost scope
    pub fn pop(&mut self) -> Option<BindingScope<'a>> {
        let scope = self.stack.pop();
        if let Some(scope) = &scope {
            tracing::trace!(scope = scope.name(), depth = self.stack.len(), "binding scope left");
        }
        scope
    }

    /// Pop scopes until `depth` remain
    pub fn truncate(&mut self, depth: usize) {
        while self.stack.len() > depth {
            self.pop();
        }
    }

    /// Number of active scopes
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Innermost scope
    #[must_use]
    pub fn current_scope(&self) -> Option<&BindingScope<'a>> {
        self.stack.last()
    }

    /// Innermost bound object
    #[must_use]
    pub fn current(&self) -> Option<&'a dyn BoundObject> {
        self.current_scope().and_then(BindingScope::object)
    }

    /// Resolve an attribute against the innermost scope
    #[must_use]
    pub fn resolve(&self, attribute: &str) -> Resolution {
        self.current_scope()
            .map(|scope| scope.resolve(attribute))
            .unwrap_or_default()
    }
}
