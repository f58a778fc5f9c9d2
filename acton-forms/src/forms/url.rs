//! Resource URL building for `delete_button`

use indexmap::IndexMap;
use inflector::Inflector;

use crate::error::{FormHelperError, Result};

use super::binding::BoundObject;
use super::field::value_text;

/// Builds the member path of a resource, e.g. `/objs/5`
pub trait UrlBuilder {
    /// Path of `object` under the resource named `resource`
    ///
    /// # Errors
    ///
    /// Returns an error when no route exists for the resource or the object
    /// cannot be identified.
    fn resource_path(&self, resource: &str, object: &dyn BoundObject) -> Result<String>;
}

impl<F> UrlBuilder for F
where
    F: Fn(&str, &dyn BoundObject) -> Result<String>,
{
    fn resource_path(&self, resource: &str, object: &dyn BoundObject) -> Result<String> {
        self(resource, object)
    }
}

/// Conventional RESTful paths: `{prefix}/{plural}/{id}`
///
/// # Examples
///
/// ```rust
/// use acton_forms::forms::{Record, ResourceRoutes, UrlBuilder};
///
/// let routes = ResourceRoutes::new().resource("person", "/people");
/// let obj = Record::new("Obj").set("id", 5);
/// let person = Record::new("Person").set("id", 9);
///
/// assert_eq!(routes.resource_path("obj", &obj).unwrap(), "/objs/5");
/// assert_eq!(routes.resource_path("person", &person).unwrap(), "/people/9");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResourceRoutes {
    prefix: String,
    collections: IndexMap<String, String>,
    strict: bool,
}

impl ResourceRoutes {
    /// Routes with no prefix and no explicit collections
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount every derived path under `prefix`
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into().trim_end_matches('/').to_string();
        self
    }

    /// Register an explicit collection path for a resource
    #[must_use]
    pub fn resource(mut self, name: impl Into<String>, collection: impl Into<String>) -> Self {
        self.collections.insert(name.into(), collection.into());
        self
    }

    /// Only resolve registered resources
    #[must_use]
    pub const fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    fn collection_path(&self, resource: &str) -> Result<String> {
        if let Some(path) = self.collections.get(resource) {
            return Ok(path.trim_end_matches('/').to_string());
        }
        if self.strict {
            return Err(FormHelperError::NoRoute(resource.to_string()));
        }
        Ok(format!("{}/{}", self.prefix, resource.to_plural()))
    }
}

impl UrlBuilder for ResourceRoutes {
    fn resource_path(&self, resource: &str, object: &dyn BoundObject) -> Result<String> {
        let id = object
            .attribute("id")
            .map(|value| value_text(&value))
            .filter(|id| !id.is_empty())
            .ok_or_else(|| FormHelperError::MissingId(resource.to_string()))?;
        Ok(format!("{}/{id}", self.collection_path(resource)?))
    }
}
