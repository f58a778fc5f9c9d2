//! Error types and error handling
//!
//! Rendering itself never fails; these errors cover the edges that talk to
//! collaborators (configuration sources and URL building).

use thiserror::Error;

/// Form helper error type
#[derive(Debug, Error)]
pub enum FormHelperError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    /// Default configuration could not be serialized
    #[error("Configuration serialization error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// No route is known for the resource
    #[error("No route for resource: {0}")]
    NoRoute(String),

    /// Object has no usable `id` attribute for building its path
    #[error("Resource `{0}` has no id")]
    MissingId(String),
}

impl From<figment::Error> for FormHelperError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

/// Result alias for fallible helper operations
pub type Result<T, E = FormHelperError> = std::result::Result<T, E>;
