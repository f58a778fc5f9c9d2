//! acton-forms: model-bound HTML form helpers
//!
//! Renders form controls as HTML strings, either from plain attribute sets
//! or bound to a model object whose values, record state and validation
//! errors drive the markup.
//!
//! # Quick Start
//!
//! ```rust
//! use acton_forms::prelude::*;
//!
//! #[derive(BoundObject)]
//! struct Article {
//!     title: String,
//!     published: bool,
//!     #[bound(new_record)]
//!     new_record: bool,
//! }
//!
//! let article = Article { title: "Hello".into(), published: true, new_record: false };
//!
//! let mut view = FormView::new();
//! view.form_for(ObjectRef::object(&article), FormOptions::new().action("/articles/1"), |form| {
//!     let title = form.text_control("title", attrs! { "label" => "Title" });
//!     let published = form.checkbox_control("published", attrs!());
//!     let submit = submit_field(attrs! { "value" => "Save" });
//!     form.push(&title);
//!     form.push(&published);
//!     form.push(&submit);
//! });
//!
//! let html = view.into_string();
//! assert!(html.contains(r#"<input type="hidden" name="_method" value="put"/>"#));
//! assert!(html.contains(r#"name="article[title]" id="article_title" value="Hello""#));
//! ```
//!
//! # Features
//!
//! - `derive` - `#[derive(BoundObject)]` (default)

// Lint configuration is handled at the workspace level in Cargo.toml
#![allow(clippy::missing_errors_doc)]

// Lets generated code name `::acton_forms` from inside this crate too
extern crate self as acton_forms;

pub mod config;
pub mod error;
pub mod forms;
pub mod observability;
pub mod testing;

#[cfg(feature = "derive")]
pub use acton_forms_macros::BoundObject;

// Paths used by `#[derive(BoundObject)]` expansions
#[doc(hidden)]
pub mod __private {
    pub use serde_json::Value;
}

pub mod prelude {
    //! Convenience re-exports for common types and traits
    //!
    //! # Examples
    //!
    //! ```rust
    //! use acton_forms::prelude::*;
    //! ```

    pub use crate::attrs;

    // Controls
    pub use crate::forms::{
        checkbox_field, file_field, hidden_field, options_for_select,
        options_from_collection_for_select, password_field, radio_field, select_field,
        submit_field, text_area_field, text_field,
    };

    // Binding and views
    pub use crate::forms::{
        AttributeSet, BoundObject, Choices, Collection, ErrorLookup, ErrorMessages,
        ErrorSummary, FieldErrors, FormMethod, FormOptions, FormView, ObjectRef, Record,
        ResourceRoutes, UrlBuilder,
    };

    #[cfg(feature = "derive")]
    pub use crate::BoundObject;

    // Configuration
    pub use crate::config::FormHelpersConfig;

    // Error types
    pub use crate::error::FormHelperError;

    // Re-export key dependencies
    pub use serde_json::json;
    pub use validator;
}
