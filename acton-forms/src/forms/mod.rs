//! Form helpers: controls, bound controls and form wrappers
//!
//! This module provides:
//! - Basic controls (`text_field`, `checkbox_field`, `select_field`, ...)
//!   rendered from attribute sets
//! - Bound controls on [`FormView`] that read values and errors from the
//!   object in scope
//! - Block helpers (`form_tag`, `form_for`, `fields_for`, `fieldset`) with
//!   closure and guard forms
//! - Error summaries and `delete_button`
//!
//! # Quick Start
//!
//! ```rust
//! use acton_forms::attrs;
//! use acton_forms::forms::{FieldErrors, FormOptions, FormView, ObjectRef, Record};
//!
//! let mut errors = FieldErrors::new();
//! errors.add("email", "is invalid");
//!
//! let user = Record::new("User")
//!     .set("email", "nope")
//!     .set("admin", false)
//!     .with_errors(errors)
//!     .new_record_state();
//!
//! let mut view = FormView::new();
//! view.form_for(ObjectRef::object(&user), FormOptions::new().action("/users"), |form| {
//!     let email = form.text_control("email", attrs! { "label" => "Email" });
//!     let admin = form.checkbox_control("admin", attrs!());
//!     form.push(&email);
//!     form.push(&admin);
//! });
//!
//! let html = view.into_string();
//! assert!(html.starts_with(r#"<form action="/users" method="post">"#));
//! assert!(html.contains(r#"<label>Email</label><input type="text" name="user[email]" id="user_email" value="nope" class="error"/>"#));
//! assert!(html.ends_with("</form>"));
//! ```
//!
//! # Nested objects
//!
//! ```rust
//! use acton_forms::attrs;
//! use acton_forms::forms::{FormOptions, FormView, ObjectRef, Record};
//!
//! let person = Record::new("Person").set("name", "Ada").persisted();
//! let address = Record::new("Address").set("city", "London");
//!
//! let mut view = FormView::new();
//! view.form_for(ObjectRef::object(&person), FormOptions::new(), |form| {
//!     form.fields_for(ObjectRef::object(&address), |nested| {
//!         let city = nested.text_control("city", attrs!());
//!         nested.push(&city);
//!     });
//!     let name = form.text_control("name", attrs!());
//!     form.push(&name);
//! });
//!
//! let html = view.into_string();
//! assert!(html.contains(r#"name="address[city]""#));
//! assert!(html.contains(r#"name="person[name]""#));
//! ```

mod attrs;
mod binding;
mod bound;
mod controls;
mod error;
mod field;
mod options;
mod record;
pub mod render;
mod summary;
mod url;
mod view;
mod wrapper;

pub use attrs::{AttrValue, AttributeSet, ControlOptions, BOOLEAN_KEYS, CONTROL_KEYS};
pub use binding::{
    model_name, BindingContext, BindingScope, BoundObject, Capabilities, Resolution,
};
pub use controls::{
    checkbox_field, checkbox_field_with, file_field, hidden_field, password_field, radio_field,
    select_field, submit_field, text_area_field, text_field,
};
pub use error::{ErrorLookup, ErrorMessages, FieldErrors};
pub use field::{
    checkbox_truthy, humanize, value_text, Choices, InputType, OptionEntry, OptionGroup,
    ToFieldValue,
};
pub use options::{options_for_select, options_from_collection_for_select, Collection, SelectSource};
pub use record::Record;
pub use summary::{error_messages_for, ErrorSummary};
pub use url::{ResourceRoutes, UrlBuilder};
pub use view::{FormView, ObjectRef, OutputBuffer, ViewScope};
pub use wrapper::{form_tag_markup, FormMethod, FormOptions, MULTIPART};
