//! Procedural macros for acton-forms
//!
//! Provides `#[derive(BoundObject)]`, which exposes a struct's named fields
//! to the bound form controls.

use proc_macro::TokenStream;

mod bound_object;

/// Derive `acton_forms::forms::BoundObject` for a struct with named fields
///
/// Every field becomes an attribute readable by bound controls (its type
/// must implement `ToFieldValue`), except fields carrying one of these
/// markers:
///
/// - `#[bound(skip)]` - not exposed
/// - `#[bound(errors)]` - the field implements `ErrorLookup` and backs
///   `errors()`
/// - `#[bound(new_record)]` - a `bool` field backing `new_record()`
///
/// `#[bound(display)]` on a field makes its value the object's display
/// text while keeping it exposed. On the struct, `#[bound(name = "...")]`
/// overrides the type name used for parameter names.
///
/// # Example
///
/// ```rust,ignore
/// use acton_forms::BoundObject;
/// use acton_forms::forms::FieldErrors;
///
/// #[derive(BoundObject)]
/// #[bound(name = "User")]
/// struct UserForm {
///     #[bound(display)]
///     email: String,
///     admin: bool,
///     #[bound(skip)]
///     password_hash: String,
///     #[bound(errors)]
///     errors: FieldErrors,
///     #[bound(new_record)]
///     new_record: bool,
/// }
/// ```
#[proc_macro_derive(BoundObject, attributes(bound))]
pub fn derive_bound_object(input: TokenStream) -> TokenStream {
    bound_object::derive(input)
}
