//! Testing utilities for form helper output
//!
//! Rendered markup is compared structurally rather than as whole strings:
//! - [`match_tag`] / [`assert_tag`] look for a tag carrying a subset of
//!   attributes
//! - [`find_tags`] returns the attributes of every occurrence of a tag
//!
//! # Example
//!
//! ```rust
//! use acton_forms::attrs;
//! use acton_forms::forms::text_field;
//! use acton_forms::testing::assert_tag;
//!
//! let html = text_field(attrs! { "name" => "foo", "value" => "bar" });
//! assert_tag(&html, "input", &[("type", "text"), ("name", "foo")]);
//! ```

pub mod assertions;

pub use assertions::*;
