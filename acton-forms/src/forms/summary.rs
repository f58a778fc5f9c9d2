//! Error summary block (`error_messages_for`)

use std::fmt;

use crate::config::ErrorSummarySettings;

use super::attrs::AttributeSet;
use super::error::ErrorMessages;
use super::render::{escape_html, tag, text_tag};
use super::view::FormView;

type HeaderFn<'f> = Box<dyn Fn(&[(String, String)]) -> String + 'f>;
type ItemFn<'f> = Box<dyn Fn(&str, &str) -> String + 'f>;

/// Customization of the summary block
///
/// The header and item renderers return markup; the defaults produce
/// `<h2>Form submittal failed because of N problems</h2>` and
/// `<li>field message</li>`.
///
/// # Examples
///
/// ```rust
/// use acton_forms::forms::{error_messages_for, ErrorSummary};
///
/// let errors = [("foo", "bar"), ("baz", "bat")];
/// let summary = ErrorSummary::new()
///     .class("foo")
///     .header(|errors| format!("<h5>{} errors</h5>", errors.len()))
///     .item(|field, message| format!("<li>{field}: {message}</li>"));
///
/// assert_eq!(
///     error_messages_for(&errors, &summary),
///     r#"<div class="foo"><h5>2 errors</h5><ul><li>foo: bar</li><li>baz: bat</li></ul></div>"#
/// );
/// ```
#[derive(Default)]
pub struct ErrorSummary<'f> {
    class: Option<String>,
    header: Option<HeaderFn<'f>>,
    item: Option<ItemFn<'f>>,
}

impl<'f> ErrorSummary<'f> {
    /// Summary with default class, header and items
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// CSS class of the wrapping `<div>`
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Custom header renderer; receives every error pair
    #[must_use]
    pub fn header(mut self, header: impl Fn(&[(String, String)]) -> String + 'f) -> Self {
        self.header = Some(Box::new(header));
        self
    }

    /// Custom item renderer; receives field and message, returns an `<li>`
    #[must_use]
    pub fn item(mut self, item: impl Fn(&str, &str) -> String + 'f) -> Self {
        self.item = Some(Box::new(item));
        self
    }

    /// Render the block, falling back to `default_class` for the `<div>`
    #[must_use]
    pub fn render<E: ErrorMessages + ?Sized>(&self, errors: &E, default_class: &str) -> String {
        let errors = errors.error_messages();
        if errors.is_empty() {
            return String::new();
        }

        let header = self
            .header
            .as_ref()
            .map_or_else(|| default_header(errors.len()), |header| header(errors.as_slice()));
        let items: String = errors
            .iter()
            .map(|(field, message)| match &self.item {
                Some(item) => item(field.as_str(), message.as_str()),
                None => text_tag(
                    "li",
                    &AttributeSet::new(),
                    &format!("{field} {message}"),
                ),
            })
            .collect();

        let mut content = header;
        content.push_str(&tag("ul", &AttributeSet::new(), Some(&items)));
        let class = self.class.as_deref().unwrap_or(default_class);
        tag("div", &AttributeSet::new().with("class", class), Some(&content))
    }
}

impl fmt::Debug for ErrorSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorSummary")
            .field("class", &self.class)
            .field("custom_header", &self.header.is_some())
            .field("custom_item", &self.item.is_some())
            .finish()
    }
}

fn default_header(count: usize) -> String {
    let noun = if count == 1 { "problem" } else { "problems" };
    format!(
        "<h2>{}</h2>",
        escape_html(&format!("Form submittal failed because of {count} {noun}"))
    )
}

/// Render an error summary with the built-in default class
///
/// Returns an empty string when there are no errors.
#[must_use]
pub fn error_messages_for<E: ErrorMessages + ?Sized>(errors: &E, summary: &ErrorSummary<'_>) -> String {
    summary.render(errors, &ErrorSummarySettings::default().class)
}

impl FormView<'_> {
    /// Render an error summary with the configured default class
    #[must_use]
    pub fn error_messages_for<E: ErrorMessages + ?Sized>(
        &self,
        errors: &E,
        summary: &ErrorSummary<'_>,
    ) -> String {
        summary.render(errors, &self.config.error_summary.class)
    }
}
