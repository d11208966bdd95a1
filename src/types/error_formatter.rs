//! Formatting of error collections.

use crate::types::Error;

/// Trait for customizing how an [`Errors`](crate::Errors) collection renders.
///
/// Implementors override [`format_item`](ErrorFormatter::format_item) and
/// [`separator`](ErrorFormatter::separator); the provided
/// [`format_all`](ErrorFormatter::format_all) stitches them together.
pub trait ErrorFormatter {
    fn format_item(&self, error: &Error) -> String {
        error.describe()
    }

    fn separator(&self) -> &str {
        "; "
    }

    fn format_all<'a>(&self, errors: impl Iterator<Item = &'a Error>) -> String
    where
        Self: Sized,
    {
        errors
            .map(|error| self.format_item(error))
            .collect::<Vec<_>>()
            .join(self.separator())
    }
}

/// Configuration-based error formatter.
///
/// # Examples
///
/// ```
/// use rulechain::{Error, ErrorFormatConfig, Errors};
///
/// let errors: Errors = vec![
///     Error::new("required").with_field("Name"),
///     Error::new("min").with_field("Age").with_param("min", 18),
/// ]
/// .into();
///
/// assert_eq!(
///     errors.format_with(&ErrorFormatConfig::multiline()),
///     "- required (field: Name)\n- min (field: Age) {min: 18}"
/// );
/// assert_eq!(
///     errors.format_with(&ErrorFormatConfig::compact().without_params()),
///     "required (field: Name) | min (field: Age)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorFormatConfig {
    /// Placed between rendered errors.
    pub separator: String,
    /// Prepended to every rendered error, e.g. a bullet.
    pub item_prefix: Option<String>,
    /// Appended to every rendered error.
    pub item_suffix: Option<String>,
    /// Render the ` (field: ...)` part.
    pub show_field: bool,
    /// Render the ` {k: v}` part.
    pub show_params: bool,
}

impl Default for ErrorFormatConfig {
    fn default() -> Self {
        Self {
            separator: "; ".into(),
            item_prefix: None,
            item_suffix: None,
            show_field: true,
            show_params: true,
        }
    }
}

impl ErrorFormatConfig {
    /// Single line, items joined by `" | "`.
    #[inline]
    pub fn compact() -> Self {
        Self {
            separator: " | ".into(),
            ..Default::default()
        }
    }

    /// One `"- "` bulleted error per line.
    #[inline]
    pub fn multiline() -> Self {
        Self {
            separator: "\n".into(),
            item_prefix: Some("- ".into()),
            ..Default::default()
        }
    }

    #[inline]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    #[inline]
    pub fn without_field(mut self) -> Self {
        self.show_field = false;
        self
    }

    #[inline]
    pub fn without_params(mut self) -> Self {
        self.show_params = false;
        self
    }
}

impl ErrorFormatter for ErrorFormatConfig {
    fn format_item(&self, error: &Error) -> String {
        let mut result = String::new();
        if let Some(prefix) = &self.item_prefix {
            result.push_str(prefix);
        }

        result.push_str(error.code());
        if self.show_field && !error.field().is_empty() {
            result.push_str(" (field: ");
            result.push_str(error.field());
            result.push(')');
        }
        if self.show_params && !error.params().is_empty() {
            let params = error
                .params()
                .iter()
                .map(|(k, v)| format!("{k}: {v}"))
                .collect::<Vec<_>>()
                .join(", ");
            result.push_str(" {");
            result.push_str(&params);
            result.push('}');
        }

        if let Some(suffix) = &self.item_suffix {
            result.push_str(suffix);
        }
        result
    }

    fn separator(&self) -> &str {
        &self.separator
    }
}
