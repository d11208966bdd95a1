use core::fmt::{self, Display};
use core::ops::Deref;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::error_formatter::ErrorFormatter;
use crate::types::{Error, ErrorVec};

/// Ordered collection of validation failures.
///
/// Errors are kept in evaluation order and never deduplicated. An empty
/// collection means the value is valid.
///
/// # Examples
///
/// ```
/// use rulechain::{Error, Errors};
///
/// let mut errors = Errors::new();
/// assert!(!errors.has_any());
///
/// errors.push(Error::new("required").with_field("Name"));
/// errors.push(Error::new("min").with_field("Age").with_param("min", 18));
///
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.to_string(), "required (field: Name); min (field: Age) {min: 18}");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Errors {
    items: ErrorVec<Error>,
}

impl Errors {
    /// Creates an empty collection.
    #[inline]
    pub fn new() -> Self {
        Self {
            items: ErrorVec::new(),
        }
    }

    /// Creates a collection holding exactly one error.
    #[inline]
    pub fn single(error: Error) -> Self {
        let mut items = ErrorVec::new();
        items.push(error);
        Self { items }
    }

    /// Appends an error at the end, keeping evaluation order.
    #[inline]
    pub fn push(&mut self, error: Error) {
        self.items.push(error);
    }

    /// Appends every error from `iter` in order.
    #[inline]
    pub fn extend<I: IntoIterator<Item = Error>>(&mut self, iter: I) {
        self.items.extend(iter);
    }

    /// Returns `true` if nothing was collected, i.e. the value is valid.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of collected errors.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if at least one error was collected.
    #[inline]
    pub fn has_any(&self) -> bool {
        !self.items.is_empty()
    }

    /// Returns `true` if any collected error is fatal.
    #[inline]
    pub fn has_fatal(&self) -> bool {
        self.items.iter().any(Error::is_fatal)
    }

    /// Iterates the errors in evaluation order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Error> {
        self.items.iter()
    }

    /// Mutable iteration, e.g. to re-root fields by hand.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, Error> {
        self.items.iter_mut()
    }

    /// Borrows the errors as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Error] {
        &self.items
    }

    /// Renders every error with `f` and joins the results with `separator`.
    ///
    /// An empty collection renders as the empty string.
    ///
    /// ```
    /// use rulechain::{Error, Errors};
    ///
    /// let errors: Errors = [
    ///     Error::new("required").with_field("Name"),
    ///     Error::new("min").with_field("Age"),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// let out = errors.format(|e| format!("{}: {}", e.field(), e.code()), " | ");
    /// assert_eq!(out, "Name: required | Age: min");
    /// ```
    pub fn format<F>(&self, f: F, separator: &str) -> String
    where
        F: Fn(&Error) -> String,
    {
        match self.items.as_slice() {
            [] => String::new(),
            [only] => f(only),
            many => many.iter().map(f).collect::<Vec<_>>().join(separator),
        }
    }

    /// Renders the collection through an [`ErrorFormatter`].
    pub fn format_with<F: ErrorFormatter>(&self, formatter: &F) -> String {
        formatter.format_all(self.items.iter())
    }

    /// Joins every [`Error::describe`] output with `separator`.
    pub fn describe(&self, separator: &str) -> String {
        self.format(Error::describe, separator)
    }

    /// Converts into a `Result`, `Ok(())` when no errors were collected.
    #[inline]
    pub fn into_result(self) -> Result<(), Errors> {
        if self.items.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Consumes the collection, returning the underlying [`ErrorVec`].
    #[inline]
    pub fn into_inner(self) -> ErrorVec<Error> {
        self.items
    }

    /// Emits one `debug` event per error on the current span.
    #[cfg(feature = "tracing")]
    pub fn trace(&self) {
        for error in &self.items {
            tracing::debug!(
                code = error.code(),
                field = error.field(),
                fatal = error.is_fatal(),
                "validation failure"
            );
        }
    }
}

impl Deref for Errors {
    type Target = [Error];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe("; "))
    }
}

impl std::error::Error for Errors {}

impl From<Error> for Errors {
    fn from(error: Error) -> Self {
        Self::single(error)
    }
}

impl From<ErrorVec<Error>> for Errors {
    fn from(items: ErrorVec<Error>) -> Self {
        Self { items }
    }
}

impl From<Vec<Error>> for Errors {
    fn from(items: Vec<Error>) -> Self {
        Self {
            items: ErrorVec::from_vec(items),
        }
    }
}

impl FromIterator<Error> for Errors {
    fn from_iter<I: IntoIterator<Item = Error>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl Extend<Error> for Errors {
    fn extend<I: IntoIterator<Item = Error>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl IntoIterator for Errors {
    type Item = Error;
    type IntoIter = smallvec::IntoIter<[Error; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a Error;
    type IntoIter = core::slice::Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
