use crate::types::Errors;

/// Anything that can validate a whole value and report path-qualified errors.
///
/// Implemented by [`RuleChain`](crate::RuleChain),
/// [`SliceValidator`](crate::SliceValidator),
/// [`MapValidator`](crate::MapValidator),
/// [`StructValidator`](crate::StructValidator) and
/// [`Field`](crate::Field). The trait is object safe so validators of
/// different concrete types can be nested behind `Box<dyn Validator<T>>`.
///
/// Every error field is joined onto `prefix` with `.`, which lets callers
/// embed the output under a path of their choosing (for example the index of
/// a record inside a batch).
///
/// # Examples
///
/// ```
/// use rulechain::prelude::*;
///
/// let tags = SliceValidator::<&str>::new([slices::max_len(2)]);
/// let errors = tags.validate_with_prefix(&["a", "b", "c"][..], "batch.3.Tags");
///
/// assert_eq!(errors[0].field(), "batch.3.Tags");
/// assert_eq!(tags.validate(&["a"][..]), tags.validate_with_prefix(&["a"][..], ""));
/// ```
pub trait Validator<T: ?Sized> {
    /// Validates `value`, prefixing every reported field with `prefix`.
    fn validate_with_prefix(&self, value: &T, prefix: &str) -> Errors;

    /// Validates `value` relative to the root.
    #[inline]
    fn validate(&self, value: &T) -> Errors {
        self.validate_with_prefix(value, "")
    }

    /// Validates `value` and converts the outcome into a `Result`.
    #[inline]
    fn check(&self, value: &T) -> Result<(), Errors> {
        self.validate(value).into_result()
    }
}

impl<T: ?Sized, V: Validator<T> + ?Sized> Validator<T> for &V {
    #[inline]
    fn validate_with_prefix(&self, value: &T, prefix: &str) -> Errors {
        (**self).validate_with_prefix(value, prefix)
    }
}

impl<T: ?Sized, V: Validator<T> + ?Sized> Validator<T> for Box<V> {
    #[inline]
    fn validate_with_prefix(&self, value: &T, prefix: &str) -> Errors {
        (**self).validate_with_prefix(value, prefix)
    }
}

impl<T: ?Sized, V: Validator<T> + ?Sized> Validator<T> for std::sync::Arc<V> {
    #[inline]
    fn validate_with_prefix(&self, value: &T, prefix: &str) -> Errors {
        (**self).validate_with_prefix(value, prefix)
    }
}
