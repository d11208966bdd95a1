//! Presence and membership rules that apply to any value type.

use core::hash::Hash;
use std::collections::HashSet;

use crate::rule::Rule;
use crate::traits::IsEmpty;
use crate::types::{Error, ToParam};

/// Fails with code `required` when the value is empty (see [`IsEmpty`]).
///
/// ```
/// use rulechain::rules::common::required;
///
/// let rule = required::<String>();
/// assert_eq!(rule.check(&String::new()).unwrap().code(), "required");
/// assert!(rule.check(&" ".to_string()).is_none());
/// ```
pub fn required<T: IsEmpty + ?Sized + 'static>() -> Rule<T> {
    Rule::new(|value: &T| value.is_empty_value().then(|| Error::new("required")))
}

/// Fails with code `required` when `is_empty` holds for the value.
pub fn required_by<T, P>(is_empty: P) -> Rule<T>
where
    T: ?Sized + 'static,
    P: Fn(&T) -> bool + Send + Sync + 'static,
{
    Rule::new(move |value: &T| is_empty(value).then(|| Error::new("required")))
}

/// Fails with code `zero` when the value equals `T::default()`.
pub fn not_zero<T>() -> Rule<T>
where
    T: Default + PartialEq + Send + Sync + 'static,
{
    let zero = T::default();
    Rule::new(move |value: &T| (*value == zero).then(|| Error::new("zero")))
}

/// Fails with code `zero` when `is_zero` holds for the value.
pub fn not_zero_by<T, P>(is_zero: P) -> Rule<T>
where
    T: ?Sized + 'static,
    P: Fn(&T) -> bool + Send + Sync + 'static,
{
    Rule::new(move |value: &T| is_zero(value).then(|| Error::new("zero")))
}

/// Fails with code `one_of` unless the value is in `allowed`.
///
/// The offending value is reported in the `value` param.
pub fn one_of<T, I>(allowed: I) -> Rule<T>
where
    T: Eq + Hash + ToParam + Send + Sync + 'static,
    I: IntoIterator<Item = T>,
{
    let allowed: HashSet<T> = allowed.into_iter().collect();
    Rule::new(move |value: &T| {
        (!allowed.contains(value))
            .then(|| Error::new("one_of").with_param("value", value.to_param()))
    })
}

/// Fails with code `not_one_of` if the value is in `disallowed`.
pub fn not_one_of<T, I>(disallowed: I) -> Rule<T>
where
    T: Eq + Hash + ToParam + Send + Sync + 'static,
    I: IntoIterator<Item = T>,
{
    let disallowed: HashSet<T> = disallowed.into_iter().collect();
    Rule::new(move |value: &T| {
        disallowed
            .contains(value)
            .then(|| Error::new("not_one_of").with_param("value", value.to_param()))
    })
}
