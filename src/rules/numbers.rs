//! Ordering rules for numbers.
//!
//! The bounds and the offending value are echoed back in the error params.
//! Sign rules compare against `T::default()`, the zero of every primitive
//! numeric type.

use crate::rule::Rule;
use crate::types::{Error, ToParam};

/// Fails with code `min` if the value is below `min`.
pub fn min<T>(min: T) -> Rule<T>
where
    T: PartialOrd + ToParam + Send + Sync + 'static,
{
    Rule::new(move |value: &T| {
        (*value < min).then(|| {
            Error::new("min")
                .with_param("min", min.to_param())
                .with_param("actual", value.to_param())
        })
    })
}

/// Fails with code `max` if the value is above `max`.
pub fn max<T>(max: T) -> Rule<T>
where
    T: PartialOrd + ToParam + Send + Sync + 'static,
{
    Rule::new(move |value: &T| {
        (*value > max).then(|| {
            Error::new("max")
                .with_param("max", max.to_param())
                .with_param("actual", value.to_param())
        })
    })
}

/// Fails with code `between` unless `min <= value <= max`.
pub fn between<T>(min: T, max: T) -> Rule<T>
where
    T: PartialOrd + ToParam + Send + Sync + 'static,
{
    Rule::new(move |value: &T| {
        (*value < min || *value > max).then(|| {
            Error::new("between")
                .with_param("min", min.to_param())
                .with_param("max", max.to_param())
                .with_param("actual", value.to_param())
        })
    })
}

fn sign_rule<T, F>(code: &'static str, fails: F) -> Rule<T>
where
    T: PartialOrd + Default + ToParam + Send + Sync + 'static,
    F: Fn(&T, &T) -> bool + Send + Sync + 'static,
{
    let zero = T::default();
    Rule::new(move |value: &T| {
        fails(value, &zero).then(|| Error::new(code).with_param("value", value.to_param()))
    })
}

/// Fails with code `positive` unless the value is strictly above zero.
pub fn positive<T>() -> Rule<T>
where
    T: PartialOrd + Default + ToParam + Send + Sync + 'static,
{
    sign_rule("positive", |value, zero| value <= zero)
}

/// Fails with code `negative` unless the value is strictly below zero.
pub fn negative<T>() -> Rule<T>
where
    T: PartialOrd + Default + ToParam + Send + Sync + 'static,
{
    sign_rule("negative", |value, zero| value >= zero)
}

/// Fails with code `non_negative` if the value is below zero.
pub fn non_negative<T>() -> Rule<T>
where
    T: PartialOrd + Default + ToParam + Send + Sync + 'static,
{
    sign_rule("non_negative", |value, zero| value < zero)
}

/// Fails with code `non_positive` if the value is above zero.
pub fn non_positive<T>() -> Rule<T>
where
    T: PartialOrd + Default + ToParam + Send + Sync + 'static,
{
    sign_rule("non_positive", |value, zero| value > zero)
}
