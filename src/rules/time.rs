//! Ordering rules for points in time.
//!
//! The rules are generic over any `PartialOrd + ToParam` type. With the
//! `chrono` feature, `DateTime<Tz>`, `NaiveDateTime` and `NaiveDate` are
//! reported as ISO 8601 text.

use crate::rule::Rule;
use crate::types::{Error, ToParam};

fn compare<T, F>(code: &'static str, reference: T, fails: F) -> Rule<T>
where
    T: PartialOrd + ToParam + Send + Sync + 'static,
    F: Fn(&T, &T) -> bool + Send + Sync + 'static,
{
    Rule::new(move |value: &T| {
        fails(value, &reference).then(|| Error::new(code).with_param("value", reference.to_param()))
    })
}

/// Fails with code `before` unless the value is strictly before `reference`.
pub fn before<T>(reference: T) -> Rule<T>
where
    T: PartialOrd + ToParam + Send + Sync + 'static,
{
    compare("before", reference, |value, reference| value >= reference)
}

/// Fails with code `before` if the value is after `reference`.
pub fn before_or_equal<T>(reference: T) -> Rule<T>
where
    T: PartialOrd + ToParam + Send + Sync + 'static,
{
    compare("before", reference, |value, reference| value > reference)
}

/// Fails with code `after` unless the value is strictly after `reference`.
pub fn after<T>(reference: T) -> Rule<T>
where
    T: PartialOrd + ToParam + Send + Sync + 'static,
{
    compare("after", reference, |value, reference| value <= reference)
}

/// Fails with code `after` if the value is before `reference`.
pub fn after_or_equal<T>(reference: T) -> Rule<T>
where
    T: PartialOrd + ToParam + Send + Sync + 'static,
{
    compare("after", reference, |value, reference| value < reference)
}

/// Fails with code `between` unless `start <= value <= end`.
pub fn between<T>(start: T, end: T) -> Rule<T>
where
    T: PartialOrd + ToParam + Send + Sync + 'static,
{
    Rule::new(move |value: &T| {
        (*value < start || *value > end).then(|| {
            Error::new("between")
                .with_param("min", start.to_param())
                .with_param("max", end.to_param())
                .with_param("value", value.to_param())
        })
    })
}
