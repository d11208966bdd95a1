//! String rules.
//!
//! Every rule is generic over `T: AsRef<str> + ?Sized`, so the same
//! constructor works for `str`, `String` and `Cow<str>` fields. Lengths are
//! counted in `char`s, not bytes.

use regex::Regex;

use crate::rule::Rule;
use crate::types::Error;

#[inline]
fn rune_count(value: &str) -> usize {
    value.chars().count()
}

/// Fails with code `not_empty` on the empty string.
pub fn not_empty<T: AsRef<str> + ?Sized + 'static>() -> Rule<T> {
    Rule::new(|value: &T| value.as_ref().is_empty().then(|| Error::new("not_empty")))
}

/// Fails with code `min` if the string has fewer than `min` characters.
pub fn min_runes<T: AsRef<str> + ?Sized + 'static>(min: usize) -> Rule<T> {
    Rule::new(move |value: &T| {
        let actual = rune_count(value.as_ref());
        (actual < min).then(|| {
            Error::new("min")
                .with_param("min", min)
                .with_param("actual", actual)
        })
    })
}

/// Fails with code `max` if the string has more than `max` characters.
pub fn max_runes<T: AsRef<str> + ?Sized + 'static>(max: usize) -> Rule<T> {
    Rule::new(move |value: &T| {
        let actual = rune_count(value.as_ref());
        (actual > max).then(|| {
            Error::new("max")
                .with_param("max", max)
                .with_param("actual", actual)
        })
    })
}

/// Fails with code `between` unless `min <= chars <= max`.
pub fn runes_between<T: AsRef<str> + ?Sized + 'static>(min: usize, max: usize) -> Rule<T> {
    Rule::new(move |value: &T| {
        let actual = rune_count(value.as_ref());
        (actual < min || actual > max).then(|| {
            Error::new("between")
                .with_param("min", min)
                .with_param("max", max)
                .with_param("actual", actual)
        })
    })
}

/// Fails with code `regex` if the string does not match `regex`.
///
/// ```
/// use regex::Regex;
/// use rulechain::rules::strings;
///
/// let digits = strings::matches::<str>(Regex::new(r"^\d+$").unwrap());
/// assert!(digits.check("123").is_none());
/// assert_eq!(digits.check("12a").unwrap().to_string(), r"regex {pattern: ^\d+$}");
/// ```
pub fn matches<T: AsRef<str> + ?Sized + 'static>(regex: Regex) -> Rule<T> {
    Rule::new(move |value: &T| {
        (!regex.is_match(value.as_ref()))
            .then(|| Error::new("regex").with_param("pattern", regex.as_str()))
    })
}

/// Compiles `pattern` and builds a [`matches`] rule from it.
pub fn pattern<T: AsRef<str> + ?Sized + 'static>(pattern: &str) -> Result<Rule<T>, regex::Error> {
    Ok(matches(Regex::new(pattern)?))
}

/// Fails with code `contains` if the string does not contain `substring`.
pub fn contains<T: AsRef<str> + ?Sized + 'static>(substring: impl Into<String>) -> Rule<T> {
    let substring = substring.into();
    Rule::new(move |value: &T| {
        (!value.as_ref().contains(substring.as_str()))
            .then(|| Error::new("contains").with_param("substring", substring.as_str()))
    })
}
