//! Validation of slices as a whole and element by element.
//!
//! A [`SliceValidator`] runs a list of [`SliceRule`]s, each looking at the
//! entire slice. Element-wise checks are expressed as slice rules too
//! ([`for_each`], [`at_index`]), tagging their errors with the element index.
//!
//! # Examples
//!
//! ```
//! use rulechain::prelude::*;
//!
//! let tags = SliceValidator::new([
//!     slices::max_len(3),
//!     slices::for_each([strings::not_empty::<String>()]),
//! ]);
//!
//! let value = vec!["a".to_string(), String::new()];
//! let errors = tags.validate_with_prefix(&value, "Tags");
//! assert_eq!(errors[0].field(), "Tags.1");
//! assert_eq!(errors[0].code(), "not_empty");
//! ```

use core::fmt;
use core::hash::Hash;
use std::collections::HashSet;
use std::sync::Arc;

use crate::macros::trace_fatal;
use crate::rule::Rule;
use crate::traits::Validator;
use crate::types::{Error, Errors, ToParam};
use crate::validation::chain::run_rules;
use crate::validation::path::prefix_error;

type SliceCheckFn<T> = dyn Fn(&[T]) -> Errors + Send + Sync;

/// A rule over a whole slice.
///
/// May report several errors. Fields are relative to the slice: empty for
/// the slice itself, an index for a single element.
pub struct SliceRule<T> {
    check: Arc<SliceCheckFn<T>>,
}

impl<T> SliceRule<T> {
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&[T]) -> Errors + Send + Sync + 'static,
    {
        Self {
            check: Arc::new(check),
        }
    }

    #[inline]
    pub fn check(&self, values: &[T]) -> Errors {
        (self.check)(values)
    }
}

impl<T> Clone for SliceRule<T> {
    fn clone(&self) -> Self {
        Self {
            check: Arc::clone(&self.check),
        }
    }
}

impl<T> fmt::Debug for SliceRule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceRule").finish_non_exhaustive()
    }
}

/// Validator for slices (and `Vec`s) of `T`.
///
/// Rules run in the order given. Every error field is joined onto the
/// prefix; a fatal error stops the rules that follow it.
pub struct SliceValidator<T> {
    rules: Vec<SliceRule<T>>,
}

impl<T> SliceValidator<T> {
    pub fn new<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = SliceRule<T>>,
    {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn rule(mut self, rule: SliceRule<T>) -> Self {
        self.rules.push(rule);
        self
    }
}

impl<T> Validator<[T]> for SliceValidator<T> {
    fn validate_with_prefix(&self, values: &[T], prefix: &str) -> Errors {
        let mut out = Errors::new();
        for rule in &self.rules {
            for error in rule.check(values) {
                let error = prefix_error(prefix, error);
                let fatal = error.is_fatal();
                if fatal {
                    trace_fatal!("slice", error);
                }
                out.push(error);
                if fatal {
                    return out;
                }
            }
        }
        out
    }
}

impl<T> Validator<Vec<T>> for SliceValidator<T> {
    #[inline]
    fn validate_with_prefix(&self, values: &Vec<T>, prefix: &str) -> Errors {
        <Self as Validator<[T]>>::validate_with_prefix(self, values.as_slice(), prefix)
    }
}

impl<T> Clone for SliceValidator<T> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
        }
    }
}

impl<T> Default for SliceValidator<T> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}

impl<T> fmt::Debug for SliceValidator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceValidator")
            .field("rules", &self.rules.len())
            .finish()
    }
}

fn length_error(code: &'static str, actual: usize) -> Error {
    Error::new(code).with_param("actual", actual)
}

/// Fails with code `min` if the slice has fewer than `min` elements.
pub fn min_len<T: 'static>(min: usize) -> SliceRule<T> {
    SliceRule::new(move |values: &[T]| {
        if values.len() < min {
            length_error("min", values.len()).with_param("min", min).into()
        } else {
            Errors::new()
        }
    })
}

/// Fails with code `max` if the slice has more than `max` elements.
pub fn max_len<T: 'static>(max: usize) -> SliceRule<T> {
    SliceRule::new(move |values: &[T]| {
        if values.len() > max {
            length_error("max", values.len()).with_param("max", max).into()
        } else {
            Errors::new()
        }
    })
}

/// Fails with code `between` unless `min <= len <= max`.
pub fn len_between<T: 'static>(min: usize, max: usize) -> SliceRule<T> {
    SliceRule::new(move |values: &[T]| {
        if values.len() < min || values.len() > max {
            length_error("between", values.len())
                .with_param("min", min)
                .with_param("max", max)
                .into()
        } else {
            Errors::new()
        }
    })
}

/// Fails with code `length` unless the slice has exactly `length` elements.
pub fn exact_len<T: 'static>(length: usize) -> SliceRule<T> {
    SliceRule::new(move |values: &[T]| {
        if values.len() != length {
            length_error("length", values.len())
                .with_param("length", length)
                .into()
        } else {
            Errors::new()
        }
    })
}

/// Applies `rules` to every element in index order.
///
/// Each error's field is the element index. A fatal error stops the whole
/// iteration: later rules and later elements are not checked.
///
/// ```
/// use rulechain::prelude::*;
///
/// let fatal_on_bad = Rule::new(|s: &&str| s.starts_with("bad").then(|| Error::new("bad")))
///     .stop_on_error();
/// let list = SliceValidator::new([slices::for_each([fatal_on_bad])]);
///
/// let errors = list.validate(&["ok", "bad-fatal", "bad-fatal2"][..]);
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].field(), "1");
/// ```
pub fn for_each<T, I>(rules: I) -> SliceRule<T>
where
    T: 'static,
    I: IntoIterator<Item = Rule<T>>,
{
    let rules: Vec<Rule<T>> = rules.into_iter().collect();
    SliceRule::new(move |values: &[T]| {
        let mut out = Errors::new();
        for (index, value) in values.iter().enumerate() {
            if run_rules(&rules, value, &index.to_string(), &mut out) {
                break;
            }
        }
        out
    })
}

/// Applies `rules` to the element at `index`.
///
/// An out-of-range index produces a single `index` error whose field is the
/// index and whose `index` param holds it; it never panics.
pub fn at_index<T, I>(index: usize, rules: I) -> SliceRule<T>
where
    T: 'static,
    I: IntoIterator<Item = Rule<T>>,
{
    let rules: Vec<Rule<T>> = rules.into_iter().collect();
    SliceRule::new(move |values: &[T]| {
        let field = index.to_string();
        let Some(value) = values.get(index) else {
            return Error::new("index")
                .with_field(field)
                .with_param("index", index)
                .into();
        };
        let mut out = Errors::new();
        run_rules(&rules, value, &field, &mut out);
        out
    })
}

/// Fails with code `unique` at the index of the first repeated element.
pub fn unique<T>() -> SliceRule<T>
where
    T: Eq + Hash + 'static,
{
    SliceRule::new(|values: &[T]| {
        let mut seen = HashSet::with_capacity(values.len());
        for (index, value) in values.iter().enumerate() {
            if !seen.insert(value) {
                return Error::new("unique").with_field(index.to_string()).into();
            }
        }
        Errors::new()
    })
}

/// Fails with code `contains` if `value` is not an element of the slice.
pub fn contains<T>(value: T) -> SliceRule<T>
where
    T: PartialEq + ToParam + Send + Sync + 'static,
{
    SliceRule::new(move |values: &[T]| {
        if values.contains(&value) {
            Errors::new()
        } else {
            Error::new("contains")
                .with_param("value", value.to_param())
                .into()
        }
    })
}

fn first_outside<T, I>(code: &'static str, set: I, expect_member: bool) -> SliceRule<T>
where
    T: Eq + Hash + ToParam + Send + Sync + 'static,
    I: IntoIterator<Item = T>,
{
    let set: HashSet<T> = set.into_iter().collect();
    SliceRule::new(move |values: &[T]| {
        for (index, value) in values.iter().enumerate() {
            if set.contains(value) != expect_member {
                return Error::new(code)
                    .with_field(index.to_string())
                    .with_param("value", value.to_param())
                    .into();
            }
        }
        Errors::new()
    })
}

/// Fails with code `one_of` at the first element not in `allowed`.
pub fn one_of<T, I>(allowed: I) -> SliceRule<T>
where
    T: Eq + Hash + ToParam + Send + Sync + 'static,
    I: IntoIterator<Item = T>,
{
    first_outside("one_of", allowed, true)
}

/// Fails with code `not_one_of` at the first element found in `disallowed`.
pub fn not_one_of<T, I>(disallowed: I) -> SliceRule<T>
where
    T: Eq + Hash + ToParam + Send + Sync + 'static,
    I: IntoIterator<Item = T>,
{
    first_outside("not_one_of", disallowed, false)
}

/// Like [`one_of`] but reports code `allowed`.
pub fn allowed<T, I>(allowed: I) -> SliceRule<T>
where
    T: Eq + Hash + ToParam + Send + Sync + 'static,
    I: IntoIterator<Item = T>,
{
    first_outside("allowed", allowed, true)
}

/// Like [`not_one_of`] but reports code `disallowed`.
pub fn disallowed<T, I>(disallowed: I) -> SliceRule<T>
where
    T: Eq + Hash + ToParam + Send + Sync + 'static,
    I: IntoIterator<Item = T>,
{
    first_outside("disallowed", disallowed, false)
}
