//! Validation of maps as a whole and entry by entry.
//!
//! Mirrors [`slices`](crate::validation::slices) over key/value pairs.
//! Entry-level errors are tagged with the key's string form. Rules see the
//! map through [`MapEntries`], so the same validator checks `HashMap` and
//! `BTreeMap` values.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//! use rulechain::prelude::*;
//!
//! let settings = MapValidator::<String, String>::new([
//!     maps::max_keys(2),
//!     maps::key("lang".to_string(), [common::one_of(["en".to_string(), "fr".to_string()])]),
//! ]);
//!
//! let value: HashMap<String, String> = [("lang".to_string(), "de".to_string())].into();
//! let errors = settings.validate_with_prefix(&value, "Settings");
//! assert_eq!(errors[0].code(), "one_of");
//! assert_eq!(errors[0].field(), "Settings.lang");
//! ```

use core::fmt::{self, Display};
use core::hash::Hash;
use std::collections::HashSet;
use std::sync::Arc;

use crate::macros::trace_fatal;
use crate::rule::Rule;
use crate::traits::{MapEntries, Validator};
use crate::types::{Error, Errors, ToParam};
use crate::validation::chain::run_rules;
use crate::validation::path::prefix_error;

type MapCheckFn<K, V> = dyn Fn(&dyn MapEntries<K, V>) -> Errors + Send + Sync;
type EntryCheckFn<K, V> = dyn Fn(&K, &V) -> Option<Error> + Send + Sync;

/// A rule over a whole map.
pub struct MapRule<K, V> {
    check: Arc<MapCheckFn<K, V>>,
}

impl<K, V> MapRule<K, V> {
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&dyn MapEntries<K, V>) -> Errors + Send + Sync + 'static,
    {
        Self {
            check: Arc::new(check),
        }
    }

    #[inline]
    pub fn check(&self, map: &dyn MapEntries<K, V>) -> Errors {
        (self.check)(map)
    }
}

impl<K, V> Clone for MapRule<K, V> {
    fn clone(&self) -> Self {
        Self {
            check: Arc::clone(&self.check),
        }
    }
}

impl<K, V> fmt::Debug for MapRule<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapRule").finish_non_exhaustive()
    }
}

/// A rule over a single `(key, value)` entry, used with [`for_each`].
pub struct EntryRule<K, V> {
    check: Arc<EntryCheckFn<K, V>>,
}

impl<K, V> EntryRule<K, V> {
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&K, &V) -> Option<Error> + Send + Sync + 'static,
    {
        Self {
            check: Arc::new(check),
        }
    }

    #[inline]
    pub fn check(&self, key: &K, value: &V) -> Option<Error> {
        (self.check)(key, value)
    }

    /// Lifts a value rule into an entry rule that ignores the key.
    pub fn from_value_rule(rule: Rule<V>) -> Self
    where
        K: 'static,
        V: 'static,
    {
        Self::new(move |_: &K, value: &V| rule.check(value))
    }
}

impl<K, V> Clone for EntryRule<K, V> {
    fn clone(&self) -> Self {
        Self {
            check: Arc::clone(&self.check),
        }
    }
}

impl<K, V> fmt::Debug for EntryRule<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryRule").finish_non_exhaustive()
    }
}

/// Validator for maps from `K` to `V`.
///
/// Implements [`Validator`] for every map type exposing [`MapEntries`].
/// Rules run in the order given; every error field is joined onto the
/// prefix; a fatal error stops the rules that follow it.
pub struct MapValidator<K, V> {
    rules: Vec<MapRule<K, V>>,
}

impl<K, V> MapValidator<K, V> {
    pub fn new<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = MapRule<K, V>>,
    {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn rule(mut self, rule: MapRule<K, V>) -> Self {
        self.rules.push(rule);
        self
    }
}

impl<K, V, M> Validator<M> for MapValidator<K, V>
where
    M: MapEntries<K, V>,
{
    fn validate_with_prefix(&self, map: &M, prefix: &str) -> Errors {
        let mut out = Errors::new();
        for rule in &self.rules {
            for error in rule.check(map) {
                let error = prefix_error(prefix, error);
                let fatal = error.is_fatal();
                if fatal {
                    trace_fatal!("map", error);
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

impl<K, V> Clone for MapValidator<K, V> {
    fn clone(&self) -> Self {
        Self::new(self.rules.iter().cloned())
    }
}

impl<K, V> Default for MapValidator<K, V> {
    fn default() -> Self {
        Self::new([])
    }
}

impl<K, V> fmt::Debug for MapValidator<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapValidator")
            .field("rules", &self.rules.len())
            .finish()
    }
}

fn count_error(code: &'static str, actual: usize) -> Error {
    Error::new(code).with_param("actual", actual)
}

/// Fails with code `min` if the map has fewer than `min` keys.
pub fn min_keys<K: 'static, V: 'static>(min: usize) -> MapRule<K, V> {
    MapRule::new(move |map: &dyn MapEntries<K, V>| {
        let actual = map.entry_count();
        if actual < min {
            count_error("min", actual).with_param("min", min).into()
        } else {
            Errors::new()
        }
    })
}

/// Fails with code `max` if the map has more than `max` keys.
pub fn max_keys<K: 'static, V: 'static>(max: usize) -> MapRule<K, V> {
    MapRule::new(move |map: &dyn MapEntries<K, V>| {
        let actual = map.entry_count();
        if actual > max {
            count_error("max", actual).with_param("max", max).into()
        } else {
            Errors::new()
        }
    })
}

/// Fails with code `length` unless the map has exactly `length` keys.
pub fn keys_len<K: 'static, V: 'static>(length: usize) -> MapRule<K, V> {
    MapRule::new(move |map: &dyn MapEntries<K, V>| {
        let actual = map.entry_count();
        if actual != length {
            count_error("length", actual)
                .with_param("length", length)
                .into()
        } else {
            Errors::new()
        }
    })
}

/// Fails with code `between` unless `min <= keys <= max`.
pub fn keys_between<K: 'static, V: 'static>(min: usize, max: usize) -> MapRule<K, V> {
    MapRule::new(move |map: &dyn MapEntries<K, V>| {
        let actual = map.entry_count();
        if actual < min || actual > max {
            count_error("between", actual)
                .with_param("min", min)
                .with_param("max", max)
                .into()
        } else {
            Errors::new()
        }
    })
}

fn first_key<K, V, I>(code: &'static str, set: I, expect_member: bool) -> MapRule<K, V>
where
    K: Eq + Hash + ToParam + Send + Sync + 'static,
    V: 'static,
    I: IntoIterator<Item = K>,
{
    let set: HashSet<K> = set.into_iter().collect();
    MapRule::new(move |map: &dyn MapEntries<K, V>| {
        map.entries()
            .find(|(key, _)| set.contains(*key) != expect_member)
            .map(|(key, _)| Errors::from(Error::new(code).with_param("value", key.to_param())))
            .unwrap_or_default()
    })
}

fn first_value<K, V, I>(code: &'static str, set: I, expect_member: bool) -> MapRule<K, V>
where
    K: 'static,
    V: Eq + Hash + ToParam + Send + Sync + 'static,
    I: IntoIterator<Item = V>,
{
    let set: HashSet<V> = set.into_iter().collect();
    MapRule::new(move |map: &dyn MapEntries<K, V>| {
        map.entries()
            .find(|(_, value)| set.contains(*value) != expect_member)
            .map(|(_, value)| Errors::from(Error::new(code).with_param("value", value.to_param())))
            .unwrap_or_default()
    })
}

/// Fails with code `one_of` if any key is not in `allowed`.
pub fn keys_one_of<K, V, I>(allowed: I) -> MapRule<K, V>
where
    K: Eq + Hash + ToParam + Send + Sync + 'static,
    V: 'static,
    I: IntoIterator<Item = K>,
{
    first_key("one_of", allowed, true)
}

/// Fails with code `not_one_of` if any key is in `disallowed`.
pub fn keys_not_one_of<K, V, I>(disallowed: I) -> MapRule<K, V>
where
    K: Eq + Hash + ToParam + Send + Sync + 'static,
    V: 'static,
    I: IntoIterator<Item = K>,
{
    first_key("not_one_of", disallowed, false)
}

/// Fails with code `one_of` if any value is not in `allowed`.
pub fn values_one_of<K, V, I>(allowed: I) -> MapRule<K, V>
where
    K: 'static,
    V: Eq + Hash + ToParam + Send + Sync + 'static,
    I: IntoIterator<Item = V>,
{
    first_value("one_of", allowed, true)
}

/// Fails with code `not_one_of` if any value is in `disallowed`.
pub fn values_not_one_of<K, V, I>(disallowed: I) -> MapRule<K, V>
where
    K: 'static,
    V: Eq + Hash + ToParam + Send + Sync + 'static,
    I: IntoIterator<Item = V>,
{
    first_value("not_one_of", disallowed, false)
}

/// Applies `rules` to every entry.
///
/// Each error's field is the key's string form. A fatal error stops the
/// whole iteration, including entries not yet visited.
pub fn for_each<K, V, I>(rules: I) -> MapRule<K, V>
where
    K: Display + 'static,
    V: 'static,
    I: IntoIterator<Item = EntryRule<K, V>>,
{
    let rules: Vec<EntryRule<K, V>> = rules.into_iter().collect();
    MapRule::new(move |map: &dyn MapEntries<K, V>| {
        let mut out = Errors::new();
        for (key, value) in map.entries() {
            for rule in &rules {
                if let Some(mut error) = rule.check(key, value) {
                    error.set_field(key.to_string());
                    let fatal = error.is_fatal();
                    if fatal {
                        trace_fatal!("map_entry", error);
                    }
                    out.push(error);
                    if fatal {
                        return out;
                    }
                }
            }
        }
        out
    })
}

/// Applies `rules` to the value stored under `key`.
///
/// A missing key produces a single `not_found` error with an empty field and
/// the key in its `key` param. Otherwise the rules run as a chain and their
/// errors are tagged with the key's string form.
pub fn key<K, V, I>(key: K, rules: I) -> MapRule<K, V>
where
    K: Display + ToParam + Send + Sync + 'static,
    V: 'static,
    I: IntoIterator<Item = Rule<V>>,
{
    let rules: Vec<Rule<V>> = rules.into_iter().collect();
    let field = key.to_string();
    MapRule::new(move |map: &dyn MapEntries<K, V>| match map.lookup(&key) {
        None => Error::new("not_found")
            .with_param("key", key.to_param())
            .into(),
        Some(value) => {
            let mut out = Errors::new();
            run_rules(&rules, value, &field, &mut out);
            out
        }
    })
}
