use crate::rule::Rule;
use crate::types::Error;

/// Code reported by [`not`] when the wrapped rule passes.
pub const NOT: &str = "not";

/// Inverts a rule.
///
/// The returned rule passes exactly when `rule` fails and fails with code
/// `"not"` (and no params) when `rule` passes. The wrapped rule's own error
/// is discarded.
///
/// ```
/// use rulechain::{not, rules::common};
///
/// let must_be_blank = not(common::required::<str>());
/// assert!(must_be_blank.check("").is_none());
/// assert_eq!(must_be_blank.check("hello").unwrap().code(), "not");
/// ```
pub fn not<T: ?Sized + 'static>(rule: Rule<T>) -> Rule<T> {
    Rule::new(move |value: &T| match rule.check(value) {
        Some(_) => None,
        None => Some(Error::new(NOT)),
    })
}

/// Marks any error produced by `rule` as fatal.
///
/// A fatal error stops the remaining rules of the chain it appears in (or
/// the remaining elements of a `for_each` iteration). Errors are otherwise
/// passed through untouched.
pub fn stop_on_error<T: ?Sized + 'static>(rule: Rule<T>) -> Rule<T> {
    Rule::new(move |value: &T| {
        rule.check(value).map(|mut error| {
            error.set_fatal(true);
            error
        })
    })
}

/// Passes if at least one of `rules` passes.
///
/// Rules run left to right and evaluation stops at the first success. When
/// every rule fails the error of the **last** rule is returned, not the
/// first and not an aggregate. An empty set of rules passes.
pub fn or<T, I>(rules: I) -> Rule<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = Rule<T>>,
{
    let rules: Vec<Rule<T>> = rules.into_iter().collect();
    Rule::new(move |value: &T| {
        let mut last = None;
        for rule in &rules {
            match rule.check(value) {
                None => return None,
                Some(error) => last = Some(error),
            }
        }
        last
    })
}

/// Applies `rule` only when `predicate` holds for the value.
///
/// ```
/// use rulechain::{when, rules::numbers};
///
/// let even_at_least_ten = when(|n: &i32| n % 2 == 0, numbers::min(10));
/// assert!(even_at_least_ten.check(&3).is_none());
/// assert!(even_at_least_ten.check(&4).is_some());
/// ```
pub fn when<T, P>(predicate: P, rule: Rule<T>) -> Rule<T>
where
    T: ?Sized + 'static,
    P: Fn(&T) -> bool + Send + Sync + 'static,
{
    Rule::new(move |value: &T| {
        if predicate(value) {
            rule.check(value)
        } else {
            None
        }
    })
}

/// Applies `rule` only when `predicate` does not hold for the value.
pub fn unless<T, P>(predicate: P, rule: Rule<T>) -> Rule<T>
where
    T: ?Sized + 'static,
    P: Fn(&T) -> bool + Send + Sync + 'static,
{
    Rule::new(move |value: &T| {
        if predicate(value) {
            None
        } else {
            rule.check(value)
        }
    })
}
