//! The atomic validation unit and its combinators.
//!
//! A [`Rule`] is a pure function from a borrowed value to at most one
//! [`Error`]. Rules hold no state beyond what they close over at
//! construction, so they are cheap to clone and safe to share between
//! threads.
//!
//! # Examples
//!
//! ```
//! use rulechain::{or, rules::strings, Rule};
//!
//! let short_or_code = or([
//!     strings::max_runes::<str>(3),
//!     Rule::new(|s: &str| {
//!         (!s.starts_with("X-")).then(|| rulechain::Error::new("code"))
//!     }),
//! ]);
//!
//! assert!(short_or_code.check("ab").is_none());
//! assert!(short_or_code.check("X-LONG").is_none());
//! assert_eq!(short_or_code.check("abcdef").unwrap().code(), "code");
//! ```

use core::fmt;
use std::sync::Arc;

use crate::types::Error;

pub mod combinators;

pub use combinators::*;

type CheckFn<T> = dyn Fn(&T) -> Option<Error> + Send + Sync;

/// A validation rule over values of type `T`.
///
/// Returns `None` when the value is valid and `Some(error)` otherwise. A
/// rule never reports more than one error for a single value and never
/// knows the path of the value it checks; validators fill that in.
pub struct Rule<T: ?Sized> {
    check: Arc<CheckFn<T>>,
}

impl<T: ?Sized> Rule<T> {
    /// Wraps a checking function.
    #[inline]
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&T) -> Option<Error> + Send + Sync + 'static,
    {
        Self {
            check: Arc::new(check),
        }
    }

    /// Runs the rule against `value`.
    #[inline]
    pub fn check(&self, value: &T) -> Option<Error> {
        (self.check)(value)
    }

    /// See [`not`].
    #[inline]
    pub fn negate(self) -> Self
    where
        T: 'static,
    {
        not(self)
    }

    /// See [`stop_on_error`].
    #[inline]
    pub fn stop_on_error(self) -> Self
    where
        T: 'static,
    {
        stop_on_error(self)
    }

    /// See [`when`].
    #[inline]
    pub fn when<P>(self, predicate: P) -> Self
    where
        T: 'static,
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        when(predicate, self)
    }

    /// See [`unless`].
    #[inline]
    pub fn unless<P>(self, predicate: P) -> Self
    where
        T: 'static,
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        unless(predicate, self)
    }
}

impl<T: ?Sized> Clone for Rule<T> {
    fn clone(&self) -> Self {
        Self {
            check: Arc::clone(&self.check),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").finish_non_exhaustive()
    }
}
