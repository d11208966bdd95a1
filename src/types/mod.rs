//! Error model for validation results.
//!
//! This module provides the failure value produced by rules ([`Error`]), the
//! ordered collection returned by validators ([`Errors`]) and the opaque
//! parameter values errors carry ([`ParamValue`]).
//!
//! # Examples
//!
//! ```
//! use rulechain::{Error, Errors};
//!
//! let errors = Errors::from(Error::new("not_found").with_param("key", "lang"));
//! assert!(errors.has_any());
//! assert!(!errors.has_fatal());
//! assert_eq!(errors.describe(", "), "not_found {key: lang}");
//! ```
use smallvec::SmallVec;
use std::borrow::Cow;
use std::collections::BTreeMap;

pub mod error;
pub mod error_formatter;
pub mod errors;
pub mod param;

pub use error::*;
pub use error_formatter::*;
pub use errors::*;
pub use param::*;

/// SmallVec-backed collection used for accumulating errors.
///
/// Uses inline storage for a single element, which covers the common case of
/// a rule chain reporting one failure.
pub type ErrorVec<E> = SmallVec<[E; 1]>;

/// Named parameters of an [`Error`], ordered by key.
pub type Params = BTreeMap<Cow<'static, str>, ParamValue>;
