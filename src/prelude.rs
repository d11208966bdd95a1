//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use rulechain::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Types**: [`Error`], [`Errors`], [`Rule`]
//! - **Validators**: [`RuleChain`], [`SliceValidator`], [`MapValidator`],
//!   [`StructValidator`], [`Field`]
//! - **Combinators**: [`not`], [`stop_on_error`], [`or`], [`when`], [`unless`]
//! - **Rule modules**: [`slices`], [`maps`], [`common`], [`strings`],
//!   [`numbers`], [`time`]
//! - **Traits**: [`Validator`], [`IsEmpty`], [`ToParam`]
//!
//! # Examples
//!
//! ```
//! use rulechain::prelude::*;
//!
//! struct Signup {
//!     email: String,
//!     age: u8,
//! }
//!
//! let signup = StructValidator::new()
//!     .field("Email", |s: &Signup| &s.email, [common::required(), strings::contains("@")])
//!     .field("Age", |s: &Signup| &s.age, [numbers::min(13)]);
//!
//! let ok = Signup { email: "a@b.io".into(), age: 30 };
//! assert!(signup.check(&ok).is_ok());
//! ```

// Core types
pub use crate::rule::{not, or, stop_on_error, unless, when, Rule};
pub use crate::types::{Error, Errors, ParamValue, ToParam};

// Validators
pub use crate::validation::{
    join_field, EntryRule, Field, MapRule, MapValidator, RuleChain, SliceRule, SliceValidator,
    StructValidator,
};

// Rule constructors, used as `slices::max_len(..)`, `strings::not_empty()`, ...
pub use crate::rules::{common, numbers, strings, time};
pub use crate::validation::{maps, slices};

// Traits
pub use crate::traits::{IsEmpty, Validator};
