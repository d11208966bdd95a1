//! Composable, path-aware validation for in-memory data.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `rulechain::*`, use the [`prelude`], or pick focused
//! pieces as needed.
//!
//! Validation never stops at the first failure. Every validator returns an
//! [`Errors`] list whose entries carry a code, a dotted field path from the
//! validation root, named parameters and a fatal flag. A fatal error prunes
//! only the rule chain or iteration it occurred in.
//!
//! # Examples
//!
//! ## Scalar rules and combinators
//!
//! ```
//! use rulechain::prelude::*;
//!
//! let code = or([strings::pattern::<str>(r"^[A-Z]{3}$").unwrap(), strings::max_runes(0)]);
//! assert!(code.check("EUR").is_none());
//! assert!(code.check("").is_none());
//! assert_eq!(code.check("euro").unwrap().code(), "max");
//! ```
//!
//! ## Records, slices and maps
//!
//! ```
//! use std::collections::HashMap;
//! use rulechain::prelude::*;
//!
//! struct User {
//!     name: String,
//!     tags: Vec<String>,
//!     settings: HashMap<String, String>,
//! }
//!
//! let users = StructValidator::new()
//!     .field("Name", |u: &User| &u.name, [strings::not_empty().stop_on_error(), strings::max_runes(50)])
//!     .slice_field("Tags", |u: &User| &u.tags, [
//!         slices::max_len(5),
//!         slices::for_each([strings::not_empty(), strings::max_runes(20)]),
//!     ])
//!     .map_field("Settings", |u: &User| &u.settings, [
//!         maps::max_keys(10),
//!         maps::key("lang".to_string(), [common::one_of(["en".to_string(), "fr".to_string()])]),
//!     ]);
//!
//! let user = User {
//!     name: String::new(),
//!     tags: vec!["ok".into(), String::new()],
//!     settings: HashMap::new(),
//! };
//!
//! let errors = users.validate(&user);
//! let fields: Vec<_> = errors.iter().map(|e| e.field()).collect();
//! assert_eq!(fields, ["Name", "Tags.1", "Settings"]);
//! assert!(errors.has_fatal());
//! ```

/// Internal tracing hooks
mod macros;

/// Convenience re-exports for quick starts
pub mod prelude;
/// Scalar rules and combinators
pub mod rule;
/// Leaf rule library
pub mod rules;
/// Core traits for validation and composition
pub mod traits;
/// Error model
pub mod types;
/// Validators over scalars, slices, maps and records
pub mod validation;

pub use rule::*;
pub use traits::*;
pub use types::{Error, ErrorFormatConfig, ErrorFormatter, ErrorVec, Errors, ParamValue, Params, ToParam};
pub use validation::*;
