//! Validators that compose rules over whole values.
//!
//! This module provides the four validator kinds and the path-joining logic
//! they share:
//!
//! - [`RuleChain`] - ordered scalar rules over one value
//! - [`SliceValidator`] - whole-slice and element-wise rules
//! - [`MapValidator`] - whole-map and entry-wise rules
//! - [`StructValidator`] / [`Field`] - named accessors over a record
//!
//! Validators are immutable once built and hold no per-call state, so one
//! instance can be shared and reused freely.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//! use rulechain::prelude::*;
//!
//! struct User {
//!     age: i32,
//!     settings: HashMap<String, String>,
//! }
//!
//! let users = StructValidator::new()
//!     .field("Age", |u: &User| &u.age, [numbers::min(18)])
//!     .map_field("Settings", |u: &User| &u.settings, [maps::max_keys(2)]);
//!
//! let user = User {
//!     age: 15,
//!     settings: [("a", "1"), ("b", "2"), ("c", "3")]
//!         .into_iter()
//!         .map(|(k, v)| (k.to_string(), v.to_string()))
//!         .collect(),
//! };
//!
//! let errors = users.validate(&user);
//! assert_eq!(errors.describe("; "), "min (field: Age) {actual: 15, min: 18}; max (field: Settings) {actual: 3, max: 2}");
//! ```
pub mod chain;
pub mod maps;
pub mod path;
pub mod slices;
pub mod structs;

pub use self::chain::RuleChain;
pub use self::maps::{EntryRule, MapRule, MapValidator};
pub use self::path::join_field;
pub use self::slices::{SliceRule, SliceValidator};
pub use self::structs::{Field, StructValidator};
