//! Core traits for validation and composition.
//!
//! - [`Validator`]: anything that validates a whole value under a field prefix
//! - [`IsEmpty`]: emptiness predicate backing `required`-style rules
//! - [`MapEntries`]: read-only map view used by [`MapValidator`](crate::MapValidator)
//!
//! # Examples
//!
//! ```
//! use rulechain::traits::{IsEmpty, Validator};
//! use rulechain::{rules::common, RuleChain};
//!
//! let name = RuleChain::new([common::required::<String>()]);
//! assert!(name.validate(&String::new()).has_any());
//! assert!(String::new().is_empty_value());
//! ```

pub mod is_empty;
pub mod map_entries;
pub mod validator;

pub use is_empty::IsEmpty;
pub use map_entries::MapEntries;
pub use validator::Validator;
