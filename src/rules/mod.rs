//! Leaf rule library.
//!
//! Each constructor returns a [`Rule`](crate::Rule) that reports at most one
//! error with a stable code and the parameters needed to explain it.
//!
//! | module | rules |
//! |---|---|
//! | [`common`] | `required`, `not_zero`, `one_of`, `not_one_of` |
//! | [`strings`] | `not_empty`, `min_runes`, `max_runes`, `runes_between`, `matches`, `contains` |
//! | [`numbers`] | `min`, `max`, `between`, sign checks |
//! | [`time`] | `before`, `after`, their `_or_equal` forms, `between` |

pub mod common;
pub mod numbers;
pub mod strings;
pub mod time;
