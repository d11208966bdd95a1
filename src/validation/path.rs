//! Field path helpers.

use crate::types::Error;

/// Joins two field path segments with `.`.
///
/// If either side is empty the other is returned unchanged, so empty
/// segments never produce doubled or dangling separators.
///
/// ```
/// use rulechain::join_field;
///
/// assert_eq!(join_field("", "Age"), "Age");
/// assert_eq!(join_field("Tags", ""), "Tags");
/// assert_eq!(join_field("Company", "Address.Street"), "Company.Address.Street");
/// ```
pub fn join_field(base: &str, child: &str) -> String {
    match (base.is_empty(), child.is_empty()) {
        (true, _) => child.to_owned(),
        (_, true) => base.to_owned(),
        _ => {
            let mut joined = String::with_capacity(base.len() + 1 + child.len());
            joined.push_str(base);
            joined.push('.');
            joined.push_str(child);
            joined
        }
    }
}

/// Rewrites the error's field to `join_field(prefix, field)`.
#[inline]
pub(crate) fn prefix_error(prefix: &str, mut error: Error) -> Error {
    if !prefix.is_empty() {
        let field = join_field(prefix, error.field());
        error.set_field(field);
    }
    error
}
