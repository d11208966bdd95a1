use crate::macros::trace_fatal;
use crate::rule::Rule;
use crate::traits::Validator;
use crate::types::Errors;

/// Runs `rules` in order against `value`, tagging every error with `field`.
///
/// Returns `true` if a fatal error cut the chain short.
pub(crate) fn run_rules<T: ?Sized>(
    rules: &[Rule<T>],
    value: &T,
    field: &str,
    out: &mut Errors,
) -> bool {
    for rule in rules {
        if let Some(mut error) = rule.check(value) {
            error.set_field(field);
            let fatal = error.is_fatal();
            if fatal {
                trace_fatal!("rule_chain", error);
            }
            out.push(error);
            if fatal {
                return true;
            }
        }
    }
    false
}

/// An ordered list of [`Rule`]s applied to a single value.
///
/// Scalar rules do not know where the value lives, so every error is tagged
/// with the prefix the chain is validated under. A fatal error stops the
/// remaining rules.
///
/// # Examples
///
/// ```
/// use rulechain::prelude::*;
///
/// let age = RuleChain::new([numbers::min(18), numbers::max(120)]);
///
/// let errors = age.validate_with_prefix(&15, "Age");
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].to_string(), "min (field: Age) {actual: 15, min: 18}");
/// ```
pub struct RuleChain<T: ?Sized> {
    rules: Vec<Rule<T>>,
}

impl<T: ?Sized> RuleChain<T> {
    pub fn new<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = Rule<T>>,
    {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    /// Appends a rule to the end of the chain.
    #[must_use]
    pub fn rule(mut self, rule: Rule<T>) -> Self {
        self.rules.push(rule);
        self
    }

    #[inline]
    pub fn rules(&self) -> &[Rule<T>] {
        &self.rules
    }
}

impl<T: ?Sized> Validator<T> for RuleChain<T> {
    fn validate_with_prefix(&self, value: &T, prefix: &str) -> Errors {
        let mut out = Errors::new();
        run_rules(&self.rules, value, prefix, &mut out);
        out
    }
}

impl<T: ?Sized> Clone for RuleChain<T> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
        }
    }
}

impl<T: ?Sized> Default for RuleChain<T> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}

impl<T: ?Sized> core::fmt::Debug for RuleChain<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RuleChain")
            .field("rules", &self.rules.len())
            .finish()
    }
}

impl<T: ?Sized> FromIterator<Rule<T>> for RuleChain<T> {
    fn from_iter<I: IntoIterator<Item = Rule<T>>>(iter: I) -> Self {
        Self::new(iter)
    }
}
