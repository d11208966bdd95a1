//! Record validation through named field accessors.
//!
//! A [`StructValidator`] is an ordered list of [`Field`]s. Each field pulls a
//! sub-value out of the record with a getter and checks it with either a
//! [`RuleChain`] or a nested validator, prefixing every error with the
//! field's name. Fields are always all evaluated: a fatal error only stops
//! the rule chain of the field that produced it.
//!
//! # Examples
//!
//! ```
//! use rulechain::prelude::*;
//!
//! struct Address {
//!     street: String,
//! }
//!
//! struct Company {
//!     name: String,
//!     address: Address,
//! }
//!
//! struct Employee {
//!     name: String,
//!     company: Company,
//! }
//!
//! let address = StructValidator::new()
//!     .field("Street", |a: &Address| &a.street, [strings::not_empty()]);
//! let company = StructValidator::new()
//!     .field("Name", |c: &Company| &c.name, [strings::not_empty()])
//!     .nested("Address", |c: &Company| &c.address, address);
//! let employee = StructValidator::new()
//!     .field("Name", |e: &Employee| &e.name, [strings::not_empty()])
//!     .nested("Company", |e: &Employee| &e.company, company);
//!
//! let value = Employee {
//!     name: "Ada".into(),
//!     company: Company {
//!         name: "Analytical Engines".into(),
//!         address: Address { street: String::new() },
//!     },
//! };
//!
//! let errors = employee.validate(&value);
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors[0].field(), "Company.Address.Street");
//! ```

use core::fmt;
use std::borrow::Cow;

use crate::rule::Rule;
use crate::traits::{MapEntries, Validator};
use crate::types::Errors;
use crate::validation::chain::RuleChain;
use crate::validation::maps::{MapRule, MapValidator};
use crate::validation::path::prefix_error;
use crate::validation::slices::{SliceRule, SliceValidator};

type Getter<P, F> = dyn Fn(&P) -> &F + Send + Sync;
type BoxedValidator<T> = Box<dyn Validator<T> + Send + Sync>;

enum FieldCheck<F: ?Sized> {
    Rules(RuleChain<F>),
    Nested(BoxedValidator<F>),
}

/// Binds a named getter on `P` to the checks for the extracted `F`.
///
/// The field path is the name itself at the root, or `prefix.name` below
/// it. Rule-chain errors are tagged with that path; nested validator errors
/// are joined onto it, so nested validators never need to know where they
/// are mounted.
pub struct Field<P, F: ?Sized> {
    name: Cow<'static, str>,
    get: Box<Getter<P, F>>,
    check: FieldCheck<F>,
}

impl<P, F: ?Sized> Field<P, F> {
    /// A field checked by a chain of scalar rules.
    pub fn new<G, I>(name: impl Into<Cow<'static, str>>, get: G, rules: I) -> Self
    where
        G: Fn(&P) -> &F + Send + Sync + 'static,
        I: IntoIterator<Item = Rule<F>>,
    {
        Self {
            name: name.into(),
            get: Box::new(get),
            check: FieldCheck::Rules(RuleChain::new(rules)),
        }
    }

    /// A field checked by a nested validator.
    pub fn nested<G, V>(name: impl Into<Cow<'static, str>>, get: G, validator: V) -> Self
    where
        G: Fn(&P) -> &F + Send + Sync + 'static,
        V: Validator<F> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            get: Box::new(get),
            check: FieldCheck::Nested(Box::new(validator)),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    fn path(&self, prefix: &str) -> String {
        if prefix.is_empty() {
            self.name.to_string()
        } else {
            format!("{prefix}.{}", self.name)
        }
    }
}

impl<P, F: ?Sized> Validator<P> for Field<P, F> {
    fn validate_with_prefix(&self, parent: &P, prefix: &str) -> Errors {
        let path = self.path(prefix);
        let value = (self.get)(parent);

        match &self.check {
            FieldCheck::Rules(chain) => chain.validate_with_prefix(value, &path),
            FieldCheck::Nested(validator) => validator
                .validate_with_prefix(value, "")
                .into_iter()
                .map(|error| prefix_error(&path, error))
                .collect(),
        }
    }
}

impl<P, F: ?Sized> fmt::Debug for Field<P, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &self.check {
            FieldCheck::Rules(chain) => format!("rules({})", chain.rules().len()),
            FieldCheck::Nested(_) => "nested".to_owned(),
        };
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("check", &kind)
            .finish()
    }
}

/// Validator for a record type `P`, built from ordered field accessors.
///
/// Validation concatenates the output of every field in declaration order.
/// There is no short-circuit across fields.
pub struct StructValidator<P> {
    fields: Vec<BoxedValidator<P>>,
}

impl<P: 'static> StructValidator<P> {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Appends any field accessor, typically a [`Field`].
    #[must_use]
    pub fn with<A>(mut self, accessor: A) -> Self
    where
        A: Validator<P> + Send + Sync + 'static,
    {
        self.fields.push(Box::new(accessor));
        self
    }

    /// Appends a field checked by scalar rules.
    #[must_use]
    pub fn field<F, G, I>(self, name: impl Into<Cow<'static, str>>, get: G, rules: I) -> Self
    where
        F: ?Sized + 'static,
        G: Fn(&P) -> &F + Send + Sync + 'static,
        I: IntoIterator<Item = Rule<F>>,
    {
        self.with(Field::new(name, get, rules))
    }

    /// Appends a field checked by a nested validator.
    #[must_use]
    pub fn nested<F, G, V>(self, name: impl Into<Cow<'static, str>>, get: G, validator: V) -> Self
    where
        F: ?Sized + 'static,
        G: Fn(&P) -> &F + Send + Sync + 'static,
        V: Validator<F> + Send + Sync + 'static,
    {
        self.with(Field::nested(name, get, validator))
    }

    /// Appends a `Vec` field checked by a [`SliceValidator`] built from `rules`.
    #[must_use]
    pub fn slice_field<E, G, I>(self, name: impl Into<Cow<'static, str>>, get: G, rules: I) -> Self
    where
        E: 'static,
        G: Fn(&P) -> &Vec<E> + Send + Sync + 'static,
        I: IntoIterator<Item = SliceRule<E>>,
    {
        self.nested(name, get, SliceValidator::new(rules))
    }

    /// Appends a map field checked by a [`MapValidator`] built from `rules`.
    #[must_use]
    pub fn map_field<M, K, V, G, I>(
        self,
        name: impl Into<Cow<'static, str>>,
        get: G,
        rules: I,
    ) -> Self
    where
        M: MapEntries<K, V> + 'static,
        K: 'static,
        V: 'static,
        G: Fn(&P) -> &M + Send + Sync + 'static,
        I: IntoIterator<Item = MapRule<K, V>>,
    {
        self.nested(name, get, MapValidator::new(rules))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<P: 'static> Default for StructValidator<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Validator<P> for StructValidator<P> {
    fn validate_with_prefix(&self, value: &P, prefix: &str) -> Errors {
        let mut out = Errors::new();
        for field in &self.fields {
            out.extend(field.validate_with_prefix(value, prefix));
        }
        out
    }
}

impl<P> fmt::Debug for StructValidator<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructValidator")
            .field("fields", &self.fields.len())
            .finish()
    }
}
