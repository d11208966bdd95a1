use core::fmt::{self, Display};
use std::borrow::Cow;
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::{ParamValue, Params};

/// A single validation failure.
///
/// An `Error` is produced by a [`Rule`](crate::Rule) when a value does not
/// satisfy it. Rules only fill in the `code` and `params`; the `field` path
/// is written by the validators as the error travels back up towards the
/// validation root.
///
/// Marking an error as fatal (see [`stop_on_error`](crate::stop_on_error))
/// prunes the rest of the rule chain or container iteration that produced
/// it. Errors already collected elsewhere are kept.
///
/// # Examples
///
/// ```
/// use rulechain::Error;
///
/// let err = Error::new("min")
///     .with_field("Age")
///     .with_param("min", 18)
///     .with_param("actual", 15);
///
/// assert_eq!(err.to_string(), "min (field: Age) {actual: 15, min: 18}");
/// assert!(!err.is_fatal());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Error {
    #[cfg_attr(feature = "serde", serde(deserialize_with = "non_empty_code"))]
    code: Cow<'static, str>,
    #[cfg_attr(feature = "serde", serde(default))]
    field: String,
    #[cfg_attr(feature = "serde", serde(default))]
    params: Params,
    #[cfg_attr(feature = "serde", serde(default))]
    fatal: bool,
}

impl Error {
    /// Creates an error with the given code, no field, no params and not fatal.
    ///
    /// The code identifies the failure kind (`"min"`, `"required"`, ...) and
    /// must not be empty. An empty code is a bug in the rule that built it and
    /// trips a debug assertion; deserialization rejects it as invalid data.
    #[inline]
    pub fn new(code: impl Into<Cow<'static, str>>) -> Self {
        let code = code.into();
        debug_assert!(!code.is_empty(), "validation error code must not be empty");
        Self {
            code,
            field: String::new(),
            params: BTreeMap::new(),
            fatal: false,
        }
    }

    /// Sets the field path, replacing any previous one.
    #[inline]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    /// Adds one named parameter. A repeated key overwrites the earlier value.
    #[inline]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<ParamValue>,
    ) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Adds every `(key, value)` pair to the parameters.
    pub fn with_params<K, V, I>(mut self, params: I) -> Self
    where
        K: Into<Cow<'static, str>>,
        V: Into<ParamValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        self.params
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Marks the error as fatal.
    #[inline]
    pub fn fatal(mut self) -> Self {
        self.fatal = true;
        self
    }

    /// The failure kind, such as `"min"` or `"not_found"`.
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Dotted path from the validation root. Empty for the root value itself.
    #[inline]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// All parameters, ordered by key.
    #[inline]
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Looks up a single parameter by name.
    #[inline]
    pub fn param(&self, key: &str) -> Option<&ParamValue> {
        self.params.get(key)
    }

    /// Whether this error prunes the rest of its rule chain or iteration.
    #[inline]
    pub fn is_fatal(&self) -> bool {
        self.fatal
    }

    /// In-place form of [`with_field`](Self::with_field), used by validators
    /// while re-rooting errors.
    #[inline]
    pub fn set_field(&mut self, field: impl Into<String>) {
        self.field = field.into();
    }

    /// In-place form of [`fatal`](Self::fatal) that can also clear the flag.
    #[inline]
    pub fn set_fatal(&mut self, fatal: bool) {
        self.fatal = fatal;
    }

    /// Renders the error as `code (field: path) {k: v, ...}`.
    ///
    /// The field part is omitted when the path is empty and the parameter
    /// part when there are no parameters. Parameters are listed in key order.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)?;

        if !self.field.is_empty() {
            write!(f, " (field: {})", self.field)?;
        }

        if !self.params.is_empty() {
            f.write_str(" {")?;
            for (i, (key, value)) in self.params.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{key}: {value}")?;
            }
            f.write_str("}")?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {}

#[cfg(feature = "serde")]
fn non_empty_code<'de, D>(deserializer: D) -> Result<Cow<'static, str>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let code = String::deserialize(deserializer)?;
    if code.is_empty() {
        return Err(serde::de::Error::invalid_value(
            serde::de::Unexpected::Str(""),
            &"a non-empty error code",
        ));
    }
    Ok(Cow::Owned(code))
}
