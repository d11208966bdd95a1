//! Parameter values attached to validation errors.
//!
//! Rules describe *why* a value failed through named parameters such as
//! `{min: 18, actual: 15}`. The values are opaque to the engine and only
//! matter for formatting, so they are kept in a small closed enum instead of
//! boxed trait objects. This keeps [`Error`](crate::Error) comparable,
//! cloneable and serializable.

use core::fmt::{self, Display};
use std::borrow::Cow;

/// A single error parameter value.
///
/// Every integer width is widened into [`ParamValue::Int`], so a length
/// reported as `usize` and a bound given as `i32` compare equal when they
/// hold the same number.
///
/// With the `serde` feature the value is written as a plain JSON scalar and
/// read back into the same variant. A `char` is stored as a one-character
/// [`ParamValue::Str`].
///
/// # Examples
///
/// ```
/// use rulechain::ParamValue;
///
/// assert_eq!(ParamValue::from(3usize), ParamValue::from(3i32));
/// assert_eq!(ParamValue::from("en").to_string(), "en");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Bool(bool),
    Int(i128),
    Float(f64),
    Str(String),
}

impl Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

/// Conversion into a [`ParamValue`].
///
/// Rules that echo the offending value (or their configured bounds) back in
/// the error parameters require their value type to implement this trait.
/// Implement it for domain types to use them with membership or range rules.
///
/// ```
/// use rulechain::{ParamValue, ToParam};
///
/// #[derive(PartialEq, PartialOrd)]
/// struct Cents(u64);
///
/// impl ToParam for Cents {
///     fn to_param(&self) -> ParamValue {
///         ParamValue::Str(format!("{}.{:02}", self.0 / 100, self.0 % 100))
///     }
/// }
///
/// assert_eq!(Cents(1234).to_param().to_string(), "12.34");
/// ```
pub trait ToParam {
    fn to_param(&self) -> ParamValue;
}

macro_rules! int_param {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToParam for $ty {
                #[inline]
                fn to_param(&self) -> ParamValue {
                    ParamValue::Int(*self as i128)
                }
            }

            impl From<$ty> for ParamValue {
                #[inline]
                fn from(value: $ty) -> Self {
                    ParamValue::Int(value as i128)
                }
            }
        )*
    };
}

int_param!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

macro_rules! float_param {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToParam for $ty {
                #[inline]
                fn to_param(&self) -> ParamValue {
                    ParamValue::Float(*self as f64)
                }
            }

            impl From<$ty> for ParamValue {
                #[inline]
                fn from(value: $ty) -> Self {
                    ParamValue::Float(value as f64)
                }
            }
        )*
    };
}

float_param!(f32, f64);

impl ToParam for bool {
    fn to_param(&self) -> ParamValue {
        ParamValue::Bool(*self)
    }
}

impl ToParam for char {
    fn to_param(&self) -> ParamValue {
        ParamValue::Str(self.to_string())
    }
}

impl ToParam for str {
    fn to_param(&self) -> ParamValue {
        ParamValue::Str(self.to_owned())
    }
}

impl ToParam for String {
    fn to_param(&self) -> ParamValue {
        ParamValue::Str(self.clone())
    }
}

impl ToParam for Cow<'_, str> {
    fn to_param(&self) -> ParamValue {
        ParamValue::Str(self.to_string())
    }
}

impl<T: ToParam + ?Sized> ToParam for &T {
    fn to_param(&self) -> ParamValue {
        (**self).to_param()
    }
}

impl<T: ToParam + ?Sized> ToParam for Box<T> {
    fn to_param(&self) -> ParamValue {
        (**self).to_param()
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<char> for ParamValue {
    fn from(value: char) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use core::fmt;

    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::ParamValue;

    impl Serialize for ParamValue {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match self {
                ParamValue::Bool(b) => serializer.serialize_bool(*b),
                ParamValue::Int(i) => {
                    // Most formats lack 128-bit integers; use the narrowest fit.
                    if let Ok(small) = i64::try_from(*i) {
                        serializer.serialize_i64(small)
                    } else if let Ok(unsigned) = u64::try_from(*i) {
                        serializer.serialize_u64(unsigned)
                    } else {
                        serializer.serialize_i128(*i)
                    }
                }
                ParamValue::Float(x) => serializer.serialize_f64(*x),
                ParamValue::Str(s) => serializer.serialize_str(s),
            }
        }
    }

    impl<'de> Deserialize<'de> for ParamValue {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(ParamValueVisitor)
        }
    }

    struct ParamValueVisitor;

    impl<'de> Visitor<'de> for ParamValueVisitor {
        type Value = ParamValue;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a boolean, number or string")
        }

        fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(ParamValue::Bool(v))
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(ParamValue::Int(v.into()))
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(ParamValue::Int(v.into()))
        }

        fn visit_i128<E>(self, v: i128) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(ParamValue::Int(v))
        }

        fn visit_u128<E>(self, v: u128) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            i128::try_from(v)
                .map(ParamValue::Int)
                .map_err(|_| E::invalid_value(de::Unexpected::Other("u128 above i128::MAX"), &self))
        }

        fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(ParamValue::Float(v))
        }

        fn visit_char<E>(self, v: char) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(ParamValue::Str(v.to_string()))
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(ParamValue::Str(v.to_owned()))
        }

        fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(ParamValue::Str(v))
        }
    }
}

#[cfg(feature = "chrono")]
mod chrono_params {
    use super::{ParamValue, ToParam};
    use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone};

    impl<Tz: TimeZone> ToParam for DateTime<Tz>
    where
        Tz::Offset: core::fmt::Display,
    {
        fn to_param(&self) -> ParamValue {
            ParamValue::Str(self.to_rfc3339_opts(SecondsFormat::AutoSi, true))
        }
    }

    impl ToParam for NaiveDateTime {
        fn to_param(&self) -> ParamValue {
            ParamValue::Str(self.format("%Y-%m-%dT%H:%M:%S%.f").to_string())
        }
    }

    impl ToParam for NaiveDate {
        fn to_param(&self) -> ParamValue {
            ParamValue::Str(self.format("%Y-%m-%d").to_string())
        }
    }
}
