use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// Types with a notion of an "absent" or "empty" value.
///
/// [`required`](crate::rules::common::required) uses this trait to decide
/// whether a value is missing: empty strings and collections, numeric zero,
/// `false`, `'\0'` and `None`.
///
/// ```
/// use rulechain::IsEmpty;
///
/// assert!("".is_empty_value());
/// assert!(0u32.is_empty_value());
/// assert!(None::<i32>.is_empty_value());
/// assert!(!" ".is_empty_value());
/// assert!(!Some(0).is_empty_value());
/// ```
pub trait IsEmpty {
    fn is_empty_value(&self) -> bool;
}

macro_rules! zero_is_empty {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IsEmpty for $ty {
                #[inline]
                fn is_empty_value(&self) -> bool {
                    *self == (0 as $ty)
                }
            }
        )*
    };
}

zero_is_empty!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl IsEmpty for bool {
    #[inline]
    fn is_empty_value(&self) -> bool {
        !*self
    }
}

impl IsEmpty for char {
    #[inline]
    fn is_empty_value(&self) -> bool {
        *self == '\0'
    }
}

impl IsEmpty for str {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl IsEmpty for String {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl IsEmpty for Cow<'_, str> {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsEmpty for Option<T> {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_none()
    }
}

impl<T> IsEmpty for [T] {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsEmpty for Vec<T> {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsEmpty for VecDeque<T> {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> IsEmpty for HashMap<K, V, S> {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> IsEmpty for BTreeMap<K, V> {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T, S> IsEmpty for HashSet<T, S> {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsEmpty for BTreeSet<T> {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T: IsEmpty + ?Sized> IsEmpty for &T {
    #[inline]
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

impl<T: IsEmpty + ?Sized> IsEmpty for Box<T> {
    #[inline]
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}
