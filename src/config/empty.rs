//! Presence checks for mandatory configuration fields.
//!
//! Absent values and zero-length strings or sequences count as empty.
//! Every other present value is never empty, including `false`, `0`, and an
//! empty [`AuthScopes`], so that falsy settings are not mistaken for missing
//! ones.

use super::types::{HostScheme, ScopesParam};
use super::version::ApiVersion;
use crate::auth::AuthScopes;

/// A configuration value that can be checked for presence.
pub trait ConfigValue {
    /// Returns `true` if the value counts as missing.
    fn is_empty_value(&self) -> bool;
}

/// Returns `true` if `value` counts as missing for a mandatory field.
///
/// # Example
///
/// ```rust
/// use shopify_api_config::is_empty;
///
/// assert!(is_empty(&None::<String>));
/// assert!(is_empty(""));
/// assert!(is_empty(&Vec::<String>::new()));
/// assert!(!is_empty(&false));
/// assert!(!is_empty(&0));
/// ```
pub fn is_empty<T: ConfigValue + ?Sized>(value: &T) -> bool {
    value.is_empty_value()
}

impl<T: ConfigValue> ConfigValue for Option<T> {
    fn is_empty_value(&self) -> bool {
        self.as_ref().map_or(true, ConfigValue::is_empty_value)
    }
}

impl<T: ConfigValue + ?Sized> ConfigValue for &T {
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

impl ConfigValue for str {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl ConfigValue for String {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> ConfigValue for [T] {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> ConfigValue for Vec<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

macro_rules! never_empty {
    ($($t:ty),* $(,)?) => {
        $(
            impl ConfigValue for $t {
                fn is_empty_value(&self) -> bool {
                    false
                }
            }
        )*
    };
}

never_empty!(
    bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    AuthScopes, HostScheme, ApiVersion,
);

impl ConfigValue for ScopesParam {
    fn is_empty_value(&self) -> bool {
        match self {
            Self::List(scopes) => scopes.is_empty(),
            Self::Set(_) => false,
        }
    }
}
