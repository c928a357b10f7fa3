//! OAuth scope handling.
//!
//! [`AuthScopes`] is the canonical, set-valued representation of the
//! authorization scopes an app requests.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// A set of OAuth scopes.
///
/// Order does not matter and duplicates collapse, so equality is set-based.
/// Write scopes imply their read counterparts:
/// - `write_products` implies `read_products`
/// - `unauthenticated_write_products` implies `unauthenticated_read_products`
///
/// Serializes to and from a comma-separated string.
///
/// # Example
///
/// ```rust
/// use shopify_api_config::AuthScopes;
///
/// let scopes = AuthScopes::from(vec!["write_orders".to_string(), "read_products".to_string()]);
/// assert!(scopes.has("read_orders"));
///
/// let same: AuthScopes = "read_products, write_orders, write_orders".parse().unwrap();
/// assert_eq!(scopes, same);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AuthScopes {
    scopes: HashSet<String>,
}

impl AuthScopes {
    /// Creates an empty scope set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the scope set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Returns the number of scopes, implied ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    /// Returns `true` if `scope` is in the set.
    #[must_use]
    pub fn has(&self, scope: &str) -> bool {
        self.scopes.contains(scope.trim())
    }

    /// Returns `true` if every scope in `other` is also in this set.
    #[must_use]
    pub fn covers(&self, other: &Self) -> bool {
        other.scopes.is_subset(&self.scopes)
    }

    /// Returns an iterator over the scopes in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.scopes.iter().map(String::as_str)
    }

    /// Returns the scopes sorted alphabetically.
    #[must_use]
    pub fn to_vec(&self) -> Vec<&str> {
        let mut scopes: Vec<&str> = self.iter().collect();
        scopes.sort_unstable();
        scopes
    }

    fn add_implied_scopes(&mut self) {
        let implied: Vec<String> = self
            .scopes
            .iter()
            .filter_map(|scope| Self::implied_scope(scope))
            .collect();
        self.scopes.extend(implied);
    }

    fn implied_scope(scope: &str) -> Option<String> {
        scope
            .strip_prefix("unauthenticated_write_")
            .map(|rest| format!("unauthenticated_read_{rest}"))
            .or_else(|| scope.strip_prefix("write_").map(|rest| format!("read_{rest}")))
    }
}

impl<S: AsRef<str>> FromIterator<S> for AuthScopes {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let scopes = iter
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let mut auth_scopes = Self { scopes };
        auth_scopes.add_implied_scopes();
        auth_scopes
    }
}

impl From<Vec<String>> for AuthScopes {
    fn from(scopes: Vec<String>) -> Self {
        scopes.into_iter().collect()
    }
}

impl From<&[&str]> for AuthScopes {
    fn from(scopes: &[&str]) -> Self {
        scopes.iter().collect()
    }
}

impl FromStr for AuthScopes {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let scopes: Vec<&str> = s.split(',').map(str::trim).filter(|s| !s.is_empty()).collect();

        if let Some(bad) = scopes
            .iter()
            .find(|scope| !scope.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'))
        {
            return Err(ConfigError::InvalidScopes {
                reason: format!("Invalid characters in scope: '{bad}'"),
            });
        }

        Ok(scopes.into_iter().collect())
    }
}

impl fmt::Display for AuthScopes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_vec().join(","))
    }
}

impl Serialize for AuthScopes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for AuthScopes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_scopes_equality_is_set_based() {
        let a = AuthScopes::from(&["read_products", "read_orders"][..]);
        let b = AuthScopes::from(&["read_orders", "read_products", "read_orders"][..]);
        assert_eq!(a, b);
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn test_auth_scopes_handles_implied_scopes() {
        let scopes: AuthScopes = "write_products".parse().unwrap();
        assert!(scopes.has("write_products"));
        assert!(scopes.has("read_products"));

        let scopes: AuthScopes = "unauthenticated_write_checkouts".parse().unwrap();
        assert!(scopes.has("unauthenticated_read_checkouts"));
        assert!(!scopes.has("read_checkouts"));
    }

    #[test]
    fn test_auth_scopes_covers() {
        let scopes: AuthScopes = "read_products, write_orders".parse().unwrap();
        let required: AuthScopes = "read_orders".parse().unwrap();
        assert!(scopes.covers(&required));

        let more: AuthScopes = "read_products, read_customers".parse().unwrap();
        assert!(!scopes.covers(&more));
    }

    #[test]
    fn test_auth_scopes_skips_blank_entries() {
        let scopes = AuthScopes::from(vec![" ".to_string(), "read_themes ".to_string()]);
        assert_eq!(scopes.to_vec(), vec!["read_themes"]);
    }

    #[test]
    fn test_auth_scopes_rejects_invalid_characters() {
        let result: Result<AuthScopes, _> = "read products".parse();
        assert!(matches!(result, Err(ConfigError::InvalidScopes { .. })));
    }

    #[test]
    fn test_auth_scopes_display_is_sorted() {
        let scopes: AuthScopes = "write_orders,read_products".parse().unwrap();
        assert_eq!(scopes.to_string(), "read_orders,read_products,write_orders");
    }

    #[test]
    fn test_auth_scopes_serde_as_comma_separated_string() {
        let scopes: AuthScopes = serde_json::from_str(r#""read_products,write_orders""#).unwrap();
        assert!(scopes.has("read_orders"));

        let json = serde_json::to_string(&AuthScopes::new()).unwrap();
        assert_eq!(json, r#""""#);
    }
}
