//! Value types used by [`ConfigParams`](super::ConfigParams) and
//! [`ShopifyConfig`](super::ShopifyConfig).

use crate::auth::AuthScopes;
use crate::error::ConfigError;
use regex::Regex;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Opaque billing policy, passed through validation unchanged.
pub type BillingConfig = serde_json::Map<String, serde_json::Value>;

/// A Shopify API key.
///
/// Only produced by validation, which guarantees it is non-empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates an API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingMandatoryFields`] naming `apiKey` if the
    /// key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::MissingMandatoryFields {
                fields: vec!["apiKey"],
            });
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A Shopify API secret key. `Debug` output is masked.
///
/// ```rust
/// use shopify_api_config::ApiSecretKey;
///
/// let secret = ApiSecretKey::new("shpss_123").unwrap();
/// assert_eq!(format!("{secret:?}"), "ApiSecretKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiSecretKey(String);

impl ApiSecretKey {
    /// Creates an API secret key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingMandatoryFields`] naming `apiSecretKey`
    /// if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::MissingMandatoryFields {
                fields: vec!["apiSecretKey"],
            });
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiSecretKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiSecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiSecretKey(*****)")
    }
}

/// URL scheme the app is served on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostScheme {
    /// Plain HTTP, typically for local development.
    Http,
    /// HTTPS.
    #[default]
    Https,
}

impl HostScheme {
    /// Returns `"http"` or `"https"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

impl fmt::Display for HostScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HostScheme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "http" => Ok(Self::Http),
            "https" => Ok(Self::Https),
            _ => Err(ConfigError::InvalidHostScheme {
                scheme: s.to_string(),
            }),
        }
    }
}

/// Scopes as supplied by the caller: a list of names or a pre-built set.
///
/// Deserializes from a JSON array (`List`) or a comma-separated string
/// (`Set`). A string with no scope names in it, such as `""` or `" , "`,
/// becomes an empty `List` so that it is reported as missing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScopesParam {
    /// Scope names, normalized into an [`AuthScopes`] during validation.
    List(Vec<String>),
    /// A scope set adopted as-is.
    Set(AuthScopes),
}

impl ScopesParam {
    /// Converts into the canonical scope set.
    #[must_use]
    pub fn into_scopes(self) -> AuthScopes {
        match self {
            Self::List(scopes) => AuthScopes::from(scopes),
            Self::Set(scopes) => scopes,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScopes {
    List(Vec<String>),
    Text(String),
}

impl<'de> Deserialize<'de> for ScopesParam {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawScopes::deserialize(deserializer)? {
            RawScopes::List(scopes) => Ok(Self::List(scopes)),
            RawScopes::Text(text) if text.split(',').all(|s| s.trim().is_empty()) => {
                Ok(Self::List(Vec::new()))
            }
            RawScopes::Text(text) => text.parse().map(Self::Set).map_err(de::Error::custom),
        }
    }
}

impl From<Vec<String>> for ScopesParam {
    fn from(scopes: Vec<String>) -> Self {
        Self::List(scopes)
    }
}

impl From<&[&str]> for ScopesParam {
    fn from(scopes: &[&str]) -> Self {
        Self::List(scopes.iter().map(ToString::to_string).collect())
    }
}

impl From<AuthScopes> for ScopesParam {
    fn from(scopes: AuthScopes) -> Self {
        Self::Set(scopes)
    }
}

/// A non-myshopify.com domain the app accepts shops on.
///
/// Either an exact host name or a regular expression. When deserialized,
/// strings wrapped in slashes (`/.../`) are compiled as patterns.
///
/// # Example
///
/// ```rust
/// use shopify_api_config::CustomShopDomain;
///
/// let exact = CustomShopDomain::from("shop.example.com");
/// assert!(exact.matches("SHOP.example.com"));
///
/// let pattern = CustomShopDomain::pattern(r"^[a-z0-9-]+\.example\.com$").unwrap();
/// assert!(pattern.matches("my-shop.example.com"));
/// assert!(!pattern.matches("my-shop.example.org"));
/// ```
#[derive(Clone, Debug)]
pub enum CustomShopDomain {
    /// Matches one host name, case-insensitively.
    Exact(String),
    /// Matches any host the expression matches.
    Pattern(Regex),
}

impl CustomShopDomain {
    /// Compiles a pattern domain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidShopDomainPattern`] if `pattern` is not
    /// a valid regular expression.
    pub fn pattern(pattern: &str) -> Result<Self, ConfigError> {
        Regex::new(pattern)
            .map(Self::Pattern)
            .map_err(|e| ConfigError::InvalidShopDomainPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })
    }

    /// Returns `true` if `host` is covered by this domain.
    #[must_use]
    pub fn matches(&self, host: &str) -> bool {
        match self {
            Self::Exact(domain) => domain.eq_ignore_ascii_case(host),
            Self::Pattern(regex) => regex.is_match(host),
        }
    }
}

impl PartialEq for CustomShopDomain {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Exact(a), Self::Exact(b)) => a == b,
            (Self::Pattern(a), Self::Pattern(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl From<&str> for CustomShopDomain {
    fn from(domain: &str) -> Self {
        Self::Exact(domain.to_string())
    }
}

impl From<String> for CustomShopDomain {
    fn from(domain: String) -> Self {
        Self::Exact(domain)
    }
}

impl From<Regex> for CustomShopDomain {
    fn from(regex: Regex) -> Self {
        Self::Pattern(regex)
    }
}

impl fmt::Display for CustomShopDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(domain) => f.write_str(domain),
            Self::Pattern(regex) => write!(f, "/{}/", regex.as_str()),
        }
    }
}

impl FromStr for CustomShopDomain {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix('/').and_then(|rest| rest.strip_suffix('/')) {
            Some(pattern) => Self::pattern(pattern),
            None => Ok(Self::Exact(s.to_string())),
        }
    }
}

impl Serialize for CustomShopDomain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CustomShopDomain {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
