//! Shopify API version definitions.
//!
//! [`ApiVersion::latest()`] is the default `api_version` of every validated
//! configuration.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Shopify API version.
///
/// Stable versions are released quarterly. `Unstable` targets the
/// in-development API and `Custom` carries any other well-formed `YYYY-MM`
/// version. Versions order by release date, with `Unstable` after all of
/// them.
///
/// # Example
///
/// ```rust
/// use shopify_api_config::ApiVersion;
///
/// let version: ApiVersion = "2025-07".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2025_07);
/// assert_eq!(ApiVersion::latest().to_string(), "2025-10");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 2024-10 (October 2024)
    V2024_10,
    /// API version 2025-01 (January 2025)
    V2025_01,
    /// API version 2025-04 (April 2025)
    V2025_04,
    /// API version 2025-07 (July 2025)
    V2025_07,
    /// API version 2025-10 (October 2025)
    V2025_10,
    /// Unstable API version for development and testing.
    Unstable,
    /// Version string for future or unrecognized versions.
    Custom(String),
}

static STABLE: [(ApiVersion, &str); 5] = [
    (ApiVersion::V2024_10, "2024-10"),
    (ApiVersion::V2025_01, "2025-01"),
    (ApiVersion::V2025_04, "2025-04"),
    (ApiVersion::V2025_07, "2025-07"),
    (ApiVersion::V2025_10, "2025-10"),
];

impl ApiVersion {
    /// Returns the latest stable API version known to this library.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2025_10
    }

    /// Returns `true` if this is a known stable API version.
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        !matches!(self, Self::Unstable | Self::Custom(_))
    }

    /// Returns the version string, e.g. `"2025-10"`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unstable => "unstable",
            Self::Custom(s) => s.as_str(),
            stable => STABLE
                .iter()
                .find(|(v, _)| v == stable)
                .map_or("unstable", |(_, s)| *s),
        }
    }

    fn is_valid_version_format(s: &str) -> bool {
        let Some((year, month)) = s.split_once('-') else {
            return false;
        };
        year.len() == 4
            && year.chars().all(|c| c.is_ascii_digit())
            && matches!(month, "01" | "04" | "07" | "10")
    }
}

impl PartialOrd for ApiVersion {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ApiVersion {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // `YYYY-MM` strings sort chronologically; unstable is newest.
        match (self, other) {
            (Self::Unstable, Self::Unstable) => std::cmp::Ordering::Equal,
            (Self::Unstable, _) => std::cmp::Ordering::Greater,
            (_, Self::Unstable) => std::cmp::Ordering::Less,
            _ => self
                .as_str()
                .cmp(other.as_str())
                .then_with(|| other.is_stable().cmp(&self.is_stable())),
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        if s == "unstable" {
            return Ok(Self::Unstable);
        }
        if let Some((version, _)) = STABLE.iter().find(|(_, name)| *name == s) {
            return Ok(version.clone());
        }
        if Self::is_valid_version_format(&s) {
            Ok(Self::Custom(s))
        } else {
            Err(ConfigError::InvalidApiVersion { version: s })
        }
    }
}

impl Serialize for ApiVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ApiVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
