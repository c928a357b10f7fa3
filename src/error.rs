//! Error types for the Shopify API configuration core.
//!
//! Validation has exactly one failure mode: one or more mandatory fields are
//! missing or empty. The remaining variants are only produced by the
//! `FromStr` implementations of individual configuration values.
//!
//! # Example
//!
//! ```rust
//! use shopify_api_config::{validate_config, ConfigError, ConfigParams};
//!
//! let result = validate_config(ConfigParams::default());
//! assert!(matches!(result, Err(ConfigError::MissingMandatoryFields { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while building the library configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// One or more mandatory fields were absent or empty.
    ///
    /// The field names are listed in the fixed order `apiKey`,
    /// `apiSecretKey`, `hostName`, `scopes`.
    #[error("Cannot initialize Shopify API Library. Missing values for: {}", .fields.join(", "))]
    MissingMandatoryFields {
        /// Names of the offending fields.
        fields: Vec<&'static str>,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'YYYY-MM' (e.g., '2024-01') or 'unstable'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// Host scheme is neither `http` nor `https`.
    #[error("Invalid host scheme '{scheme}'. Expected 'http' or 'https'.")]
    InvalidHostScheme {
        /// The invalid scheme that was provided.
        scheme: String,
    },

    /// Scopes are invalid.
    #[error("Invalid scopes: {reason}")]
    InvalidScopes {
        /// The reason the scopes are invalid.
        reason: String,
    },

    /// A custom shop domain pattern failed to compile.
    #[error("Invalid custom shop domain pattern '{pattern}': {reason}")]
    InvalidShopDomainPattern {
        /// The pattern source.
        pattern: String,
        /// Why the pattern was rejected.
        reason: String,
    },
}

impl ConfigError {
    /// Returns the missing field names if this is a validation failure.
    #[must_use]
    pub fn missing_fields(&self) -> Option<&[&'static str]> {
        match self {
            Self::MissingMandatoryFields { fields } => Some(fields),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message_is_comma_joined() {
        let error = ConfigError::MissingMandatoryFields {
            fields: vec!["apiKey", "hostName"],
        };
        assert_eq!(
            error.to_string(),
            "Cannot initialize Shopify API Library. Missing values for: apiKey, hostName"
        );
    }

    #[test]
    fn test_missing_fields_accessor() {
        let error = ConfigError::MissingMandatoryFields {
            fields: vec!["scopes"],
        };
        assert_eq!(error.missing_fields(), Some(&["scopes"][..]));

        let error = ConfigError::InvalidHostScheme {
            scheme: "ftp".to_string(),
        };
        assert!(error.missing_fields().is_none());
    }

    #[test]
    fn test_invalid_host_scheme_error_message() {
        let error = ConfigError::InvalidHostScheme {
            scheme: "ftp".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("ftp"));
        assert!(message.contains("'https'"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::MissingMandatoryFields { fields: vec![] };
        let _: &dyn std::error::Error = &error;
    }
}
