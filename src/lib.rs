//! # Shopify API library configuration
//!
//! Validation and normalization of the options used to initialize the
//! Shopify API library.
//!
//! ## Overview
//!
//! - [`ConfigParams`]: the loosely populated input, with every field optional
//! - [`validate_config`]: checks mandatory fields, fills in defaults, and
//!   migrates the deprecated `isPrivateApp` option
//! - [`ShopifyConfig`]: the immutable, fully populated result
//! - [`AuthScopes`]: set-valued OAuth scopes
//! - [`logger`]: log severity, callbacks, and the default `tracing` sink
//!
//! ## Quick Start
//!
//! ```rust
//! use shopify_api_config::{validate_config, ConfigParams, ScopesParam};
//!
//! let config = validate_config(ConfigParams {
//!     api_key: Some("your-api-key".to_string()),
//!     api_secret_key: Some("your-api-secret".to_string()),
//!     host_name: Some("my-app.example.com".to_string()),
//!     scopes: Some(ScopesParam::from(&["read_products", "write_orders"][..])),
//!     ..ConfigParams::default()
//! })
//! .unwrap();
//!
//! assert!(config.is_embedded_app());
//! assert!(config.scopes().has("read_orders"));
//! ```
//!
//! ## Missing values
//!
//! `apiKey`, `apiSecretKey` and `hostName` are always mandatory; `scopes`
//! is mandatory unless the app is a custom store app. Every missing field
//! is reported at once:
//!
//! ```rust
//! use shopify_api_config::{validate_config, ConfigParams};
//!
//! let err = validate_config(ConfigParams {
//!     api_key: Some("key".to_string()),
//!     is_custom_store_app: Some(true),
//!     ..ConfigParams::default()
//! })
//! .unwrap_err();
//!
//! assert_eq!(
//!     err.to_string(),
//!     "Cannot initialize Shopify API Library. Missing values for: apiSecretKey, hostName"
//! );
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: every call validates its own input into a fresh config
//! - **Fail-fast validation**: missing values are rejected before anything is built
//! - **Thread-safe**: [`ShopifyConfig`] is `Send + Sync` and never mutated

pub mod auth;
pub mod config;
pub mod error;
pub mod logger;

// Re-export public types at crate root for convenience
pub use auth::AuthScopes;
pub use config::{
    is_empty, mandatory_fields, validate_config, ApiKey, ApiSecretKey, ApiVersion, BillingConfig,
    ConfigParams, ConfigValue, CustomShopDomain, HostScheme, MandatoryField, ScopesParam,
    ShopifyConfig, IS_PRIVATE_APP_REMOVAL_VERSION,
};
pub use error::ConfigError;
pub use logger::{LogFunction, LogSeverity, Logger, LoggerConfig, LoggerParams};
