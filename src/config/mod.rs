//! Configuration validation for the Shopify API library.
//!
//! Callers describe their app with a loosely populated [`ConfigParams`].
//! [`validate_config`] checks the mandatory fields, fills in defaults,
//! migrates the deprecated `isPrivateApp` option, and returns an immutable
//! [`ShopifyConfig`] that the rest of the library reads from.
//!
//! # Defaults
//!
//! - `host_scheme`: [`HostScheme::Https`]
//! - `api_version`: [`ApiVersion::latest()`]
//! - `is_embedded_app`: `true`
//! - `is_custom_store_app`: `false`
//! - `scopes`: empty
//! - `logger`: tracing sink, [`LogSeverity::Info`](crate::logger::LogSeverity::Info),
//!   no HTTP request logging, no timestamps
//!
//! # Example
//!
//! ```rust
//! use shopify_api_config::{validate_config, ApiVersion, ConfigParams, HostScheme};
//!
//! let config = validate_config(ConfigParams {
//!     api_key: Some("key".to_string()),
//!     api_secret_key: Some("secret".to_string()),
//!     host_name: Some("my-app.example.com/".to_string()),
//!     scopes: Some(vec!["write_products".to_string()].into()),
//!     ..ConfigParams::default()
//! })
//! .unwrap();
//!
//! assert_eq!(config.host_name(), "my-app.example.com");
//! assert_eq!(config.host_scheme(), HostScheme::Https);
//! assert_eq!(config.api_version(), &ApiVersion::latest());
//! assert!(config.scopes().has("read_products"));
//! ```

mod empty;
mod types;
mod version;

pub use empty::{is_empty, ConfigValue};
pub use types::{ApiKey, ApiSecretKey, BillingConfig, CustomShopDomain, HostScheme, ScopesParam};
pub use version::ApiVersion;

use crate::auth::AuthScopes;
use crate::error::ConfigError;
use crate::logger::{Logger, LoggerConfig, LoggerParams};
use serde::Deserialize;
use std::fmt;

/// Library version in which the `isPrivateApp` option is removed.
pub const IS_PRIVATE_APP_REMOVAL_VERSION: &str = "7.0.0";

const DEFAULT_IS_EMBEDDED_APP: bool = true;
const DEFAULT_IS_CUSTOM_STORE_APP: bool = false;

/// Raw, caller-supplied configuration.
///
/// Every field is optional so that "not provided" stays distinct from
/// "provided as `false`". Deserializes from camelCase keys; unknown keys
/// are ignored.
///
/// ```rust
/// use shopify_api_config::ConfigParams;
///
/// let params: ConfigParams = serde_json::from_str(r#"{
///     "apiKey": "key",
///     "apiSecretKey": "secret",
///     "hostName": "my-app.example.com",
///     "isCustomStoreApp": false,
///     "logger": { "level": "debug" }
/// }"#).unwrap();
///
/// assert_eq!(params.is_custom_store_app, Some(false));
/// assert!(params.is_private_app.is_none());
/// ```
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigParams {
    /// App API key. Mandatory.
    pub api_key: Option<String>,
    /// App API secret key. Mandatory.
    pub api_secret_key: Option<String>,
    /// Requested scopes. Mandatory unless the app is a custom store app.
    pub scopes: Option<ScopesParam>,
    /// Whether this is a custom store app.
    pub is_custom_store_app: Option<bool>,
    /// Deprecated name for `is_custom_store_app`.
    pub is_private_app: Option<bool>,
    /// Host the app is served on. Mandatory.
    pub host_name: Option<String>,
    /// Scheme the app is served on.
    pub host_scheme: Option<HostScheme>,
    /// Admin API version to target.
    pub api_version: Option<ApiVersion>,
    /// Whether the app is embedded in the Shopify admin.
    pub is_embedded_app: Option<bool>,
    /// Prefix for the `User-Agent` header.
    pub user_agent_prefix: Option<String>,
    /// Extra shop domains besides `myshopify.com`.
    pub custom_shop_domains: Option<Vec<CustomShopDomain>>,
    /// Billing policy.
    pub billing: Option<BillingConfig>,
    /// Storefront API token for custom store apps.
    pub private_app_storefront_access_token: Option<String>,
    /// Logger overrides.
    pub logger: Option<LoggerParams>,
}

/// A field whose absence or emptiness fails validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MandatoryField {
    /// `apiKey`
    ApiKey,
    /// `apiSecretKey`
    ApiSecretKey,
    /// `hostName`
    HostName,
    /// `scopes`
    Scopes,
}

impl MandatoryField {
    /// Returns the field's camelCase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ApiKey => "apiKey",
            Self::ApiSecretKey => "apiSecretKey",
            Self::HostName => "hostName",
            Self::Scopes => "scopes",
        }
    }

    /// Returns `true` if the raw value of this field is empty.
    #[must_use]
    pub fn is_missing(self, params: &ConfigParams) -> bool {
        match self {
            Self::ApiKey => is_empty(&params.api_key),
            Self::ApiSecretKey => is_empty(&params.api_secret_key),
            Self::HostName => is_empty(&params.host_name),
            Self::Scopes => is_empty(&params.scopes),
        }
    }
}

/// Returns the mandatory fields for `params`, in reporting order.
///
/// `scopes` is mandatory unless the raw input sets `is_custom_store_app` or
/// the deprecated `is_private_app` to `true`. The decision uses the raw
/// flags, before any deprecation migration.
#[must_use]
pub fn mandatory_fields(params: &ConfigParams) -> Vec<MandatoryField> {
    let mut fields = vec![
        MandatoryField::ApiKey,
        MandatoryField::ApiSecretKey,
        MandatoryField::HostName,
    ];
    let is_custom_store_app = params.is_custom_store_app == Some(true);
    let is_private_app = params.is_private_app == Some(true);
    if !is_custom_store_app && !is_private_app {
        fields.push(MandatoryField::Scopes);
    }
    fields
}

/// Validates `params` and resolves every setting.
///
/// # Errors
///
/// Returns [`ConfigError::MissingMandatoryFields`] listing every mandatory
/// field that is absent or empty. No other input is rejected.
pub fn validate_config(params: ConfigParams) -> Result<ShopifyConfig, ConfigError> {
    let missing: Vec<&'static str> = mandatory_fields(&params)
        .into_iter()
        .filter(|field| field.is_missing(&params))
        .map(MandatoryField::name)
        .collect();

    if !missing.is_empty() {
        tracing::debug!(?missing, "Rejected Shopify API library configuration");
        return Err(ConfigError::MissingMandatoryFields { fields: missing });
    }

    let ConfigParams {
        api_key,
        api_secret_key,
        scopes,
        is_custom_store_app,
        is_private_app,
        host_name,
        host_scheme,
        api_version,
        is_embedded_app,
        user_agent_prefix,
        custom_shop_domains,
        billing,
        private_app_storefront_access_token,
        logger,
    } = params;

    let mut config = ShopifyConfig {
        api_key: ApiKey::new(api_key.unwrap_or_default())?,
        api_secret_key: ApiSecretKey::new(api_secret_key.unwrap_or_default())?,
        scopes: scopes.map_or_else(AuthScopes::new, ScopesParam::into_scopes),
        host_name: strip_trailing_slash(host_name.unwrap_or_default()),
        host_scheme: host_scheme.unwrap_or_default(),
        api_version: api_version.unwrap_or_else(ApiVersion::latest),
        is_embedded_app: is_embedded_app.unwrap_or(DEFAULT_IS_EMBEDDED_APP),
        is_custom_store_app: is_custom_store_app.unwrap_or(DEFAULT_IS_CUSTOM_STORE_APP),
        user_agent_prefix,
        custom_shop_domains,
        billing,
        private_app_storefront_access_token,
        logger: LoggerConfig::merged(logger),
    };

    if let Some(is_private_app) = is_private_app {
        config.migrate_is_private_app(is_private_app, is_custom_store_app.is_some());
    }

    tracing::debug!(
        api_version = %config.api_version,
        host = %config.host_name,
        is_custom_store_app = config.is_custom_store_app,
        "Validated Shopify API library configuration"
    );

    Ok(config)
}

fn strip_trailing_slash(mut host_name: String) -> String {
    if host_name.ends_with('/') {
        host_name.pop();
    }
    host_name
}

/// Validated, fully populated library configuration.
///
/// Read-only once built; share it by reference or clone it.
#[derive(Clone)]
pub struct ShopifyConfig {
    api_key: ApiKey,
    api_secret_key: ApiSecretKey,
    scopes: AuthScopes,
    host_name: String,
    host_scheme: HostScheme,
    api_version: ApiVersion,
    is_embedded_app: bool,
    is_custom_store_app: bool,
    user_agent_prefix: Option<String>,
    custom_shop_domains: Option<Vec<CustomShopDomain>>,
    billing: Option<BillingConfig>,
    private_app_storefront_access_token: Option<String>,
    logger: LoggerConfig,
}

// Verify ShopifyConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShopifyConfig>();
};

impl ShopifyConfig {
    /// Validates `params`. See [`validate_config`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingMandatoryFields`] if a mandatory field
    /// is absent or empty.
    pub fn from_params(params: ConfigParams) -> Result<Self, ConfigError> {
        validate_config(params)
    }

    /// Explicit `is_custom_store_app` beats the deprecated flag, which beats
    /// the default. The advisory goes out either way.
    fn migrate_is_private_app(&mut self, is_private_app: bool, custom_store_app_given: bool) {
        self.logger().deprecated(
            IS_PRIVATE_APP_REMOVAL_VERSION,
            "The `isPrivateApp` config option has been deprecated. Please use `isCustomStoreApp` instead.",
        );

        if !custom_store_app_given {
            self.is_custom_store_app = is_private_app;
        }
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API secret key.
    #[must_use]
    pub const fn api_secret_key(&self) -> &ApiSecretKey {
        &self.api_secret_key
    }

    /// Returns the requested scopes.
    #[must_use]
    pub const fn scopes(&self) -> &AuthScopes {
        &self.scopes
    }

    /// Returns the app host name, without a trailing slash.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.host_name
    }

    /// Returns the app host scheme.
    #[must_use]
    pub const fn host_scheme(&self) -> HostScheme {
        self.host_scheme
    }

    /// Returns `scheme://host_name`.
    #[must_use]
    pub fn app_url(&self) -> String {
        format!("{}://{}", self.host_scheme, self.host_name)
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns whether the app is embedded in the Shopify admin.
    #[must_use]
    pub const fn is_embedded_app(&self) -> bool {
        self.is_embedded_app
    }

    /// Returns whether this is a custom store app.
    #[must_use]
    pub const fn is_custom_store_app(&self) -> bool {
        self.is_custom_store_app
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the custom shop domains, if configured.
    #[must_use]
    pub fn custom_shop_domains(&self) -> Option<&[CustomShopDomain]> {
        self.custom_shop_domains.as_deref()
    }

    /// Returns `true` if `host` matches one of the custom shop domains.
    #[must_use]
    pub fn is_custom_shop_domain(&self, host: &str) -> bool {
        self.custom_shop_domains
            .iter()
            .flatten()
            .any(|domain| domain.matches(host))
    }

    /// Returns the billing policy, if configured.
    #[must_use]
    pub const fn billing(&self) -> Option<&BillingConfig> {
        self.billing.as_ref()
    }

    /// Returns the Storefront API token for custom store apps, if configured.
    #[must_use]
    pub fn private_app_storefront_access_token(&self) -> Option<&str> {
        self.private_app_storefront_access_token.as_deref()
    }

    /// Returns the logger settings.
    #[must_use]
    pub const fn logger_config(&self) -> &LoggerConfig {
        &self.logger
    }

    /// Returns a logger writing through the configured callback.
    #[must_use]
    pub const fn logger(&self) -> Logger<'_> {
        Logger::new(&self.logger)
    }
}

impl TryFrom<ConfigParams> for ShopifyConfig {
    type Error = ConfigError;

    fn try_from(params: ConfigParams) -> Result<Self, Self::Error> {
        validate_config(params)
    }
}

impl fmt::Debug for ShopifyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShopifyConfig")
            .field("api_key", &self.api_key)
            .field("api_secret_key", &self.api_secret_key)
            .field("scopes", &self.scopes)
            .field("host_name", &self.host_name)
            .field("host_scheme", &self.host_scheme)
            .field("api_version", &self.api_version)
            .field("is_embedded_app", &self.is_embedded_app)
            .field("is_custom_store_app", &self.is_custom_store_app)
            .field("user_agent_prefix", &self.user_agent_prefix)
            .field("custom_shop_domains", &self.custom_shop_domains)
            .field("billing", &self.billing)
            .field(
                "private_app_storefront_access_token",
                &self.private_app_storefront_access_token.as_ref().map(|_| "*****"),
            )
            .field("logger", &self.logger)
            .finish()
    }
}
