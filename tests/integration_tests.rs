//! Integration tests for library configuration.
//!
//! These tests exercise validation end to end through the public API.

use shopify_api_config::{
    is_empty, validate_config, ApiVersion, AuthScopes, ConfigError, ConfigParams, HostScheme,
    LogFunction, LogSeverity, LoggerParams, ScopesParam, ShopifyConfig,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn params(api_key: &str, api_secret_key: &str, host_name: &str) -> ConfigParams {
    ConfigParams {
        api_key: Some(api_key.to_string()),
        api_secret_key: Some(api_secret_key.to_string()),
        host_name: Some(host_name.to_string()),
        scopes: Some(ScopesParam::from(&["read_x"][..])),
        ..ConfigParams::default()
    }
}

fn missing(result: Result<ShopifyConfig, ConfigError>) -> Vec<&'static str> {
    match result {
        Err(ConfigError::MissingMandatoryFields { fields }) => fields,
        other => panic!("expected missing fields, got {other:?}"),
    }
}

#[test]
fn test_missing_identity_fields_reported_in_fixed_order() {
    let cases: [(&str, &str, &str, &[&str]); 4] = [
        ("", "s", "h.test", &["apiKey"]),
        ("k", "", "h.test", &["apiSecretKey"]),
        ("", "s", "", &["apiKey", "hostName"]),
        ("", "", "", &["apiKey", "apiSecretKey", "hostName"]),
    ];

    for (key, secret, host, expected) in cases {
        assert_eq!(missing(validate_config(params(key, secret, host))), expected);
    }
}

#[test]
fn test_empty_scopes_are_mandatory_without_custom_store_flags() {
    for (custom, private) in [(None, None), (Some(false), None), (None, Some(false))] {
        let result = validate_config(ConfigParams {
            scopes: Some(ScopesParam::List(vec![])),
            is_custom_store_app: custom,
            is_private_app: private,
            ..params("k", "s", "h.test")
        });
        assert_eq!(missing(result), vec!["scopes"]);
    }
}

#[test]
fn test_custom_store_app_without_scopes() {
    let config = validate_config(ConfigParams {
        scopes: None,
        is_custom_store_app: Some(true),
        ..params("k", "s", "h.test")
    })
    .unwrap();

    assert_eq!(config.scopes(), &AuthScopes::new());
}

#[test]
fn test_host_name_normalization_is_idempotent() {
    let once = validate_config(params("k", "s", "example.com/")).unwrap();
    assert_eq!(once.host_name(), "example.com");

    let again = validate_config(params("k", "s", once.host_name())).unwrap();
    assert_eq!(again.host_name(), "example.com");
}

#[test]
fn test_private_app_deprecation_migration() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    let logger = LoggerParams {
        log: Some(LogFunction::new(move |severity, message| {
            sink.lock().unwrap().push((severity, message.to_string()));
        })),
        ..LoggerParams::default()
    };

    let config = validate_config(ConfigParams {
        is_private_app: Some(true),
        logger: Some(logger.clone()),
        ..params("k", "s", "h.test")
    })
    .unwrap();
    assert!(config.is_custom_store_app());
    assert_eq!(calls.lock().unwrap().len(), 1);

    let config = validate_config(ConfigParams {
        is_private_app: Some(true),
        is_custom_store_app: Some(false),
        logger: Some(logger),
        ..params("k", "s", "h.test")
    })
    .unwrap();
    assert!(!config.is_custom_store_app());

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 2);
    assert!(calls.iter().all(|(severity, _)| *severity == LogSeverity::Warning));
}

#[test]
fn test_logger_partial_override() {
    let config = validate_config(ConfigParams {
        logger: Some(LoggerParams {
            timestamps: Some(true),
            ..LoggerParams::default()
        }),
        ..params("k", "s", "h.test")
    })
    .unwrap();

    let logger = config.logger_config();
    assert!(logger.timestamps());
    assert!(!logger.http_requests());
    assert_eq!(logger.level(), LogSeverity::Info);
    assert!(logger.log().is_default());
}

#[test]
fn test_minimal_input_round_trip() {
    let config = validate_config(params("k", "s", "h.test")).unwrap();

    assert_eq!(config.api_version(), &ApiVersion::latest());
    assert_eq!(config.host_scheme().to_string(), "https");
    assert!(config.is_embedded_app());
    assert_eq!(config.scopes(), &AuthScopes::from(&["read_x"][..]));
}

#[test]
fn test_emptiness_predicate() {
    assert!(!is_empty(&false));
    assert!(!is_empty(&0));
    assert!(is_empty(""));
    assert!(is_empty(&Vec::<String>::new()));
    assert!(is_empty(&None::<String>));
}

#[test]
fn test_config_from_json() {
    let params: ConfigParams = serde_json::from_str(
        r#"{
            "apiKey": "key",
            "apiSecretKey": "secret",
            "hostName": "my-app.example.com/",
            "hostScheme": "http",
            "apiVersion": "2025-07",
            "scopes": ["write_products"],
            "customShopDomains": ["shop.example.com", "/^.*\\.example\\.org$/"],
            "billing": { "Basic": { "amount": 5.0, "currencyCode": "USD" } },
            "logger": { "level": "debug", "httpRequests": true },
            "somethingUnknown": 42
        }"#,
    )
    .unwrap();

    let config = validate_config(params).unwrap();
    assert_eq!(config.app_url(), "http://my-app.example.com");
    assert_eq!(config.host_scheme(), HostScheme::Http);
    assert_eq!(config.api_version(), &ApiVersion::V2025_07);
    assert!(config.scopes().has("read_products"));
    assert!(config.is_custom_shop_domain("shop.example.com"));
    assert!(config.is_custom_shop_domain("any.example.org"));
    assert!(config.billing().unwrap().contains_key("Basic"));
    assert_eq!(config.logger_config().level(), LogSeverity::Debug);
    assert!(config.logger_config().http_requests());
}

#[test]
fn test_configs_are_independent_and_shareable() {
    let config_a = validate_config(params("store-a-key", "a", "a.test")).unwrap();
    let config_b = validate_config(ConfigParams {
        api_version: Some(ApiVersion::V2025_01),
        ..params("store-b-key", "b", "b.test")
    })
    .unwrap();

    assert_eq!(config_a.api_key().as_ref(), "store-a-key");
    assert_eq!(config_b.api_key().as_ref(), "store-b-key");
    assert_ne!(config_a.api_version(), config_b.api_version());

    let shared = config_a.clone();
    let handle = std::thread::spawn(move || shared.host_name().to_string());
    assert_eq!(handle.join().unwrap(), "a.test");
}

#[tokio::test]
async fn test_async_log_callback_does_not_block_validation() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    let logger = LoggerParams {
        log: Some(LogFunction::from_async(move |_, message| {
            let sink = Arc::clone(&sink);
            async move {
                tokio::time::sleep(Duration::from_millis(5)).await;
                sink.lock().unwrap().push(message);
            }
        })),
        ..LoggerParams::default()
    };

    let config = validate_config(ConfigParams {
        is_private_app: Some(true),
        logger: Some(logger),
        ..params("k", "s", "h.test")
    })
    .unwrap();

    assert!(config.is_custom_store_app());
    assert!(calls.lock().unwrap().is_empty());

    tokio::time::sleep(Duration::from_millis(50)).await;
    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].contains("isPrivateApp"));
}
