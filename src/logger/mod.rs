//! Logging policy for the Shopify API library.
//!
//! Every validated [`ShopifyConfig`](crate::ShopifyConfig) carries a complete
//! [`LoggerConfig`]: a log callback, a minimum severity, and the
//! `http_requests` and `timestamps` flags. Callers override any subset of
//! these through [`LoggerParams`]; sub-fields they leave out keep their
//! defaults.
//!
//! When no callback is supplied, messages go to the default sink, which
//! forwards them to [`tracing`] at the matching level.
//!
//! # Example
//!
//! ```rust
//! use shopify_api_config::logger::{LogFunction, LogSeverity, Logger, LoggerConfig, LoggerParams};
//! use std::sync::{Arc, Mutex};
//!
//! let lines = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&lines);
//!
//! let config = LoggerConfig::merged(Some(LoggerParams {
//!     log: Some(LogFunction::new(move |_, message| {
//!         sink.lock().unwrap().push(message.to_string());
//!     })),
//!     level: Some(LogSeverity::Warning),
//!     ..LoggerParams::default()
//! }));
//!
//! let logger = Logger::new(&config);
//! logger.info("dropped");
//! logger.warning("kept");
//!
//! assert_eq!(*lines.lock().unwrap(), vec!["[shopify-api/WARNING] kept"]);
//! ```

mod sink;

pub use sink::{default_log_function, LogFunction};

use serde::Deserialize;
use std::fmt;

/// Package tag placed in front of every formatted log line.
const PACKAGE: &str = "shopify-api";

/// Severity of a log message, ordered from most to least important.
///
/// A message is emitted when its severity is at or above the configured
/// level, i.e. `severity <= level` under this ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogSeverity {
    /// Failures.
    Error,
    /// Recoverable problems and deprecation advisories.
    Warning,
    /// General information.
    Info,
    /// Verbose diagnostics.
    Debug,
}

impl fmt::Display for LogSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
        })
    }
}

/// Caller-supplied logger overrides. Every field is optional.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoggerParams {
    /// Log callback. Cannot be deserialized.
    #[serde(skip)]
    pub log: Option<LogFunction>,
    /// Minimum severity to emit.
    pub level: Option<LogSeverity>,
    /// Whether HTTP requests should be logged by the client.
    pub http_requests: Option<bool>,
    /// Whether log lines should be prefixed with a UTC timestamp.
    pub timestamps: Option<bool>,
}

/// Fully populated logger settings.
#[derive(Clone, Debug)]
pub struct LoggerConfig {
    log: LogFunction,
    level: LogSeverity,
    http_requests: bool,
    timestamps: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log: LogFunction::default(),
            level: LogSeverity::Info,
            http_requests: false,
            timestamps: false,
        }
    }
}

impl LoggerConfig {
    /// Merges caller overrides over the defaults, one sub-field at a time.
    #[must_use]
    pub fn merged(params: Option<LoggerParams>) -> Self {
        let defaults = Self::default();
        let Some(params) = params else {
            return defaults;
        };

        Self {
            log: params.log.unwrap_or(defaults.log),
            level: params.level.unwrap_or(defaults.level),
            http_requests: params.http_requests.unwrap_or(defaults.http_requests),
            timestamps: params.timestamps.unwrap_or(defaults.timestamps),
        }
    }

    /// Returns the log callback.
    #[must_use]
    pub const fn log(&self) -> &LogFunction {
        &self.log
    }

    /// Returns the minimum severity that will be emitted.
    #[must_use]
    pub const fn level(&self) -> LogSeverity {
        self.level
    }

    /// Returns whether HTTP requests should be logged.
    #[must_use]
    pub const fn http_requests(&self) -> bool {
        self.http_requests
    }

    /// Returns whether log lines carry a timestamp.
    #[must_use]
    pub const fn timestamps(&self) -> bool {
        self.timestamps
    }
}

/// Formats messages and hands them to the configured log callback.
#[derive(Clone, Copy, Debug)]
pub struct Logger<'a> {
    config: &'a LoggerConfig,
}

impl<'a> Logger<'a> {
    /// Creates a logger over the given settings.
    #[must_use]
    pub const fn new(config: &'a LoggerConfig) -> Self {
        Self { config }
    }

    /// Logs `message` at `severity` if the configured level allows it.
    pub fn log(&self, severity: LogSeverity, message: &str) {
        self.log_with_context(severity, message, &[]);
    }

    /// Logs `message` with `key: value` context pairs appended.
    pub fn log_with_context(&self, severity: LogSeverity, message: &str, context: &[(&str, &str)]) {
        if severity > self.config.level {
            return;
        }

        let mut line = String::new();
        if self.config.timestamps {
            line.push_str(&chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string());
            line.push(' ');
        }
        line.push_str(&format!("[{PACKAGE}/{severity}] {message}"));

        if !context.is_empty() {
            let pairs: Vec<String> = context.iter().map(|(k, v)| format!("{k}: {v}")).collect();
            line.push_str(&format!(" | {{{}}}", pairs.join(", ")));
        }

        self.config.log.call(severity, &line);
    }

    /// Logs at [`LogSeverity::Debug`].
    pub fn debug(&self, message: &str) {
        self.log(LogSeverity::Debug, message);
    }

    /// Logs at [`LogSeverity::Info`].
    pub fn info(&self, message: &str) {
        self.log(LogSeverity::Info, message);
    }

    /// Logs at [`LogSeverity::Warning`].
    pub fn warning(&self, message: &str) {
        self.log(LogSeverity::Warning, message);
    }

    /// Logs at [`LogSeverity::Error`].
    pub fn error(&self, message: &str) {
        self.log(LogSeverity::Error, message);
    }

    /// Emits a deprecation advisory for a feature removed in `version`.
    ///
    /// Advisories are warnings; they never fail.
    pub fn deprecated(&self, version: &str, message: &str) {
        self.warning(&format!("[Deprecated | {version}] {message}"));
    }
}
