//! Log callbacks.

use super::LogSeverity;
use std::fmt;
use std::future::Future;
use std::sync::{Arc, OnceLock};

type LogFn = dyn Fn(LogSeverity, &str) + Send + Sync;

/// A log callback invoked with a severity and a formatted message.
///
/// Cloning is cheap; clones share the same callback.
#[derive(Clone)]
pub struct LogFunction {
    inner: Arc<LogFn>,
    is_default: bool,
}

impl LogFunction {
    /// Wraps a synchronous callback.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(LogSeverity, &str) + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(f),
            is_default: false,
        }
    }

    /// Wraps an async callback.
    ///
    /// Each call starts the returned future and returns immediately without
    /// waiting for it. Inside a Tokio runtime the future is spawned onto it;
    /// otherwise it is spawned onto a single-worker runtime that is built on
    /// first use and shared by every async callback in the process.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_api_config::logger::{LogFunction, LogSeverity};
    ///
    /// let log = LogFunction::from_async(|severity, message| async move {
    ///     println!("{severity}: {message}");
    /// });
    /// log.call(LogSeverity::Info, "hello");
    /// ```
    pub fn from_async<F, Fut>(f: F) -> Self
    where
        F: Fn(LogSeverity, String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self::new(move |severity, message| {
            let fut = f(severity, message.to_string());
            if let Ok(handle) = tokio::runtime::Handle::try_current() {
                drop(handle.spawn(fut));
                return;
            }

            if let Some(runtime) = fallback_runtime() {
                drop(runtime.spawn(fut));
            }
        })
    }

    /// Invokes the callback.
    pub fn call(&self, severity: LogSeverity, message: &str) {
        (self.inner)(severity, message);
    }

    /// Returns `true` if this is the built-in tracing sink.
    #[must_use]
    pub const fn is_default(&self) -> bool {
        self.is_default
    }
}

impl Default for LogFunction {
    fn default() -> Self {
        Self {
            inner: Arc::new(default_log_function),
            is_default: true,
        }
    }
}

impl fmt::Debug for LogFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_default {
            f.write_str("LogFunction(default)")
        } else {
            f.write_str("LogFunction(custom)")
        }
    }
}

/// Runtime for async callbacks invoked outside any Tokio runtime.
fn fallback_runtime() -> Option<&'static tokio::runtime::Runtime> {
    static RUNTIME: OnceLock<Option<tokio::runtime::Runtime>> = OnceLock::new();

    RUNTIME
        .get_or_init(|| {
            tokio::runtime::Builder::new_multi_thread()
                .worker_threads(1)
                .thread_name("shopify-api-log")
                .enable_all()
                .build()
                .map_err(|e| tracing::error!("Failed to start runtime for async log callbacks: {e}"))
                .ok()
        })
        .as_ref()
}

/// The default sink: forwards each message to `tracing` at the matching level.
pub fn default_log_function(severity: LogSeverity, message: &str) {
    match severity {
        LogSeverity::Debug => tracing::debug!("{message}"),
        LogSeverity::Info => tracing::info!("{message}"),
        LogSeverity::Warning => tracing::warn!("{message}"),
        LogSeverity::Error => tracing::error!("{message}"),
    }
}
