//! Diagnostic output
//!
//! Diagnostics are advisory messages about input the renderer tolerated
//! (an invalid configuration, a tag body that cannot be substituted, a failed
//! render). They are delivered to a caller-supplied [`Logger`] only when
//! debugging is enabled; without a logger they are dropped.
//!
//! Any `Fn(&str, Severity)` closure is a logger:
//!
//! ```rust,ignore
//! use markup_mapper::{MarkupMapper, Severity};
//!
//! let mapper = MarkupMapper::builder()
//!     .with_debug(true)
//!     .with_logger(|message: &str, severity: Severity| eprintln!("[{severity}] {message}"))
//!     .build();
//! ```

use std::fmt;
use std::sync::Arc;

/// Severity tag attached to every diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Notice,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Notice => "notice",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receives diagnostics from a [`MarkupMapper`](crate::MarkupMapper)
pub trait Logger: Send + Sync {
    fn log(&self, message: &str, severity: Severity);
}

impl<F> Logger for F
where
    F: Fn(&str, Severity) + Send + Sync,
{
    fn log(&self, message: &str, severity: Severity) {
        self(message, severity)
    }
}

/// Forwards diagnostics to `tracing`, errors at `ERROR` and notices at `INFO`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Error => tracing::error!(target: "markup_mapper::diagnostics", "{message}"),
            Severity::Notice => tracing::info!(target: "markup_mapper::diagnostics", "{message}"),
        }
    }
}

/// The diagnostic channel of one mapper: a logger, or nothing
#[derive(Clone, Default)]
pub struct Diagnostics {
    logger: Option<Arc<dyn Logger>>,
}

impl Diagnostics {
    /// Diagnostics that are dropped
    pub fn disabled() -> Self {
        Self { logger: None }
    }

    /// Resolve the debug switch against the available logger
    ///
    /// Asking for debug output without a logger disables it and emits a
    /// warning through `tracing` instead.
    pub fn new(debug: bool, logger: Option<Arc<dyn Logger>>) -> Self {
        match (debug, logger) {
            (true, Some(logger)) => Self {
                logger: Some(logger),
            },
            (true, None) => {
                tracing::warn!("debug output requested but no logger was supplied; diagnostics disabled");
                Self::disabled()
            }
            (false, _) => Self::disabled(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.logger.is_some()
    }

    pub fn error(&self, message: &str) {
        self.emit(message, Severity::Error);
    }

    pub fn notice(&self, message: &str) {
        self.emit(message, Severity::Notice);
    }

    fn emit(&self, message: &str, severity: Severity) {
        if let Some(logger) = &self.logger {
            logger.log(message, severity);
        }
    }
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
