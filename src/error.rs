//! Error handling for markup-mapper
//!
//! Every failure in this crate is non-fatal by design: the [`MarkupMapper`]
//! facade turns errors into advisory diagnostics and an empty result. The
//! error type still exists so that callers who want to know *why* a render
//! produced nothing can use the `try_*` entry points.
//!
//! # Error Types
//!
//! - [`Error::InvalidConfiguration`] - a configuration tree or template store was not a map
//! - [`Error::MissingTemplate`] - a tag has no template (strict mode only)
//! - [`Error::UnsubstitutableAttributes`] - a tag body was a plain value instead of a map
//! - [`Error::RenderFault`] - traversal could not complete (e.g. nesting too deep)
//! - [`Error::JsonError`] - JSON parsing and conversion errors
//!
//! # Usage
//!
//! ```rust,ignore
//! use markup_mapper::{Error, MarkupMapper};
//!
//! match mapper.try_to_html() {
//!     Ok(html) => println!("{html}"),
//!     Err(Error::MissingTemplate(tag)) => println!("no template for {tag}"),
//!     Err(err) => println!("render failed: {err}"),
//! }
//! ```
//!
//! [`MarkupMapper`]: crate::MarkupMapper

use std::borrow::Cow;
use thiserror::Error;

/// Error type for all markup-mapper operations
#[derive(Error, Debug)]
pub enum Error {
    /// A configuration tree or template store was not a map
    ///
    /// Raised by the JSON conversions; the facade setters swallow it and keep
    /// their previous state.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(Cow<'static, str>),

    /// A tag in the configuration tree has no registered template
    ///
    /// Only produced when strict template lookup is enabled. By default an
    /// unknown tag contributes nothing to the output.
    #[error("Missing template: no template registered for tag '{0}'")]
    MissingTemplate(String),

    /// The body of a tag was a plain value, so there is nothing to substitute
    #[error("Cannot substitute attributes of type {kind} into tag '{tag}'")]
    UnsubstitutableAttributes { tag: String, kind: &'static str },

    /// Traversal of the configuration tree could not complete
    #[error("Render fault: {0}")]
    RenderFault(Cow<'static, str>),

    /// JSON parsing and serialization errors
    ///
    /// Automatically converted from `serde_json::Error`.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl Error {
    /// Create an invalid-configuration error with a static string
    pub fn invalid_config_static(msg: &'static str) -> Self {
        Error::InvalidConfiguration(Cow::Borrowed(msg))
    }

    /// Create an invalid-configuration error with an owned string
    pub fn invalid_config_owned(msg: String) -> Self {
        Error::InvalidConfiguration(Cow::Owned(msg))
    }

    /// Create a render fault with a static string
    pub fn render_fault_static(msg: &'static str) -> Self {
        Error::RenderFault(Cow::Borrowed(msg))
    }

    /// Create a render fault with an owned string
    ///
    /// ```rust,ignore
    /// let error = Error::render_fault_owned(format!("nesting deeper than {limit} levels"));
    /// ```
    pub fn render_fault_owned(msg: String) -> Self {
        Error::RenderFault(Cow::Owned(msg))
    }

    pub fn missing_template(tag: &str) -> Self {
        Error::MissingTemplate(tag.to_string())
    }

    pub fn unsubstitutable(tag: &str, kind: &'static str) -> Self {
        Error::UnsubstitutableAttributes {
            tag: tag.to_string(),
            kind,
        }
    }
}

/// Result type alias for markup-mapper operations
pub type Result<T> = std::result::Result<T, Error>;
