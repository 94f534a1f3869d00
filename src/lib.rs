//! Object-to-markup rendering
//!
//! This crate turns nested key-value configuration objects into HTML. Each
//! key of the configuration names a tag; its template comes from a
//! [`TemplateStore`] (one template per HTML tag, with `{NAME}` placeholders
//! for attributes and `{INSERT}` for content). Values are substituted into
//! the templates, nested objects are rendered first, arrays repeat a tag,
//! and a final cleanup pass strips whatever was left unset.
//!
//! # Examples
//!
//! ```rust,ignore
//! use markup_mapper::MarkupMapper;
//! use serde_json::json;
//!
//! let mut mapper = MarkupMapper::new();
//! mapper.set_config_json(json!({
//!     "UL": {
//!         "CLASS": "menu",
//!         "INSERT": {"LI": [{"INSERT": "Home"}, {"INSERT": "About"}]}
//!     }
//! }));
//!
//! assert_eq!(
//!     mapper.to_html().as_deref(),
//!     Some(r#"<ul class="menu"><li>Home</li><li>About</li></ul>"#)
//! );
//! ```
//!
//! Custom tags are just more templates:
//!
//! ```rust,ignore
//! let html = MarkupMapper::new()
//!     .extend_templates([("IMGLINK", r#"<a href="{IMAGEURL}"><img src="{IMAGEURL}" alt="{ALTTEXT}"/></a>"#)], false)
//!     .set_config_json(json!({"IMGLINK": {"IMAGEURL": "cat.png", "ALTTEXT": "a cat"}}))
//!     .to_html();
//! ```

pub mod builder;
pub mod cleanup;
pub mod diagnostics;
pub mod error;
pub mod renderer;
pub mod store;
pub mod substitute;
pub mod tags;
pub mod types;
pub mod value;

// Re-export commonly used types
pub use builder::MarkupMapperBuilder;
pub use cleanup::cleanup;
pub use diagnostics::{Logger, Severity, TracingLogger};
pub use error::{Error, Result};
pub use renderer::{render_to_string, Renderer};
pub use store::TemplateStore;
pub use substitute::substitute;
pub use types::{MarkupMapper, RenderConfig};
pub use value::{AttributeMap, AttributeValue, ConfigNode, Scalar, TagBody};
