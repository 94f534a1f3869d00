//! Builder pattern API for constructing MarkupMapper instances
//!
//! This module provides a fluent API for setting up a mapper with templates,
//! a configuration tree, render options and a diagnostic logger.

use std::sync::Arc;

use crate::diagnostics::{Diagnostics, Logger};
use crate::store::TemplateStore;
use crate::types::*;
use crate::value::ConfigNode;

/// Builder for constructing MarkupMapper instances
///
/// # Examples
///
/// ```rust,ignore
/// use markup_mapper::{MarkupMapperBuilder, TracingLogger};
///
/// let mapper = MarkupMapperBuilder::new()
///     .extend_templates([("CARD", "<div class=\"card\">{INSERT}</div>")], false)
///     .with_config(tree)
///     .with_debug(true)
///     .with_logger(TracingLogger)
///     .build();
/// ```
pub struct MarkupMapperBuilder {
    templates: TemplateStore,
    config: Option<ConfigNode>,
    render_config: RenderConfig,
    logger: Option<Arc<dyn Logger>>,
}

impl MarkupMapperBuilder {
    /// Create a new builder starting from the built-in templates
    pub fn new() -> Self {
        Self {
            templates: TemplateStore::default(),
            config: None,
            render_config: RenderConfig::default(),
            logger: None,
        }
    }

    /// Use `templates` instead of the built-in set
    pub fn with_templates(mut self, templates: TemplateStore) -> Self {
        self.templates = templates;
        self
    }

    /// Merge templates into the store; existing tags are kept unless `force` is set
    pub fn extend_templates<I, K, V>(mut self, extensions: I, force: bool) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.templates.extend_templates(extensions, force);
        self
    }

    /// Preload the configuration tree
    pub fn with_config(mut self, config: ConfigNode) -> Self {
        self.config = Some(config);
        self
    }

    /// Enable or disable diagnostic output
    pub fn with_debug(mut self, enabled: bool) -> Self {
        self.render_config = self.render_config.with_debug(enabled);
        self
    }

    /// Receive diagnostics through `logger`
    pub fn with_logger<L: Logger + 'static>(mut self, logger: L) -> Self {
        self.logger = Some(Arc::new(logger));
        self
    }

    /// Fail the render on tags without a template
    pub fn with_strict_templates(mut self, enabled: bool) -> Self {
        self.render_config = self.render_config.with_strict_templates(enabled);
        self
    }

    /// Limit how deeply configuration nodes may nest
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.render_config = self.render_config.with_max_depth(depth);
        self
    }

    /// Use a complete render configuration
    pub fn with_render_config(mut self, config: RenderConfig) -> Self {
        self.render_config = config;
        self
    }

    /// Build the MarkupMapper instance
    pub fn build(self) -> MarkupMapper {
        let diagnostics = Diagnostics::new(self.render_config.debug(), self.logger);
        MarkupMapper {
            templates: self.templates,
            config: self.config,
            render_config: self.render_config,
            diagnostics,
        }
    }
}

impl Default for MarkupMapperBuilder {
    fn default() -> Self {
        Self::new()
    }
}
