//! The mapper facade and its configuration
//!
//! # Key Types
//!
//! - [`MarkupMapper`] - holds a template store and a configuration tree, renders to HTML
//! - [`RenderConfig`] - debug switch, strict template lookup and nesting limit
//!
//! # Usage
//!
//! ```rust,ignore
//! use markup_mapper::MarkupMapper;
//! use serde_json::json;
//!
//! let mut mapper = MarkupMapper::new();
//! mapper.set_config_json(json!({
//!     "A": {"HREF": "#", "CLASS": "a b c", "ID": "myLink", "INSERT": "My first link"}
//! }));
//!
//! assert_eq!(
//!     mapper.to_html().as_deref(),
//!     Some(r##"<a href="#" class="a b c" id="myLink">My first link</a>"##)
//! );
//! ```

use once_cell::sync::Lazy;
use serde_json::Value as JsonValue;

use crate::builder::MarkupMapperBuilder;
use crate::diagnostics::Diagnostics;
use crate::error::Result;
use crate::renderer::Renderer;
use crate::store::TemplateStore;
use crate::value::ConfigNode;

static EMPTY_CONFIG: Lazy<ConfigNode> = Lazy::new(ConfigNode::new);

/// Renders a configuration tree into HTML through a template store
///
/// The mapper owns its [`TemplateStore`] and an optional configuration tree.
/// Setters return `&mut Self` so calls can be chained:
///
/// ```rust,ignore
/// let html = MarkupMapper::new()
///     .extend_templates([("IMGLINK", r#"<a href="{IMAGEURL}"><img src="{IMAGEURL}" alt="{ALTTEXT}"/></a>"#)], false)
///     .set_config(tree)
///     .to_html();
/// ```
///
/// Rendering takes `&self` and never touches the store or the tree, so one
/// mapper can serve concurrent renders.
///
/// Nothing here returns an error to the caller: invalid input is ignored and
/// reported as a diagnostic. Use [`MarkupMapper::try_to_html`] to see why a
/// render produced nothing.
#[derive(Debug, Clone)]
pub struct MarkupMapper {
    pub(crate) templates: TemplateStore,
    pub(crate) config: Option<ConfigNode>,
    pub(crate) render_config: RenderConfig,
    pub(crate) diagnostics: Diagnostics,
}

impl MarkupMapper {
    /// A mapper with the built-in templates and no configuration
    pub fn new() -> Self {
        Self {
            templates: TemplateStore::default(),
            config: None,
            render_config: RenderConfig::default(),
            diagnostics: Diagnostics::disabled(),
        }
    }

    /// Construct a mapper, optionally preloaded with a configuration tree
    ///
    /// `debug` without a logger disables diagnostics; use
    /// [`MarkupMapper::builder`] to supply one.
    pub fn create(config: Option<ConfigNode>, debug: bool) -> Self {
        let mut builder = Self::builder().with_debug(debug);
        if let Some(config) = config {
            builder = builder.with_config(config);
        }
        builder.build()
    }

    pub fn builder() -> MarkupMapperBuilder {
        MarkupMapperBuilder::new()
    }

    /// Replace the whole template store
    pub fn set_templates(&mut self, templates: TemplateStore) -> &mut Self {
        tracing::debug!(templates = templates.len(), "replacing template store");
        self.templates = templates;
        self
    }

    /// Replace the template store from JSON; anything but an object of strings is ignored
    pub fn set_templates_json(&mut self, templates: JsonValue) -> &mut Self {
        match TemplateStore::try_from(templates) {
            Ok(templates) => self.set_templates(templates),
            Err(err) => {
                self.diagnostics
                    .notice(&format!("The given templates were ignored: {err}"));
                self
            }
        }
    }

    pub fn templates(&self) -> &TemplateStore {
        &self.templates
    }

    /// Add templates; existing tags are only overwritten when `force` is set
    pub fn extend_templates<I, K, V>(&mut self, extensions: I, force: bool) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let written = self.templates.extend_templates(extensions, force);
        tracing::trace!(written, force, "extended template store");
        self
    }

    /// Set the configuration tree rendered by [`MarkupMapper::to_html`]
    pub fn set_config(&mut self, config: ConfigNode) -> &mut Self {
        self.config = Some(config);
        self
    }

    /// Set the configuration tree from JSON; a non-object keeps the previous tree
    pub fn set_config_json(&mut self, config: JsonValue) -> &mut Self {
        match ConfigNode::try_from(config) {
            Ok(config) => self.set_config(config),
            Err(err) => {
                self.diagnostics
                    .notice(&format!("The given configuration was invalid: {err}"));
                self
            }
        }
    }

    /// The current configuration tree, or an empty tree when none was set
    pub fn config(&self) -> &ConfigNode {
        match &self.config {
            Some(config) => config,
            None => {
                self.diagnostics
                    .notice("There is no configuration yet; using an empty one");
                &EMPTY_CONFIG
            }
        }
    }

    pub fn has_config(&self) -> bool {
        self.config.is_some()
    }

    pub fn render_config(&self) -> &RenderConfig {
        &self.render_config
    }

    /// Render the current configuration, reporting why a render failed
    pub fn try_to_html(&self) -> Result<String> {
        let tree = self.config.as_ref().unwrap_or(&EMPTY_CONFIG);
        self.try_render(tree)
    }

    /// Render the current configuration
    ///
    /// Returns `None` when rendering fails; the reason goes to the logger
    /// when debugging is enabled.
    pub fn to_html(&self) -> Option<String> {
        self.report(self.try_to_html())
    }

    /// Render `tree` with this mapper's templates, leaving the stored configuration alone
    pub fn try_render(&self, tree: &ConfigNode) -> Result<String> {
        Renderer::new(&self.templates, &self.render_config, &self.diagnostics).render(tree)
    }

    pub fn render(&self, tree: &ConfigNode) -> Option<String> {
        self.report(self.try_render(tree))
    }

    fn report(&self, result: Result<String>) -> Option<String> {
        match result {
            Ok(html) => Some(html),
            Err(err) => {
                tracing::debug!(error = %err, "render failed");
                self.diagnostics
                    .error(&format!("HTML generate process failed with message: {err}"));
                None
            }
        }
    }
}

impl Default for MarkupMapper {
    fn default() -> Self {
        Self::new()
    }
}

/// Rendering options
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub(crate) debug: bool,
    pub(crate) strict_templates: bool,
    pub(crate) max_depth: usize,
}

impl RenderConfig {
    /// Create a new render configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable diagnostic output (requires a logger)
    pub fn with_debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// Treat tags without a template as an error instead of rendering nothing
    pub fn with_strict_templates(mut self, enabled: bool) -> Self {
        self.strict_templates = enabled;
        self
    }

    /// Set how deeply configuration nodes may nest
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    // Accessors
    pub fn debug(&self) -> bool {
        self.debug
    }
    pub fn strict_templates(&self) -> bool {
        self.strict_templates
    }
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            debug: false,
            strict_templates: false,
            max_depth: 64,
        }
    }
}
