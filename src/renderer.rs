//! Recursive descent renderer
//!
//! Walks a [`ConfigNode`] tree and reduces it bottom-up into one HTML string.
//! Nested nodes are rendered first and substituted as markup; sequences
//! render their tag once per entry. The caller's tree is never modified:
//! every tag gets a freshly resolved attribute list.
//!
//! The cleanup pass runs exactly once, over the complete output.

use std::borrow::Cow;

use crate::cleanup::cleanup;
use crate::diagnostics::Diagnostics;
use crate::error::{Error, Result};
use crate::store::TemplateStore;
use crate::substitute::substitute;
use crate::types::RenderConfig;
use crate::value::{AttributeMap, AttributeValue, ConfigNode, Scalar, TagBody};

/// Renders configuration trees against a borrowed template store
pub struct Renderer<'a> {
    templates: &'a TemplateStore,
    config: &'a RenderConfig,
    diagnostics: &'a Diagnostics,
}

impl<'a> Renderer<'a> {
    pub fn new(
        templates: &'a TemplateStore,
        config: &'a RenderConfig,
        diagnostics: &'a Diagnostics,
    ) -> Self {
        Self {
            templates,
            config,
            diagnostics,
        }
    }

    /// Render `tree` to cleaned-up HTML
    pub fn render(&self, tree: &ConfigNode) -> Result<String> {
        tracing::trace!(tags = tree.len(), "rendering configuration tree");
        let raw = self.render_node(tree, 0)?;
        Ok(cleanup(&raw))
    }

    /// Render a node without cleaning up; siblings in insertion order
    fn render_node(&self, node: &ConfigNode, depth: usize) -> Result<String> {
        self.check_depth(depth)?;

        let mut output = String::new();
        for (tag, body) in node {
            output.push_str(&self.render_body(tag, body, depth)?);
        }
        Ok(output)
    }

    /// Render one tag body; a sequence renders each entry as if it stood alone under `tag`
    fn render_body(&self, tag: &str, body: &TagBody, depth: usize) -> Result<String> {
        match body {
            TagBody::Attributes(attributes) => self.render_tag(tag, attributes, depth),
            TagBody::Scalar(value) => self.render_unsubstitutable(tag, value),
            TagBody::Sequence(entries) => {
                let mut output = String::new();
                for entry in entries {
                    // an array directly inside an array is its own level
                    let entry_depth = match entry {
                        TagBody::Sequence(_) => self.check_depth(depth + 1).map(|_| depth + 1)?,
                        _ => depth,
                    };
                    output.push_str(&self.render_body(tag, entry, entry_depth)?);
                }
                Ok(output)
            }
        }
    }

    fn render_tag(&self, tag: &str, attributes: &AttributeMap, depth: usize) -> Result<String> {
        let Some(template) = self.lookup(tag)? else {
            return Ok(String::new());
        };
        let resolved = attributes
            .iter()
            .map(|(name, value)| Ok((name.as_str(), self.resolve_value(value, depth)?)))
            .collect::<Result<Vec<_>>>()?;
        Ok(substitute(template, resolved).into_owned())
    }

    /// The substitution string of one attribute, rendering nested nodes
    fn resolve_value<'n>(&self, value: &'n AttributeValue, depth: usize) -> Result<Cow<'n, str>> {
        match value {
            AttributeValue::Primitive(scalar) => Ok(scalar.as_text()),
            AttributeValue::Nested(node) => Ok(Cow::Owned(self.render_node(node, depth + 1)?)),
            AttributeValue::List(values) => {
                let mut joined = String::new();
                for value in values {
                    let value_depth = match value {
                        AttributeValue::List(_) => self.check_depth(depth + 1).map(|_| depth + 1)?,
                        _ => depth,
                    };
                    joined.push_str(&self.resolve_value(value, value_depth)?);
                }
                Ok(Cow::Owned(joined))
            }
        }
    }

    fn check_depth(&self, depth: usize) -> Result<()> {
        if depth > self.config.max_depth() {
            return Err(Error::render_fault_owned(format!(
                "configuration is nested deeper than {} levels",
                self.config.max_depth()
            )));
        }
        Ok(())
    }

    /// A plain value where attributes were expected: the template comes back unchanged
    fn render_unsubstitutable(&self, tag: &str, value: &Scalar) -> Result<String> {
        let error = Error::unsubstitutable(tag, value.kind());
        tracing::debug!(tag, kind = value.kind(), "tag body is not an attribute map");
        self.diagnostics.error(&error.to_string());

        Ok(self.lookup(tag)?.unwrap_or_default().to_string())
    }

    fn lookup(&self, tag: &str) -> Result<Option<&'a str>> {
        match self.templates.get(tag) {
            Some(template) => Ok(Some(template)),
            None if self.config.strict_templates() => Err(Error::missing_template(tag)),
            None => {
                tracing::debug!(tag, "no template registered; tag renders empty");
                Ok(None)
            }
        }
    }
}

/// Render `tree` against `templates` with the default settings
///
/// ```rust,ignore
/// use markup_mapper::{render_to_string, ConfigNode, TemplateStore};
///
/// let tree = ConfigNode::from_json_str(r#"{"P": {"INSERT": "hello"}}"#)?;
/// let html = render_to_string(&tree, &TemplateStore::default())?;
/// assert_eq!(html, "<p>hello</p>");
/// ```
pub fn render_to_string(tree: &ConfigNode, templates: &TemplateStore) -> Result<String> {
    let config = RenderConfig::default();
    let diagnostics = Diagnostics::disabled();
    Renderer::new(templates, &config, &diagnostics).render(tree)
}
