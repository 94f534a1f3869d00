//! Template store
//!
//! A [`TemplateStore`] maps tag names to template strings. Keys are
//! case-sensitive and conventionally upper-case; a template is any string
//! containing zero or more `{NAME}` placeholders.
//!
//! The store is read-only while a render is in progress. It can be replaced
//! wholesale or extended entry by entry before rendering:
//!
//! ```rust,ignore
//! use markup_mapper::TemplateStore;
//!
//! let mut store = TemplateStore::default();
//! store.extend_templates(
//!     [("IMGLINK", r#"<a href="{IMAGEURL}"><img src="{IMAGEURL}" alt="{ALTTEXT}"/></a>"#)],
//!     false,
//! );
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::{Error, Result};
use crate::tags::default_templates;
use crate::value::json_kind;

/// Mapping from tag name to template string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateStore {
    templates: IndexMap<String, String>,
}

impl TemplateStore {
    /// A store holding the built-in HTML tag templates
    pub fn new() -> Self {
        Self {
            templates: default_templates().clone(),
        }
    }

    /// A store without any templates
    pub fn empty() -> Self {
        Self {
            templates: IndexMap::new(),
        }
    }

    pub fn get(&self, tag: &str) -> Option<&str> {
        self.templates.get(tag).map(String::as_str)
    }

    /// Exact membership test on the tag name
    pub fn contains(&self, tag: &str) -> bool {
        self.templates.contains_key(tag)
    }

    /// Insert or overwrite a single template
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, tag: K, template: V) -> Option<String> {
        self.templates.insert(tag.into(), template.into())
    }

    pub fn remove(&mut self, tag: &str) -> Option<String> {
        self.templates.shift_remove(tag)
    }

    /// Merge `extensions` into the store
    ///
    /// A tag that already exists keeps its template unless `force` is set, in
    /// which case it is overwritten. Returns how many entries were written.
    pub fn extend_templates<I, K, V>(&mut self, extensions: I, force: bool) -> usize
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut written = 0;
        for (tag, template) in extensions {
            let tag = tag.into();
            if force || !self.templates.contains_key(&tag) {
                self.templates.insert(tag, template.into());
                written += 1;
            }
        }
        written
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, String> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Parse a store from a JSON object of tag name -> template string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: JsonValue = serde_json::from_str(json)?;
        Self::try_from(value)
    }
}

impl Default for TemplateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<JsonValue> for TemplateStore {
    type Error = Error;

    fn try_from(value: JsonValue) -> Result<Self> {
        let JsonValue::Object(map) = value else {
            return Err(Error::invalid_config_owned(format!(
                "templates must be an object, found {}",
                json_kind(&value)
            )));
        };

        let mut templates = IndexMap::with_capacity(map.len());
        for (tag, template) in map {
            match template {
                JsonValue::String(template) => {
                    templates.insert(tag, template);
                }
                other => {
                    return Err(Error::invalid_config_owned(format!(
                        "template for '{tag}' must be a string, found {}",
                        json_kind(&other)
                    )));
                }
            }
        }
        Ok(Self { templates })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TemplateStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            templates: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TemplateStore {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.templates.iter()
    }
}
