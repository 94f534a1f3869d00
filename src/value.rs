//! Configuration tree types
//!
//! A configuration tree describes which tags to render and which values to put
//! into their placeholders. It is an ordered structure: sibling tags are
//! emitted in insertion order, so every map here is an [`IndexMap`].
//!
//! ```text
//! ConfigNode      tag name -> TagBody
//! TagBody         Attributes(AttributeMap) | Sequence(Vec<TagBody>) | Scalar
//! AttributeMap    placeholder name -> AttributeValue
//! AttributeValue  Primitive(Scalar) | Nested(ConfigNode) | List(Vec<AttributeValue>)
//! ```
//!
//! All types implement serde's `Serialize` and `Deserialize`, so a tree can be
//! read straight from JSON. Every JSON object is a valid tree; values that
//! cannot fill a template end up as [`TagBody::Scalar`] and are reported
//! while rendering.
//!
//! ```rust,ignore
//! use markup_mapper::ConfigNode;
//!
//! let tree = ConfigNode::from_json_str(r##"{"A": {"HREF": "#", "INSERT": "home"}}"##)?;
//! ```

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::{Error, Result};

/// A node of the configuration tree: an ordered mapping from tag name to body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigNode(IndexMap<String, TagBody>);

/// What a tag name maps to inside a [`ConfigNode`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagBody {
    /// Render the tag once with these attributes
    Attributes(AttributeMap),
    /// Render the tag once per entry, concatenated in order
    Sequence(Vec<TagBody>),
    /// A plain value where attributes were expected; nothing can be substituted
    Scalar(Scalar),
}

/// Ordered mapping from placeholder name to value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeMap(IndexMap<String, AttributeValue>);

/// The value of a single placeholder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Substituted as its string form
    Primitive(Scalar),
    /// Every entry resolved in turn, concatenated in order
    List(Vec<AttributeValue>),
    /// Rendered first, then substituted as markup
    Nested(ConfigNode),
}

/// Primitive values that can fill a placeholder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl ConfigNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tag and return the node, for building trees inline
    ///
    /// ```rust,ignore
    /// let tree = ConfigNode::new()
    ///     .with_tag("H1", AttributeMap::new().with("INSERT", "Title"))
    ///     .with_tag("P", AttributeMap::new().with("INSERT", "Body"));
    /// ```
    pub fn with_tag<K: Into<String>, B: Into<TagBody>>(mut self, tag: K, body: B) -> Self {
        self.insert(tag, body);
        self
    }

    /// Insert a tag, replacing any previous body under the same name
    pub fn insert<K: Into<String>, B: Into<TagBody>>(&mut self, tag: K, body: B) -> Option<TagBody> {
        self.0.insert(tag.into(), body.into())
    }

    pub fn get(&self, tag: &str) -> Option<&TagBody> {
        self.0.get(tag)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, TagBody> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse a configuration tree from a JSON document
    ///
    /// The document must be a JSON object; anything else is
    /// [`Error::InvalidConfiguration`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: JsonValue = serde_json::from_str(json)?;
        Self::try_from(value)
    }
}

impl TryFrom<JsonValue> for ConfigNode {
    type Error = Error;

    fn try_from(value: JsonValue) -> Result<Self> {
        if !value.is_object() {
            return Err(Error::invalid_config_owned(format!(
                "configuration must be an object, found {}",
                json_kind(&value)
            )));
        }
        Ok(serde_json::from_value(value)?)
    }
}

impl<K: Into<String>, B: Into<TagBody>> FromIterator<(K, B)> for ConfigNode {
    fn from_iter<I: IntoIterator<Item = (K, B)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, b)| (k.into(), b.into())).collect())
    }
}

impl<'a> IntoIterator for &'a ConfigNode {
    type Item = (&'a String, &'a TagBody);
    type IntoIter = indexmap::map::Iter<'a, String, TagBody>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute and return the map, for building trees inline
    pub fn with<K: Into<String>, V: Into<AttributeValue>>(mut self, name: K, value: V) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert<K: Into<String>, V: Into<AttributeValue>>(
        &mut self,
        name: K,
        value: V,
    ) -> Option<AttributeValue> {
        self.0.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.0.get(name)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, AttributeValue> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<AttributeValue>> FromIterator<(K, V)> for AttributeMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<'a> IntoIterator for &'a AttributeMap {
    type Item = (&'a String, &'a AttributeValue);
    type IntoIter = indexmap::map::Iter<'a, String, AttributeValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Scalar {
    /// The string substituted for this value
    ///
    /// `Null` becomes the empty string so that the attribute it fills is
    /// dropped by the cleanup pass.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Scalar::Null => Cow::Borrowed(""),
            Scalar::Bool(b) => Cow::Owned(b.to_string()),
            Scalar::Integer(n) => Cow::Owned(n.to_string()),
            Scalar::Float(f) => Cow::Owned(f.to_string()),
            Scalar::Text(s) => Cow::Borrowed(s.as_str()),
        }
    }

    /// Name of the value's kind, used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Scalar::Null => "null",
            Scalar::Bool(_) => "boolean",
            Scalar::Integer(_) | Scalar::Float(_) => "number",
            Scalar::Text(_) => "string",
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

macro_rules! impl_scalar_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Scalar {
                fn from(value: $t) -> Self {
                    Scalar::Integer(i64::from(value))
                }
            }

            impl From<$t> for AttributeValue {
                fn from(value: $t) -> Self {
                    AttributeValue::Primitive(Scalar::from(value))
                }
            }
        )*
    };
}

impl_scalar_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(value: Option<T>) -> Self {
        value.map_or(Scalar::Null, Into::into)
    }
}

impl From<Scalar> for AttributeValue {
    fn from(value: Scalar) -> Self {
        AttributeValue::Primitive(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Primitive(value.into())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Primitive(value.into())
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Primitive(value.into())
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Primitive(value.into())
    }
}

impl From<ConfigNode> for AttributeValue {
    fn from(value: ConfigNode) -> Self {
        AttributeValue::Nested(value)
    }
}

impl From<Vec<ConfigNode>> for AttributeValue {
    fn from(value: Vec<ConfigNode>) -> Self {
        AttributeValue::List(value.into_iter().map(AttributeValue::Nested).collect())
    }
}

impl From<Vec<AttributeValue>> for AttributeValue {
    fn from(value: Vec<AttributeValue>) -> Self {
        AttributeValue::List(value)
    }
}

impl From<AttributeMap> for TagBody {
    fn from(value: AttributeMap) -> Self {
        TagBody::Attributes(value)
    }
}

impl From<Vec<AttributeMap>> for TagBody {
    fn from(value: Vec<AttributeMap>) -> Self {
        TagBody::Sequence(value.into_iter().map(TagBody::Attributes).collect())
    }
}

impl From<Vec<TagBody>> for TagBody {
    fn from(value: Vec<TagBody>) -> Self {
        TagBody::Sequence(value)
    }
}

impl From<Scalar> for TagBody {
    fn from(value: Scalar) -> Self {
        TagBody::Scalar(value)
    }
}

pub(crate) fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_preserves_tag_order() {
        let tree = ConfigNode::try_from(json!({
            "H1": {"INSERT": "first"},
            "P": {"INSERT": "second"},
            "A": {"INSERT": "third"}
        }))
        .unwrap();

        let tags: Vec<&str> = tree.iter().map(|(tag, _)| tag.as_str()).collect();
        assert_eq!(tags, vec!["H1", "P", "A"]);
    }

    #[test]
    fn test_json_variants() {
        let tree = ConfigNode::try_from(json!({
            "LI": [{"INSERT": "a"}, {"INSERT": "b"}],
            "DIV": {"INSERT": {"SPAN": {"INSERT": "hi"}}, "TABINDEX": 3},
            "UL": {"INSERT": [{"LI": {"INSERT": "x"}}]},
            "P": "plain"
        }))
        .unwrap();

        assert!(matches!(tree.get("LI"), Some(TagBody::Sequence(items)) if items.len() == 2));
        assert!(matches!(tree.get("P"), Some(TagBody::Scalar(Scalar::Text(_)))));

        let Some(TagBody::Attributes(div)) = tree.get("DIV") else {
            panic!("DIV should be an attribute map");
        };
        assert!(matches!(div.get("INSERT"), Some(AttributeValue::Nested(_))));
        assert_eq!(
            div.get("TABINDEX"),
            Some(&AttributeValue::Primitive(Scalar::Integer(3)))
        );

        let Some(TagBody::Attributes(ul)) = tree.get("UL") else {
            panic!("UL should be an attribute map");
        };
        assert!(matches!(ul.get("INSERT"), Some(AttributeValue::List(nodes)) if nodes.len() == 1));
    }

    #[test]
    fn test_mixed_sequences_still_parse() {
        let tree = ConfigNode::try_from(json!({
            "LI": [{"INSERT": "a"}, "b", [{"INSERT": "c"}]],
            "P": {"INSERT": [1, {"EM": {"INSERT": "x"}}]}
        }))
        .unwrap();

        let Some(TagBody::Sequence(items)) = tree.get("LI") else {
            panic!("LI should be a sequence");
        };
        assert!(matches!(items[0], TagBody::Attributes(_)));
        assert_eq!(items[1], TagBody::Scalar(Scalar::from("b")));
        assert!(matches!(&items[2], TagBody::Sequence(inner) if inner.len() == 1));

        let Some(TagBody::Attributes(p)) = tree.get("P") else {
            panic!("P should be an attribute map");
        };
        assert!(matches!(
            p.get("INSERT"),
            Some(AttributeValue::List(values))
                if values[0] == AttributeValue::from(1)
                    && matches!(values[1], AttributeValue::Nested(_))
        ));
    }

    #[test]
    fn test_non_object_is_invalid_configuration() {
        let err = ConfigNode::try_from(json!(["A"])).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
        assert!(err.to_string().contains("found array"));

        let err = ConfigNode::from_json_str("\"text\"").unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let err = ConfigNode::from_json_str("{\"A\": ").unwrap_err();
        assert!(matches!(err, Error::JsonError(_)));
    }

    #[test]
    fn test_scalar_text() {
        assert_eq!(Scalar::Null.as_text(), "");
        assert_eq!(Scalar::Bool(true).as_text(), "true");
        assert_eq!(Scalar::Integer(-4).as_text(), "-4");
        assert_eq!(Scalar::Float(1.0).as_text(), "1");
        assert_eq!(Scalar::Float(2.5).as_text(), "2.5");
        assert_eq!(Scalar::from("x").to_string(), "x");
        assert_eq!(Scalar::from(None::<&str>), Scalar::Null);
    }

    #[test]
    fn test_builder_helpers() {
        let tree = ConfigNode::new()
            .with_tag("A", AttributeMap::new().with("HREF", "#").with("INSERT", "home"))
            .with_tag(
                "LI",
                vec![
                    AttributeMap::new().with("INSERT", 1),
                    AttributeMap::new().with("INSERT", 2),
                ],
            );

        assert_eq!(tree.len(), 2);
        let Some(TagBody::Attributes(a)) = tree.get("A") else {
            panic!("A should be an attribute map");
        };
        assert_eq!(a.get("HREF"), Some(&AttributeValue::from("#")));
    }

    #[test]
    fn test_serialize_round_trip_through_json() {
        let tree = ConfigNode::new().with_tag(
            "DIV",
            AttributeMap::new()
                .with("CLASS", "box")
                .with("HIDDEN", Scalar::Null)
                .with("INSERT", ConfigNode::new().with_tag("B", AttributeMap::new())),
        );

        let json = serde_json::to_value(&tree).unwrap();
        assert_eq!(
            json,
            json!({"DIV": {"CLASS": "box", "HIDDEN": null, "INSERT": {"B": {}}}})
        );
        assert_eq!(ConfigNode::try_from(json).unwrap(), tree);
    }
}
