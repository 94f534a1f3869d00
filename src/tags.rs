//! Built-in HTML tag table
//!
//! The default template set is data, not behavior: one entry per HTML tag
//! listing the tag-specific attributes, whether the global attributes apply,
//! and whether the element has content. Template strings are generated from
//! this table on first use.
//!
//! Every attribute becomes `name="{NAME}"`; container elements end with
//! `>{INSERT}</tag>` and void elements self-close. Attribute names must be
//! plain letters so that the cleanup pass can strip them when unset.

use indexmap::IndexMap;
use once_cell::sync::Lazy;

/// Attributes accepted by every element that carries global attributes
pub const GLOBAL_ATTRIBUTES: &[&str] = &[
    "accesskey",
    "hidden",
    "itemtype",
    "class",
    "id",
    "lang",
    "contenteditable",
    "inert",
    "spellcheck",
    "contextmenu",
    "itemid",
    "style",
    "dir",
    "itemprop",
    "tabindex",
    "draggable",
    "itemref",
    "title",
    "dropzone",
    "itemscope",
    "translate",
];

/// The reserved placeholder for element content
pub const INSERT: &str = "INSERT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// Has content: `<tag ...>{INSERT}</tag>`
    Container,
    /// Self-closing: `<tag ... />`
    Void,
}

#[derive(Debug, Clone, Copy)]
pub struct TagSpec {
    pub name: &'static str,
    pub attributes: &'static [&'static str],
    pub global: bool,
    pub kind: TagKind,
}

const fn container(name: &'static str, attributes: &'static [&'static str]) -> TagSpec {
    TagSpec {
        name,
        attributes,
        global: true,
        kind: TagKind::Container,
    }
}

const fn void(name: &'static str, attributes: &'static [&'static str]) -> TagSpec {
    TagSpec {
        name,
        attributes,
        global: true,
        kind: TagKind::Void,
    }
}

/// Elements whose template carries no attributes at all
const fn bare(name: &'static str, kind: TagKind) -> TagSpec {
    TagSpec {
        name,
        attributes: &[],
        global: false,
        kind,
    }
}

pub const TAGS: &[TagSpec] = &[
    container("ABBR", &[]),
    container("ADDRESS", &[]),
    void(
        "AREA",
        &["alt", "coords", "shape", "href", "target", "ping", "rel", "media", "hreflang", "type"],
    ),
    container(
        "A",
        &["href", "target", "ping", "rel", "media", "hreflang", "type"],
    ),
    container("ARTICLE", &[]),
    container("ASIDE", &[]),
    container(
        "AUDIO",
        &["src", "crossorigin", "preload", "autoplay", "mediagroup", "loop", "controls"],
    ),
    container("B", &[]),
    bare("BASE", TagKind::Void),
    container("BDI", &[]),
    container("BDO", &[]),
    container("BLOCKQUOTE", &["cite"]),
    bare("BODY", TagKind::Container),
    void("BR", &[]),
    container(
        "BUTTON",
        &[
            "autofocus",
            "disabled",
            "form",
            "formaction",
            "formenctype",
            "formmethod",
            "formnovalidate",
            "formtarget",
            "name",
            "type",
            "value",
        ],
    ),
    bare("CANVAS", TagKind::Container),
    container("CAPTION", &[]),
    container("CITE", &[]),
    container("CODE", &[]),
    container("COL", &["span"]),
    container("COLGROUP", &["span"]),
    void(
        "COMMAND",
        &["type", "label", "icon", "disabled", "checked", "radiogroup", "command", "title"],
    ),
    container("DATA", &["value"]),
    container("DATAGRID", &["disabled", "multiple"]),
    container("DATALIST", &["data"]),
    container("DD", &[]),
    container("DEL", &["cite", "datetime"]),
    container("DFN", &[]),
    container("DL", &[]),
    container("DETAILS", &["open"]),
    container("DIV", &[]),
    container("DT", &[]),
    container("EM", &[]),
    void("EVENTSOURCE", &["src"]),
    void("EMBED", &["src", "type", "width", "height"]),
    container("FIELDSET", &["disabled", "form", "name"]),
    container("FIGCAPTION", &[]),
    container("FIGURE", &[]),
    bare("FOOTER", TagKind::Container),
    container(
        "FORM",
        &["action", "autocomplete", "enctype", "method", "name", "novalidate", "target"],
    ),
    container("H1", &[]),
    container("H2", &[]),
    container("H3", &[]),
    container("H4", &[]),
    container("H5", &[]),
    container("H6", &[]),
    bare("HEAD", TagKind::Container),
    bare("HEADER", TagKind::Container),
    bare("HGROUP", TagKind::Container),
    void("HR", &[]),
    bare("HTML", TagKind::Container),
    container("I", &[]),
    container(
        "IFRAME",
        &["src", "srcdoc", "name", "sandbox", "seamless", "width", "height"],
    ),
    void(
        "IMG",
        &["alt", "src", "crossorigin", "ismap", "usemap", "width", "height"],
    ),
    container("INS", &["cite", "datetime"]),
    void(
        "INPUT",
        &[
            "accept",
            "alt",
            "autocomplete",
            "autofocus",
            "checked",
            "disabled",
            "dirname",
            "form",
            "formaction",
            "formenctype",
            "formmethod",
            "formnovalidate",
            "formtarget",
            "height",
            "list",
            "max",
            "maxlength",
            "min",
            "multiple",
            "name",
            "pattern",
            "placeholder",
            "readonly",
            "required",
            "size",
            "src",
            "step",
            "type",
            "value",
            "width",
        ],
    ),
    container("KBD", &[]),
    void(
        "KEYGEN",
        &["autofocus", "challenge", "disabled", "form", "keytype", "name"],
    ),
    container("LABEL", &["for", "form"]),
    container("LEGEND", &[]),
    container("LI", &["value"]),
    container("MARK", &[]),
    bare("LINK", TagKind::Void),
    container("MAP", &["name"]),
    container("MENU", &["type", "label"]),
    bare("META", TagKind::Void),
    container(
        "METER",
        &["value", "min", "low", "high", "max", "optimum"],
    ),
    container("NOSCRIPT", &[]),
    container("NAV", &[]),
    container(
        "OBJECT",
        &["data", "type", "typemustmatch", "name", "usemap", "form", "width", "height"],
    ),
    container("OL", &["reversed", "start", "type"]),
    container("OPTGROUP", &["disabled", "label"]),
    container("OPTION", &["disabled", "label", "selected", "value"]),
    container("P", &[]),
    container("OUTPUT", &["for", "form", "name"]),
    void("PARAM", &["name", "value"]),
    container("PRE", &[]),
    container("PROGRESS", &["value", "max"]),
    container("Q", &["cite"]),
    container("RUBY", &[]),
    container("RP", &[]),
    container("RT", &[]),
    container("S", &[]),
    container("SAMP", &[]),
    container("SCRIPT", &["src", "async", "defer", "type", "charset"]),
    container("SECTION", &[]),
    container(
        "SELECT",
        &["autofocus", "disabled", "form", "multiple", "name", "size"],
    ),
    container("SMALL", &[]),
    void("SOURCE", &["src", "type", "media"]),
    container("SPAN", &[]),
    container("STRONG", &[]),
    bare("STYLE", TagKind::Container),
    container("SUB", &[]),
    container("SUMMARY", &[]),
    container("SUP", &[]),
    container("TABLE", &["border"]),
    container("TBODY", &[]),
    container("TD", &["colspan", "rowspan", "headers"]),
    container(
        "TEXTAREA",
        &[
            "autofocus",
            "disabled",
            "dirname",
            "form",
            "maxlength",
            "name",
            "placeholder",
            "readonly",
            "required",
            "rows",
            "cols",
            "wrap",
        ],
    ),
    container("TFOOT", &[]),
    container("TH", &["colspan", "rowspan", "headers", "scope"]),
    container("THEAD", &[]),
    container("TIME", &["datetime"]),
    bare("TITLE", TagKind::Container),
    container("TR", &[]),
    void("TRACK", &["kind", "src", "srclang", "label", "default"]),
    container("U", &[]),
    container("UL", &[]),
    container("VAR", &[]),
    container(
        "VIDEO",
        &[
            "src",
            "crossorigin",
            "poster",
            "preload",
            "autoplay",
            "mediagroup",
            "loop",
            "muted",
            "controls",
            "width",
            "height",
        ],
    ),
    void("WBR", &[]),
];

static DEFAULT_TEMPLATES: Lazy<IndexMap<String, String>> = Lazy::new(|| {
    TAGS.iter()
        .map(|spec| (spec.name.to_string(), spec.template()))
        .collect()
});

impl TagSpec {
    /// Build the template string for this tag
    pub fn template(&self) -> String {
        let element = self.name.to_ascii_lowercase();
        let globals: &[&str] = if self.global { GLOBAL_ATTRIBUTES } else { &[] };

        let mut out = format!("<{element} ");
        for attribute in self.attributes.iter().chain(globals) {
            out.push_str(attribute);
            out.push_str("=\"{");
            out.push_str(&attribute.to_ascii_uppercase());
            out.push_str("}\" ");
        }

        match self.kind {
            TagKind::Container => {
                out.push_str(">{");
                out.push_str(INSERT);
                out.push_str("}</");
                out.push_str(&element);
                out.push('>');
            }
            TagKind::Void => out.push_str("/>"),
        }
        out
    }
}

/// The built-in tag name -> template mapping
pub fn default_templates() -> &'static IndexMap<String, String> {
    &DEFAULT_TEMPLATES
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(name: &str) -> &'static TagSpec {
        TAGS.iter().find(|spec| spec.name == name).unwrap()
    }

    #[test]
    fn test_bare_templates() {
        assert_eq!(find("BODY").template(), "<body >{INSERT}</body>");
        assert_eq!(find("BASE").template(), "<base />");
    }

    #[test]
    fn test_container_template_layout() {
        let template = find("A").template();
        assert!(template.starts_with("<a href=\"{HREF}\" target=\"{TARGET}\" "));
        assert!(template.contains(" class=\"{CLASS}\" id=\"{ID}\" "));
        assert!(template.ends_with(" translate=\"{TRANSLATE}\" >{INSERT}</a>"));
    }

    #[test]
    fn test_void_template_layout() {
        let template = find("IMG").template();
        assert!(template.starts_with("<img alt=\"{ALT}\" src=\"{SRC}\" "));
        assert!(template.ends_with(" translate=\"{TRANSLATE}\" />"));
        assert!(!template.contains("{INSERT}"));
    }

    #[test]
    fn test_table_has_unique_plain_names() {
        let defaults = default_templates();
        assert_eq!(defaults.len(), TAGS.len());

        for spec in TAGS {
            assert!(spec.name.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
            for attribute in spec.attributes {
                assert!(
                    attribute.chars().all(|c| c.is_ascii_lowercase()),
                    "{} has attribute {attribute}",
                    spec.name
                );
            }
        }
    }
}
