//! Rendering integration tests
//!
//! These tests drive the public API end to end: configuration trees built
//! from JSON, rendered against the built-in and custom template stores.

use std::sync::{Arc, Mutex};

use markup_mapper::{
    cleanup, render_to_string, substitute, AttributeMap, ConfigNode, MarkupMapper, Severity,
    TemplateStore,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn tree(value: serde_json::Value) -> ConfigNode {
    ConfigNode::try_from(value).unwrap()
}

fn small_store() -> TemplateStore {
    TemplateStore::from_iter([
        ("DIV", "<div>{INSERT}</div>"),
        ("SPAN", "<span>{INSERT}</span>"),
        ("LI", "<li>{INSERT}</li>"),
    ])
}

#[test]
fn test_insert_substitution() {
    assert_eq!(substitute("<b>{INSERT}</b>", [("INSERT", "x")]), "<b>x</b>");
}

#[test]
fn test_cleanup_is_idempotent_on_rendered_output() {
    let html = render_to_string(
        &tree(json!({"FORM": {"ACTION": "/go", "INSERT": {"INPUT": {"NAME": "q"}}}})),
        &TemplateStore::default(),
    )
    .unwrap();
    assert_eq!(cleanup(&html), html);
}

#[test]
fn test_unknown_tag_yields_empty() {
    let html = render_to_string(&tree(json!({"UNKNOWNTAG": {"INSERT": "x"}})), &small_store());
    assert_eq!(html.unwrap(), "");
}

#[test]
fn test_array_repetition_preserves_order() {
    let html = render_to_string(
        &tree(json!({"LI": [{"INSERT": "a"}, {"INSERT": "b"}]})),
        &small_store(),
    );
    assert_eq!(html.unwrap(), "<li>a</li><li>b</li>");
}

#[test]
fn test_nested_object_renders_before_substitution() {
    let html = render_to_string(
        &tree(json!({"DIV": {"INSERT": {"SPAN": {"INSERT": "hi"}}}})),
        &small_store(),
    );
    assert_eq!(html.unwrap(), "<div><span>hi</span></div>");
}

#[test]
fn test_extend_without_force_preserves_existing() {
    let mut mapper = MarkupMapper::builder()
        .with_templates(TemplateStore::from_iter([("A", "original")]))
        .build();

    mapper.extend_templates([("A", "new")], false);
    assert_eq!(mapper.templates().get("A"), Some("original"));

    mapper.extend_templates([("A", "new")], true);
    assert_eq!(mapper.templates().get("A"), Some("new"));
}

#[test]
fn test_cleanup_strips_empty_attributes_and_placeholders() {
    assert_eq!(cleanup(r#"<a href="" class="{CLASS}" >"#), "<a>");
}

#[test]
fn test_end_to_end_link_with_default_store() {
    let html = render_to_string(
        &tree(json!({"A": {
            "HREF": "#",
            "CLASS": "a b c",
            "ID": "myLink",
            "INSERT": "My first link"
        }})),
        &TemplateStore::default(),
    );
    assert_eq!(
        html.unwrap(),
        r##"<a href="#" class="a b c" id="myLink">My first link</a>"##
    );
}

#[test]
fn test_page_skeleton() {
    let html = render_to_string(
        &tree(json!({"HTML": {"INSERT": [
            {"HEAD": {"INSERT": {"TITLE": {"INSERT": "Hello"}}}},
            {"BODY": {"INSERT": {
                "H1": {"INSERT": "Welcome", "CLASS": "title"},
                "P": {"INSERT": "Rendered from objects."}
            }}}
        ]}})),
        &TemplateStore::default(),
    );
    assert_eq!(
        html.unwrap(),
        concat!(
            "<html><head><title>Hello</title></head>",
            r#"<body><h1 class="title">Welcome</h1><p>Rendered from objects.</p></body></html>"#
        )
    );
}

#[test]
fn test_table_rows_from_sequences() {
    let html = render_to_string(
        &tree(json!({"TABLE": {"INSERT": {"TR": [
            {"INSERT": {"TD": [{"INSERT": 1}, {"INSERT": 2}]}},
            {"INSERT": {"TD": [{"INSERT": 3}, {"INSERT": 4, "COLSPAN": 2}]}}
        ]}}})),
        &TemplateStore::default(),
    );
    assert_eq!(
        html.unwrap(),
        r#"<table><tr><td>1</td><td>2</td></tr><tr><td>3</td><td colspan="2">4</td></tr></table>"#
    );
}

#[test]
fn test_void_elements_self_close() {
    let html = render_to_string(
        &tree(json!({
            "IMG": {"SRC": "cat.png", "ALT": "a cat"},
            "BR": {},
            "INPUT": {"TYPE": "checkbox", "CHECKED": true, "NAME": "ok"}
        })),
        &TemplateStore::default(),
    );
    assert_eq!(
        html.unwrap(),
        r#"<img alt="a cat" src="cat.png" /><br /><input checked="true" name="ok" type="checkbox" />"#
    );
}

#[test]
fn test_lowercase_attribute_names_match() {
    let html = render_to_string(
        &tree(json!({"SPAN": {"class": "note", "insert": "small print"}})),
        &TemplateStore::default(),
    );
    assert_eq!(html.unwrap(), r#"<span class="note">small print</span>"#);
}

#[test]
fn test_null_and_empty_values_drop_attributes() {
    let html = render_to_string(
        &tree(json!({"DIV": {"ID": null, "TITLE": "   ", "CLASS": "", "INSERT": "x"}})),
        &TemplateStore::default(),
    );
    assert_eq!(html.unwrap(), "<div>x</div>");
}

#[test]
fn test_typed_tree_matches_json_tree() {
    let typed = ConfigNode::new().with_tag(
        "DIV",
        AttributeMap::new().with("CLASS", "box").with(
            "INSERT",
            ConfigNode::new().with_tag("SPAN", AttributeMap::new().with("INSERT", "hi")),
        ),
    );
    let from_json = tree(json!({"DIV": {"CLASS": "box", "INSERT": {"SPAN": {"INSERT": "hi"}}}}));

    assert_eq!(typed, from_json);
    let store = TemplateStore::default();
    assert_eq!(
        render_to_string(&typed, &store).unwrap(),
        r#"<div class="box"><span>hi</span></div>"#
    );
}

#[test]
fn test_render_leaves_stored_config_alone() {
    let mut mapper = MarkupMapper::new();
    mapper.set_config_json(json!({"P": {"INSERT": "stored"}}));

    let other = tree(json!({"EM": {"INSERT": "other"}}));
    assert_eq!(mapper.render(&other).as_deref(), Some("<em>other</em>"));
    assert_eq!(mapper.to_html().as_deref(), Some("<p>stored</p>"));
}

#[test]
fn test_concurrent_renders_share_one_mapper() {
    let mut mapper = MarkupMapper::new();
    mapper.set_config_json(json!({"LI": [{"INSERT": "a"}, {"INSERT": "b"}]}));
    let mapper = std::sync::Arc::new(mapper);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let mapper = mapper.clone();
            std::thread::spawn(move || mapper.to_html())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().as_deref(), Some("<li>a</li><li>b</li>"));
    }
}

#[test]
fn test_sequence_with_scalar_entry_keeps_template() {
    let html = render_to_string(
        &tree(json!({"LI": [{"INSERT": "a"}, "b", {"INSERT": "c"}]})),
        &small_store(),
    );
    assert_eq!(html.unwrap(), "<li>a</li><li></li><li>c</li>");
}

#[test]
fn test_partly_malformed_config_replaces_previous_tree() {
    let records = Arc::new(Mutex::new(Vec::new()));
    let sink = records.clone();
    let mut mapper = MarkupMapper::builder()
        .with_debug(true)
        .with_logger(move |message: &str, severity: Severity| {
            sink.lock().unwrap().push((message.to_string(), severity));
        })
        .build();

    mapper.set_config_json(json!({"P": {"INSERT": "old"}}));
    mapper.set_config_json(json!({"UL": {"INSERT": "x"}, "LI": [{"INSERT": "a"}, "b"]}));

    assert_eq!(
        mapper.to_html().as_deref(),
        Some("<ul>x</ul><li>a</li><li></li>")
    );
    assert_eq!(
        *records.lock().unwrap(),
        vec![(
            "Cannot substitute attributes of type string into tag 'LI'".to_string(),
            Severity::Error
        )]
    );
}
