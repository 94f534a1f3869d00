//! Basic usage examples for markup-mapper
//!
//! Renders a link, a list, a custom template and a small page, and shows how
//! diagnostics reach a logger.
//!
//! Run with: cargo run --example basic_usage

use markup_mapper::{AttributeMap, ConfigNode, MarkupMapper, Severity};
use serde_json::json;

fn main() -> markup_mapper::Result<()> {
    println!("=== Markup Mapper Basic Usage Examples ===\n");

    simple_link();
    repeated_tags()?;
    custom_template();
    typed_tree();
    diagnostics();

    Ok(())
}

fn simple_link() {
    println!("1. Simple Link");
    println!("==============");

    let mut mapper = MarkupMapper::new();
    mapper.set_config_json(json!({
        "A": {"ID": "myLink", "CLASS": "a b c", "HREF": "#", "INSERT": "My first link"}
    }));

    println!("{}\n", mapper.to_html().unwrap_or_default());
}

fn repeated_tags() -> markup_mapper::Result<()> {
    println!("2. Repeated Tags");
    println!("================");

    let tree = ConfigNode::from_json_str(
        r#"{"UL": {"CLASS": "menu", "INSERT": {"LI": [
            {"INSERT": "Home"},
            {"INSERT": "About"},
            {"INSERT": "Contact"}
        ]}}}"#,
    )?;
    let mapper = MarkupMapper::create(Some(tree), false);

    println!("{}\n", mapper.to_html().unwrap_or_default());
    Ok(())
}

fn custom_template() {
    println!("3. Custom Template");
    println!("==================");

    let html = MarkupMapper::new()
        .extend_templates(
            [(
                "IMGLINK",
                r#"<a href="{IMAGEURL}" class="imagelink" id="{IMGLINKID}"><img src="{IMAGEURL}" alt="{ALTTEXT}"/></a>"#,
            )],
            false,
        )
        .set_config_json(json!({
            "IMGLINK": {"IMGLINKID": "myId", "IMAGEURL": "url_to_my_image", "ALTTEXT": "an image"}
        }))
        .to_html();

    println!("{}\n", html.unwrap_or_default());
}

fn typed_tree() {
    println!("4. Typed Tree");
    println!("=============");

    let tree = ConfigNode::new().with_tag(
        "SECTION",
        AttributeMap::new().with("ID", "intro").with(
            "INSERT",
            vec![
                ConfigNode::new().with_tag("H2", AttributeMap::new().with("INSERT", "Intro")),
                ConfigNode::new().with_tag("P", AttributeMap::new().with("INSERT", "Built in Rust.")),
            ],
        ),
    );

    println!("{}\n", MarkupMapper::new().render(&tree).unwrap_or_default());
}

fn diagnostics() {
    println!("5. Diagnostics");
    println!("==============");

    let mut mapper = MarkupMapper::builder()
        .with_debug(true)
        .with_strict_templates(true)
        .with_logger(|message: &str, severity: Severity| println!("[{severity}] {message}"))
        .build();

    mapper.set_config_json(json!(["not", "a", "map"]));
    mapper.set_config_json(json!({"BLINK": {"INSERT": "retro"}}));

    match mapper.to_html() {
        Some(html) => println!("{html}"),
        None => println!("(nothing rendered)"),
    }
}
