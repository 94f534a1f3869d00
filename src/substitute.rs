//! Placeholder substitution
//!
//! Replaces `{NAME}` tokens in a single template with attribute values.
//! Placeholder names match ASCII case-insensitively and every occurrence is
//! replaced. The template is scanned once, so text inserted by a value is
//! never itself treated as a placeholder.

use std::borrow::Cow;
use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static PLACEHOLDER_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([^{}]+)\}").expect("Invalid placeholder regex"));

/// Substitute `attributes` into `template`
///
/// Tokens without a matching attribute are left in place for the cleanup
/// pass. When two attribute names differ only by case, the first one wins.
/// Returns the template borrowed when nothing was replaced.
///
/// ```rust,ignore
/// use markup_mapper::substitute;
///
/// let html = substitute("<p class=\"{CLASS}\">{INSERT}</p>", [("class", "lead"), ("INSERT", "Hi")]);
/// assert_eq!(html, "<p class=\"lead\">Hi</p>");
/// ```
pub fn substitute<'t, I, K, V>(template: &'t str, attributes: I) -> Cow<'t, str>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut lookup: HashMap<String, V> = HashMap::new();
    for (name, value) in attributes {
        lookup.entry(name.as_ref().to_ascii_uppercase()).or_insert(value);
    }

    if lookup.is_empty() {
        return Cow::Borrowed(template);
    }

    PLACEHOLDER_TOKEN.replace_all(template, |caps: &Captures| {
        match lookup.get(&caps[1].to_ascii_uppercase()) {
            Some(value) => value.as_ref().to_string(),
            None => caps[0].to_string(),
        }
    })
}
