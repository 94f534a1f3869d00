//! Cleanup pass
//!
//! Runs once over the fully assembled output and removes what substitution
//! left behind. The steps, in order:
//!
//! 1. drop unresolved placeholders such as `{CLASS}`
//! 2. drop attributes whose value is empty or only whitespace (`id=""`)
//! 3. collapse runs of whitespace into a single space
//! 4. drop the space before a tag-closing `>`
//!
//! Removing text can bring two fragments together into something a step
//! would have matched (`{A{B}}` becomes `{A}`), so the steps repeat until the
//! text is stable. Every step only shortens the text, so this terminates.
//! Rendered output is stable after the first iteration; only hand-written
//! input such as `{A{B}}` needs a second one.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

static UNRESOLVED_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\{[A-Z_]+\}").expect("Invalid placeholder regex"));

static EMPTY_ATTRIBUTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)[a-z]+="\s*""#).expect("Invalid attribute regex"));

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s{2,}").expect("Invalid whitespace regex"));

/// Strip unresolved placeholders, empty attributes and formatting artifacts
pub fn cleanup(html: &str) -> String {
    let mut current = single_pass(html).into_owned();
    loop {
        let next = match single_pass(&current) {
            Cow::Borrowed(_) => None,
            Cow::Owned(next) => Some(next),
        };
        match next {
            Some(next) => current = next,
            None => return current,
        }
    }
}

fn single_pass(html: &str) -> Cow<'_, str> {
    let text = UNRESOLVED_PLACEHOLDER.replace_all(html, "");
    let text = chain(text, |s| EMPTY_ATTRIBUTE.replace_all(s, ""));
    let text = chain(text, |s| WHITESPACE_RUN.replace_all(s, " "));
    chain(text, |s| {
        if s.contains(" >") {
            Cow::Owned(s.replace(" >", ">"))
        } else {
            Cow::Borrowed(s)
        }
    })
}

/// Apply `step` to `text`, borrowing from the original input while nothing changes
fn chain<'a>(text: Cow<'a, str>, step: impl for<'s> Fn(&'s str) -> Cow<'s, str>) -> Cow<'a, str> {
    match text {
        Cow::Borrowed(s) => step(s),
        Cow::Owned(s) => Cow::Owned(step(&s).into_owned()),
    }
}
