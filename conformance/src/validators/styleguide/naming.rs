//! Naming and annotation predicates.
//!
//! The rules are intentionally simple ASCII patterns: digits and acronym runs
//! are not accepted (`XMLParser` and `Step2` both fail UpperCamelCase).
//! Changing them changes which ontology terms pass, so they stay as they are.

use std::sync::LazyLock;

use regex::Regex;

use crate::graph::Node;

/// Languages every label and definition set must cover.
pub const DEFAULT_LANGUAGES: &[&str] = &["en"];

static UPPER_CAMEL: LazyLock<Regex> = LazyLock::new(|| pattern(r"^([A-Z][a-z]+)*$"));
static LOWER_CAMEL: LazyLock<Regex> = LazyLock::new(|| pattern(r"^([a-z]+)([A-Z][a-z]+)*$"));
static CAPITALIZED: LazyLock<Regex> = LazyLock::new(|| pattern(r"^([A-Z][a-z]+\s?)*$"));
static PERSON: LazyLock<Regex> = LazyLock::new(|| pattern(r"^PERSON:(.*)$"));

#[allow(clippy::expect_used)]
fn pattern(re: &str) -> Regex {
    Regex::new(re).expect("literal pattern compiles")
}

/// `FooBar`; the empty string passes.
pub fn is_upper_camel_case(s: &str) -> bool {
    UPPER_CAMEL.is_match(s)
}

/// `fooBar`; a leading lowercase segment is required.
pub fn is_lower_camel_case(s: &str) -> bool {
    LOWER_CAMEL.is_match(s)
}

/// `Processing Step`: whitespace-separated capitalized words.
pub fn is_capitalized(s: &str) -> bool {
    CAPITALIZED.is_match(s)
}

/// Term editor references look like `PERSON:Jane Doe`.
pub fn is_person_reference(s: &str) -> bool {
    PERSON.is_match(s)
}

/// True iff every value is a language-tagged literal and every language in
/// `required` occurs among the tags.
///
/// An empty value list fails as soon as anything is required.
pub fn has_language<'a>(values: impl IntoIterator<Item = &'a Node>, required: &[&str]) -> bool {
    let mut languages = Vec::new();
    for value in values {
        match value.language() {
            Some(lang) => languages.push(lang),
            None => return false,
        }
    }
    required.iter().all(|lang| languages.contains(lang))
}

/// The part of `uri` after the last `/`, then after the last `#`.
pub fn extract_local_name(uri: &str) -> &str {
    let tail = uri.rsplit('/').next().unwrap_or(uri);
    tail.rsplit('#').next().unwrap_or(tail)
}
