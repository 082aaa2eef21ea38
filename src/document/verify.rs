use lazy_static::lazy_static;
use regex::Regex;

use crate::models::RequiredUsage;

lazy_static! {
    static ref NEWCOMMAND: Regex =
        Regex::new(r"\\(?:re)?newcommand\s*\{?\\([A-Za-z]+)\}?[^\n]*").unwrap();
}

/// First required line that does not occur verbatim in `text`
pub fn missing_usage<'a>(text: &str, required: &'a [RequiredUsage]) -> Option<&'a RequiredUsage> {
    required.iter().find(|usage| !text.contains(usage.line.as_str()))
}

/// A definition of the command for `family` in `text` that differs from the generated one
pub fn conflicting_definition<'t>(text: &'t str, family: &str) -> Option<&'t str> {
    NEWCOMMAND
        .captures_iter(text)
        .find(|caps| &caps[1] == family)
        .and_then(|caps| caps.get(0))
        .map(|definition| definition.as_str().trim_end())
}
