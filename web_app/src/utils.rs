//! Helper functions could be used in api/, forms/, front/, ...

use crate::consts;
use regex::Regex;
use std::{collections::BTreeSet, sync::LazyLock};

/// Client to make http requests
pub static REQUEST_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(reqwest::Client::new);

/// Matches `{{N}}` placeholders, tolerating inner whitespace like `{{ 3 }}`
static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*(\d+)\s*\}\}").expect("placeholder regex is valid"));

/// Returns the distinct placeholder indexes referenced in `text`, ascending.
///
/// Indexes are 1-based: `{{0}}` is ignored, as is anything above
/// [`consts::MAX_TEMPLATE_VARIABLE_INDEX`]. Absent or empty text yields an empty list.
///
/// # Example
/// ```ignore
/// assert_eq!(extract_variable_indexes(Some("Hola {{2}}, código {{1}}, vence {{2}}")), vec![1, 2]);
/// ```
pub fn extract_variable_indexes(text: Option<&str>) -> Vec<u32> {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return Vec::new();
    };

    PLACEHOLDER_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1)?.as_str().parse::<u32>().ok())
        .filter(|idx| (1..=consts::MAX_TEMPLATE_VARIABLE_INDEX).contains(idx))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Whether `text` references a placeholder above [`consts::MAX_TEMPLATE_VARIABLE_INDEX`],
/// which [`extract_variable_indexes`] leaves out.
pub fn has_out_of_range_variable(text: &str) -> bool {
    PLACEHOLDER_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .any(|digits| {
            digits
                .as_str()
                .parse::<u32>()
                .map_or(true, |idx| idx > consts::MAX_TEMPLATE_VARIABLE_INDEX)
        })
}
