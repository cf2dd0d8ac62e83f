use std::sync::OnceLock;

use regex::Regex;

use super::model::LABEL_MAX_LEN;

fn separator_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-zA-Z0-9]+").expect("valid separator regex"))
}

/// Builds a display label from a CSS selector.
///
/// Runs of non-alphanumeric characters collapse into one space, the result is
/// trimmed and its first letter upper-cased. The result is capped at
/// `LABEL_MAX_LEN` characters.
pub fn derive_label(selector: &str) -> String {
    let spaced = separator_re().replace_all(selector, " ");
    let trimmed = spaced.trim();

    let mut chars = trimmed.chars();
    let label: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    if label.chars().count() <= LABEL_MAX_LEN {
        return label;
    }
    // 截断后去掉末尾空格
    let capped: String = label.chars().take(LABEL_MAX_LEN).collect();
    capped.trim_end().to_string()
}

/// Returns the explicit label when one was typed, otherwise the derived one.
pub fn effective_label(label: &str, selector: &str) -> String {
    let label = label.trim();
    if label.is_empty() {
        derive_label(selector)
    } else {
        label.to_string()
    }
}
