use serde::{Deserialize, Serialize};

use super::model::Target;

/// Fixed number of rows per admin list page.
pub const PAGE_SIZE: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Selector,
    Label,
    Status,
    Changed,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Selector => "selector",
            SortKey::Label => "label",
            SortKey::Status => "status",
            SortKey::Changed => "changed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "selector" => Some(SortKey::Selector),
            "label" => Some(SortKey::Label),
            "status" => Some(SortKey::Status),
            "changed" => Some(SortKey::Changed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub const fn asc(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Asc,
        }
    }

    pub const fn desc(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Desc,
        }
    }

    /// Newest-changed first.
    pub fn default_order() -> Vec<SortSpec> {
        vec![SortSpec::desc(SortKey::Changed)]
    }

    /// Parses a comma separated sort parameter such as `label,-changed`.
    ///
    /// A leading `-` means descending. Unknown keys are ignored; an empty
    /// result falls back to the default order.
    pub fn parse_list(param: &str) -> Vec<SortSpec> {
        let specs: Vec<SortSpec> = param
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .filter_map(|part| match part.strip_prefix('-') {
                Some(key) => SortKey::parse(key).map(SortSpec::desc),
                None => SortKey::parse(part).map(SortSpec::asc),
            })
            .collect();

        if specs.is_empty() {
            Self::default_order()
        } else {
            specs
        }
    }
}

/// Filters, ordering and page for the admin listing.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetQuery {
    pub search: Option<String>,
    /// `Some(true)` enabled only, `Some(false)` disabled only.
    pub status: Option<bool>,
    pub sort: Vec<SortSpec>,
    /// Zero-based.
    pub page: u32,
}

impl Default for TargetQuery {
    fn default() -> Self {
        Self {
            search: None,
            status: None,
            sort: SortSpec::default_order(),
            page: 0,
        }
    }
}

impl TargetQuery {
    pub fn offset(&self) -> i64 {
        i64::from(self.page) * i64::from(PAGE_SIZE)
    }

    /// LIKE pattern for the search text, `None` when search is blank.
    pub fn search_pattern(&self) -> Option<String> {
        self.search.as_deref().and_then(like_pattern)
    }
}

/// Parses the `status` query parameter: `1` enabled, `0` disabled, anything
/// else (including blank) means no filter.
pub fn parse_status_param(value: Option<&str>) -> Option<bool> {
    match value.map(str::trim) {
        Some("1") => Some(true),
        Some("0") => Some(false),
        _ => None,
    }
}

/// Turns user search text into a `%...%` LIKE pattern using `\` as escape.
///
/// LIKE metacharacters typed by the user match literally; runs of `*` become
/// a single `%` wildcard.
pub fn like_pattern(search: &str) -> Option<String> {
    let search = search.trim();
    if search.is_empty() {
        return None;
    }

    let mut pattern = String::with_capacity(search.len() + 2);
    pattern.push('%');
    let mut last_was_star = false;
    for ch in search.chars() {
        if ch == '*' {
            if !last_was_star {
                pattern.push('%');
            }
            last_was_star = true;
            continue;
        }
        last_was_star = false;
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    Some(pattern)
}

/// One page of the admin listing.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetPage {
    pub rows: Vec<Target>,
    pub page: u32,
    pub total: u64,
}

impl TargetPage {
    pub fn total_pages(&self) -> u32 {
        let size = u64::from(PAGE_SIZE);
        u32::try_from(self.total.div_ceil(size)).unwrap_or(u32::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
