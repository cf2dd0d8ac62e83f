//! Reveal targets: CSS selectors with their own option overrides.

pub mod label;
pub mod model;
pub mod query;

pub use label::{derive_label, effective_label};
pub use model::{
    Target, TargetDraft, TargetRecord, DUPLICATE_SELECTOR_MAX_LEN, LABEL_MAX_LEN,
    SELECTOR_MAX_LEN,
};
pub use query::{
    like_pattern, parse_status_param, SortDirection, SortKey, SortSpec, TargetPage, TargetQuery,
    PAGE_SIZE,
};
