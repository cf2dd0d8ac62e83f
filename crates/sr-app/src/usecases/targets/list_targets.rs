//! Use case for the admin target listing
//! 管理列表用例

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use sr_core::ports::TargetRepositoryPort;
use sr_core::target::{parse_status_param, SortSpec, Target, TargetQuery};
use sr_core::TargetId;
use tracing::{debug, info_span, Instrument};

use super::error::TargetUseCaseError;
use crate::routes::Route;

pub const SHORT_DATE_FORMAT: &str = "%m/%d/%Y - %H:%M";

/// Raw query parameters of the list route.
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    pub search: Option<String>,
    pub status: Option<String>,
    pub sort: Option<String>,
    pub page: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Operation {
    pub title: &'static str,
    pub route: Route,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetRow {
    pub id: TargetId,
    pub selector: String,
    pub label: String,
    pub status: &'static str,
    pub changed: String,
    pub operations: Vec<Operation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pager {
    /// Zero-based.
    pub page: u32,
    pub total_pages: u32,
    pub total: u64,
}

/// Current state of the filter sub-form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterState {
    pub search: String,
    pub status: String,
    pub show_reset: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetListView {
    pub rows: Vec<TargetRow>,
    pub pager: Pager,
    pub filter: FilterState,
    pub empty_text: String,
    pub add_route: Route,
}

pub fn format_short_date(at: DateTime<Utc>) -> String {
    at.format(SHORT_DATE_FORMAT).to_string()
}

fn row_view(target: Target) -> TargetRow {
    TargetRow {
        id: target.id,
        status: if target.enabled { "Enabled" } else { "Disabled" },
        changed: format_short_date(target.changed_at),
        operations: vec![
            Operation {
                title: "Edit",
                route: Route::Edit(target.id),
            },
            Operation {
                title: "Delete",
                route: Route::Delete(target.id),
            },
            Operation {
                title: "Duplicate",
                route: Route::Duplicate(target.id),
            },
        ],
        selector: target.selector,
        label: target.label,
    }
}

pub struct ListTargets {
    repo: Arc<dyn TargetRepositoryPort>,
}

impl ListTargets {
    pub fn new(repo: Arc<dyn TargetRepositoryPort>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, params: ListParams) -> Result<TargetListView, TargetUseCaseError> {
        let span = info_span!(
            "usecase.list_targets.execute",
            search = ?params.search,
            status = ?params.status,
        );

        async {
            let search = params
                .search
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_string();
            let status_raw = params.status.clone().unwrap_or_default();

            let query = TargetQuery {
                search: (!search.is_empty()).then(|| search.clone()),
                status: parse_status_param(params.status.as_deref()),
                sort: params
                    .sort
                    .as_deref()
                    .map(SortSpec::parse_list)
                    .unwrap_or_else(SortSpec::default_order),
                page: params.page.unwrap_or(0),
            };

            let page = self.repo.list(&query).await?;
            debug!(rows = page.rows.len(), total = page.total, "Listed targets");

            let pager = Pager {
                page: page.page,
                total_pages: page.total_pages(),
                total: page.total,
            };
            let show_reset = query.search.is_some() || query.status.is_some();

            Ok(TargetListView {
                rows: page.rows.into_iter().map(row_view).collect(),
                pager,
                filter: FilterState {
                    search,
                    status: status_raw,
                    show_reset,
                },
                empty_text: "No ScrollReveal targets available.".to_string(),
                add_route: Route::Add,
            })
        }
        .instrument(span)
        .await
    }
}
