use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::sqlite::Sqlite;

use sr_core::ports::{TargetRepositoryError, TargetRepositoryPort};
use sr_core::target::{SortDirection, SortKey, SortSpec, TargetPage, TargetQuery, PAGE_SIZE};
use sr_core::{Target, TargetDraft, TargetId, TargetRecord};

use crate::db::models::{NewRevealTargetRow, RevealTargetRow};
use crate::db::ports::{DbExecutor, InsertMapper, RowMapper};
use crate::db::schema::reveal_target::{self, dsl};

type BoxedTargetQuery<'a, ST> = reveal_target::BoxedQuery<'a, Sqlite, ST>;

pub struct DieselTargetRepository<E, M> {
    executor: E,
    mapper: M,
}

impl<E, M> DieselTargetRepository<E, M> {
    pub fn new(executor: E, mapper: M) -> Self {
        Self { executor, mapper }
    }
}

/// Applies the search and status filters shared by the page and count queries.
fn apply_filters<'a, ST>(
    mut query: BoxedTargetQuery<'a, ST>,
    pattern: Option<String>,
    status: Option<bool>,
) -> BoxedTargetQuery<'a, ST> {
    if let Some(pattern) = pattern {
        query = query.filter(
            dsl::selector
                .like(pattern.clone())
                .escape('\\')
                .or(dsl::label.like(pattern).escape('\\')),
        );
    }
    if let Some(enabled_value) = status {
        query = query.filter(dsl::enabled.eq(enabled_value));
    }
    query
}

fn apply_sort<'a>(
    mut query: BoxedTargetQuery<'a, reveal_target::SqlType>,
    sort: &[SortSpec],
) -> BoxedTargetQuery<'a, reveal_target::SqlType> {
    for spec in sort {
        query = match (spec.key, spec.direction) {
            (SortKey::Selector, SortDirection::Asc) => query.then_order_by(dsl::selector.asc()),
            (SortKey::Selector, SortDirection::Desc) => query.then_order_by(dsl::selector.desc()),
            (SortKey::Label, SortDirection::Asc) => query.then_order_by(dsl::label.asc()),
            (SortKey::Label, SortDirection::Desc) => query.then_order_by(dsl::label.desc()),
            (SortKey::Status, SortDirection::Asc) => query.then_order_by(dsl::enabled.asc()),
            (SortKey::Status, SortDirection::Desc) => query.then_order_by(dsl::enabled.desc()),
            (SortKey::Changed, SortDirection::Asc) => query.then_order_by(dsl::changed_at.asc()),
            (SortKey::Changed, SortDirection::Desc) => {
                query.then_order_by(dsl::changed_at.desc())
            }
        };
    }
    query.then_order_by(dsl::id.desc())
}

/// Maps executor failures, keeping unique-constraint violations distinct.
fn storage_error(err: anyhow::Error, selector_value: &str) -> TargetRepositoryError {
    match err.downcast_ref::<DieselError>() {
        Some(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
            TargetRepositoryError::DuplicateSelector(selector_value.to_string())
        }
        _ => TargetRepositoryError::Storage(err.to_string()),
    }
}

#[async_trait]
impl<E, M> TargetRepositoryPort for DieselTargetRepository<E, M>
where
    E: DbExecutor,
    M: InsertMapper<TargetDraft, NewRevealTargetRow>
        + RowMapper<RevealTargetRow, Target>
        + Send
        + Sync,
{
    async fn exists(&self, selector_value: &str) -> Result<bool, TargetRepositoryError> {
        let selector_value = selector_value.to_string();
        self.executor
            .run(move |conn| {
                let found = diesel::select(diesel::dsl::exists(
                    reveal_target::table.filter(dsl::selector.eq(&selector_value)),
                ))
                .get_result::<bool>(conn)?;
                Ok(found)
            })
            .map_err(|e| TargetRepositoryError::Storage(e.to_string()))
    }

    async fn upsert(&self, draft: TargetDraft) -> Result<TargetId, TargetRepositoryError> {
        let row = self
            .mapper
            .to_row(&draft)
            .map_err(|e| TargetRepositoryError::Storage(e.to_string()))?;
        let selector_value = row.selector.clone();

        if draft.is_new() {
            return self
                .executor
                .run(move |conn| {
                    let new_id = diesel::insert_into(reveal_target::table)
                        .values(&row)
                        .returning(dsl::id)
                        .get_result::<i64>(conn)?;
                    Ok(TargetId::new(new_id))
                })
                .map_err(|e| storage_error(e, &selector_value));
        }

        let target_id = draft.id;
        self.executor
            .run(move |conn| {
                diesel::update(reveal_target::table.find(target_id.value()))
                    .set(&row)
                    .execute(conn)?;
                Ok(target_id)
            })
            .map_err(|e| storage_error(e, &selector_value))
    }

    async fn delete(&self, target_id: TargetId) -> Result<(), TargetRepositoryError> {
        self.executor
            .run(move |conn| {
                diesel::delete(reveal_target::table.find(target_id.value())).execute(conn)?;
                Ok(())
            })
            .map_err(|e| TargetRepositoryError::Storage(e.to_string()))
    }

    async fn list(&self, query: &TargetQuery) -> Result<TargetPage, TargetRepositoryError> {
        let pattern = query.search_pattern();
        let status = query.status;
        let sort = query.sort.clone();
        let offset = query.offset();
        let page = query.page;

        self.executor
            .run(move |conn| {
                let total = apply_filters(
                    reveal_target::table.select(diesel::dsl::count_star()).into_boxed(),
                    pattern.clone(),
                    status,
                )
                .get_result::<i64>(conn)?;

                let rows_query = apply_filters(reveal_target::table.into_boxed(), pattern, status);
                let rows = apply_sort(rows_query, &sort)
                    .limit(i64::from(PAGE_SIZE))
                    .offset(offset)
                    .load::<RevealTargetRow>(conn)?;

                let mut targets = Vec::with_capacity(rows.len());
                for row in rows {
                    targets.push(self.mapper.to_domain(&row)?);
                }

                Ok(TargetPage {
                    rows: targets,
                    page,
                    total: u64::try_from(total).unwrap_or_default(),
                })
            })
            .map_err(|e| TargetRepositoryError::Storage(e.to_string()))
    }

    async fn get_by_id(
        &self,
        target_id: TargetId,
    ) -> Result<Option<TargetRecord>, TargetRepositoryError> {
        self.executor
            .run(move |conn| {
                let row = reveal_target::table
                    .find(target_id.value())
                    .first::<RevealTargetRow>(conn)
                    .optional()?;

                match row {
                    Some(r) => Ok(Some(TargetRecord::from(self.mapper.to_domain(&r)?))),
                    None => Ok(None),
                }
            })
            .map_err(|e| TargetRepositoryError::Storage(e.to_string()))
    }

    async fn list_enabled(&self) -> Result<Vec<Target>, TargetRepositoryError> {
        self.executor
            .run(|conn| {
                let rows = reveal_target::table
                    .filter(dsl::enabled.eq(true))
                    .order(dsl::id.asc())
                    .load::<RevealTargetRow>(conn)?;

                let mut targets = Vec::with_capacity(rows.len());
                for row in rows {
                    let row_id = row.id;
                    let target = self.mapper.to_domain(&row).map_err(|e| {
                        anyhow::anyhow!("Failed to map reveal_target id {}: {}", row_id, e)
                    })?;
                    targets.push(target);
                }
                Ok(targets)
            })
            .map_err(|e| TargetRepositoryError::Storage(e.to_string()))
    }
}
