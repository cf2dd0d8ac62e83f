use async_trait::async_trait;

use crate::ids::TargetId;
use crate::target::{Target, TargetDraft, TargetPage, TargetQuery, TargetRecord};

use super::errors::TargetRepositoryError;

#[async_trait]
pub trait TargetRepositoryPort: Send + Sync {
    /// Exact, case-sensitive match against every row, enabled or not.
    async fn exists(&self, selector: &str) -> Result<bool, TargetRepositoryError>;

    /// Inserts when `draft.id` is new and returns the assigned id; otherwise
    /// updates that row. Updating a missing row changes nothing.
    async fn upsert(&self, draft: TargetDraft) -> Result<TargetId, TargetRepositoryError>;

    /// Removing a missing row is not an error.
    async fn delete(&self, id: TargetId) -> Result<(), TargetRepositoryError>;

    async fn list(&self, query: &TargetQuery) -> Result<TargetPage, TargetRepositoryError>;

    async fn get_by_id(&self, id: TargetId) -> Result<Option<TargetRecord>, TargetRepositoryError>;

    /// Enabled targets ordered by id.
    async fn list_enabled(&self) -> Result<Vec<Target>, TargetRepositoryError>;
}
