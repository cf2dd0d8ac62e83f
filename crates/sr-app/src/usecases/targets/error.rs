use sr_core::ports::TargetRepositoryError;
use sr_core::TargetId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TargetUseCaseError {
    #[error("target {0} not found")]
    NotFound(TargetId),

    #[error("storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl From<TargetRepositoryError> for TargetUseCaseError {
    fn from(err: TargetRepositoryError) -> Self {
        TargetUseCaseError::Storage(anyhow::Error::new(err))
    }
}
