use thiserror::Error;

#[derive(Debug, Error)]
pub enum TargetRepositoryError {
    #[error("target not found")]
    NotFound,

    #[error("selector already in use: {0}")]
    DuplicateSelector(String),

    #[error("storage error: {0}")]
    Storage(String),
}

/// Key store failures.
///
/// 密钥存储错误。A missing secret is `Ok(None)`, not an error.
#[derive(Debug, Error)]
pub enum SecretStoreError {
    #[error("secret store unavailable: {0}")]
    Unavailable(String),

    #[error("secret store data corrupt: {0}")]
    Corrupt(String),
}
