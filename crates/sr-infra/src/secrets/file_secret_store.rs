use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use sr_core::ports::{SecretStoreError, SecretStorePort};

/// Key store backed by a JSON object file: `{"name": "value", ...}`.
///
/// The file is read on every lookup so rotated keys are picked up without a
/// restart. A missing file holds no secrets.
pub struct FileSecretStore {
    path: PathBuf,
}

impl FileSecretStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read_all(&self) -> Result<HashMap<String, String>, SecretStoreError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "secret file missing");
                return Ok(HashMap::new());
            }
            Err(e) => {
                return Err(SecretStoreError::Unavailable(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        serde_json::from_str(&content)
            .map_err(|e| SecretStoreError::Corrupt(format!("{}: {}", self.path.display(), e)))
    }
}

#[async_trait]
impl SecretStorePort for FileSecretStore {
    async fn get(&self, name: &str) -> Result<Option<String>, SecretStoreError> {
        let mut secrets = self.read_all().await?;
        Ok(secrets.remove(name))
    }
}
