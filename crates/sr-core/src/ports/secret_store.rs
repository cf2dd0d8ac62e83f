use async_trait::async_trait;

use super::errors::SecretStoreError;

/// Named secret lookup.
///
/// 按名称读取密钥值。
#[async_trait]
pub trait SecretStorePort: Send + Sync {
    async fn get(&self, name: &str) -> Result<Option<String>, SecretStoreError>;
}
