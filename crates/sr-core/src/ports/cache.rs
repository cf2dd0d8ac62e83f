use async_trait::async_trait;

use crate::reveal::RevealElement;

/// Invalidation hook called after every mutation of targets or settings.
#[async_trait]
pub trait DerivedCachePort: Send + Sync {
    async fn flush_derived(&self);
}

/// Cached client bootstrap element list.
#[async_trait]
pub trait RevealPayloadCachePort: Send + Sync {
    async fn get(&self) -> Option<Vec<RevealElement>>;
    async fn put(&self, elements: Vec<RevealElement>);
}
