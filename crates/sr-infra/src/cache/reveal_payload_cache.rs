use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use sr_core::ports::{DerivedCachePort, RevealPayloadCachePort};
use sr_core::reveal::RevealElement;

/// In-process cache of the client bootstrap element list.
///
/// Flushing drops only this derived payload; repository reads are never cached.
#[derive(Default)]
pub struct InMemoryRevealCache {
    elements: RwLock<Option<Vec<RevealElement>>>,
}

impl InMemoryRevealCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DerivedCachePort for InMemoryRevealCache {
    async fn flush_derived(&self) {
        let mut guard = self.elements.write().await;
        if guard.take().is_some() {
            debug!("reveal payload cache flushed");
        }
    }
}

#[async_trait]
impl RevealPayloadCachePort for InMemoryRevealCache {
    async fn get(&self) -> Option<Vec<RevealElement>> {
        self.elements.read().await.clone()
    }

    async fn put(&self, elements: Vec<RevealElement>) {
        *self.elements.write().await = Some(elements);
    }
}
