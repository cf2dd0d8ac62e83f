//! Use case for building the client bootstrap attachments of a page
//! 构建页面的客户端启动数据

use std::sync::Arc;

use serde::Serialize;
use sr_core::ports::{LibraryProbePort, RevealPayloadCachePort, SettingsPort, TargetRepositoryPort};
use sr_core::reveal::{build_elements, ClientSettings, RevealElement};
use sr_core::settings::{LibraryAsset, Settings};
use tracing::{debug, info_span, Instrument};

/// Everything a page needs to run the reveal bootstrap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageAttachments {
    pub library_url: String,
    pub settings: ClientSettings,
}

pub struct BuildClientSettings {
    repo: Arc<dyn TargetRepositoryPort>,
    settings: Arc<dyn SettingsPort>,
    probe: Arc<dyn LibraryProbePort>,
    cache: Arc<dyn RevealPayloadCachePort>,
}

impl BuildClientSettings {
    pub fn new(
        repo: Arc<dyn TargetRepositoryPort>,
        settings: Arc<dyn SettingsPort>,
        probe: Arc<dyn LibraryProbePort>,
        cache: Arc<dyn RevealPayloadCachePort>,
    ) -> Self {
        Self {
            repo,
            settings,
            probe,
            cache,
        }
    }

    /// Returns `None` when loading is switched off or the page is excluded
    /// by the visibility rules.
    pub async fn execute(
        &self,
        path: &str,
        front_path: &str,
    ) -> anyhow::Result<Option<PageAttachments>> {
        let span = info_span!("usecase.build_client_settings.execute", path = %path);

        async {
            let settings = self.settings.load().await?;
            if !settings.library.load {
                debug!("Library loading disabled");
                return Ok(None);
            }
            if !settings.visibility.is_visible(path, front_path) {
                debug!("Page excluded by visibility rules");
                return Ok(None);
            }

            let asset = LibraryAsset::resolve(&settings.library, self.probe.is_installed());
            let elements = self.elements(&settings).await?;

            Ok(Some(PageAttachments {
                library_url: asset.url,
                settings: ClientSettings {
                    debug: settings.library.debug,
                    elements,
                },
            }))
        }
        .instrument(span)
        .await
    }

    async fn elements(&self, settings: &Settings) -> anyhow::Result<Vec<RevealElement>> {
        if let Some(cached) = self.cache.get().await {
            debug!(count = cached.len(), "Reveal payload cache hit");
            return Ok(cached);
        }

        let targets = self.repo.list_enabled().await?;
        let elements = build_elements(&targets, &settings.options, &settings.configs);
        debug!(count = elements.len(), "Reveal payload rebuilt");
        self.cache.put(elements.clone()).await;
        Ok(elements)
    }
}
