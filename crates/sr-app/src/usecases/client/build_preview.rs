//! Live preview payload for the editor and settings forms.

use std::sync::Arc;

use sr_core::ports::SettingsPort;
use sr_core::reveal::{ClientSettings, PreviewSource};
use sr_core::{AnimationOptions, RevealConfig};

pub struct BuildPreview {
    settings: Arc<dyn SettingsPort>,
}

impl BuildPreview {
    pub fn new(settings: Arc<dyn SettingsPort>) -> Self {
        Self { settings }
    }

    /// The editor previews its live options over the stored config; the
    /// settings form previews its live options and live config.
    pub async fn execute(
        &self,
        source: PreviewSource,
        animation: &AnimationOptions,
        live_config: Option<&RevealConfig>,
    ) -> anyhow::Result<ClientSettings> {
        let stored = self.settings.load().await?;
        let config = match (source, live_config) {
            (PreviewSource::Settings, Some(config)) => config.clone(),
            _ => stored.configs,
        };
        Ok(ClientSettings::preview(stored.library.debug, animation, &config))
    }
}
