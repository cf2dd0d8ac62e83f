//! Use case for getting ScrollReveal settings
//! 获取设置的用例

use anyhow::Result;
use tracing::{info, info_span, Instrument};
use sr_core::ports::settings::SettingsPort;
use sr_core::settings::model::Settings;

/// Loads the current settings document from the settings port.
pub struct GetSettings {
    settings: std::sync::Arc<dyn SettingsPort>,
}

impl GetSettings {
    pub fn new(settings: std::sync::Arc<dyn SettingsPort>) -> Self {
        Self { settings }
    }

    pub async fn execute(&self) -> Result<Settings> {
        let span = info_span!("usecase.get_settings.execute");

        async {
            info!("Retrieving settings");

            let result = self.settings.load().await?;

            info!("Settings retrieved successfully");
            Ok(result)
        }
        .instrument(span)
        .await
    }
}
