use std::sync::Arc;

use sr_core::ports::{DerivedCachePort, SettingsPort};
use tracing::{info, info_span, Instrument};

use crate::form::Notice;

/// Sets or clears the name of the secret holding the widget key.
pub struct UpdateWidgetSettings {
    settings: Arc<dyn SettingsPort>,
    cache: Arc<dyn DerivedCachePort>,
}

impl UpdateWidgetSettings {
    pub fn new(settings: Arc<dyn SettingsPort>, cache: Arc<dyn DerivedCachePort>) -> Self {
        Self { settings, cache }
    }

    pub async fn execute(&self, widget_key: Option<String>) -> anyhow::Result<Notice> {
        let span = info_span!("usecase.update_widget_settings.execute");

        async {
            let mut settings = self.settings.load().await?;
            let widget_key = widget_key
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty());

            info!(
                old = ?settings.widget.widget_key,
                new = ?widget_key,
                "Updating widget key name"
            );
            settings.widget.widget_key = widget_key;
            self.settings.save(&settings).await?;
            self.cache.flush_derived().await;

            Ok(Notice::status("The configuration options have been saved."))
        }
        .instrument(span)
        .await
    }
}
