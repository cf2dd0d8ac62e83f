//! Use case for rendering the chat widget block
//! 渲染聊天挂件区块

use std::sync::Arc;

use sr_core::ports::{SecretStorePort, SettingsPort};
use sr_core::widget::embed_tag;
use tracing::{debug, info_span, warn, Instrument};

/// Renders the widget embed tag, or nothing.
///
/// Never fails: a missing key name, an unknown secret or a key store fault
/// all render an empty block.
pub struct RenderWidgetBlock {
    settings: Arc<dyn SettingsPort>,
    secrets: Arc<dyn SecretStorePort>,
}

impl RenderWidgetBlock {
    pub fn new(settings: Arc<dyn SettingsPort>, secrets: Arc<dyn SecretStorePort>) -> Self {
        Self { settings, secrets }
    }

    pub async fn execute(&self) -> String {
        let span = info_span!("usecase.render_widget_block.execute");

        async {
            let settings = match self.settings.load().await {
                Ok(s) => s,
                Err(e) => {
                    warn!(error = %e, "Widget settings unavailable");
                    return String::new();
                }
            };

            let Some(key_name) = settings
                .widget
                .widget_key
                .as_deref()
                .map(str::trim)
                .filter(|k| !k.is_empty())
            else {
                debug!("No widget key configured");
                return String::new();
            };

            match self.secrets.get(key_name).await {
                Ok(Some(value)) if !value.trim().is_empty() => embed_tag(value.trim()),
                Ok(_) => {
                    warn!(key_name = %key_name, "Widget key not found in key store");
                    String::new()
                }
                Err(e) => {
                    warn!(key_name = %key_name, error = %e, "Key store lookup failed");
                    String::new()
                }
            }
        }
        .instrument(span)
        .await
    }
}
