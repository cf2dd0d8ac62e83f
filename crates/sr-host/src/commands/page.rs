//! Page render commands: client attachments and form previews.

use sr_core::reveal::PreviewSource;
use sr_core::{OptionOverrides, RevealConfig};
use tracing::debug;

use super::error::{CommandError, CommandResult};
use crate::bootstrap::AppRuntime;
use crate::render::render_attachments;

/// Prints the attachments for `path`, or nothing when the page gets none.
pub async fn attachments(runtime: &AppRuntime, path: &str) -> CommandResult {
    let page = runtime
        .usecases()
        .build_client_settings()
        .execute(path, &runtime.paths.front_path)
        .await?;

    match page {
        Some(page) => Ok(render_attachments(&page)?),
        None => {
            debug!(path = %path, "No attachments for page");
            Ok(String::new())
        }
    }
}

/// Preview payload for the sample block.
///
/// `options` are overrides on the stored defaults; `config` is only honoured
/// for the settings form preview.
pub async fn preview(
    runtime: &AppRuntime,
    source: PreviewSource,
    options: Option<&str>,
    config: Option<&str>,
) -> CommandResult {
    let uc = runtime.usecases();
    let stored = uc.get_settings().execute().await?;

    let overrides: OptionOverrides = match options {
        Some(raw) => serde_json::from_str(raw)
            .map_err(|e| CommandError::invalid("options", e.to_string()))?,
        None => OptionOverrides::default(),
    };
    let live_config: Option<RevealConfig> = config
        .map(|raw| serde_json::from_str::<RevealConfig>(raw))
        .transpose()
        .map_err(|e| CommandError::invalid("configs", e.to_string()))?;

    let animation = overrides.resolve(&stored.options);
    let payload = uc
        .build_preview()
        .execute(source, &animation, live_config.as_ref())
        .await?;

    serde_json::to_string_pretty(&payload)
        .map(|json| json + "\n")
        .map_err(|e| CommandError::Other(e.into()))
}
