//! Global settings commands.

use serde_json::Value;
use sr_app::usecases::settings::SettingsUseCaseError;

use super::error::{CommandError, CommandResult};
use crate::bootstrap::AppRuntime;
use crate::render::render_library_status;

fn pretty(value: &impl serde::Serialize) -> CommandResult {
    serde_json::to_string_pretty(value)
        .map(|json| json + "\n")
        .map_err(|e| CommandError::Other(e.into()))
}

/// Prints the whole settings document, or one dotted path of it.
pub async fn get(runtime: &AppRuntime, path: Option<&str>) -> CommandResult {
    let settings = runtime.usecases().get_settings().execute().await?;
    match path {
        None => pretty(&settings),
        Some(path) => {
            let value = settings.get_path(path).map_err(SettingsUseCaseError::from)?;
            pretty(&value)
        }
    }
}

/// Sets one dotted path. `raw` is parsed as JSON; anything that is not JSON
/// is taken as a plain string.
pub async fn set(runtime: &AppRuntime, path: &str, raw: &str) -> CommandResult {
    let uc = runtime.usecases();
    let mut settings = uc.get_settings().execute().await?;

    let value = serde_json::from_str::<Value>(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    settings
        .set_path(path, value)
        .map_err(SettingsUseCaseError::from)?;

    let notice = uc.update_settings().execute(settings).await?;
    Ok(format!("{}\n", notice.message))
}

/// Replaces the whole settings document from a JSON file.
pub async fn import(runtime: &AppRuntime, json: &str) -> CommandResult {
    let settings = serde_json::from_str(json)
        .map_err(|e| CommandError::invalid("settings", e.to_string()))?;
    let notice = runtime.usecases().update_settings().execute(settings).await?;
    Ok(format!("{}\n", notice.message))
}

pub async fn library_status(runtime: &AppRuntime) -> CommandResult {
    let status = runtime.usecases().check_library_status().execute().await?;
    Ok(render_library_status(&status))
}
