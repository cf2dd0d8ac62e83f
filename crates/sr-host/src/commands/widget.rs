//! Chat widget block commands.

use sr_core::widget::deep_link as build_deep_link;

use super::error::CommandResult;
use crate::bootstrap::AppRuntime;

pub async fn render(runtime: &AppRuntime) -> CommandResult {
    let html = runtime.usecases().render_widget_block().execute().await;
    Ok(if html.is_empty() { html } else { html + "\n" })
}

/// Sets the name of the key store entry holding the widget key; `None`
/// clears it.
pub async fn set_key(runtime: &AppRuntime, key_name: Option<String>) -> CommandResult {
    let notice = runtime
        .usecases()
        .update_widget_settings()
        .execute(key_name)
        .await?;
    Ok(format!("{}\n", notice.message))
}

pub fn deep_link(phone: &str, message: &str) -> CommandResult {
    Ok(format!("{}\n", build_deep_link(phone, message)))
}
