//! Page attachments: library script, settings JSON block and init script.

use sr_app::usecases::client::PageAttachments;

/// Element id the init script reads its settings from.
pub const SETTINGS_ELEMENT_ID: &str = "scrollreveal-settings";

pub const INIT_SCRIPT: &str = include_str!("../../assets/reveal.init.js");

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Serialized settings safe to embed in a `<script>` element.
fn script_safe_json(attachments: &PageAttachments) -> anyhow::Result<String> {
    let json = serde_json::to_string(&attachments.settings)?;
    Ok(json.replace("</", "<\\/"))
}

pub fn render_attachments(attachments: &PageAttachments) -> anyhow::Result<String> {
    Ok(format!(
        "<script src=\"{}\"></script>\n\
         <script type=\"application/json\" id=\"{SETTINGS_ELEMENT_ID}\">{}</script>\n\
         <script>{}</script>\n",
        escape_attr(&attachments.library_url),
        script_safe_json(attachments)?,
        INIT_SCRIPT.trim_end(),
    ))
}
