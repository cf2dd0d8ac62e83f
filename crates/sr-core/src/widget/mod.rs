//! Chat widget embed tag and WhatsApp deep links.

use urlencoding::encode;

pub const WIDGET_HOST: &str = "//widget.tochat.be/bundle.js";
pub const DEEP_LINK_BASE: &str = "https://api.whatsapp.com/send";

/// The single `<script>` tag loading the chat widget for `key`.
pub fn embed_tag(key: &str) -> String {
    format!(
        r#"<script defer src="{WIDGET_HOST}?key={}"></script>"#,
        encode(key)
    )
}

/// "Send message" link for a phone number with a prefilled text.
pub fn deep_link(phone: &str, message: &str) -> String {
    format!(
        "{DEEP_LINK_BASE}?phone={}&text={}",
        encode(phone.trim()),
        encode(message)
    )
}
