//! Text and HTML output of the host commands.

pub mod page;
pub mod table;

pub use page::{render_attachments, INIT_SCRIPT, SETTINGS_ELEMENT_ID};
pub use table::{render_library_status, render_target_table};
