pub mod attach_reveal;
pub mod build_client_settings;
pub mod build_preview;

pub use attach_reveal::AttachReveal;
pub use build_client_settings::{BuildClientSettings, PageAttachments};
pub use build_preview::BuildPreview;
