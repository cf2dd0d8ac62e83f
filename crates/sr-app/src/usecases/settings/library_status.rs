//! Local library status shown on the settings form.

use std::sync::Arc;

use serde::Serialize;
use sr_core::ports::{LibraryProbePort, SettingsPort};
use sr_core::settings::{LibraryAsset, LoadMethod};

use crate::form::Notice;

pub const DOWNLOAD_URL: &str = "https://github.com/jlmakes/scrollreveal/archive/master.zip";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LibraryStatus {
    pub installed: bool,
    /// Method the page will actually use.
    pub method: LoadMethod,
    /// Local method cannot be chosen while the library is missing.
    pub method_locked: bool,
    pub url: String,
    pub warning: Option<Notice>,
}

pub struct CheckLibraryStatus {
    settings: Arc<dyn SettingsPort>,
    probe: Arc<dyn LibraryProbePort>,
}

impl CheckLibraryStatus {
    pub fn new(settings: Arc<dyn SettingsPort>, probe: Arc<dyn LibraryProbePort>) -> Self {
        Self { settings, probe }
    }

    pub async fn execute(&self) -> anyhow::Result<LibraryStatus> {
        let settings = self.settings.load().await?;
        let installed = self.probe.is_installed();
        let asset = LibraryAsset::resolve(&settings.library, installed);

        let warning = (!installed && !settings.library.hide_warning).then(|| {
            Notice::warning(format!(
                "You cannot set local because the ScrollReveal.js library is missing. \
                 Download the library from {DOWNLOAD_URL} and extract it to \"/libraries/scrollreveal\"."
            ))
        });

        Ok(LibraryStatus {
            installed,
            method: asset.method,
            method_locked: !installed,
            url: asset.url,
            warning,
        })
    }
}
