use super::model::{LibrarySettings, LoadMethod};

pub const LOCAL_LIBRARY_DIR: &str = "/libraries/scrollreveal/dist";
pub const CDN_LIBRARY_DIR: &str = "https://unpkg.com/scrollreveal@4.0.9/dist";

/// Script the page should load for the reveal library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryAsset {
    pub method: LoadMethod,
    pub url: String,
}

impl LibraryAsset {
    /// Picks the script location. A local method without an installed copy
    /// is served from the CDN instead.
    pub fn resolve(settings: &LibrarySettings, local_installed: bool) -> Self {
        let method = match settings.method {
            LoadMethod::Local if local_installed => LoadMethod::Local,
            _ => LoadMethod::Cdn,
        };
        let file = if settings.minimized {
            "scrollreveal.min.js"
        } else {
            "scrollreveal.js"
        };
        let dir = match method {
            LoadMethod::Local => LOCAL_LIBRARY_DIR,
            LoadMethod::Cdn => CDN_LIBRARY_DIR,
        };
        Self {
            method,
            url: format!("{dir}/{file}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_minimized() {
        let asset = LibraryAsset::resolve(&LibrarySettings::default(), true);
        assert_eq!(asset.method, LoadMethod::Local);
        assert_eq!(asset.url, "/libraries/scrollreveal/dist/scrollreveal.min.js");
    }

    #[test]
    fn local_falls_back_to_cdn_when_missing() {
        let asset = LibraryAsset::resolve(&LibrarySettings::default(), false);
        assert_eq!(asset.method, LoadMethod::Cdn);
        assert_eq!(
            asset.url,
            "https://unpkg.com/scrollreveal@4.0.9/dist/scrollreveal.min.js"
        );
    }

    #[test]
    fn cdn_unminified() {
        let settings = LibrarySettings {
            method: LoadMethod::Cdn,
            minimized: false,
            ..Default::default()
        };
        let asset = LibraryAsset::resolve(&settings, true);
        assert_eq!(asset.url, "https://unpkg.com/scrollreveal@4.0.9/dist/scrollreveal.js");
    }
}
