use std::path::PathBuf;

use sr_core::ports::LibraryProbePort;

const LIBRARY_FILES: [&str; 2] = ["dist/scrollreveal.min.js", "dist/scrollreveal.js"];

/// Looks for the reveal library under a `libraries/scrollreveal` directory.
pub struct FsLibraryProbe {
    root: PathBuf,
}

impl FsLibraryProbe {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl LibraryProbePort for FsLibraryProbe {
    fn is_installed(&self) -> bool {
        LIBRARY_FILES
            .iter()
            .any(|file| self.root.join(file).is_file())
    }
}
