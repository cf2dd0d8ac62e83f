/// Reports whether a local copy of the reveal library is installed.
pub trait LibraryProbePort: Send + Sync {
    fn is_installed(&self) -> bool;
}
