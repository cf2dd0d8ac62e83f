use crate::options::EffectiveOptions;

/// Opaque handle to a DOM node, stable for one page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

/// Selector queries over the current page.
pub trait DocumentPort: Send + Sync {
    fn query_selector_all(&self, selector: &str) -> Vec<NodeId>;
}

/// The third-party reveal library's public API.
pub trait RevealLibraryPort: Send + Sync {
    fn set_debug(&self, debug: bool);
    fn reveal(&self, node: NodeId, options: &EffectiveOptions) -> anyhow::Result<()>;
}
