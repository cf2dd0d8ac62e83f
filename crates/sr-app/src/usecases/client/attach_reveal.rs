//! Runs the reveal library over the current document
//! 在当前页面上调用动画库

use std::sync::Arc;

use sr_core::ports::{DocumentPort, NodeId, RevealLibraryPort};
use sr_core::reveal::{ClientSettings, OnceRegistry, ONCE_KEY};
use tracing::{debug, info_span, warn};

/// Page-load scoped attach behaviour.
///
/// Each matched node is handed to the library at most once, however many
/// times `execute` runs.
pub struct AttachReveal {
    document: Arc<dyn DocumentPort>,
    library: Arc<dyn RevealLibraryPort>,
    registry: OnceRegistry<NodeId>,
}

impl AttachReveal {
    pub fn new(document: Arc<dyn DocumentPort>, library: Arc<dyn RevealLibraryPort>) -> Self {
        Self {
            document,
            library,
            registry: OnceRegistry::new(),
        }
    }

    /// Returns the number of nodes revealed in this pass.
    ///
    /// A node is claimed only once the library accepted it; a failed node is
    /// logged and retried on the next pass.
    pub fn execute(&mut self, settings: &ClientSettings) -> anyhow::Result<usize> {
        let _span = info_span!("usecase.attach_reveal.execute").entered();

        if settings.debug {
            self.library.set_debug(true);
        }

        let mut revealed = 0;
        for element in &settings.elements {
            let nodes = self.document.query_selector_all(&element.target);
            for node in nodes {
                if self.registry.is_claimed(ONCE_KEY, &node) {
                    continue;
                }
                if settings.debug {
                    debug!(target_selector = %element.target, node = node.0, "Revealing node");
                }
                match self.library.reveal(node, &element.options) {
                    Ok(()) => {
                        self.registry.claim(ONCE_KEY, &node);
                        revealed += 1;
                    }
                    Err(err) => {
                        warn!(
                            target_selector = %element.target,
                            node = node.0,
                            error = %err,
                            "Reveal failed, node left for the next pass"
                        );
                    }
                }
            }
        }
        Ok(revealed)
    }
}
