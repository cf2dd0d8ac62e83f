use std::collections::HashSet;
use std::hash::Hash;

/// Page-load scoped guard keyed by (behaviour name, node).
///
/// A node passes a given behaviour's guard at most once; subsequent attach
/// passes over the same document skip it.
#[derive(Debug)]
pub struct OnceRegistry<N> {
    seen: HashSet<(String, N)>,
}

impl<N> Default for OnceRegistry<N> {
    fn default() -> Self {
        Self {
            seen: HashSet::new(),
        }
    }
}

impl<N: Eq + Hash + Clone> OnceRegistry<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` the first time `(name, node)` is seen.
    pub fn claim(&mut self, name: &str, node: &N) -> bool {
        self.seen.insert((name.to_string(), node.clone()))
    }

    pub fn is_claimed(&self, name: &str, node: &N) -> bool {
        self.seen.contains(&(name.to_string(), node.clone()))
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
