//! Ordered id lists derived from the tree (selection, featured files).

use std::collections::HashSet;

use crate::node::NodeId;

/// Insertion-ordered set of node ids.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdList {
    ids: Vec<NodeId>,
}

impl IdList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|i| i.as_str() == id)
    }

    /// Add `id` if absent, remove it if present. Returns whether it is now in the list.
    pub fn toggle(&mut self, id: NodeId) -> bool {
        if let Some(pos) = self.ids.iter().position(|i| *i == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    /// Drop every id in `removed`. Returns how many were dropped.
    pub fn prune(&mut self, removed: &HashSet<NodeId>) -> usize {
        let before = self.ids.len();
        self.ids.retain(|id| !removed.contains(id));
        before - self.ids.len()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &NodeId> {
        self.ids.iter()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
