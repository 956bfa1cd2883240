//! Breadcrumb navigation state.
//!
//! A [`FolderPath`] lists folder ids from the root to the folder on screen.
//! It is navigation state only: the tree owns the folders, the path merely
//! names them, so a path can go stale when a folder on it is deleted.

use std::sync::Arc;

use crate::node::{Folder, NodeId};

/// Non-empty list of folder ids, always starting at the root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FolderPath {
    segments: Vec<NodeId>,
}

/// One breadcrumb entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    /// Position in the path, suitable for [`FolderPath::jump_to`].
    pub index: usize,
    pub id: NodeId,
    pub name: String,
}

impl FolderPath {
    /// The initial path: `[root]`.
    pub fn root() -> Self {
        Self {
            segments: vec![NodeId::root()],
        }
    }

    pub fn segments(&self) -> &[NodeId] {
        &self.segments
    }

    /// Id of the folder currently displayed.
    pub fn current(&self) -> &NodeId {
        // Non-empty by construction: every constructor keeps the root.
        &self.segments[self.segments.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn is_root(&self) -> bool {
        self.segments.len() == 1
    }

    /// Path with `folder_id` appended.
    ///
    /// The caller guarantees `folder_id` is a child folder of [`current`](Self::current).
    pub fn enter(&self, folder_id: NodeId) -> Self {
        let mut segments = self.segments.clone();
        segments.push(folder_id);
        Self { segments }
    }

    /// Path truncated to `index + 1` segments. `jump_to(0)` is the root.
    /// An index past the end returns the path unchanged.
    pub fn jump_to(&self, index: usize) -> Self {
        Self {
            segments: self.segments[..(index + 1).min(self.segments.len())].to_vec(),
        }
    }

    /// Longest prefix of this path that still resolves in `root`.
    pub fn reconcile(&self, root: &Arc<Folder>) -> Self {
        let (_, matched) = walk(root, &self.segments);
        self.jump_to(matched - 1)
    }

    /// Breadcrumb entries for every segment that still resolves.
    pub fn crumbs(&self, root: &Arc<Folder>) -> Vec<Crumb> {
        let mut crumbs = vec![Crumb {
            index: 0,
            id: root.id.clone(),
            name: root.name.clone(),
        }];
        let mut cursor = root;
        for (offset, id) in self.segments[1..].iter().enumerate() {
            let Some(next) = cursor.child_folder(id.as_str()) else {
                break;
            };
            crumbs.push(Crumb {
                index: offset + 1,
                id: next.id.clone(),
                name: next.name.clone(),
            });
            cursor = next;
        }
        crumbs
    }
}

impl Default for FolderPath {
    fn default() -> Self {
        Self::root()
    }
}

/// Follow `segments` from `root`, stopping at the first id that is not a
/// child folder of the cursor.
///
/// Returns the deepest folder reached and how many segments matched,
/// counting the root. The first segment is assumed to be the root.
pub(crate) fn walk<'a>(root: &'a Arc<Folder>, segments: &[NodeId]) -> (&'a Arc<Folder>, usize) {
    let mut cursor = root;
    let mut matched = 1;
    for id in segments.iter().skip(1) {
        match cursor.child_folder(id.as_str()) {
            Some(next) => {
                cursor = next;
                matched += 1;
            }
            None => break,
        }
    }
    (cursor, matched)
}
