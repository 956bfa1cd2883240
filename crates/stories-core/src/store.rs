//! The authoritative folder/file tree.
//!
//! Every mutation builds a new root and swaps it in with a single
//! assignment. Only the folders between the root and the mutated node are
//! copied; every other subtree is shared with the previous root through
//! `Arc`. Snapshots returned by [`TreeStore::root`] are therefore never
//! modified afterwards.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::config::DEFAULT_MIME;
use crate::error::{StoreError, StoreResult};
use crate::ids::{IdGenerator, IdKind, SessionIds};
use crate::navigation::{FolderPath, walk};
use crate::node::{ContentRef, FileEntry, Folder, Node, NodeId};

// =============================================================================
// Inputs and Outputs
// =============================================================================

/// One file to be wrapped into a [`FileEntry`] by [`TreeStore::upload_files`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileSource {
    pub name: String,
    pub mime: String,
    pub content: ContentRef,
}

impl FileSource {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, content: ContentRef) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            content,
        }
    }
}

/// Result of [`TreeStore::resolve_folder`].
#[derive(Debug)]
pub struct Resolved<'a> {
    folder: &'a Arc<Folder>,
    matched: usize,
    requested: usize,
}

impl<'a> Resolved<'a> {
    /// Deepest folder the path reached.
    pub fn folder(&self) -> &'a Arc<Folder> {
        self.folder
    }

    /// Number of path segments that resolved, counting the root.
    pub fn matched(&self) -> usize {
        self.matched
    }

    /// True when some segment no longer names a folder.
    pub fn is_stale(&self) -> bool {
        self.matched < self.requested
    }
}

// =============================================================================
// TreeStore
// =============================================================================

/// Owner of the tree and its id generator.
pub struct TreeStore<G = SessionIds> {
    root: Arc<Folder>,
    ids: G,
}

impl TreeStore<SessionIds> {
    /// Empty tree with the default id scheme.
    pub fn new() -> Self {
        Self::with_ids(SessionIds::new())
    }
}

impl Default for TreeStore<SessionIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> TreeStore<G> {
    /// Empty tree minting ids from `ids`.
    pub fn with_ids(ids: G) -> Self {
        Self {
            root: Arc::new(Folder::root()),
            ids,
        }
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// Snapshot of the current root.
    pub fn root(&self) -> Arc<Folder> {
        Arc::clone(&self.root)
    }

    /// Borrow the current root without bumping the refcount.
    pub fn root_ref(&self) -> &Arc<Folder> {
        &self.root
    }

    /// Walk `path` from the root.
    ///
    /// Stops at the deepest folder still reachable; see [`Resolved::is_stale`].
    pub fn resolve_folder(&self, path: &FolderPath) -> Resolved<'_> {
        let (folder, matched) = walk(&self.root, path.segments());
        Resolved {
            folder,
            matched,
            requested: path.len(),
        }
    }

    /// Depth-first search for a non-root node.
    pub fn find(&self, id: &str) -> Option<&Node> {
        self.root.descendants().find(|n| n.id().as_str() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.root.id.as_str() == id || self.find(id).is_some()
    }

    /// Total number of nodes, root included.
    pub fn node_count(&self) -> usize {
        1 + self.root.descendant_count()
    }

    /// Every id in the tree in pre-order, root first.
    pub fn ids(&self) -> Vec<NodeId> {
        std::iter::once(self.root.id.clone())
            .chain(self.root.descendants().map(|n| n.id().clone()))
            .collect()
    }

    /// Content handles of every file in the tree.
    pub fn content_refs(&self) -> Vec<ContentRef> {
        self.root
            .descendants()
            .filter_map(|n| n.as_file().map(|f| f.content.clone()))
            .collect()
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Prepend a new empty folder to the folder at `path`.
    pub fn create_folder(&mut self, path: &FolderPath, name: &str) -> StoreResult<NodeId> {
        let name = validate_name(name)?;
        let id = self.fresh_id(IdKind::Folder);
        let folder = Node::Folder(Arc::new(Folder::new(id.clone(), name)));

        self.root = Arc::new(prepend_at(&self.root, &path.segments()[1..], vec![folder])?);
        debug!(id = %id, name, parent = %path.current(), "created folder");
        Ok(id)
    }

    /// Wrap each source into a file and prepend them, in input order, to the
    /// folder at `path`.
    ///
    /// Any mime is accepted; an empty one becomes [`DEFAULT_MIME`]. An empty
    /// `sources` leaves the root untouched.
    pub fn upload_files(
        &mut self,
        path: &FolderPath,
        sources: Vec<FileSource>,
    ) -> StoreResult<Vec<NodeId>> {
        if sources.is_empty() {
            return Ok(Vec::new());
        }
        let target = self.resolve_folder(path);
        if target.is_stale() {
            return Err(StoreError::FolderGone(path.segments()[target.matched()].clone()));
        }

        let mut created = Vec::with_capacity(sources.len());
        let mut nodes = Vec::with_capacity(sources.len());
        for source in sources {
            let id = self.fresh_id(IdKind::File);
            let mime = if source.mime.trim().is_empty() {
                DEFAULT_MIME.to_string()
            } else {
                source.mime
            };
            created.push(id.clone());
            nodes.push(Node::File(Arc::new(FileEntry {
                id,
                name: source.name,
                mime,
                content: source.content,
            })));
        }

        self.root = Arc::new(prepend_at(&self.root, &path.segments()[1..], nodes)?);
        debug!(count = created.len(), parent = %path.current(), "uploaded files");
        Ok(created)
    }

    /// Rename the node with `id`, wherever it is in the tree.
    ///
    /// Renaming to the current name is a no-op.
    pub fn rename_node(&mut self, id: &NodeId, name: &str) -> StoreResult<()> {
        if id.is_root() {
            return Err(StoreError::RootProtected);
        }
        let name = validate_name(name)?;
        let current = self
            .find(id.as_str())
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        if current.name() == name {
            trace!(id = %id, "rename to same name skipped");
            return Ok(());
        }

        let renamed =
            rename_in(&self.root, id, name).ok_or_else(|| StoreError::NotFound(id.clone()))?;
        self.root = Arc::new(renamed);
        debug!(id = %id, name, "renamed node");
        Ok(())
    }

    /// Detach the node with `id` and everything below it.
    ///
    /// Returns the removed subtree so its content handles can be released,
    /// or `None` when no such node exists (including the root).
    pub fn delete_node(&mut self, id: &NodeId) -> Option<Node> {
        let (root, removed) = remove_in(&self.root, id)?;
        self.root = Arc::new(root);
        debug!(
            id = %id,
            removed = removed.subtree().count(),
            "deleted node"
        );
        Some(removed)
    }

    fn fresh_id(&mut self, kind: IdKind) -> NodeId {
        loop {
            let id = self.ids.next_id(kind);
            if !self.contains(id.as_str()) {
                return id;
            }
            trace!(id = %id, "generated id already in tree, retrying");
        }
    }
}

// =============================================================================
// Path Copying
// =============================================================================

fn validate_name(name: &str) -> StoreResult<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        Err(StoreError::EmptyName)
    } else {
        Ok(trimmed)
    }
}

/// Copy of `folder` with `nodes` prepended to the folder `rest` leads to.
fn prepend_at(folder: &Folder, rest: &[NodeId], nodes: Vec<Node>) -> StoreResult<Folder> {
    let Some((next, tail)) = rest.split_first() else {
        let mut copy = folder.clone();
        copy.children.splice(0..0, nodes);
        return Ok(copy);
    };

    let (index, child) = folder
        .children
        .iter()
        .enumerate()
        .find_map(|(i, c)| match c {
            Node::Folder(f) if &f.id == next => Some((i, f)),
            _ => None,
        })
        .ok_or_else(|| StoreError::FolderGone(next.clone()))?;

    let updated = prepend_at(child, tail, nodes)?;
    let mut copy = folder.clone();
    copy.children[index] = Node::Folder(Arc::new(updated));
    Ok(copy)
}

/// Copy of `folder` with the node `id` renamed, or `None` if it is not below.
///
/// Direct children are checked before descending, in child order.
fn rename_in(folder: &Folder, id: &NodeId, name: &str) -> Option<Folder> {
    if let Some(index) = folder.children.iter().position(|c| c.id() == id) {
        let mut copy = folder.clone();
        copy.children[index] = folder.children[index].renamed(name);
        return Some(copy);
    }
    folder.children.iter().enumerate().find_map(|(i, c)| {
        let sub = rename_in(c.as_folder()?, id, name)?;
        let mut copy = folder.clone();
        copy.children[i] = Node::Folder(Arc::new(sub));
        Some(copy)
    })
}

/// Copy of `folder` without the node `id`, plus the removed node.
fn remove_in(folder: &Folder, id: &NodeId) -> Option<(Folder, Node)> {
    if let Some(index) = folder.children.iter().position(|c| c.id() == id) {
        let mut copy = folder.clone();
        let removed = copy.children.remove(index);
        return Some((copy, removed));
    }
    folder.children.iter().enumerate().find_map(|(i, c)| {
        let (sub, removed) = remove_in(c.as_folder()?, id)?;
        let mut copy = folder.clone();
        copy.children[i] = Node::Folder(Arc::new(sub));
        Some((copy, removed))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::ids::SequentialIds;

    fn store() -> TreeStore<SequentialIds> {
        TreeStore::with_ids(SequentialIds::new())
    }

    fn image(name: &str) -> FileSource {
        FileSource::new(name, "image/jpeg", ContentRef::new(format!("blob:{name}")))
    }

    fn child_names(folder: &Folder) -> Vec<&str> {
        folder.children.iter().map(|c| c.name()).collect()
    }

    #[test]
    fn test_new_store_has_empty_root() {
        let store = store();
        assert!(store.root().children.is_empty());
        assert_eq!(store.root().name, "Root");
        assert_eq!(store.node_count(), 1);
    }

    #[test]
    fn test_create_folder_prepends() {
        let mut store = store();
        let path = FolderPath::root();
        store.create_folder(&path, "A").unwrap();
        store.create_folder(&path, "B").unwrap();
        assert_eq!(child_names(&store.root()), vec!["B", "A"]);
    }

    #[test]
    fn test_create_folder_trims_name() {
        let mut store = store();
        let id = store.create_folder(&FolderPath::root(), "  Photos ").unwrap();
        assert_eq!(store.find(id.as_str()).unwrap().name(), "Photos");
    }

    #[test]
    fn test_create_folder_rejects_blank_name() {
        let mut store = store();
        let before = store.root();
        let err = store.create_folder(&FolderPath::root(), "   ").unwrap_err();
        assert_eq!(err, StoreError::EmptyName);
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(Arc::ptr_eq(&before, &store.root()));
    }

    #[test]
    fn test_create_folder_in_nested_path() {
        let mut store = store();
        let photos = store.create_folder(&FolderPath::root(), "Photos").unwrap();
        let path = FolderPath::root().enter(photos.clone());
        store.create_folder(&path, "Trip").unwrap();

        let resolved = store.resolve_folder(&path);
        assert!(!resolved.is_stale());
        assert_eq!(child_names(resolved.folder()), vec!["Trip"]);
    }

    #[test]
    fn test_create_folder_on_stale_path() {
        let mut store = store();
        let photos = store.create_folder(&FolderPath::root(), "Photos").unwrap();
        let path = FolderPath::root().enter(photos.clone());
        store.delete_node(&photos);

        let err = store.create_folder(&path, "Trip").unwrap_err();
        assert_eq!(err, StoreError::FolderGone(photos));
    }

    #[test]
    fn test_upload_preserves_input_order_ahead_of_existing() {
        let mut store = store();
        let path = FolderPath::root();
        store.create_folder(&path, "Existing").unwrap();
        store
            .upload_files(&path, vec![image("a.jpg"), image("b.jpg")])
            .unwrap();
        assert_eq!(
            child_names(&store.root()),
            vec!["a.jpg", "b.jpg", "Existing"]
        );
    }

    #[test]
    fn test_upload_empty_is_noop() {
        let mut store = store();
        let before = store.root();
        let created = store.upload_files(&FolderPath::root(), Vec::new()).unwrap();
        assert!(created.is_empty());
        assert!(Arc::ptr_eq(&before, &store.root()));
    }

    #[test]
    fn test_upload_defaults_missing_mime() {
        let mut store = store();
        let ids = store
            .upload_files(
                &FolderPath::root(),
                vec![FileSource::new("notes", "", ContentRef::new("blob:n"))],
            )
            .unwrap();
        let file = store.find(ids[0].as_str()).unwrap().as_file().unwrap();
        assert_eq!(file.mime, DEFAULT_MIME);
    }

    #[test]
    fn test_rename_searches_whole_tree() {
        let mut store = store();
        let photos = store.create_folder(&FolderPath::root(), "Photos").unwrap();
        let ids = store
            .upload_files(&FolderPath::root().enter(photos), vec![image("a.jpg")])
            .unwrap();
        store.rename_node(&ids[0], "cover.jpg").unwrap();
        assert_eq!(store.find(ids[0].as_str()).unwrap().name(), "cover.jpg");
    }

    #[test]
    fn test_rename_same_name_keeps_root() {
        let mut store = store();
        let id = store.create_folder(&FolderPath::root(), "Photos").unwrap();
        let before = store.root();
        store.rename_node(&id, "Photos").unwrap();
        assert!(Arc::ptr_eq(&before, &store.root()));
    }

    #[test]
    fn test_rename_errors() {
        let mut store = store();
        let id = store.create_folder(&FolderPath::root(), "Photos").unwrap();
        assert_eq!(store.rename_node(&id, " "), Err(StoreError::EmptyName));
        assert_eq!(
            store.rename_node(&NodeId::from("missing"), "X"),
            Err(StoreError::NotFound(NodeId::from("missing")))
        );
        assert_eq!(
            store.rename_node(&NodeId::root(), "X"),
            Err(StoreError::RootProtected)
        );
    }

    #[test]
    fn test_delete_returns_subtree() {
        let mut store = store();
        let photos = store.create_folder(&FolderPath::root(), "Photos").unwrap();
        store
            .upload_files(
                &FolderPath::root().enter(photos.clone()),
                vec![image("a.jpg"), image("b.jpg")],
            )
            .unwrap();

        let removed = store.delete_node(&photos).unwrap();
        assert_eq!(removed.subtree().count(), 3);
        assert_eq!(removed.content_refs().len(), 2);
        assert_eq!(store.node_count(), 1);
    }

    #[test]
    fn test_delete_missing_and_root_are_noops() {
        let mut store = store();
        store.create_folder(&FolderPath::root(), "Photos").unwrap();
        let before = store.root();
        assert!(store.delete_node(&NodeId::from("missing")).is_none());
        assert!(store.delete_node(&NodeId::root()).is_none());
        assert!(Arc::ptr_eq(&before, &store.root()));
    }

    #[test]
    fn test_fresh_id_skips_ids_in_tree() {
        struct Repeating(u32);
        impl IdGenerator for Repeating {
            fn next_id(&mut self, _kind: IdKind) -> NodeId {
                self.0 += 1;
                // Yields "dup" twice before moving on.
                if self.0 <= 2 {
                    NodeId::from("dup")
                } else {
                    NodeId::from(format!("id-{}", self.0))
                }
            }
        }

        let mut store = TreeStore::with_ids(Repeating(0));
        let first = store.create_folder(&FolderPath::root(), "A").unwrap();
        let second = store.create_folder(&FolderPath::root(), "B").unwrap();
        assert_eq!(first.as_str(), "dup");
        assert_eq!(second.as_str(), "id-3");
    }

    #[test]
    fn test_content_refs_lists_all_files() {
        let mut store = store();
        let photos = store.create_folder(&FolderPath::root(), "Photos").unwrap();
        store
            .upload_files(&FolderPath::root(), vec![image("top.jpg")])
            .unwrap();
        store
            .upload_files(&FolderPath::root().enter(photos), vec![image("deep.jpg")])
            .unwrap();
        let mut refs: Vec<_> = store
            .content_refs()
            .into_iter()
            .map(ContentRef::into_inner)
            .collect();
        refs.sort();
        assert_eq!(refs, vec!["blob:deep.jpg", "blob:top.jpg"]);
    }
}
