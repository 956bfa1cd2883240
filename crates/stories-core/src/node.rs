//! Tree node types.
//!
//! Folders own their children through `Arc`, so a mutation can copy the
//! spine from the root to the touched folder and share every other subtree
//! with the previous snapshot.

use std::borrow::Borrow;
use std::fmt;
use std::iter::FusedIterator;
use std::sync::Arc;

use crate::config::{ROOT_ID, ROOT_NAME};

// =============================================================================
// Identifiers
// =============================================================================

/// Identifier of a folder or file, unique within one tree.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(String);

impl NodeId {
    /// The fixed root id.
    pub fn root() -> Self {
        Self(ROOT_ID.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == ROOT_ID
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Opaque handle to the bytes behind a file, e.g. a blob object URL.
///
/// The tree never reads through it. Whoever removes the last node holding a
/// handle is responsible for releasing it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContentRef(String);

impl ContentRef {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

// =============================================================================
// Media Kind
// =============================================================================

/// Presentation class of a file, derived from its mime type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Pdf,
    Other,
}

impl MediaKind {
    /// Classify a mime type. Matching is case-insensitive.
    pub fn from_mime(mime: &str) -> Self {
        let mime = mime.trim().to_ascii_lowercase();
        if mime.starts_with("image/") {
            Self::Image
        } else if mime == "application/pdf" {
            Self::Pdf
        } else {
            Self::Other
        }
    }
}

// =============================================================================
// Nodes
// =============================================================================

/// An uploaded file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileEntry {
    pub id: NodeId,
    pub name: String,
    pub mime: String,
    pub content: ContentRef,
}

impl FileEntry {
    pub fn kind(&self) -> MediaKind {
        MediaKind::from_mime(&self.mime)
    }

    pub fn is_image(&self) -> bool {
        self.kind() == MediaKind::Image
    }
}

/// A folder and its ordered children (most recent first).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Folder {
    pub id: NodeId,
    pub name: String,
    pub children: Vec<Node>,
}

/// Entry in the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Folder(Arc<Folder>),
    File(Arc<FileEntry>),
}

impl Folder {
    /// Create an empty folder.
    pub fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Create the empty root folder.
    pub fn root() -> Self {
        Self::new(NodeId::root(), ROOT_NAME)
    }

    /// Direct child with the given id.
    pub fn child(&self, id: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.id().as_str() == id)
    }

    /// Direct child folder with the given id.
    pub fn child_folder(&self, id: &str) -> Option<&Arc<Folder>> {
        self.children.iter().find_map(|c| match c {
            Node::Folder(folder) if folder.id.as_str() == id => Some(folder),
            _ => None,
        })
    }

    /// Image files among the direct children, in display order.
    pub fn images(&self) -> Vec<Arc<FileEntry>> {
        self.children
            .iter()
            .filter_map(|c| match c {
                Node::File(file) if file.is_image() => Some(Arc::clone(file)),
                _ => None,
            })
            .collect()
    }

    /// Pre-order walk over every node below this folder.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }

    /// Number of nodes below this folder, transitively.
    pub fn descendant_count(&self) -> usize {
        self.descendants().count()
    }

    /// Counts of direct children as `(files, folders)`.
    pub fn counts(&self) -> (usize, usize) {
        let folders = self.children.iter().filter(|c| c.is_folder()).count();
        (self.children.len() - folders, folders)
    }
}

impl Node {
    pub fn id(&self) -> &NodeId {
        match self {
            Node::Folder(folder) => &folder.id,
            Node::File(file) => &file.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::Folder(folder) => &folder.name,
            Node::File(file) => &file.name,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Node::Folder(_))
    }

    pub fn as_folder(&self) -> Option<&Arc<Folder>> {
        match self {
            Node::Folder(folder) => Some(folder),
            Node::File(_) => None,
        }
    }

    pub fn as_file(&self) -> Option<&Arc<FileEntry>> {
        match self {
            Node::File(file) => Some(file),
            Node::Folder(_) => None,
        }
    }

    /// Copy of this node under a new name. Children stay shared.
    pub(crate) fn renamed(&self, name: &str) -> Node {
        match self {
            Node::Folder(folder) => Node::Folder(Arc::new(Folder {
                name: name.to_string(),
                ..Folder::clone(folder)
            })),
            Node::File(file) => Node::File(Arc::new(FileEntry {
                name: name.to_string(),
                ..FileEntry::clone(file)
            })),
        }
    }

    /// This node followed by everything below it.
    pub fn subtree(&self) -> impl Iterator<Item = &Node> {
        let below = self.as_folder().map(|f| f.descendants());
        std::iter::once(self).chain(below.into_iter().flatten())
    }

    /// Content handles of every file in this subtree.
    pub fn content_refs(&self) -> Vec<ContentRef> {
        self.subtree()
            .filter_map(|n| n.as_file().map(|f| f.content.clone()))
            .collect()
    }
}

// =============================================================================
// Iteration
// =============================================================================

/// Pre-order iterator returned by [`Folder::descendants`].
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Node::Folder(folder) = node {
            self.stack.extend(folder.children.iter().rev());
        }
        Some(node)
    }
}

impl FusedIterator for Descendants<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(id: &str, mime: &str) -> Node {
        Node::File(Arc::new(FileEntry {
            id: NodeId::from(id),
            name: format!("{id}.bin"),
            mime: mime.to_string(),
            content: ContentRef::new(format!("blob:{id}")),
        }))
    }

    fn folder(id: &str, children: Vec<Node>) -> Node {
        Node::Folder(Arc::new(Folder {
            id: NodeId::from(id),
            name: id.to_string(),
            children,
        }))
    }

    #[test]
    fn test_media_kind_detection() {
        assert_eq!(MediaKind::from_mime("image/jpeg"), MediaKind::Image);
        assert_eq!(MediaKind::from_mime("IMAGE/PNG"), MediaKind::Image);
        assert_eq!(MediaKind::from_mime("application/pdf"), MediaKind::Pdf);
        assert_eq!(MediaKind::from_mime("text/plain"), MediaKind::Other);
        assert_eq!(MediaKind::from_mime(""), MediaKind::Other);
    }

    #[test]
    fn test_descendants_preorder() {
        let tree = folder(
            "a",
            vec![
                folder("b", vec![file("c", "image/png")]),
                file("d", "text/plain"),
            ],
        );
        let ids: Vec<_> = tree.subtree().map(|n| n.id().as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_content_refs_cover_subtree() {
        let tree = folder(
            "a",
            vec![folder("b", vec![file("c", "image/png")]), file("d", "")],
        );
        let refs: Vec<_> = tree
            .content_refs()
            .into_iter()
            .map(ContentRef::into_inner)
            .collect();
        assert_eq!(refs, vec!["blob:c", "blob:d"]);
    }

    #[test]
    fn test_images_filters_direct_children() {
        let Node::Folder(root) = folder(
            "root",
            vec![
                file("x", "image/png"),
                folder("sub", vec![file("y", "image/png")]),
                file("z", "application/pdf"),
                file("w", "image/gif"),
            ],
        ) else {
            unreachable!()
        };
        let ids: Vec<_> = root.images().iter().map(|f| f.id.to_string()).collect();
        assert_eq!(ids, vec!["x", "w"]);
        assert_eq!(root.counts(), (3, 1));
    }

    #[test]
    fn test_renamed_keeps_id_and_children() {
        let original = folder("a", vec![file("b", "image/png")]);
        let renamed = original.renamed("Pictures");
        assert_eq!(renamed.name(), "Pictures");
        assert_eq!(renamed.id(), original.id());
        let (Some(old), Some(new)) = (original.as_folder(), renamed.as_folder()) else {
            unreachable!()
        };
        assert_eq!(old.children, new.children);
    }
}
