//! Preview overlay state.
//!
//! The carousel is a snapshot of the folder's image files taken when the
//! overlay opens; later tree changes show up only after reopening.

use std::sync::Arc;

use crate::config::SWIPE_THRESHOLD_PX;
use crate::node::{FileEntry, Folder};

/// `Closed`, or `Open` on one entry of a fixed item list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PreviewState {
    #[default]
    Closed,
    Open {
        items: Vec<Arc<FileEntry>>,
        index: usize,
    },
}

/// Direction of a horizontal swipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved left: show the next item.
    Next,
    /// Finger moved right: show the previous item.
    Prev,
}

impl Swipe {
    /// Classify a horizontal drag. Drags shorter than the threshold are taps.
    pub fn from_delta(delta_x: f64) -> Option<Self> {
        if delta_x.abs() < SWIPE_THRESHOLD_PX {
            None
        } else if delta_x < 0.0 {
            Some(Self::Next)
        } else {
            Some(Self::Prev)
        }
    }
}

impl PreviewState {
    /// Open on the file `file_id` among the children of `folder`.
    ///
    /// Images open a carousel over the folder's images; other files open
    /// alone. Returns `Closed` if `file_id` is not a file in `folder`.
    pub fn open(folder: &Folder, file_id: &str) -> Self {
        let Some(file) = folder.child(file_id).and_then(|n| n.as_file()) else {
            return Self::Closed;
        };

        if file.is_image() {
            let items = folder.images();
            let index = items
                .iter()
                .position(|f| f.id == file.id)
                .unwrap_or_default();
            Self::Open { items, index }
        } else {
            Self::Open {
                items: vec![Arc::clone(file)],
                index: 0,
            }
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Entry on screen.
    pub fn current(&self) -> Option<&Arc<FileEntry>> {
        match self {
            Self::Open { items, index } => items.get(*index),
            Self::Closed => None,
        }
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Open { index, .. } => Some(*index),
            Self::Closed => None,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Open { items, .. } => items.len(),
            Self::Closed => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether prev/next controls apply.
    pub fn can_cycle(&self) -> bool {
        self.len() > 1
    }

    /// Advance to `(index + 1) mod count`.
    pub fn next(&mut self) {
        if let Self::Open { items, index } = self
            && !items.is_empty()
        {
            *index = (*index + 1) % items.len();
        }
    }

    /// Retreat to `(index - 1 + count) mod count`.
    pub fn prev(&mut self) {
        if let Self::Open { items, index } = self
            && !items.is_empty()
        {
            *index = (*index + items.len() - 1) % items.len();
        }
    }

    /// Apply a horizontal drag of `delta_x` pixels.
    ///
    /// Only image carousels with more than one entry react. Returns whether
    /// the index moved.
    pub fn swipe(&mut self, delta_x: f64) -> bool {
        let showing_image = self.current().is_some_and(|f| f.is_image());
        if !showing_image || !self.can_cycle() {
            return false;
        }
        match Swipe::from_delta(delta_x) {
            Some(Swipe::Next) => self.next(),
            Some(Swipe::Prev) => self.prev(),
            None => return false,
        }
        true
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{ContentRef, Node, NodeId};

    fn file(id: &str, mime: &str) -> Node {
        Node::File(Arc::new(FileEntry {
            id: NodeId::from(id),
            name: id.to_string(),
            mime: mime.to_string(),
            content: ContentRef::new(format!("blob:{id}")),
        }))
    }

    fn gallery() -> Folder {
        let mut folder = Folder::root();
        folder.children = vec![
            file("a", "image/png"),
            file("doc", "application/pdf"),
            file("b", "image/jpeg"),
            Node::Folder(Arc::new(Folder::new(NodeId::from("sub"), "Sub"))),
            file("c", "image/gif"),
        ];
        folder
    }

    fn current_id(state: &PreviewState) -> &str {
        state.current().map(|f| f.id.as_str()).unwrap_or("")
    }

    #[test]
    fn test_open_image_builds_carousel() {
        let state = PreviewState::open(&gallery(), "b");
        assert_eq!(state.len(), 3);
        assert_eq!(state.index(), Some(1));
        assert_eq!(current_id(&state), "b");
    }

    #[test]
    fn test_open_non_image_is_single_item() {
        let state = PreviewState::open(&gallery(), "doc");
        assert_eq!(state.len(), 1);
        assert!(!state.can_cycle());
        assert_eq!(current_id(&state), "doc");
    }

    #[test]
    fn test_open_folder_or_missing_stays_closed() {
        assert_eq!(PreviewState::open(&gallery(), "sub"), PreviewState::Closed);
        assert_eq!(PreviewState::open(&gallery(), "zzz"), PreviewState::Closed);
    }

    #[test]
    fn test_next_wraps_around() {
        let mut state = PreviewState::open(&gallery(), "b");
        state.next();
        assert_eq!(state.index(), Some(2));
        state.next();
        assert_eq!(state.index(), Some(0));
        state.next();
        assert_eq!(state.index(), Some(1));
    }

    #[test]
    fn test_prev_wraps_around() {
        let mut state = PreviewState::open(&gallery(), "a");
        state.prev();
        assert_eq!(current_id(&state), "c");
    }

    #[test]
    fn test_swipe_threshold() {
        let mut state = PreviewState::open(&gallery(), "a");
        assert!(!state.swipe(-39.0));
        assert!(!state.swipe(25.0));
        assert_eq!(state.index(), Some(0));

        assert!(state.swipe(-40.0));
        assert_eq!(state.index(), Some(1));
        assert!(state.swipe(120.0));
        assert_eq!(state.index(), Some(0));
    }

    #[test]
    fn test_swipe_ignored_for_single_item() {
        let mut state = PreviewState::open(&gallery(), "doc");
        assert!(!state.swipe(-200.0));
    }

    #[test]
    fn test_close() {
        let mut state = PreviewState::open(&gallery(), "a");
        state.close();
        assert!(!state.is_open());
        state.next();
        assert_eq!(state, PreviewState::Closed);
    }

    #[test]
    fn test_swipe_classification() {
        assert_eq!(Swipe::from_delta(-41.0), Some(Swipe::Next));
        assert_eq!(Swipe::from_delta(41.0), Some(Swipe::Prev));
        assert_eq!(Swipe::from_delta(0.0), None);
    }
}
