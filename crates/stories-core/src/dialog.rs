//! Request/response model for naming and confirmation dialogs.
//!
//! The session records a [`DialogRequest`]; the host renders it however it
//! likes and answers with a [`DialogResponse`]. Nothing here blocks.

use crate::navigation::FolderPath;
use crate::node::{ContentRef, NodeId};

/// Input the session is waiting for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DialogRequest {
    /// Name for a folder to be created under `path`.
    NewFolder { path: FolderPath },
    /// New name for an existing node.
    Rename { id: NodeId, current: String },
    /// Yes/no before deleting a node and its subtree.
    Delete { id: NodeId, name: String },
}

impl DialogRequest {
    pub fn title(&self) -> String {
        match self {
            Self::NewFolder { .. } => "Folder name".to_string(),
            Self::Rename { .. } => "New name".to_string(),
            Self::Delete { name, .. } => format!("Delete \"{name}\"?"),
        }
    }

    /// Whether the answer is a name rather than a confirmation.
    pub fn wants_name(&self) -> bool {
        !matches!(self, Self::Delete { .. })
    }

    /// Text to pre-fill the name input with.
    pub fn initial_value(&self) -> &str {
        match self {
            Self::Rename { current, .. } => current,
            _ => "",
        }
    }

    pub fn confirm_label(&self) -> &'static str {
        match self {
            Self::NewFolder { .. } => "Create",
            Self::Rename { .. } => "Rename",
            Self::Delete { .. } => "Delete",
        }
    }

    pub fn is_destructive(&self) -> bool {
        matches!(self, Self::Delete { .. })
    }
}

/// Host's answer to the pending [`DialogRequest`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DialogResponse {
    Name(String),
    Confirm,
    Cancel,
}

/// What answering the dialog did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DialogOutcome {
    /// Dismissed, or there was nothing pending.
    Cancelled,
    Created(NodeId),
    Renamed(NodeId),
    /// Node removed; `released` handles are no longer referenced by the tree.
    Deleted {
        id: NodeId,
        released: Vec<ContentRef>,
    },
    /// Accepted but changed nothing, e.g. the target had already vanished.
    Unchanged,
}

impl DialogOutcome {
    /// Content handles the host should now release.
    pub fn released(&self) -> &[ContentRef] {
        match self {
            Self::Deleted { released, .. } => released,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_text() {
        let rename = DialogRequest::Rename {
            id: NodeId::from("a"),
            current: "Photos".to_string(),
        };
        assert!(rename.wants_name());
        assert_eq!(rename.initial_value(), "Photos");

        let delete = DialogRequest::Delete {
            id: NodeId::from("a"),
            name: "Photos".to_string(),
        };
        assert!(!delete.wants_name());
        assert!(delete.is_destructive());
        assert_eq!(delete.title(), "Delete \"Photos\"?");
    }

    #[test]
    fn test_released_only_for_delete() {
        assert!(DialogOutcome::Cancelled.released().is_empty());
        let outcome = DialogOutcome::Deleted {
            id: NodeId::from("a"),
            released: vec![ContentRef::new("blob:a")],
        };
        assert_eq!(outcome.released().len(), 1);
    }
}
