//! Error types for tree mutations.
//!
//! Every failure leaves the previous tree in place. Callers decide how to
//! surface them; [`StoreError::kind`] groups variants the way the UI reports
//! them.

use std::fmt;

use thiserror::Error;

use crate::node::NodeId;

/// Coarse category of a [`StoreError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Rejected input, e.g. a blank name.
    Validation,
    /// The target node or folder is not in the tree.
    NotFound,
    /// The viewer lacks the manage capability.
    Permission,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => write!(f, "VALIDATION"),
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Permission => write!(f, "PERMISSION"),
        }
    }
}

/// Errors returned by [`TreeStore`](crate::TreeStore) and the layers above it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Name was empty after trimming.
    #[error("name must not be empty")]
    EmptyName,

    /// No node with this id exists.
    #[error("no item with id `{0}`")]
    NotFound(NodeId),

    /// A segment of the target path no longer names a folder.
    #[error("folder `{0}` no longer exists")]
    FolderGone(NodeId),

    /// The root folder cannot be renamed or deleted.
    #[error("the root folder cannot be changed")]
    RootProtected,

    /// Mutation attempted without the manage capability.
    #[error("you do not have permission to manage stories")]
    PermissionDenied,
}

impl StoreError {
    /// Returns the category used for reporting.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyName => ErrorKind::Validation,
            Self::NotFound(_) | Self::FolderGone(_) | Self::RootProtected => ErrorKind::NotFound,
            Self::PermissionDenied => ErrorKind::Permission,
        }
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(StoreError::EmptyName.kind(), ErrorKind::Validation);
        assert_eq!(
            StoreError::NotFound(NodeId::from("x")).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            StoreError::FolderGone(NodeId::from("x")).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(StoreError::PermissionDenied.kind(), ErrorKind::Permission);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            StoreError::NotFound(NodeId::from("fil-1")).to_string(),
            "no item with id `fil-1`"
        );
        assert_eq!(ErrorKind::Permission.to_string(), "PERMISSION");
    }
}
