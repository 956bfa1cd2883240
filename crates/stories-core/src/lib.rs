//! Core of the Stories file manager: an in-memory folder/file tree with
//! breadcrumb navigation, an image preview carousel and context menus.
//!
//! This crate has no DOM dependency. The web front end holds a
//! [`StoriesSession`] in a signal and forwards user gestures to it.
//!
//! - [`TreeStore`] - copy-on-write tree and its mutations
//! - [`Guarded`], [`Capability`] - `canManage` gate in front of the store
//! - [`FolderPath`] - breadcrumb path from the root to the folder on screen
//! - [`PreviewState`] - preview overlay state machine
//! - [`ContextMenu`], [`LongPress`] - right-click and touch-hold menus
//! - [`DialogRequest`], [`DialogResponse`] - naming and confirmation prompts
//! - [`StoriesSession`] - controller tying it all together

pub mod config;
pub mod dialog;
pub mod error;
pub mod gesture;
pub mod guard;
pub mod ids;
pub mod marks;
pub mod navigation;
pub mod node;
pub mod preview;
pub mod session;
pub mod store;

pub use dialog::{DialogOutcome, DialogRequest, DialogResponse};
pub use error::{ErrorKind, StoreError, StoreResult};
pub use gesture::{ContextAction, ContextMenu, LongPress};
pub use guard::{Capability, Guarded};
pub use ids::{IdGenerator, IdKind, SequentialIds, SessionIds};
pub use marks::IdList;
pub use navigation::{Crumb, FolderPath};
pub use node::{ContentRef, FileEntry, Folder, MediaKind, Node, NodeId};
pub use preview::{PreviewState, Swipe};
pub use session::StoriesSession;
pub use store::{FileSource, Resolved, TreeStore};
