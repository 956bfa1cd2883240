//! Capability gate in front of the tree store.
//!
//! All mutating calls go through [`Guarded`], which refuses them with
//! [`StoreError::PermissionDenied`] unless the viewer can manage. Reads pass
//! straight through via `Deref`.

use std::ops::Deref;

use tracing::warn;

use crate::error::{StoreError, StoreResult};
use crate::ids::{IdGenerator, SessionIds};
use crate::navigation::FolderPath;
use crate::node::{Node, NodeId};
use crate::store::{FileSource, TreeStore};

/// What the current viewer may do.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capability {
    pub can_manage: bool,
}

impl Capability {
    pub fn manage() -> Self {
        Self { can_manage: true }
    }

    pub fn read_only() -> Self {
        Self { can_manage: false }
    }

    /// `Ok` when managing is allowed.
    pub fn require_manage(self) -> StoreResult<()> {
        if self.can_manage {
            Ok(())
        } else {
            Err(StoreError::PermissionDenied)
        }
    }
}

/// [`TreeStore`] wrapped with a [`Capability`] check on every mutation.
pub struct Guarded<G = SessionIds> {
    store: TreeStore<G>,
    capability: Capability,
}

impl<G: IdGenerator> Guarded<G> {
    pub fn new(store: TreeStore<G>, capability: Capability) -> Self {
        Self { store, capability }
    }

    pub fn capability(&self) -> Capability {
        self.capability
    }

    fn check(&self, action: &'static str) -> StoreResult<()> {
        self.capability.require_manage().inspect_err(|_| {
            warn!(action, "mutation refused without manage capability");
        })
    }

    pub fn create_folder(&mut self, path: &FolderPath, name: &str) -> StoreResult<NodeId> {
        self.check("create_folder")?;
        self.store.create_folder(path, name)
    }

    pub fn upload_files(
        &mut self,
        path: &FolderPath,
        sources: Vec<FileSource>,
    ) -> StoreResult<Vec<NodeId>> {
        self.check("upload_files")?;
        self.store.upload_files(path, sources)
    }

    pub fn rename_node(&mut self, id: &NodeId, name: &str) -> StoreResult<()> {
        self.check("rename_node")?;
        self.store.rename_node(id, name)
    }

    pub fn delete_node(&mut self, id: &NodeId) -> StoreResult<Option<Node>> {
        self.check("delete_node")?;
        Ok(self.store.delete_node(id))
    }
}

impl<G> Deref for Guarded<G> {
    type Target = TreeStore<G>;

    fn deref(&self) -> &Self::Target {
        &self.store
    }
}
