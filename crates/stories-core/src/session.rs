//! Session controller tying the tree, navigation and overlays together.
//!
//! A [`StoriesSession`] is what the UI holds. Every user gesture maps to one
//! method here; each method runs to completion and leaves the session
//! consistent (path reconciled, derived id lists pruned).

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::dialog::{DialogOutcome, DialogRequest, DialogResponse};
use crate::error::{StoreError, StoreResult};
use crate::gesture::{ContextAction, ContextMenu, LongPress};
use crate::guard::{Capability, Guarded};
use crate::ids::{IdGenerator, SessionIds};
use crate::marks::IdList;
use crate::navigation::{Crumb, FolderPath};
use crate::node::{ContentRef, Folder, Node, NodeId};
use crate::preview::PreviewState;
use crate::store::{FileSource, TreeStore};

/// All state behind one Stories view.
pub struct StoriesSession<G = SessionIds> {
    tree: Guarded<G>,
    path: FolderPath,
    preview: PreviewState,
    menu: Option<ContextMenu>,
    long_press: LongPress,
    selected: IdList,
    featured: IdList,
    dialog: Option<DialogRequest>,
}

impl StoriesSession<SessionIds> {
    /// Fresh session with an empty tree.
    pub fn new(capability: Capability) -> Self {
        Self::with_store(TreeStore::new(), capability)
    }
}

impl<G: IdGenerator> StoriesSession<G> {
    pub fn with_store(store: TreeStore<G>, capability: Capability) -> Self {
        Self {
            tree: Guarded::new(store, capability),
            path: FolderPath::root(),
            preview: PreviewState::Closed,
            menu: None,
            long_press: LongPress::new(),
            selected: IdList::new(),
            featured: IdList::new(),
            dialog: None,
        }
    }

    // =========================================================================
    // Views
    // =========================================================================

    pub fn tree(&self) -> &TreeStore<G> {
        &self.tree
    }

    pub fn can_manage(&self) -> bool {
        self.tree.capability().can_manage
    }

    pub fn path(&self) -> &FolderPath {
        &self.path
    }

    /// Snapshot of the folder on screen.
    pub fn current_folder(&self) -> Arc<Folder> {
        Arc::clone(self.tree.resolve_folder(&self.path).folder())
    }

    pub fn crumbs(&self) -> Vec<Crumb> {
        self.path.crumbs(self.tree.root_ref())
    }

    pub fn preview(&self) -> &PreviewState {
        &self.preview
    }

    pub fn menu(&self) -> Option<&ContextMenu> {
        self.menu.as_ref()
    }

    pub fn dialog(&self) -> Option<&DialogRequest> {
        self.dialog.as_ref()
    }

    pub fn selected(&self) -> &IdList {
        &self.selected
    }

    pub fn featured(&self) -> &IdList {
        &self.featured
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Click on an entry of the current folder: enter a folder, preview a file.
    pub fn activate(&mut self, id: &str) {
        let folder = self.current_folder();
        match folder.child(id) {
            Some(Node::Folder(child)) => {
                self.path = self.path.enter(child.id.clone());
                self.menu = None;
            }
            Some(Node::File(_)) => {
                self.preview = PreviewState::open(&folder, id);
            }
            None => trace!(id, "activated id not in current folder"),
        }
    }

    /// Breadcrumb click.
    pub fn jump_to(&mut self, index: usize) {
        self.path = self.path.jump_to(index);
        self.menu = None;
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add files to the current folder.
    pub fn upload(&mut self, sources: Vec<FileSource>) -> StoreResult<Vec<NodeId>> {
        self.tree.upload_files(&self.path, sources)
    }

    /// Ask the host for the name of a new folder in the current folder.
    pub fn request_new_folder(&mut self) -> StoreResult<()> {
        self.tree.capability().require_manage()?;
        self.dialog = Some(DialogRequest::NewFolder {
            path: self.path.clone(),
        });
        Ok(())
    }

    /// Ask the host for a new name for `id`.
    ///
    /// A vanished target is ignored rather than reported.
    pub fn request_rename(&mut self, id: &NodeId) -> StoreResult<()> {
        self.tree.capability().require_manage()?;
        if id.is_root() {
            return Err(StoreError::RootProtected);
        }
        match self.tree.find(id.as_str()) {
            Some(node) => {
                self.dialog = Some(DialogRequest::Rename {
                    id: id.clone(),
                    current: node.name().to_string(),
                });
            }
            None => trace!(id = %id, "rename requested for vanished node"),
        }
        Ok(())
    }

    /// Ask the host to confirm deleting `id`.
    pub fn request_delete(&mut self, id: &NodeId) -> StoreResult<()> {
        self.tree.capability().require_manage()?;
        if id.is_root() {
            return Err(StoreError::RootProtected);
        }
        match self.tree.find(id.as_str()) {
            Some(node) => {
                self.dialog = Some(DialogRequest::Delete {
                    id: id.clone(),
                    name: node.name().to_string(),
                });
            }
            None => trace!(id = %id, "delete requested for vanished node"),
        }
        Ok(())
    }

    /// Answer the pending dialog.
    ///
    /// On error the dialog stays open so the host can show the message and
    /// let the user correct the input.
    pub fn respond(&mut self, response: DialogResponse) -> StoreResult<DialogOutcome> {
        let Some(request) = self.dialog.clone() else {
            return Ok(DialogOutcome::Cancelled);
        };

        let outcome = match (request, response) {
            (_, DialogResponse::Cancel) => DialogOutcome::Cancelled,
            (DialogRequest::NewFolder { path }, DialogResponse::Name(name)) => {
                DialogOutcome::Created(self.tree.create_folder(&path, &name)?)
            }
            (DialogRequest::Rename { id, .. }, DialogResponse::Name(name)) => {
                self.rename(&id, &name)?
            }
            (DialogRequest::Delete { id, .. }, DialogResponse::Confirm) => self.delete(&id)?,
            (request, response) => {
                debug!(?request, ?response, "dialog response does not match request");
                return Ok(DialogOutcome::Unchanged);
            }
        };
        self.dialog = None;
        Ok(outcome)
    }

    /// Rename without a dialog. A vanished target is a no-op.
    pub fn rename(&mut self, id: &NodeId, name: &str) -> StoreResult<DialogOutcome> {
        match self.tree.rename_node(id, name) {
            Ok(()) => Ok(DialogOutcome::Renamed(id.clone())),
            Err(StoreError::NotFound(_)) => {
                trace!(id = %id, "rename of vanished node skipped");
                Ok(DialogOutcome::Unchanged)
            }
            Err(err) => Err(err),
        }
    }

    /// Delete without a dialog. A vanished target is a no-op.
    ///
    /// Prunes the selected and featured lists and pulls the path back out of
    /// any deleted folder.
    pub fn delete(&mut self, id: &NodeId) -> StoreResult<DialogOutcome> {
        let Some(removed) = self.tree.delete_node(id)? else {
            trace!(id = %id, "delete of vanished node skipped");
            return Ok(DialogOutcome::Unchanged);
        };

        let gone: HashSet<NodeId> = removed.subtree().map(|n| n.id().clone()).collect();
        let pruned = self.selected.prune(&gone) + self.featured.prune(&gone);
        if self.menu.as_ref().is_some_and(|m| gone.contains(&m.target)) {
            self.menu = None;
        }
        self.path = self.path.reconcile(self.tree.root_ref());
        debug!(id = %id, pruned, "removed node from session");

        Ok(DialogOutcome::Deleted {
            id: id.clone(),
            released: removed.content_refs(),
        })
    }

    // =========================================================================
    // Context Menu
    // =========================================================================

    /// Right-click (or completed long-press) on `id`. Returns whether a menu opened.
    pub fn open_context_menu(&mut self, id: &NodeId, x: f64, y: f64) -> bool {
        if !self.can_manage() {
            return false;
        }
        let Some(node) = self.tree.find(id.as_str()) else {
            return false;
        };
        self.menu = Some(ContextMenu {
            target: id.clone(),
            name: node.name().to_string(),
            x,
            y,
        });
        true
    }

    /// Click anywhere outside the menu.
    pub fn dismiss_context_menu(&mut self) {
        self.menu = None;
    }

    /// Pick an entry from the open menu; closes it either way.
    pub fn context_action(&mut self, action: ContextAction) -> StoreResult<()> {
        let Some(menu) = self.menu.take() else {
            return Ok(());
        };
        match action {
            ContextAction::Rename => self.request_rename(&menu.target),
            ContextAction::Delete => self.request_delete(&menu.target),
        }
    }

    /// Touch started on `id`. Returns the generation to hand back from the
    /// timer, or `None` when menus are disabled.
    pub fn press(&mut self, id: NodeId, x: f64, y: f64) -> Option<u64> {
        self.can_manage().then(|| self.long_press.press(id, x, y))
    }

    /// Touch moved or lifted.
    pub fn cancel_press(&mut self) {
        self.long_press.cancel();
    }

    /// Long-press timer fired. Returns whether a menu opened.
    pub fn long_press_elapsed(&mut self, generation: u64) -> bool {
        match self.long_press.elapsed(generation) {
            Some((id, x, y)) => self.open_context_menu(&id, x, y),
            None => false,
        }
    }

    // =========================================================================
    // Preview
    // =========================================================================

    pub fn preview_next(&mut self) {
        self.preview.next();
    }

    pub fn preview_prev(&mut self) {
        self.preview.prev();
    }

    pub fn preview_swipe(&mut self, delta_x: f64) -> bool {
        self.preview.swipe(delta_x)
    }

    pub fn close_preview(&mut self) {
        self.preview.close();
    }

    // =========================================================================
    // Marks
    // =========================================================================

    /// Toggle selection of any node. Returns whether it is now selected.
    pub fn toggle_selected(&mut self, id: &NodeId) -> bool {
        if !self.tree.contains(id.as_str()) || id.is_root() {
            return false;
        }
        self.selected.toggle(id.clone())
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Toggle whether a file is featured. Folders are ignored.
    pub fn toggle_featured(&mut self, id: &NodeId) -> StoreResult<bool> {
        self.tree.capability().require_manage()?;
        match self.tree.find(id.as_str()) {
            Some(Node::File(_)) => Ok(self.featured.toggle(id.clone())),
            Some(Node::Folder(_)) => Ok(false),
            None => Err(StoreError::NotFound(id.clone())),
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Close every overlay and hand back all content handles for release.
    pub fn teardown(&mut self) -> Vec<ContentRef> {
        self.preview.close();
        self.menu = None;
        self.dialog = None;
        self.long_press.cancel();
        let refs = self.tree.content_refs();
        debug!(released = refs.len(), "session torn down");
        refs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;

    fn session(capability: Capability) -> StoriesSession<SequentialIds> {
        StoriesSession::with_store(TreeStore::with_ids(SequentialIds::new()), capability)
    }

    fn image(name: &str) -> FileSource {
        FileSource::new(name, "image/png", ContentRef::new(format!("blob:{name}")))
    }

    fn new_folder(session: &mut StoriesSession<SequentialIds>, name: &str) -> NodeId {
        session.request_new_folder().unwrap();
        match session.respond(DialogResponse::Name(name.to_string())).unwrap() {
            DialogOutcome::Created(id) => id,
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn test_new_folder_dialog_flow() {
        let mut session = session(Capability::manage());
        let id = new_folder(&mut session, "Photos");
        assert!(session.dialog().is_none());
        assert_eq!(session.current_folder().children[0].id(), &id);
    }

    #[test]
    fn test_blank_name_keeps_dialog_open() {
        let mut session = session(Capability::manage());
        session.request_new_folder().unwrap();
        let err = session
            .respond(DialogResponse::Name("  ".to_string()))
            .unwrap_err();
        assert_eq!(err, StoreError::EmptyName);
        assert!(session.dialog().is_some());
        assert!(session.current_folder().children.is_empty());
    }

    #[test]
    fn test_cancel_clears_dialog() {
        let mut session = session(Capability::manage());
        session.request_new_folder().unwrap();
        assert_eq!(
            session.respond(DialogResponse::Cancel).unwrap(),
            DialogOutcome::Cancelled
        );
        assert!(session.dialog().is_none());
    }

    #[test]
    fn test_mismatched_response_is_ignored() {
        let mut session = session(Capability::manage());
        session.request_new_folder().unwrap();
        assert_eq!(
            session.respond(DialogResponse::Confirm).unwrap(),
            DialogOutcome::Unchanged
        );
        assert!(session.dialog().is_some());
    }

    #[test]
    fn test_read_only_cannot_request_dialogs() {
        let mut session = session(Capability::read_only());
        assert_eq!(
            session.request_new_folder(),
            Err(StoreError::PermissionDenied)
        );
        assert!(session.dialog().is_none());
        assert_eq!(session.press(NodeId::from("x"), 0.0, 0.0), None);
    }

    #[test]
    fn test_activate_enters_folder_and_opens_preview() {
        let mut session = session(Capability::manage());
        let photos = new_folder(&mut session, "Photos");
        session.activate(photos.as_str());
        assert_eq!(session.path().current(), &photos);

        let ids = session.upload(vec![image("a.png"), image("b.png")]).unwrap();
        session.activate(ids[1].as_str());
        assert_eq!(session.preview().index(), Some(1));
    }

    #[test]
    fn test_delete_current_folder_reconciles_path() {
        let mut session = session(Capability::manage());
        let photos = new_folder(&mut session, "Photos");
        session.activate(photos.as_str());
        let trip = new_folder(&mut session, "Trip");
        session.activate(trip.as_str());
        assert_eq!(session.path().len(), 3);

        session.delete(&photos).unwrap();
        assert!(session.path().is_root());
    }

    #[test]
    fn test_delete_prunes_marks_and_releases_content() {
        let mut session = session(Capability::manage());
        let photos = new_folder(&mut session, "Photos");
        session.activate(photos.as_str());
        let ids = session.upload(vec![image("a.png")]).unwrap();
        session.jump_to(0);

        assert!(session.toggle_selected(&ids[0]));
        assert!(session.toggle_featured(&ids[0]).unwrap());

        session.request_delete(&photos).unwrap();
        let outcome = session.respond(DialogResponse::Confirm).unwrap();
        assert_eq!(outcome.released(), &[ContentRef::new("blob:a.png")]);
        assert!(session.selected().is_empty());
        assert!(session.featured().is_empty());
    }

    #[test]
    fn test_stale_rename_and_delete_are_noops() {
        let mut session = session(Capability::manage());
        let photos = new_folder(&mut session, "Photos");
        session.delete(&photos).unwrap();

        assert_eq!(
            session.delete(&photos).unwrap(),
            DialogOutcome::Unchanged
        );
        assert_eq!(
            session.rename(&photos, "X").unwrap(),
            DialogOutcome::Unchanged
        );
        session.request_rename(&photos).unwrap();
        assert!(session.dialog().is_none());
    }

    #[test]
    fn test_context_menu_flow() {
        let mut session = session(Capability::manage());
        let photos = new_folder(&mut session, "Photos");

        assert!(session.open_context_menu(&photos, 10.0, 20.0));
        assert_eq!(session.menu().map(|m| m.name.as_str()), Some("Photos"));

        session.context_action(ContextAction::Rename).unwrap();
        assert!(session.menu().is_none());
        assert_eq!(
            session.dialog().map(|d| d.initial_value().to_string()),
            Some("Photos".to_string())
        );
        session
            .respond(DialogResponse::Name("Pictures".to_string()))
            .unwrap();
        assert_eq!(session.tree().find(photos.as_str()).unwrap().name(), "Pictures");
    }

    #[test]
    fn test_context_menu_disabled_when_read_only() {
        let mut manage = session(Capability::manage());
        let id = new_folder(&mut manage, "Photos");
        let mut viewer = session(Capability::read_only());
        assert!(!viewer.open_context_menu(&id, 0.0, 0.0));
        assert!(viewer.menu().is_none());
    }

    #[test]
    fn test_long_press_opens_menu_once() {
        let mut session = session(Capability::manage());
        let photos = new_folder(&mut session, "Photos");

        let generation = session.press(photos.clone(), 5.0, 6.0).unwrap();
        assert!(session.long_press_elapsed(generation));
        assert_eq!(session.menu().map(|m| (m.x, m.y)), Some((5.0, 6.0)));

        session.dismiss_context_menu();
        assert!(!session.long_press_elapsed(generation));
        assert!(session.menu().is_none());
    }

    #[test]
    fn test_long_press_cancelled_by_move() {
        let mut session = session(Capability::manage());
        let photos = new_folder(&mut session, "Photos");
        let generation = session.press(photos, 0.0, 0.0).unwrap();
        session.cancel_press();
        assert!(!session.long_press_elapsed(generation));
    }

    #[test]
    fn test_toggle_featured_ignores_folders() {
        let mut session = session(Capability::manage());
        let photos = new_folder(&mut session, "Photos");
        assert_eq!(session.toggle_featured(&photos), Ok(false));
        assert_eq!(
            session.toggle_featured(&NodeId::from("missing")),
            Err(StoreError::NotFound(NodeId::from("missing")))
        );
    }

    #[test]
    fn test_teardown_returns_all_handles() {
        let mut session = session(Capability::manage());
        session.upload(vec![image("a.png"), image("b.png")]).unwrap();
        session.activate(session.current_folder().children[0].id().as_str());
        assert!(session.preview().is_open());

        let refs = session.teardown();
        assert_eq!(refs.len(), 2);
        assert!(!session.preview().is_open());
    }
}
