//! Stories folder browser.
//!
//! Components:
//! - [`StoriesPage`] - Page shell, owns the session lifecycle
//! - [`Toolbar`] - Upload and New Folder actions
//! - [`PathBar`] - Breadcrumb navigation
//! - [`Grid`] - Tiles for the current folder
//! - [`ContextMenuView`] - Rename/Delete menu at the pointer
//! - [`PreviewOverlay`] - Full-screen preview with image carousel
//! - [`NameDialog`] - Naming and confirmation prompts

mod context_menu;
mod dialog;
mod grid;
mod pathbar;
mod preview;
#[allow(clippy::module_inception)]
mod stories;
mod toolbar;

pub use context_menu::ContextMenuView;
pub use dialog::NameDialog;
pub use grid::Grid;
pub use pathbar::PathBar;
pub use preview::PreviewOverlay;
pub use stories::StoriesPage;
pub use toolbar::Toolbar;
