//! Application configuration.
//!
//! Centralizes the constants used by the web front end. Tree and gesture
//! constants live in [`stories_core::config`]; the long-press delay is
//! re-exported here for the touch handlers.

pub use stories_core::config::LONG_PRESS_MS;

// =============================================================================
// Application Metadata
// =============================================================================

/// Page heading.
pub const APP_TITLE: &str = "File Manager";

// =============================================================================
// Embedding
// =============================================================================

/// Id of the element the app mounts into.
pub const MOUNT_ELEMENT_ID: &str = "app";

/// Attribute on the mount element holding the JSON props,
/// e.g. `data-props='{"canManage": true}'`.
pub const PROPS_ATTRIBUTE: &str = "data-props";

// =============================================================================
// UI Text
// =============================================================================

/// Shown when the current folder has no children.
pub const EMPTY_FOLDER_TEXT: &str = "This folder is empty. Create a folder or upload files.";

/// Shown when the current folder is empty and the viewer cannot manage.
pub const EMPTY_FOLDER_READ_ONLY_TEXT: &str = "This folder is empty.";

/// Shown in the preview overlay for files that cannot be displayed inline.
pub const NO_INLINE_PREVIEW_TEXT: &str = "No inline preview available. Please download the file.";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
