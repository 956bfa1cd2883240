//! Constants shared by the tree store and the interaction models.

// =============================================================================
// Tree
// =============================================================================

/// Id of the root folder. Every [`FolderPath`](crate::FolderPath) starts here.
pub const ROOT_ID: &str = "root";

/// Display name of the root folder (first breadcrumb segment).
pub const ROOT_NAME: &str = "Root";

/// Mime assigned to uploads whose source reports no type.
pub const DEFAULT_MIME: &str = "application/octet-stream";

/// Id prefix for generated folders.
pub const FOLDER_ID_PREFIX: &str = "fld";

/// Id prefix for generated files.
pub const FILE_ID_PREFIX: &str = "fil";

/// Length of the random base-36 suffix in generated ids.
pub const ID_SUFFIX_LEN: usize = 6;

// =============================================================================
// Interaction
// =============================================================================

/// Touch-and-hold duration before the context menu opens.
pub const LONG_PRESS_MS: u32 = 650;

/// Minimum horizontal travel for a preview swipe. Shorter drags are taps.
pub const SWIPE_THRESHOLD_PX: f64 = 40.0;

/// Offset of the context menu from the pointer, so the pointer does not
/// land on the first entry.
pub const CONTEXT_MENU_OFFSET_PX: f64 = 2.0;
