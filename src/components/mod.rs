//! UI components built with Leptos.
//!
//! - [`stories`] - folder browser with preview, context menu and dialogs
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod icons;
pub mod stories;
