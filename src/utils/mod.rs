//! Browser helpers.
//!
//! - [`dom`] - window, mount element and attribute access
//! - [`blob`] - object URLs for uploaded files

pub mod blob;
pub mod dom;

pub use blob::{file_sources, revoke_all};
