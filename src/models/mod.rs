//! Data models for the web front end.
//!
//! - [`StoriesProps`] - host-provided props read from the mount element

mod props;

pub use props::StoriesProps;
