//! Object URLs for uploaded files.
//!
//! Each upload is turned into a `blob:` URL that stays valid until revoked.
//! The tree only stores the URL as an opaque [`ContentRef`]; these helpers
//! create and release them.

use stories_core::{ContentRef, FileSource};
use web_sys::{File, FileList, Url};

/// Create an object URL for `file`.
pub fn object_url(file: &File) -> Option<ContentRef> {
    match Url::create_object_url_with_blob(file) {
        Ok(url) => Some(ContentRef::new(url)),
        Err(e) => {
            web_sys::console::warn_1(&format!("Could not read {}: {e:?}", file.name()).into());
            None
        }
    }
}

/// Turn a picked file list into upload sources, in picking order.
///
/// Files whose URL cannot be created are skipped.
pub fn file_sources(files: &FileList) -> Vec<FileSource> {
    (0..files.length())
        .filter_map(|i| files.get(i))
        .filter_map(|file| {
            let content = object_url(&file)?;
            Some(FileSource::new(file.name(), file.type_(), content))
        })
        .collect()
}

/// Revoke every handle. Unknown or already revoked URLs are ignored.
pub fn revoke_all<'a>(refs: impl IntoIterator<Item = &'a ContentRef>) {
    for content in refs {
        let _ = Url::revoke_object_url(content.as_str());
    }
}
