//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuChevronLeft as ChevronLeft, LuChevronRight as ChevronRight, LuEye as Eye,
        LuFile as File, LuFileText as FilePdf, LuFolder as Folder, LuHouse as Home,
        LuImage as FileImage, LuPencil as Edit, LuPlus as Plus, LuStar as Star,
        LuStar as StarFill, LuTrash2 as Trash, LuUpload as Upload, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsChevronLeft as ChevronLeft, BsChevronRight as ChevronRight, BsEye as Eye,
        BsFileEarmark as File, BsFileEarmarkImage as FileImage, BsFileEarmarkPdf as FilePdf,
        BsFolderFill as Folder, BsHouseFill as Home, BsPencil as Edit, BsPlusLg as Plus,
        BsStar as Star, BsStarFill as StarFill, BsTrash as Trash, BsUpload as Upload,
        BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(HOME, Home);
themed_icon!(FOLDER, Folder);
themed_icon!(FILE, File);
themed_icon!(FILE_PDF, FilePdf);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(PLUS, Plus);
themed_icon!(UPLOAD, Upload);
themed_icon!(EDIT, Edit);
themed_icon!(TRASH, Trash);
themed_icon!(EYE, Eye);
themed_icon!(STAR, Star);
themed_icon!(STAR_FILL, StarFill);
themed_icon!(CLOSE, Close);
