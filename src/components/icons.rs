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
        LuBox as Product, LuBuilding2 as Company, LuChevronDown as ChevronDown,
        LuChevronRight as ChevronRight, LuExternalLink as ExternalLink, LuFolder as Folder,
        LuFolderOpen as FolderOpen, LuMenu as Menu, LuRss as Feed, LuTriangleAlert as Alert,
        LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsBox as Product, BsBoxArrowUpRight as ExternalLink, BsBuilding as Company,
        BsChevronDown as ChevronDown, BsChevronRight as ChevronRight,
        BsExclamationTriangle as Alert, BsFolder2Open as FolderOpen, BsFolderFill as Folder,
        BsList as Menu, BsRss as Feed, BsXLg as Close,
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

themed_icon!(FEED, Feed);
themed_icon!(FOLDER, Folder);
themed_icon!(FOLDER_OPEN, FolderOpen);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(COMPANY, Company);
themed_icon!(PRODUCT, Product);
themed_icon!(MENU, Menu);
themed_icon!(CLOSE, Close);
themed_icon!(EXTERNAL_LINK, ExternalLink);
themed_icon!(ALERT, Alert);
