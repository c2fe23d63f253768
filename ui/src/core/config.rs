//! Compile-time configuration for the site.

use crate::i18n::{Language, PageName};

/// Key under which the active language code is persisted.
pub const LANGUAGE_STORAGE_KEY: &str = "dotacoach-language";

/// Languages offered by the switcher, in display order.
pub const SUPPORTED_LANGUAGES: &[Language] = &[Language::En, Language::Zh];

/// Fallback when neither a stored preference nor a usable locale exists.
pub const DEFAULT_LANGUAGE: Language = Language::En;

/// Resources fetched per language. One JSON file each.
pub const BUNDLE_RESOURCES: &[PageName] = &[
    PageName::Home,
    PageName::Features,
    PageName::Aigc,
    PageName::Community,
    PageName::Pricing,
    PageName::About,
    PageName::Common,
];

/// Directory (relative to the site root) holding `<lang>/<page>.json`.
pub const LOCALES_DIR: &str = "locales";

/// Path segment marking pages that live one directory below the site root.
pub const NESTED_PAGES_DIR: &str = "pages";

/// Frame interval used where no display-refresh primitive exists.
pub const FALLBACK_FRAME_MS: u64 = 16;

/// Poll interval for reveal checks.
pub const REVEAL_POLL_MS: u64 = 150;
