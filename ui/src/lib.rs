//! Shared UI crate for the Dota Coach site. Views, translation loading and
//! the particle backdrop live here; `web` and `desktop` only wire up routing
//! and platform services.

pub mod core;
pub mod i18n;
pub mod particles;
pub mod views;

pub mod components {
    // Localized site navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    mod lang_switch;
    pub use lang_switch::LangSwitch;

    mod particle_backdrop;
    pub use particle_backdrop::ParticleBackdrop;

    mod reveal;
    pub use reveal::{Reveal, RevealPolicy};

    mod site_footer;
    pub use site_footer::SiteFooter;
}

use dioxus::prelude::*;

/// Shared theme, served as a hashed asset on the web. Desktop inlines the
/// same file.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
