#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

use dioxus::logger::tracing::{warn, Level};
#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::{AppNavbar, SiteFooter};
use ui::core::storage::{FilePreferences, MemoryPreferences};
use ui::i18n::{use_i18n_root, EmbeddedSource, I18n};
use ui::views::{About, Aigc, Community, Features, Home, Pricing};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Home {},
    #[route("/pages/features")]
    Features {},
    #[route("/pages/aigc")]
    Aigc {},
    #[route("/pages/community")]
    Community {},
    #[route("/pages/pricing")]
    Pricing {},
    #[route("/pages/about")]
    About {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    dioxus::logger::init(Level::INFO).ok();
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Dota Coach – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn main() {
    dioxus::logger::init(Level::INFO).ok();
    dioxus::launch(App);
}

fn nav_home(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Home {}, "{label}" })
}
fn nav_features(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Features {}, "{label}" })
}
fn nav_aigc(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Aigc {}, "{label}" })
}
fn nav_community(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Community {}, "{label}" })
}
fn nav_pricing(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Pricing {}, "{label}" })
}
fn nav_about(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::About {}, "{label}" })
}

/// Translations are compiled in; the language choice goes to the user's
/// config dir, or only lives for the session if that can't be located.
fn make_i18n() -> I18n {
    match FilePreferences::in_config_dir() {
        Some(store) => I18n::new(EmbeddedSource, store),
        None => {
            warn!(target: "storage", "no config directory; language choice will not persist");
            I18n::new(EmbeddedSource, MemoryPreferences::new())
        }
    }
}

#[component]
fn App() -> Element {
    register_nav(NavBuilder {
        home: nav_home,
        features: nav_features,
        aigc: nav_aigc,
        community: nav_community,
        pricing: nav_pricing,
        about: nav_about,
    });

    use_i18n_root(make_i18n);

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> { }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the shared ui crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../ui/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// A desktop-specific Router around the shared `AppNavbar` component
/// which allows us to use the desktop-specific `Route` enum.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar { }

        Outlet::<Route> {}

        SiteFooter { }
    }
}
