use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::{AppNavbar, SiteFooter};
use ui::i18n::{use_i18n_root, I18n};
use ui::views::{About, Aigc, Community, Features, Home, Pricing};

/// Secondary pages live under `/pages/` so bundle URLs resolve one level up.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
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

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_features(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Features {},
        "{label}"
    })
}
fn nav_aigc(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Aigc {},
        "{label}"
    })
}
fn nav_community(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Community {},
        "{label}"
    })
}
fn nav_pricing(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Pricing {},
        "{label}"
    })
}
fn nav_about(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::About {},
        "{label}"
    })
}

fn main() {
    dioxus::logger::init(Level::INFO).ok();
    dioxus::launch(App);
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
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

/// Bundles come from `/locales/<lang>/<page>.json`; the choice is kept in
/// localStorage.
#[cfg(target_arch = "wasm32")]
fn make_i18n() -> I18n {
    use ui::core::storage::LocalStorage;
    use ui::i18n::HttpSource;

    I18n::new(HttpSource, LocalStorage)
}

/// Host builds (`cargo check`, SSR experiments) have no fetch or storage.
#[cfg(not(target_arch = "wasm32"))]
fn make_i18n() -> I18n {
    use ui::core::storage::MemoryPreferences;
    use ui::i18n::EmbeddedSource;

    I18n::new(EmbeddedSource, MemoryPreferences::new())
}

/// A web-specific Router around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
        SiteFooter { }
    }
}
