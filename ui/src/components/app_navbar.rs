use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use super::LangSwitch;
use crate::i18n::{use_translator, PageName};

/// Platforms register a `NavBuilder` providing fully constructed `Link`
/// elements, so `ui` never needs to know each platform's `Route` enum.
///
/// Each function receives the localized label and returns a link that already
/// contains it as its only child, e.g.
/// ```ignore
/// fn nav_pricing(label: &str) -> Element {
///     rsx!(Link { class: "navbar__link", to: Route::Pricing {}, "{label}" })
/// }
/// ```
///
/// Without a registered builder the navbar renders only the brand and the
/// language switch.
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub features: fn(label: &str) -> Element,
    pub aigc: fn(label: &str) -> Element,
    pub community: fn(label: &str) -> Element,
    pub pricing: fn(label: &str) -> Element,
    pub about: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar() -> Element {
    let t = use_translator(Some(PageName::Common));

    let links = NAV_BUILDER.get().map(|b| {
        [
            (b.home)(&t.text("nav.home")),
            (b.features)(&t.text("nav.features")),
            (b.aigc)(&t.text("nav.aigc")),
            (b.community)(&t.text("nav.community")),
            (b.pricing)(&t.text("nav.pricing")),
            (b.about)(&t.text("nav.about")),
        ]
    });

    let brand = t.text("brand.name");
    let tagline = t.text("brand.tagline");

    rsx! {
        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-mark", "{brand}" }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                if let Some(links) = links {
                    nav { class: "navbar__links", aria_label: t.text("nav.label"),
                        for link in links {
                            {link}
                        }
                    }
                }

                LangSwitch {}
            }
        }
    }
}
