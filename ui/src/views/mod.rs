//! Site pages. Each page reads its own translation section and falls back
//! to `common` for shared strings.

mod about;
mod aigc;
mod community;
mod features;
mod home;
mod pricing;

pub use about::About;
pub use aigc::Aigc;
pub use community::Community;
pub use features::Features;
pub use home::Home;
pub use pricing::Pricing;

use dioxus::prelude::*;

use crate::components::Reveal;
use crate::i18n::Translator;

/// Title + description card for `<base>.title` / `<base>.desc`.
pub(crate) fn card(t: &Translator, base: &str) -> Element {
    rsx! {
        article { class: "card",
            h3 { class: "card__title", {t.text(&format!("{base}.title"))} }
            p { class: "card__desc", {t.text(&format!("{base}.desc"))} }
        }
    }
}

/// Page header shared by all pages: `hero.title` and `hero.subtitle`.
pub(crate) fn page_hero(t: &Translator) -> Element {
    rsx! {
        Reveal { class: "page-hero",
            h1 { class: "page-hero__title", {t.text("hero.title")} }
            p { class: "page-hero__subtitle", {t.text("hero.subtitle")} }
        }
    }
}
