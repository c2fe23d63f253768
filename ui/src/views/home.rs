use dioxus::prelude::*;

use super::card;
use crate::components::{ParticleBackdrop, Reveal};
use crate::i18n::{use_translator, PageName};

const HIGHLIGHTS: &[&str] = &["analysis", "draft", "replay"];
const STATS: &[&str] = &["matches", "players", "accuracy"];

#[component]
pub fn Home() -> Element {
    let t = use_translator(Some(PageName::Home));

    rsx! {
        section { class: "page page-home",
            ParticleBackdrop {
                div { class: "hero",
                    h1 { class: "hero__title", {t.text("hero.title")} }
                    p { class: "hero__subtitle", {t.text("hero.subtitle")} }
                    div { class: "hero__actions",
                        a { class: "button button--primary", href: "#download", {t.text("cta.download")} }
                        a { class: "button button--ghost", href: "#highlights", {t.text("cta.learn_more")} }
                    }
                    p { class: "hero__hint", {t.text("hero.hint")} }
                }
            }

            Reveal { class: "section",
                h2 { id: "highlights", class: "section__title", {t.text("highlights.title")} }
                div { class: "card-grid",
                    for id in HIGHLIGHTS {
                        {card(&t, &format!("highlights.items.{id}"))}
                    }
                }
            }

            Reveal { class: "section stats",
                for id in STATS {
                    div { class: "stats__item",
                        strong { class: "stats__value", {t.text(&format!("stats.{id}.value"))} }
                        span { class: "stats__label", {t.text(&format!("stats.{id}.label"))} }
                    }
                }
            }

            Reveal { class: "section cta-banner",
                h2 { id: "download", {t.text("banner.title")} }
                p { {t.text("banner.text")} }
            }
        }
    }
}
