use dioxus::prelude::*;

use super::page_hero;
use crate::components::Reveal;
use crate::i18n::{use_translator, PageName};

#[component]
pub fn About() -> Element {
    let t = use_translator(Some(PageName::About));
    let email = t.text("contact.email");

    rsx! {
        section { class: "page page-about",
            {page_hero(&t)}
            Reveal { class: "section",
                h2 { class: "section__title", {t.text("mission.title")} }
                p { {t.text("mission.text")} }
            }
            Reveal { class: "section",
                h2 { class: "section__title", {t.text("team.title")} }
                p { {t.text("team.text")} }
            }
            Reveal { class: "section contact",
                h2 { class: "section__title", {t.text("contact.title")} }
                p {
                    {t.text("contact.email_label")}
                    " "
                    a { href: "mailto:{email}", title: t.text("contact.email_title"), "{email}" }
                }
            }
        }
    }
}
