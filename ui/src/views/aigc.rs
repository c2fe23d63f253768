use dioxus::prelude::*;

use super::{card, page_hero};
use crate::components::Reveal;
use crate::i18n::{use_translator, PageName};

const TOOLS: &[&str] = &["highlights", "commentary", "guides"];

#[component]
pub fn Aigc() -> Element {
    let t = use_translator(Some(PageName::Aigc));

    rsx! {
        section { class: "page page-aigc",
            {page_hero(&t)}
            Reveal { class: "section",
                h2 { class: "section__title", {t.text("tools.title")} }
                div { class: "card-grid",
                    for id in TOOLS {
                        {card(&t, &format!("tools.{id}"))}
                    }
                }
            }
            Reveal { class: "section section--note",
                p { {t.text("note")} }
            }
        }
    }
}
