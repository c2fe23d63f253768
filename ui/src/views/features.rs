use dioxus::prelude::*;

use super::{card, page_hero};
use crate::components::Reveal;
use crate::i18n::{use_translator, PageName};

const FEATURES: &[&str] = &["realtime", "draft", "laning", "itemization", "vision", "teamfight"];

#[component]
pub fn Features() -> Element {
    let t = use_translator(Some(PageName::Features));

    rsx! {
        section { class: "page page-features",
            {page_hero(&t)}
            Reveal { class: "section",
                div { class: "card-grid",
                    for id in FEATURES {
                        {card(&t, &format!("items.{id}"))}
                    }
                }
            }
        }
    }
}
