use dioxus::prelude::*;

use super::page_hero;
use crate::components::Reveal;
use crate::i18n::{use_translator, PageName, Translator};

const CHANNELS: &[&str] = &["discord", "forum", "events"];

#[component]
pub fn Community() -> Element {
    let t = use_translator(Some(PageName::Community));

    rsx! {
        section { class: "page page-community",
            {page_hero(&t)}
            Reveal { class: "section",
                div { class: "card-grid",
                    for id in CHANNELS {
                        {channel(&t, id)}
                    }
                }
            }
        }
    }
}

fn channel(t: &Translator, id: &str) -> Element {
    let base = format!("channels.{id}");
    let action = t.text(&format!("{base}.action"));

    rsx! {
        article { class: "card card--channel",
            h3 { class: "card__title", {t.text(&format!("{base}.title"))} }
            p { class: "card__desc", {t.text(&format!("{base}.desc"))} }
            span { class: "card__action", title: "{action}", "{action}" }
        }
    }
}
