use dioxus::prelude::*;

use crate::core::config::SUPPORTED_LANGUAGES;
use crate::i18n::{dom, use_translator, I18nContext, Language, PageName};

/// One button per supported language; the current one carries `active`.
#[component]
pub fn LangSwitch() -> Element {
    let t = use_translator(Some(PageName::Common));
    let ctx = use_context::<I18nContext>();
    let current = t.language();
    let label = t.text("lang_switch.label");

    rsx! {
        div { class: "lang-switch", role: "group", aria_label: "{label}",
            for lang in SUPPORTED_LANGUAGES.iter().copied() {
                {option(lang, lang == current, ctx.clone(), t.text_in(&format!("lang_switch.{}", lang.code()), PageName::Common))}
            }
        }
    }
}

fn option(lang: Language, active: bool, ctx: I18nContext, title: String) -> Element {
    let class = if active {
        format!("lang-switch__option {}", dom::ACTIVE_CLASS)
    } else {
        "lang-switch__option".to_string()
    };

    rsx! {
        button {
            r#type: "button",
            class: "{class}",
            "data-lang": lang.code(),
            title: "{title}",
            aria_pressed: if active { "true" } else { "false" },
            onclick: move |_| {
                let service = ctx.service.clone();
                spawn(async move {
                    service.set_language(lang).await;
                });
            },
            "{lang.native_name()}"
        }
    }
}
