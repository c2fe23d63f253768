use dioxus::prelude::*;

use crate::i18n::{use_translator, PageName};

#[component]
pub fn SiteFooter() -> Element {
    let t = use_translator(Some(PageName::Common));
    let brand = t.text("brand.name");

    rsx! {
        footer { class: "site-footer",
            p { class: "site-footer__rights", "© {brand}. " {t.text("footer.rights")} }
            p { class: "site-footer__disclaimer", {t.text("footer.disclaimer")} }
        }
    }
}
