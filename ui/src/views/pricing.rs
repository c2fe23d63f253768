use dioxus::prelude::*;

use super::page_hero;
use crate::components::Reveal;
use crate::i18n::{use_translator, PageName, Translator};

const PLANS: &[&str] = &["free", "pro", "team"];
const PLAN_FEATURES: &[&str] = &["f1", "f2", "f3"];
const FAQ: &[&str] = &["refund", "devices"];

#[component]
pub fn Pricing() -> Element {
    let t = use_translator(Some(PageName::Pricing));

    rsx! {
        section { class: "page page-pricing",
            {page_hero(&t)}
            Reveal { class: "section",
                div { class: "plan-grid",
                    for id in PLANS {
                        {plan(&t, id)}
                    }
                }
            }
            Reveal { class: "section faq",
                h2 { class: "section__title", {t.text("faq.title")} }
                dl {
                    for id in FAQ {
                        dt { {t.text(&format!("faq.{id}.q"))} }
                        dd { {t.text(&format!("faq.{id}.a"))} }
                    }
                }
            }
        }
    }
}

fn plan(t: &Translator, id: &str) -> Element {
    let base = format!("plans.{id}");
    let featured = id == "pro";

    rsx! {
        article { class: if featured { "plan plan--featured" } else { "plan" },
            h3 { class: "plan__name", {t.text(&format!("{base}.name"))} }
            p { class: "plan__price",
                strong { {t.text(&format!("{base}.price"))} }
                span { class: "plan__period", {t.text(&format!("{base}.period"))} }
            }
            p { class: "plan__desc", {t.text(&format!("{base}.desc"))} }
            ul { class: "plan__features",
                for feature in PLAN_FEATURES {
                    li { {t.text(&format!("{base}.features.{feature}"))} }
                }
            }
            span { class: "button button--primary plan__cta", {t.text(&format!("{base}.cta"))} }
        }
    }
}
