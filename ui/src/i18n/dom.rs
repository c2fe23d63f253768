//! Re-application of translations to markup outside the Dioxus tree.
//!
//! The host page may carry static markup (the boot splash, `<noscript>`
//! fallbacks) that opts in through data attributes:
//!
//! - `data-i18n="section.key"`: text content, or `placeholder` for inputs.
//! - `data-i18n-attr="title:section.key"`: sets the named attribute.
//! - `data-i18n-page="pricing"`: section override for the two above.
//! - `data-lang="zh"`: language switch control; gets `active` when current.
//!
//! Text in nodes rendered by Dioxus is refreshed by re-rendering instead.
//! The switcher buttons do carry `data-lang`, so the toggle agrees with
//! whatever the next render produces.

use super::{I18n, Language, PageName};

pub const TEXT_ATTR: &str = "data-i18n";
pub const BINDING_ATTR: &str = "data-i18n-attr";
pub const PAGE_ATTR: &str = "data-i18n-page";
pub const LANG_ATTR: &str = "data-lang";
pub const ACTIVE_CLASS: &str = "active";
/// Site-level switch notification. Namespaced so it stays apart from the
/// browser's own `languagechange`, which tracks `navigator.languages`.
pub const CHANGE_EVENT: &str = "dotacoach:languagechange";

/// Parsed `attribute:key` binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrBinding<'a> {
    pub attr: &'a str,
    pub key: &'a str,
}

impl<'a> AttrBinding<'a> {
    pub fn parse(raw: &'a str) -> Option<Self> {
        let (attr, key) = raw.split_once(':')?;
        let (attr, key) = (attr.trim(), key.trim());
        if attr.is_empty() || key.is_empty() {
            return None;
        }
        Some(Self { attr, key })
    }
}

/// Where a `data-i18n` translation lands on a given element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSlot {
    Content,
    Placeholder,
}

impl TextSlot {
    pub fn for_tag(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case("input") || tag.eq_ignore_ascii_case("textarea") {
            TextSlot::Placeholder
        } else {
            TextSlot::Content
        }
    }
}

/// Section for an element: explicit override, else the URL-derived page.
pub fn page_override(raw: Option<&str>) -> Option<PageName> {
    raw.and_then(|name| name.trim().parse().ok())
}

/// Walk the host document and apply the active translations.
#[cfg(target_arch = "wasm32")]
pub fn apply_document(i18n: &I18n) {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let lang = i18n.current_language();
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("lang", lang.html_lang());
    }

    let elements = |selector: &str| -> Vec<web_sys::Element> {
        let Ok(list) = document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .collect()
    };

    for el in elements(&format!("[{TEXT_ATTR}]")) {
        let Some(key) = el.get_attribute(TEXT_ATTR) else {
            continue;
        };
        let page = page_override(el.get_attribute(PAGE_ATTR).as_deref());
        let text = i18n.resolve(&key, page);
        match TextSlot::for_tag(&el.tag_name()) {
            TextSlot::Placeholder => {
                let _ = el.set_attribute("placeholder", &text);
            }
            TextSlot::Content => el.set_text_content(Some(&text)),
        }
    }

    for el in elements(&format!("[{BINDING_ATTR}]")) {
        let Some(raw) = el.get_attribute(BINDING_ATTR) else {
            continue;
        };
        let Some(binding) = AttrBinding::parse(&raw) else {
            continue;
        };
        let page = page_override(el.get_attribute(PAGE_ATTR).as_deref());
        let _ = el.set_attribute(binding.attr, &i18n.resolve(binding.key, page));
    }

    for el in elements(&format!("[{LANG_ATTR}]")) {
        let is_current = el.get_attribute(LANG_ATTR).as_deref() == Some(lang.code());
        let _ = el.class_list().toggle_with_force(ACTIVE_CLASS, is_current);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn apply_document(_i18n: &I18n) {}

/// Announce the new language on `window` as a [`CHANGE_EVENT`] whose
/// `detail` is the language code.
#[cfg(target_arch = "wasm32")]
pub fn dispatch_change_event(lang: Language) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let init = web_sys::CustomEventInit::new();
    init.set_detail(&wasm_bindgen::JsValue::from_str(lang.code()));
    if let Ok(event) = web_sys::CustomEvent::new_with_event_init_dict(CHANGE_EVENT, &init) {
        let _ = window.dispatch_event(&event);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn dispatch_change_event(_lang: Language) {}
