//! Internationalization (i18n) support for the site.
//!
//! Translations are plain JSON, one file per page section and language:
//! ```text
//! assets/locales/
//!   en/home.json  en/features.json  ...  en/common.json
//!   zh/home.json  zh/features.json  ...  zh/common.json
//! ```
//! Keys are dotted paths into a section (`"hero.title"`). A lookup tries the
//! requested page section first, then `common`, and finally echoes the key.
//!
//! Usage in a component (below a root that called [`use_i18n_root`]):
//! ```ignore
//! let t = use_translator(Some(PageName::Pricing));
//! rsx! { h1 { {t.text("hero.title")} } }
//! ```
//!
//! Platform notes:
//! - Web: bundles are fetched over HTTP next to the page ([`HttpSource`]) and
//!   the preference lives in `localStorage`.
//! - Desktop: bundles are embedded ([`EmbeddedSource`]) and the preference is
//!   a JSON file in the user's config dir.

mod bundle;
pub mod dom;
mod service;
mod source;

use std::fmt;
use std::str::FromStr;

use dioxus::prelude::*;

pub use bundle::{lookup, Bundle};
pub use service::{I18n, Listener};
#[cfg(target_arch = "wasm32")]
pub use source::HttpSource;
pub use source::{bundle_url, locale_base, BundleError, BundleSource, EmbeddedSource, Section};

use crate::core::platform;

/// Languages the site ships translations for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    En,
    Zh,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
        }
    }

    /// BCP 47 tag for `<html lang>`.
    pub fn html_lang(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh-CN",
        }
    }

    /// Label shown on the switcher, in the language itself.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Zh => "中文",
        }
    }

    /// Exact code match only.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "zh" => Some(Language::Zh),
            _ => None,
        }
    }

    /// Map a reported locale onto a supported language. Anything in the
    /// Chinese family becomes `Zh`.
    pub fn from_locale(tag: &str) -> Self {
        if tag.trim().to_ascii_lowercase().starts_with("zh") {
            Language::Zh
        } else {
            Language::En
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Translation sections. Each is one JSON resource per language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PageName {
    Home,
    Features,
    Aigc,
    Community,
    Pricing,
    About,
    Common,
}

impl PageName {
    pub fn as_str(self) -> &'static str {
        match self {
            PageName::Home => "home",
            PageName::Features => "features",
            PageName::Aigc => "aigc",
            PageName::Community => "community",
            PageName::Pricing => "pricing",
            PageName::About => "about",
            PageName::Common => "common",
        }
    }

    /// Derive the page section from a URL path such as `/pages/pricing.html`
    /// or `/pages/pricing`. The root, `index`, and unknown names map to home.
    pub fn from_path(path: &str) -> Self {
        let last = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .rsplit('/')
            .find(|segment| !segment.is_empty())
            .unwrap_or_default();
        let name = last.strip_suffix(".html").unwrap_or(last);

        match name.parse() {
            Ok(PageName::Common) | Err(_) => PageName::Home,
            Ok(page) => page,
        }
    }
}

impl FromStr for PageName {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "home" => PageName::Home,
            "features" => PageName::Features,
            "aigc" => PageName::Aigc,
            "community" => PageName::Community,
            "pricing" => PageName::Pricing,
            "about" => PageName::About,
            "common" => PageName::Common,
            _ => return Err(()),
        })
    }
}

impl fmt::Display for PageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shared i18n state handed down through Dioxus context.
///
/// `epoch` is bumped whenever the active bundle changes; components that read
/// it re-render and pull fresh strings.
#[derive(Clone)]
pub struct I18nContext {
    pub service: I18n,
    pub epoch: Signal<u64>,
}

/// Install the i18n service at the app root: provide it as context, mirror
/// change notifications into the epoch signal, and run the startup load.
pub fn use_i18n_root(make_service: impl FnOnce() -> I18n) -> I18nContext {
    let epoch = use_signal(|| 0u64);
    let ctx = use_context_provider(move || {
        let service = make_service();
        service.subscribe(Box::new(move |_lang: Language| {
            let mut epoch = epoch;
            epoch += 1;
        }));
        I18nContext { service, epoch }
    });

    let service = ctx.service.clone();
    use_future(move || {
        let service = service.clone();
        async move { service.init().await }
    });

    ctx
}

/// Lookup handle for one component.
#[derive(Clone)]
pub struct Translator {
    service: I18n,
    page: Option<PageName>,
}

impl Translator {
    /// Text for `key` in this translator's page (or the URL-derived page).
    pub fn text(&self, key: &str) -> String {
        self.service.resolve(key, self.page)
    }

    /// Same as [`Translator::text`] but against an explicit section.
    pub fn text_in(&self, key: &str, page: PageName) -> String {
        self.service.resolve(key, Some(page))
    }

    pub fn language(&self) -> Language {
        self.service.current_language()
    }
}

/// Subscribe the calling component to language changes and return a lookup
/// handle. `page` overrides the section derived from the URL path.
pub fn use_translator(page: Option<PageName>) -> Translator {
    let ctx = use_context::<I18nContext>();
    // Reading the epoch registers the re-render dependency.
    let _epoch = (ctx.epoch)();
    Translator {
        service: ctx.service,
        page,
    }
}

/// Default page section for lookups without an explicit page.
pub(crate) fn page_from_location() -> PageName {
    PageName::from_path(&platform::current_path())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chinese_family_locales_map_to_zh() {
        for tag in ["zh", "zh-CN", "zh-Hant-TW", "ZH-hk"] {
            assert_eq!(Language::from_locale(tag), Language::Zh, "{tag}");
        }
        for tag in ["en-US", "fr", "", "de-zh"] {
            assert_eq!(Language::from_locale(tag), Language::En, "{tag}");
        }
    }

    #[test]
    fn codes_parse_exactly() {
        assert_eq!(Language::from_code("en"), Some(Language::En));
        assert_eq!(Language::from_code("zh"), Some(Language::Zh));
        assert_eq!(Language::from_code("zh-CN"), None);
        assert_eq!(Language::from_code("EN"), None);
    }

    #[test]
    fn page_is_derived_from_url_path() {
        assert_eq!(PageName::from_path("/"), PageName::Home);
        assert_eq!(PageName::from_path(""), PageName::Home);
        assert_eq!(PageName::from_path("/index.html"), PageName::Home);
        assert_eq!(PageName::from_path("/pages/pricing.html"), PageName::Pricing);
        assert_eq!(PageName::from_path("/pages/aigc"), PageName::Aigc);
        assert_eq!(PageName::from_path("/pages/about/"), PageName::About);
        assert_eq!(PageName::from_path("/pages/community?ref=x"), PageName::Community);
        assert_eq!(PageName::from_path("/pages/nowhere.html"), PageName::Home);
        assert_eq!(PageName::from_path("/common"), PageName::Home);
    }
}
