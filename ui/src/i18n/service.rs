//! The stateful i18n service: bundle cache, current language, persistence and
//! change notification.
//!
//! Everything runs on the UI thread. Loads are async and may interleave, so
//! every language switch takes a sequence number and only the newest one gets
//! to apply its bundle.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use dioxus::logger::tracing::{debug, info, warn};
use futures::future::try_join_all;
use futures::FutureExt;
use unic_langid::LanguageIdentifier;

use super::source::BundleSource;
use super::{dom, page_from_location, Bundle, Language, PageName};
use crate::core::config::{BUNDLE_RESOURCES, DEFAULT_LANGUAGE, LANGUAGE_STORAGE_KEY};
use crate::core::platform;
use crate::core::storage::PreferenceStore;

/// Called with the new language after translations were re-applied.
pub type Listener = Box<dyn Fn(Language)>;

struct State {
    current: Language,
    previous: Option<Language>,
    active: Rc<Bundle>,
    cache: HashMap<Language, Rc<Bundle>>,
    latest_request: u64,
    listeners: Vec<Rc<dyn Fn(Language)>>,
}

struct Inner {
    source: Box<dyn BundleSource>,
    store: Box<dyn PreferenceStore>,
    state: RefCell<State>,
}

/// Cheap-to-clone handle; clones share one cache.
#[derive(Clone)]
pub struct I18n {
    inner: Rc<Inner>,
}

impl I18n {
    pub fn new(source: impl BundleSource + 'static, store: impl PreferenceStore + 'static) -> Self {
        Self {
            inner: Rc::new(Inner {
                source: Box::new(source),
                store: Box::new(store),
                state: RefCell::new(State {
                    current: DEFAULT_LANGUAGE,
                    previous: None,
                    active: Rc::new(Bundle::new()),
                    cache: HashMap::new(),
                    latest_request: 0,
                    listeners: Vec::new(),
                }),
            }),
        }
    }

    pub fn current_language(&self) -> Language {
        self.inner.state.borrow().current
    }

    /// Whether `lang`'s bundle is cached.
    pub fn is_loaded(&self, lang: Language) -> bool {
        self.inner.state.borrow().cache.contains_key(&lang)
    }

    pub fn subscribe(&self, listener: Listener) {
        self.inner
            .state
            .borrow_mut()
            .listeners
            .push(Rc::from(listener));
    }

    /// Text for `key`, looked up in `page` (default: derived from the URL),
    /// then in `common`, else the key itself.
    pub fn resolve(&self, key: &str, page: Option<PageName>) -> String {
        let page = page.unwrap_or_else(page_from_location);
        let active = self.inner.state.borrow().active.clone();
        active.resolve(key, page)
    }

    /// Like [`I18n::resolve`] with an explicit page; `None` on a miss.
    pub fn lookup(&self, key: &str, page: PageName) -> Option<String> {
        let active = self.inner.state.borrow().active.clone();
        active.find(key, page).map(|text| text.into_owned())
    }

    /// Bundle for `lang`, fetched once and cached for the session.
    ///
    /// A failed load is logged and answered with the previously active
    /// language's bundle (or an empty one). Failures are not cached, so the
    /// next request retries.
    pub async fn load_language(&self, lang: Language) -> Rc<Bundle> {
        if let Some(bundle) = self.inner.state.borrow().cache.get(&lang) {
            return bundle.clone();
        }

        let source = &self.inner.source;
        let fetches = BUNDLE_RESOURCES.iter().map(|page| {
            let page = *page;
            source
                .fetch(lang, page)
                .map(move |result| result.map(|section| (page, section)))
        });

        match try_join_all(fetches).await {
            Ok(sections) => {
                let bundle: Rc<Bundle> = Rc::new(sections.into_iter().collect());
                self.inner
                    .state
                    .borrow_mut()
                    .cache
                    .insert(lang, bundle.clone());
                info!(target: "i18n", %lang, "translations loaded");
                bundle
            }
            Err(err) => {
                warn!(target: "i18n", %lang, "failed to load translations: {err}");
                self.fallback_bundle(lang)
            }
        }
    }

    fn fallback_bundle(&self, failed: Language) -> Rc<Bundle> {
        let state = self.inner.state.borrow();
        [state.previous, Some(state.current)]
            .into_iter()
            .flatten()
            .filter(|lang| *lang != failed)
            .find_map(|lang| state.cache.get(&lang).cloned())
            .unwrap_or_else(|| Rc::new(Bundle::new()))
    }

    /// Switch languages. Does nothing when `lang` is already current.
    pub async fn set_language(&self, lang: Language) {
        let request = {
            let mut state = self.inner.state.borrow_mut();
            if state.current == lang {
                return;
            }
            state.previous = Some(state.current);
            state.current = lang;
            state.latest_request += 1;
            state.latest_request
        };

        self.inner.store.save(LANGUAGE_STORAGE_KEY, lang.code());
        let bundle = self.load_language(lang).await;
        self.activate(request, lang, bundle);
    }

    /// Startup: restore the stored preference, else follow the platform
    /// locale, then load and apply.
    pub async fn init(&self) {
        let lang = initial_language(self.inner.store.as_ref(), &platform::requested_locales());
        let request = {
            let mut state = self.inner.state.borrow_mut();
            state.current = lang;
            state.latest_request += 1;
            state.latest_request
        };

        let bundle = self.load_language(lang).await;
        self.activate(request, lang, bundle);
    }

    fn activate(&self, request: u64, lang: Language, bundle: Rc<Bundle>) {
        let listeners = {
            let mut state = self.inner.state.borrow_mut();
            if state.latest_request != request {
                debug!(target: "i18n", %lang, "dropping superseded language load");
                return;
            }
            state.active = bundle;
            state.listeners.clone()
        };

        dom::apply_document(self);
        for listener in &listeners {
            listener(lang);
        }
        dom::dispatch_change_event(lang);
    }
}

/// Stored code if valid, else the first requested locale, else the default.
pub(crate) fn initial_language(
    store: &dyn PreferenceStore,
    requested: &[LanguageIdentifier],
) -> Language {
    store
        .load(LANGUAGE_STORAGE_KEY)
        .and_then(|code| Language::from_code(&code))
        .or_else(|| {
            requested
                .first()
                .map(|locale| Language::from_locale(locale.language.as_str()))
        })
        .unwrap_or(DEFAULT_LANGUAGE)
}
