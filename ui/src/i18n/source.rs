//! Where translation resources come from.

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use rust_embed::Embed;
use serde_json::{Map, Value};
use thiserror::Error;

use super::{Language, PageName};
use crate::core::config::{LOCALES_DIR, NESTED_PAGES_DIR};

/// One page's translations: the top-level JSON object of a resource.
pub type Section = Map<String, Value>;

#[derive(Debug, Error)]
pub enum BundleError {
    #[error("request for {url} failed: {reason}")]
    Fetch { url: String, reason: String },
    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("resource {0} not found")]
    Missing(String),
    #[error("resource {resource} is not valid JSON: {source}")]
    Parse {
        resource: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("resource {0} must contain a JSON object")]
    NotAnObject(String),
}

/// Fetches a single named resource for a language.
pub trait BundleSource {
    fn fetch(&self, lang: Language, page: PageName) -> LocalBoxFuture<'_, Result<Section, BundleError>>;
}

/// Parse resource text into a section.
pub(crate) fn parse_section(resource: &str, raw: &str) -> Result<Section, BundleError> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(BundleError::NotAnObject(resource.to_string())),
        Err(source) => Err(BundleError::Parse {
            resource: resource.to_string(),
            source,
        }),
    }
}

/// Locale directory relative to the current page. Pages under `/pages/` sit
/// one level below the site root.
pub fn locale_base(pathname: &str) -> String {
    let nested = format!("/{NESTED_PAGES_DIR}/");
    if pathname.contains(&nested) {
        format!("../{LOCALES_DIR}")
    } else {
        format!("./{LOCALES_DIR}")
    }
}

/// URL of one resource, relative to the page at `pathname`.
pub fn bundle_url(pathname: &str, lang: Language, page: PageName) -> String {
    format!("{}/{}/{}.json", locale_base(pathname), lang.code(), page.as_str())
}

#[derive(Embed)]
#[folder = "assets/locales"]
struct Locales;

/// Resources compiled into the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedSource;

impl EmbeddedSource {
    pub fn load(lang: Language, page: PageName) -> Result<Section, BundleError> {
        let path = format!("{}/{}.json", lang.code(), page.as_str());
        let file = Locales::get(&path).ok_or_else(|| BundleError::Missing(path.clone()))?;
        let raw = std::str::from_utf8(&file.data).map_err(|_| BundleError::NotAnObject(path.clone()))?;
        parse_section(&path, raw)
    }
}

impl BundleSource for EmbeddedSource {
    fn fetch(&self, lang: Language, page: PageName) -> LocalBoxFuture<'_, Result<Section, BundleError>> {
        futures::future::ready(Self::load(lang, page)).boxed_local()
    }
}

/// Resources served next to the page over HTTP.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpSource;

#[cfg(target_arch = "wasm32")]
impl HttpSource {
    async fn get(url: String) -> Result<String, BundleError> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen_futures::JsFuture;

        let fetch_err = |reason: String| BundleError::Fetch {
            url: url.clone(),
            reason,
        };

        let window = web_sys::window().ok_or_else(|| fetch_err("window unavailable".into()))?;
        let response = JsFuture::from(window.fetch_with_str(&url))
            .await
            .map_err(|err| fetch_err(format!("{err:?}")))?;
        let response: web_sys::Response = response
            .dyn_into()
            .map_err(|_| fetch_err("unexpected fetch result".into()))?;

        if !response.ok() {
            return Err(BundleError::Status {
                url: url.clone(),
                status: response.status(),
            });
        }

        let text = response
            .text()
            .map_err(|err| fetch_err(format!("{err:?}")))?;
        JsFuture::from(text)
            .await
            .map_err(|err| fetch_err(format!("{err:?}")))?
            .as_string()
            .ok_or_else(|| fetch_err("response body is not text".into()))
    }
}

#[cfg(target_arch = "wasm32")]
impl BundleSource for HttpSource {
    fn fetch(&self, lang: Language, page: PageName) -> LocalBoxFuture<'_, Result<Section, BundleError>> {
        let url = bundle_url(&crate::core::platform::current_path(), lang, page);
        async move {
            let raw = Self::get(url.clone()).await?;
            parse_section(&url, &raw)
        }
        .boxed_local()
    }
}
