//! Host queries that differ between the browser and native shells.

use unic_langid::LanguageIdentifier;

/// Locales requested by the host (browser `navigator.languages`, or the OS
/// locale list on desktop), most preferred first.
pub fn requested_locales() -> Vec<LanguageIdentifier> {
    #[cfg(target_arch = "wasm32")]
    {
        i18n_embed::WebLanguageRequester::requested_languages()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        i18n_embed::DesktopLanguageRequester::requested_languages()
    }
}

/// Path component of the current page URL. Native shells have no URL and
/// report the site root.
pub fn current_path() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        "/".to_string()
    }
}

/// Visible viewport height in CSS pixels, when a viewport exists.
///
/// The browser is asked directly; native shells ask their webview through
/// `document::eval`, which fails outside a running Dioxus document.
pub async fn viewport_height() -> Option<f64> {
    #[cfg(target_arch = "wasm32")]
    let height = web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64());

    #[cfg(not(target_arch = "wasm32"))]
    let height = dioxus::prelude::document::eval("return window.innerHeight;")
        .join::<f64>()
        .await
        .ok();

    height.and_then(usable_height)
}

/// A collapsed or hidden viewport (zero, negative, NaN) counts as none.
fn usable_height(height: f64) -> Option<f64> {
    (height.is_finite() && height > 0.0).then_some(height)
}
