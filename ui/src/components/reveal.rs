use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::config::REVEAL_POLL_MS;
use crate::core::{platform, timing};

/// When a section counts as scrolled into view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealPolicy {
    /// Fraction of the viewport, measured from the bottom, that the element's
    /// top edge must clear.
    pub offset: f64,
}

impl Default for RevealPolicy {
    fn default() -> Self {
        Self { offset: 0.15 }
    }
}

impl RevealPolicy {
    pub fn should_reveal(&self, element_top: f64, viewport_height: f64) -> bool {
        element_top < viewport_height * (1.0 - self.offset.clamp(0.0, 1.0))
    }
}

/// Section whose entrance animation waits until it scrolls into view. Once
/// shown it stays shown.
#[component]
pub fn Reveal(#[props(default)] class: String, children: Element) -> Element {
    let mut visible = use_signal(|| false);
    let mut node = use_signal(|| Option::<Rc<MountedData>>::None);

    use_future(move || async move {
        let policy = RevealPolicy::default();
        loop {
            if visible() {
                break;
            }
            let Some(viewport) = platform::viewport_height().await else {
                visible.set(true);
                break;
            };
            if let Some(mounted) = node() {
                if let Ok(rect) = mounted.get_client_rect().await {
                    if policy.should_reveal(rect.origin.y, viewport) {
                        visible.set(true);
                        break;
                    }
                }
            }
            timing::sleep_ms(REVEAL_POLL_MS).await;
        }
    });

    let state = if visible() { "reveal reveal--visible" } else { "reveal" };

    rsx! {
        section {
            class: "{state} {class}",
            onmounted: move |evt| node.set(Some(evt.data())),
            {children}
        }
    }
}
