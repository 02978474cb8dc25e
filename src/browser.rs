//! Browser implementations of the core traits.
//!
//! Everything here degrades instead of failing: a missing window, a blocked
//! `localStorage` or an absent element turns into `None` or a logged error.

use folio_core::{
    ContactMessage, DocumentRoot, EmailJsConfig, EmailJsRequest, FolioError, FolioResult,
    KeyValueStore, MailRelay, Rect, SectionLayout, Viewport, EMAILJS_ENDPOINT,
};
use gloo::net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollToOptions, Storage};

fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

// ============================================================================
// Storage
// ============================================================================

/// `window.localStorage`, resolved on every call
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl BrowserStore {
    fn storage() -> FolioResult<Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(FolioError::StorageUnavailable)
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> FolioResult<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| FolioError::Storage(js_error(e)))
    }

    fn set(&self, key: &str, value: &str) -> FolioResult<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| FolioError::Storage(js_error(e)))
    }
}

// ============================================================================
// Document root
// ============================================================================

/// `<html>` element
#[derive(Clone, Copy, Debug, Default)]
pub struct HtmlRoot;

impl DocumentRoot for HtmlRoot {
    fn set_attribute(&self, name: &str, value: &str) {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            tracing::warn!(attribute = name, "No document element to update");
            return;
        };
        if let Err(e) = root.set_attribute(name, value) {
            tracing::warn!(
                attribute = name,
                error = %js_error(e),
                "Failed to set document attribute"
            );
        }
    }
}

// ============================================================================
// Layout
// ============================================================================

/// Live DOM geometry
#[derive(Clone, Copy, Debug, Default)]
pub struct DomLayout;

impl SectionLayout for DomLayout {
    fn bounds(&self, id: &str) -> Option<Rect> {
        let element = web_sys::window()?.document()?.get_element_by_id(id)?;
        let rect = element.get_bounding_client_rect();
        Some(Rect::new(rect.top(), rect.height()))
    }
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Current viewport, `None` when it cannot be measured
pub fn viewport() -> Option<Viewport> {
    let window = web_sys::window()?;
    let height = window.inner_height().ok()?.as_f64()?;
    let scroll_y = window.scroll_y().ok()?;
    Some(Viewport { height, scroll_y })
}

/// Fraction of the element with `id` currently inside the viewport
pub fn visible_fraction(id: &str) -> Option<f64> {
    let rect = DomLayout.bounds(id)?;
    let viewport = viewport()?;
    if rect.height <= 0.0 {
        return Some(0.0);
    }
    let visible = rect.bottom().min(viewport.height) - rect.top.max(0.0);
    Some((visible / rect.height).clamp(0.0, 1.0))
}

/// Smooth-scroll the window to `top`
pub fn scroll_to(top: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Blocking notification
pub fn notify(message: &str) {
    gloo::dialogs::alert(message);
}

// ============================================================================
// Mail relay
// ============================================================================

/// EmailJS REST relay
#[derive(Clone, Debug, PartialEq)]
pub struct EmailJsRelay {
    config: Option<EmailJsConfig>,
}

impl EmailJsRelay {
    pub fn new(config: Option<EmailJsConfig>) -> Self {
        Self { config }
    }
}

impl MailRelay for EmailJsRelay {
    async fn send(&self, message: &ContactMessage) -> FolioResult<()> {
        let config = self.config.as_ref().ok_or(FolioError::RelayNotConfigured)?;
        let body = EmailJsRequest::new(config, message);

        let response = Request::post(EMAILJS_ENDPOINT)
            .json(&body)
            .map_err(|e| FolioError::Relay(e.to_string()))?
            .send()
            .await
            .map_err(|e| FolioError::Relay(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(FolioError::RelayStatus(response.status()))
        }
    }
}
