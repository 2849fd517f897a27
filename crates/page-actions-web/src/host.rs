// web-sys implementation of the host capability traits.
//
// Feature detection happens in the `HostPage` accessors: `navigator.share`
// and `navigator.clipboard` are probed with `Reflect::has`, so a browser
// that lacks either simply reports the capability as absent. The page-shown
// listener is registered once and never torn down; the page's lifetime
// bounds it.

use std::sync::Arc;

use async_trait::async_trait;
use js_sys::Reflect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{PageTransitionEvent, ShareData};

use page_actions::error::{ClipboardError, ShareError};
use page_actions::host::{
    ClipboardWriter, Dialogs, HostPage, LegacyNavigationType, Navigation, PageLifecycle,
    PageShownEvent, PageShownHandler, SharePayload, ShareSheet,
};
use page_actions::{PageActions, PageActionsOptions};

/// The real browser page.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebHostPage;

impl WebHostPage {
    pub fn new() -> Self {
        Self
    }
}

/// Build a [`PageActions`] wired to the real browser page.
pub fn page_actions(options: PageActionsOptions) -> PageActions {
    PageActions::with_options(Arc::new(WebHostPage::new()), options)
}

fn window() -> Option<web_sys::Window> {
    web_sys::window()
}

/// Render a rejected promise value as a message string.
fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn navigator_has(property: &str) -> bool {
    let Some(window) = window() else { return false };
    let navigator = window.navigator();
    Reflect::has(navigator.as_ref(), &JsValue::from_str(property)).unwrap_or(false)
}

#[derive(Debug)]
struct WebShareSheet;

#[async_trait(?Send)]
impl ShareSheet for WebShareSheet {
    async fn present(&self, payload: &SharePayload) -> Result<(), ShareError> {
        let window = window().ok_or_else(|| ShareError::Failed("no window".into()))?;
        let data = ShareData::new();
        data.set_title(&payload.title);
        data.set_url(&payload.url);
        JsFuture::from(window.navigator().share_with_data(&data))
            .await
            .map(|_| ())
            .map_err(|err| ShareError::Dismissed(js_error(err)))
    }
}

#[derive(Debug)]
struct WebClipboard;

#[async_trait(?Send)]
impl ClipboardWriter for WebClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let window = window().ok_or_else(|| ClipboardError::AccessDenied("no window".into()))?;
        let clipboard = window.navigator().clipboard();
        JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|err| ClipboardError::WriteFailed(js_error(err)))
    }
}

#[derive(Debug)]
struct WebDialogs;

impl Dialogs for WebDialogs {
    fn alert(&self, message: &str) {
        if let Some(window) = window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn prompt(&self, message: &str, default_value: &str) -> Option<String> {
        let window = window()?;
        window
            .prompt_with_message_and_default(message, default_value)
            .ok()
            .flatten()
    }
}

#[derive(Debug)]
struct WebPageLifecycle;

impl PageLifecycle for WebPageLifecycle {
    fn on_page_shown(&self, handler: PageShownHandler) {
        let Some(window) = window() else { return };
        let closure =
            Closure::<dyn FnMut(PageTransitionEvent)>::new(move |event: PageTransitionEvent| {
                let shown = PageShownEvent {
                    persisted: event.persisted(),
                    legacy_navigation: legacy_navigation_type(),
                };
                handler(&shown);
            });
        if window
            .add_event_listener_with_callback("pageshow", closure.as_ref().unchecked_ref())
            .is_ok()
        {
            // The listener lives for the page's lifetime.
            closure.forget();
        }
    }
}

/// Probe the legacy `performance.navigation.type` signal, when present.
fn legacy_navigation_type() -> Option<LegacyNavigationType> {
    let performance = window()?.performance()?;
    LegacyNavigationType::from_code(performance.navigation().type_())
}

#[derive(Debug)]
struct WebNavigation;

impl Navigation for WebNavigation {
    fn reload(&self) {
        let Some(window) = window() else { return };
        if let Err(err) = window.location().reload() {
            web_sys::console::warn_1(&err);
        }
    }
}

impl HostPage for WebHostPage {
    fn share_sheet(&self) -> Option<Arc<dyn ShareSheet>> {
        navigator_has("share").then(|| Arc::new(WebShareSheet) as Arc<dyn ShareSheet>)
    }

    fn clipboard(&self) -> Option<Arc<dyn ClipboardWriter>> {
        navigator_has("clipboard").then(|| Arc::new(WebClipboard) as Arc<dyn ClipboardWriter>)
    }

    fn dialogs(&self) -> Arc<dyn Dialogs> {
        Arc::new(WebDialogs)
    }

    fn lifecycle(&self) -> Arc<dyn PageLifecycle> {
        Arc::new(WebPageLifecycle)
    }

    fn navigation(&self) -> Arc<dyn Navigation> {
        Arc::new(WebNavigation)
    }
}
