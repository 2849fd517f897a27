// Host page abstraction — capability traits for the browser surface.
//
// Optional capabilities (share sheet, clipboard) are surfaced as
// `Option<Arc<dyn ...>>`; absence is the "feature not detected" case.
// The browser page is single threaded and its values are not `Send`, so
// the async traits opt out of the `Send` bound and trait objects carry
// no `Send + Sync` requirement.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{ClipboardError, ShareError};

/// What gets handed to the native share capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharePayload {
    /// Display-only title shown in the share sheet.
    pub title: String,
    /// The link being shared, passed through unmodified.
    pub url: String,
}

impl SharePayload {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// The legacy navigation-type signal, decoded from the numeric code older
/// performance APIs expose (0 = navigate, 1 = reload, 2 = back/forward,
/// 255 = reserved).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegacyNavigationType {
    Navigate,
    Reload,
    BackForward,
    Reserved,
}

impl LegacyNavigationType {
    /// Decode the raw numeric code. Unknown codes map to `None`.
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            0 => Some(Self::Navigate),
            1 => Some(Self::Reload),
            2 => Some(Self::BackForward),
            255 => Some(Self::Reserved),
            _ => None,
        }
    }

    /// Returns `true` for the back/forward navigation type.
    pub fn is_back_forward(&self) -> bool {
        matches!(self, Self::BackForward)
    }
}

/// The page "shown" lifecycle event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageShownEvent {
    /// Restoration flag: the view was served from the in-memory
    /// back/forward cache rather than freshly loaded.
    pub persisted: bool,
    /// Legacy navigation-type signal, when the host still exposes one.
    pub legacy_navigation: Option<LegacyNavigationType>,
}

impl PageShownEvent {
    /// A freshly loaded page.
    pub fn fresh() -> Self {
        Self {
            persisted: false,
            legacy_navigation: None,
        }
    }

    /// A page restored from the back/forward cache.
    pub fn restored() -> Self {
        Self {
            persisted: true,
            legacy_navigation: None,
        }
    }

    /// Attach the legacy navigation-type signal.
    pub fn with_legacy(mut self, navigation: LegacyNavigationType) -> Self {
        self.legacy_navigation = Some(navigation);
        self
    }
}

/// Handler invoked on every page "shown" occurrence.
pub type PageShownHandler = Box<dyn Fn(&PageShownEvent)>;

/// Native share capability, presenting a system-level share menu.
#[async_trait(?Send)]
pub trait ShareSheet: fmt::Debug {
    /// Present the share sheet for `payload` and await the outcome.
    /// A user dismissal resolves to [`ShareError::Dismissed`].
    async fn present(&self, payload: &SharePayload) -> Result<(), ShareError>;
}

/// Asynchronous clipboard write capability.
#[async_trait(?Send)]
pub trait ClipboardWriter: fmt::Debug {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Blocking modal primitives provided by the host.
pub trait Dialogs: fmt::Debug {
    /// Blocking acknowledgement dialog.
    fn alert(&self, message: &str);

    /// Blocking text-input prompt pre-filled with `default_value`.
    /// Returns the entered text, or `None` if the user cancelled.
    fn prompt(&self, message: &str, default_value: &str) -> Option<String>;
}

/// Page lifecycle event source.
pub trait PageLifecycle: fmt::Debug {
    /// Register `handler` for the page "shown" event. Registrations live
    /// for the page's lifetime; there is no teardown.
    fn on_page_shown(&self, handler: PageShownHandler);
}

/// Page navigation handle.
pub trait Navigation: fmt::Debug {
    /// Force a reload from the origin, discarding cached content.
    fn reload(&self);
}

/// The hosting page, as a bundle of capabilities.
///
/// The two optional accessors are the feature-detection seam: a host that
/// lacks a native share sheet or clipboard simply returns `None` and the
/// operations in [`actions`](crate::actions) fall through to the next
/// mechanism.
pub trait HostPage: fmt::Debug {
    /// Native share capability, when the host exposes one.
    fn share_sheet(&self) -> Option<Arc<dyn ShareSheet>>;

    /// Clipboard write capability, when the host exposes one.
    fn clipboard(&self) -> Option<Arc<dyn ClipboardWriter>>;

    fn dialogs(&self) -> Arc<dyn Dialogs>;

    fn lifecycle(&self) -> Arc<dyn PageLifecycle>;

    fn navigation(&self) -> Arc<dyn Navigation>;
}
