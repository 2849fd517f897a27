// In-memory host page — records every capability interaction.
//
// The share sheet and clipboard are configured per instance: absent,
// succeeding, or failing. Dialogs, handler registrations, and reloads are
// always available and always recorded. Clones share the same records, so
// a test can keep a handle for inspection while handing a clone to
// `PageActions`.

use std::fmt;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use page_actions::error::{ClipboardError, ShareError};
use page_actions::host::{
    ClipboardWriter, Dialogs, HostPage, Navigation, PageLifecycle, PageShownEvent,
    PageShownHandler, SharePayload, ShareSheet,
};

/// Configured behavior of the in-memory share sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareBehavior {
    /// The share resolves successfully.
    Resolve,
    /// The user dismisses the share sheet.
    Dismiss,
}

/// Configured behavior of the in-memory clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardBehavior {
    /// The write resolves successfully.
    Succeed,
    /// The write is rejected.
    Fail,
}

/// Everything the host page has been asked to do.
#[derive(Debug, Default)]
struct Recorded {
    shares: Vec<SharePayload>,
    clipboard_writes: Vec<String>,
    alerts: Vec<String>,
    /// (message, default value) pairs.
    prompts: Vec<(String, String)>,
    reloads: usize,
}

#[derive(Default)]
struct Inner {
    recorded: Mutex<Recorded>,
    handlers: Mutex<Vec<PageShownHandler>>,
}

/// In-memory host page.
#[derive(Clone, Default)]
pub struct MemoryHostPage {
    share_behavior: Option<ShareBehavior>,
    clipboard_behavior: Option<ClipboardBehavior>,
    inner: Arc<Inner>,
}

impl fmt::Debug for MemoryHostPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryHostPage")
            .field("share_behavior", &self.share_behavior)
            .field("clipboard_behavior", &self.clipboard_behavior)
            .finish()
    }
}

impl MemoryHostPage {
    /// Create a host page with no share sheet and no clipboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expose a share sheet with the given behavior.
    pub fn with_share_sheet(mut self, behavior: ShareBehavior) -> Self {
        self.share_behavior = Some(behavior);
        self
    }

    /// Expose a clipboard with the given behavior.
    pub fn with_clipboard(mut self, behavior: ClipboardBehavior) -> Self {
        self.clipboard_behavior = Some(behavior);
        self
    }

    /// Fire the page "shown" event to every registered handler.
    pub fn emit_page_shown(&self, event: PageShownEvent) {
        let handlers = self.inner.handlers.lock().unwrap();
        for handler in handlers.iter() {
            handler(&event);
        }
    }

    /// Payloads successfully presented through the share sheet.
    pub fn shares(&self) -> Vec<SharePayload> {
        self.inner.recorded.lock().unwrap().shares.clone()
    }

    /// Text successfully written to the clipboard.
    pub fn clipboard_writes(&self) -> Vec<String> {
        self.inner.recorded.lock().unwrap().clipboard_writes.clone()
    }

    /// Messages shown through the blocking acknowledgement dialog.
    pub fn alerts(&self) -> Vec<String> {
        self.inner.recorded.lock().unwrap().alerts.clone()
    }

    /// (message, default value) pairs shown through the blocking prompt.
    pub fn prompts(&self) -> Vec<(String, String)> {
        self.inner.recorded.lock().unwrap().prompts.clone()
    }

    /// Number of forced reloads.
    pub fn reload_count(&self) -> usize {
        self.inner.recorded.lock().unwrap().reloads
    }

    /// Number of registered page-shown handlers.
    pub fn handler_count(&self) -> usize {
        self.inner.handlers.lock().unwrap().len()
    }

    /// Clear all recorded interactions (handlers stay registered).
    pub fn clear(&self) {
        *self.inner.recorded.lock().unwrap() = Recorded::default();
    }
}

#[async_trait(?Send)]
impl ShareSheet for MemoryHostPage {
    async fn present(&self, payload: &SharePayload) -> Result<(), ShareError> {
        match self.share_behavior {
            Some(ShareBehavior::Resolve) => {
                self.inner
                    .recorded
                    .lock()
                    .unwrap()
                    .shares
                    .push(payload.clone());
                Ok(())
            }
            Some(ShareBehavior::Dismiss) => Err(ShareError::Dismissed("share cancelled".into())),
            None => Err(ShareError::Failed("share sheet not available".into())),
        }
    }
}

#[async_trait(?Send)]
impl ClipboardWriter for MemoryHostPage {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        match self.clipboard_behavior {
            Some(ClipboardBehavior::Succeed) => {
                self.inner
                    .recorded
                    .lock()
                    .unwrap()
                    .clipboard_writes
                    .push(text.to_string());
                Ok(())
            }
            Some(ClipboardBehavior::Fail) => {
                Err(ClipboardError::WriteFailed("write rejected".into()))
            }
            None => Err(ClipboardError::AccessDenied("clipboard not available".into())),
        }
    }
}

impl Dialogs for MemoryHostPage {
    fn alert(&self, message: &str) {
        self.inner
            .recorded
            .lock()
            .unwrap()
            .alerts
            .push(message.to_string());
    }

    fn prompt(&self, message: &str, default_value: &str) -> Option<String> {
        self.inner
            .recorded
            .lock()
            .unwrap()
            .prompts
            .push((message.to_string(), default_value.to_string()));
        // The "user" accepts the pre-filled value.
        Some(default_value.to_string())
    }
}

impl PageLifecycle for MemoryHostPage {
    fn on_page_shown(&self, handler: PageShownHandler) {
        self.inner.handlers.lock().unwrap().push(handler);
    }
}

impl Navigation for MemoryHostPage {
    fn reload(&self) {
        self.inner.recorded.lock().unwrap().reloads += 1;
    }
}

impl HostPage for MemoryHostPage {
    fn share_sheet(&self) -> Option<Arc<dyn ShareSheet>> {
        self.share_behavior
            .map(|_| Arc::new(self.clone()) as Arc<dyn ShareSheet>)
    }

    fn clipboard(&self) -> Option<Arc<dyn ClipboardWriter>> {
        self.clipboard_behavior
            .map(|_| Arc::new(self.clone()) as Arc<dyn ClipboardWriter>)
    }

    fn dialogs(&self) -> Arc<dyn Dialogs> {
        Arc::new(self.clone())
    }

    fn lifecycle(&self) -> Arc<dyn PageLifecycle> {
        Arc::new(self.clone())
    }

    fn navigation(&self) -> Arc<dyn Navigation> {
        Arc::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capabilities_reflect_configuration() {
        let host = MemoryHostPage::new();
        assert!(host.share_sheet().is_none());
        assert!(host.clipboard().is_none());

        let host = MemoryHostPage::new()
            .with_share_sheet(ShareBehavior::Resolve)
            .with_clipboard(ClipboardBehavior::Succeed);
        assert!(host.share_sheet().is_some());
        assert!(host.clipboard().is_some());
    }

    #[test]
    fn clones_share_records() {
        let host = MemoryHostPage::new();
        let clone = host.clone();
        clone.alert("hello");
        assert_eq!(host.alerts(), vec!["hello".to_string()]);
    }

    #[tokio::test]
    async fn dismissing_share_records_nothing() {
        let host = MemoryHostPage::new().with_share_sheet(ShareBehavior::Dismiss);
        let payload = SharePayload::new("https://example.com", "Example");
        let err = host.present(&payload).await.unwrap_err();
        assert!(err.is_dismissed());
        assert!(host.shares().is_empty());
    }

    #[tokio::test]
    async fn failing_clipboard_records_nothing() {
        let host = MemoryHostPage::new().with_clipboard(ClipboardBehavior::Fail);
        assert!(host.write_text("text").await.is_err());
        assert!(host.clipboard_writes().is_empty());
    }

    #[test]
    fn prompt_returns_default_value() {
        let host = MemoryHostPage::new();
        let entered = host.prompt("Copy this link:", "https://example.com");
        assert_eq!(entered, Some("https://example.com".to_string()));
    }

    #[test]
    fn clear_keeps_handlers() {
        let host = MemoryHostPage::new();
        host.on_page_shown(Box::new(|_| {}));
        host.alert("notice");
        host.clear();
        assert!(host.alerts().is_empty());
        assert_eq!(host.handler_count(), 1);
    }
}
