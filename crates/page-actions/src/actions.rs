// The two page operations: share-or-copy and reload-on-history-restore.
//
// Every failure is contained here. A dismissed share sheet and a failed
// clipboard write are logged and folded into the returned outcome; no
// error value ever reaches the caller.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::host::{HostPage, PageShownEvent, SharePayload};
use crate::logger::PageLogger;
use crate::options::PageActionsOptions;

/// How a [`share_or_copy_link`](PageActions::share_or_copy_link) call
/// ended. Informational only; no variant is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShareOutcome {
    /// The native share sheet was presented and resolved.
    Shared,
    /// The native share sheet was presented and the user dismissed it.
    ShareDismissed,
    /// The url was written to the clipboard and acknowledged.
    Copied,
    /// The manual-copy prompt was shown.
    PromptShown,
}

impl ShareOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Shared => "shared",
            Self::ShareDismissed => "share_dismissed",
            Self::Copied => "copied",
            Self::PromptShown => "prompt_shown",
        }
    }
}

/// Entry point for the page helpers.
///
/// Holds the host page (as a bundle of capabilities), the options, and
/// the logger. Cloning is cheap; clones share the same host.
#[derive(Debug, Clone)]
pub struct PageActions {
    host: Arc<dyn HostPage>,
    options: PageActionsOptions,
    logger: PageLogger,
}

impl PageActions {
    /// Create page helpers over `host` with default options.
    pub fn new(host: Arc<dyn HostPage>) -> Self {
        Self::with_options(host, PageActionsOptions::default())
    }

    /// Create page helpers over `host` with the given options.
    pub fn with_options(host: Arc<dyn HostPage>, options: PageActionsOptions) -> Self {
        let logger = PageLogger::new(options.logger.clone());
        Self {
            host,
            options,
            logger,
        }
    }

    /// Get the options these helpers were created with.
    pub fn options(&self) -> &PageActionsOptions {
        &self.options
    }

    /// Share `url` through the best mechanism the host offers.
    ///
    /// In order: the native share sheet, a clipboard copy acknowledged by
    /// a blocking dialog containing the url, and finally a blocking
    /// manual-copy prompt pre-filled with the url. A dismissed share
    /// sheet is terminal: it is logged and reported as
    /// [`ShareOutcome::ShareDismissed`] without touching the clipboard.
    pub async fn share_or_copy_link(&self, url: &str, title: &str) -> ShareOutcome {
        if let Some(sheet) = self.host.share_sheet() {
            let payload = SharePayload::new(url, title);
            return match sheet.present(&payload).await {
                Ok(()) => ShareOutcome::Shared,
                Err(err) => {
                    // No clipboard fallback after a dismissal.
                    self.logger.debug(&format!("share sheet dismissed: {err}"));
                    ShareOutcome::ShareDismissed
                }
            };
        }

        if let Some(clipboard) = self.host.clipboard() {
            match clipboard.write_text(url).await {
                Ok(()) => {
                    let notice = format!("{}\n\n{}", self.options.copied_notice, url);
                    self.host.dialogs().alert(&notice);
                    return ShareOutcome::Copied;
                }
                Err(err) => {
                    self.logger.warn(&format!("clipboard write failed: {err}"));
                }
            }
        }

        let _ = self
            .host
            .dialogs()
            .prompt(&self.options.manual_copy_prompt, url);
        ShareOutcome::PromptShown
    }

    /// Register a page-shown handler that reloads the page whenever the
    /// view was restored from the back/forward cache.
    ///
    /// Each call registers exactly one handler, which lives for the
    /// page's lifetime. The handler reloads when the event carries the
    /// restoration flag or, while the legacy fallback is enabled, when
    /// the legacy navigation type says back/forward.
    pub fn reload_on_history_restore(&self) {
        let navigation = self.host.navigation();
        let legacy_fallback = self.options.legacy_navigation_fallback;
        self.host
            .lifecycle()
            .on_page_shown(Box::new(move |event: &PageShownEvent| {
                if should_reload(event, legacy_fallback) {
                    navigation.reload();
                }
            }));
    }
}

/// Reload decision for a single page-shown occurrence.
fn should_reload(event: &PageShownEvent, legacy_fallback: bool) -> bool {
    if event.persisted {
        return true;
    }
    legacy_fallback
        && event
            .legacy_navigation
            .is_some_and(|navigation| navigation.is_back_forward())
}
