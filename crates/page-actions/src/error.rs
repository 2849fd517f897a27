// Error types for the share fallback chain.
//
// Only two failure kinds exist in this domain: the user dismissing the
// native share sheet, and a failed clipboard write. Both are contained by
// the operations in `actions`; neither ever reaches a caller as an `Err`.

/// Errors surfaced by a [`ShareSheet`](crate::host::ShareSheet) capability.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ShareError {
    /// The user dismissed the share sheet, or the host rejected the share.
    #[error("share dismissed: {0}")]
    Dismissed(String),

    /// The share capability failed before anything was presented.
    #[error("share failed: {0}")]
    Failed(String),
}

impl ShareError {
    /// Returns `true` if the user dismissed the share sheet.
    pub fn is_dismissed(&self) -> bool {
        matches!(self, Self::Dismissed(_))
    }
}

/// Errors surfaced by a [`ClipboardWriter`](crate::host::ClipboardWriter)
/// capability.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ClipboardError {
    /// The asynchronous clipboard write was rejected by the host.
    #[error("clipboard write failed: {0}")]
    WriteFailed(String),

    /// The host denied access to the clipboard entirely.
    #[error("clipboard access denied: {0}")]
    AccessDenied(String),
}
