// Configuration for the page helpers.

use crate::logger::LoggerConfig;

/// Configuration for [`PageActions`](crate::PageActions).
#[derive(Debug, Clone)]
pub struct PageActionsOptions {
    /// Text of the blocking acknowledgement shown after a successful
    /// clipboard copy. The copied url is appended on its own line.
    pub copied_notice: String,

    /// Text of the manual-copy prompt shown when the clipboard path is
    /// unavailable or fails.
    pub manual_copy_prompt: String,

    /// Keep the legacy navigation-type check as an OR alongside the
    /// restoration flag. Hosts whose "shown" event always carries the
    /// flag can switch this off.
    pub legacy_navigation_fallback: bool,

    /// Logger configuration.
    pub logger: LoggerConfig,
}

impl Default for PageActionsOptions {
    fn default() -> Self {
        Self {
            copied_notice: "Link copied to clipboard!".to_string(),
            manual_copy_prompt: "Copy this link:".to_string(),
            legacy_navigation_fallback: true,
            logger: LoggerConfig::default(),
        }
    }
}
