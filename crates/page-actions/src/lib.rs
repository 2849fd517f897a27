#![doc = include_str!("../README.md")]

pub mod actions;
pub mod error;
pub mod host;
pub mod logger;
pub mod options;

// Re-exports for convenience
pub use actions::{PageActions, ShareOutcome};
pub use error::{ClipboardError, ShareError};
pub use host::{HostPage, LegacyNavigationType, PageShownEvent, SharePayload};
pub use logger::{LogHandler, LogLevel, LoggerConfig, PageLogger};
pub use options::PageActionsOptions;
