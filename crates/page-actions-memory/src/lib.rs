// page-actions-memory — In-memory host page for page-actions.
//
// Records every capability interaction (shares, clipboard writes, dialogs,
// handler registrations, reloads) for inspection. Share sheet and clipboard
// availability and behavior are configured per instance.
// Ideal for testing, prototyping, and non-browser embeddings.

pub mod host;

pub use host::{ClipboardBehavior, MemoryHostPage, ShareBehavior};
