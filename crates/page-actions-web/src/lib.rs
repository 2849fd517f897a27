//! Browser host page for `page-actions`, backed by `web-sys`.
//!
//! The real implementation only exists on `wasm32`; on native targets this
//! crate compiles to an empty stub so the workspace builds everywhere.

#[cfg(target_arch = "wasm32")]
mod host;

#[cfg(target_arch = "wasm32")]
pub use host::{page_actions, WebHostPage};
