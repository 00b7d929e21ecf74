//! Browser seams
//!
//! The client and the permission guard never touch a real page. They talk to
//! these traits instead, so the same logic runs in a webview shell, a CLI, or
//! a test.

mod document;
mod navigator;
mod notifier;

pub use document::{Document, MemoryDocument};
pub use navigator::{MemoryNavigator, Navigator};
pub use notifier::{MemoryNotifier, Notifier, TracingNotifier};
