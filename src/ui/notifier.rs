//! Blocking user-facing notices

use parking_lot::RwLock;
use tracing::warn;

/// Shows a notice the operator has to acknowledge
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Writes notices to the log; used by the CLI
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        warn!("{}", message);
    }
}

/// Keeps every notice for later inspection
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    messages: RwLock<Vec<String>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notices shown so far
    pub fn messages(&self) -> Vec<String> {
        self.messages.read().clone()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, message: &str) {
        self.messages.write().push(message.to_string());
    }
}
