//! Current location and redirects

use parking_lot::RwLock;

/// Access to the current view's location
pub trait Navigator: Send + Sync {
    /// Path of the current view, e.g. `/admin/rooms.html`
    fn current_path(&self) -> String;
    /// Replace the current view
    fn redirect(&self, location: &str);
}

/// Navigator that only records where it was sent
#[derive(Debug)]
pub struct MemoryNavigator {
    current: RwLock<String>,
    history: RwLock<Vec<String>>,
}

impl MemoryNavigator {
    /// Start at `path`
    pub fn new(path: &str) -> Self {
        Self {
            current: RwLock::new(path.to_string()),
            history: RwLock::new(Vec::new()),
        }
    }

    /// Every redirect so far, oldest first
    pub fn redirects(&self) -> Vec<String> {
        self.history.read().clone()
    }

    /// Most recent redirect
    pub fn last_redirect(&self) -> Option<String> {
        self.history.read().last().cloned()
    }
}

impl Default for MemoryNavigator {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Navigator for MemoryNavigator {
    fn current_path(&self) -> String {
        self.current.read().clone()
    }

    fn redirect(&self, location: &str) {
        *self.current.write() = location.to_string();
        self.history.write().push(location.to_string());
    }
}
