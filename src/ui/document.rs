//! Element lookup and visibility

use parking_lot::RwLock;
use std::collections::HashMap;

/// The page whose elements the permission guard shows and hides
pub trait Document: Send + Sync {
    /// Whether an element with this id exists
    fn has_element(&self, id: &str) -> bool;
    /// Show or hide an element; absent ids are ignored
    fn set_visible(&self, id: &str, visible: bool);
}

/// Element ids mapped to their visibility
#[derive(Debug, Default)]
pub struct MemoryDocument {
    elements: RwLock<HashMap<String, bool>>,
}

impl MemoryDocument {
    /// Document holding the given elements, all visible
    pub fn with_elements<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            elements: RwLock::new(ids.into_iter().map(|id| (id.to_string(), true)).collect()),
        }
    }

    /// Add a visible element
    pub fn insert(&self, id: &str) {
        self.elements.write().insert(id.to_string(), true);
    }

    /// `None` when the element does not exist
    pub fn is_visible(&self, id: &str) -> Option<bool> {
        self.elements.read().get(id).copied()
    }
}

impl Document for MemoryDocument {
    fn has_element(&self, id: &str) -> bool {
        self.elements.read().contains_key(id)
    }

    fn set_visible(&self, id: &str, visible: bool) {
        if let Some(state) = self.elements.write().get_mut(id) {
            *state = visible;
        }
    }
}
