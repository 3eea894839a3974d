//! Input handling: the held-key set and the ordered key-binding list.
//!
//! The platform shell (winit under the `viewer` feature, or whatever the
//! embedder has) feeds key press/release transitions into a [`KeySet`];
//! the engine reads it once per frame through [`KeyBindings`]. The core
//! owns no key-repeat or debouncing logic beyond "held this frame".

/// Ordered key-to-command priority list.
pub mod bindings;

pub use bindings::{Binding, KeyBindings};

use std::collections::HashSet;

/// The set of keys currently held, updated by the platform shell.
///
/// Keys are identified by winit `KeyCode` debug strings (`"KeyW"`,
/// `"ArrowLeft"`, `"Semicolon"`) so the core carries no winit dependency.
#[derive(Debug, Clone, Default)]
pub struct KeySet {
    held: HashSet<String>,
}

impl KeySet {
    /// Empty set; nothing held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a key as held.
    pub fn press(&mut self, key: &str) {
        let _ = self.held.insert(key.to_owned());
    }

    /// Mark a key as released.
    pub fn release(&mut self, key: &str) {
        let _ = self.held.remove(key);
    }

    /// Whether the key is currently held.
    #[must_use]
    pub fn is_held(&self, key: &str) -> bool {
        self.held.contains(key)
    }

    /// Drop every held key. Called when the window loses focus so keys
    /// cannot stick.
    pub fn clear(&mut self) {
        self.held.clear();
    }
}
