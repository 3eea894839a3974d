//! Ordered key-to-command priority list.

use serde::{Deserialize, Serialize};

use super::KeySet;
use crate::engine::command::Command;

/// One key-to-command binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    /// Physical key in winit `KeyCode` debug format (`"KeyW"`,
    /// `"ArrowLeft"`).
    pub key: String,
    /// Command fired while the key is held.
    pub command: Command,
}

/// Ordered key-command priority list.
///
/// Exactly one command fires per frame: the first binding in list order
/// whose key is currently held. Bindings further down are ignored that
/// frame even if their keys are also down, so simultaneous presses never
/// stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyBindings {
    bindings: Vec<Binding>,
}

impl Default for KeyBindings {
    /// The stock layout, in its original precedence order.
    fn default() -> Self {
        // TODO: KeyS/KeyD and KeyH/KeyJ duplicate the up/left bindings of
        // KeyW/KeyA and KeyY/KeyG instead of mapping to down/right. The
        // shipped demo behaves this way; flip them once the intended
        // layout is confirmed.
        let table: &[(&str, Command)] = &[
            ("KeyQ", Command::Quit),
            // Equal and Minus are reserved slots; while held they still
            // consume the frame's one command.
            ("Equal", Command::Noop),
            ("Minus", Command::Noop),
            ("KeyR", Command::Reset),
            // Arrow keys are intentionally crossed: pressing left orbits
            // the camera right, pressing up tilts it down.
            ("ArrowLeft", Command::CameraRight),
            ("ArrowRight", Command::CameraLeft),
            ("ArrowUp", Command::CameraDown),
            ("ArrowDown", Command::CameraUp),
            ("KeyW", Command::Light0Up),
            ("KeyS", Command::Light0Up),
            ("KeyA", Command::Light0Left),
            ("KeyD", Command::Light0Left),
            ("KeyX", Command::Light0Roll),
            ("KeyY", Command::Light1Up),
            ("KeyH", Command::Light1Up),
            ("KeyG", Command::Light1Left),
            ("KeyJ", Command::Light1Left),
            ("KeyN", Command::Light1Roll),
            ("KeyO", Command::CameraForward),
            ("KeyL", Command::CameraBackward),
            ("KeyK", Command::CameraPanLeft),
            ("Semicolon", Command::CameraPanRight),
            ("Digit1", Command::Light0Toggle),
            ("Digit2", Command::Light1Toggle),
            ("KeyP", Command::SelectMainCamera),
            ("KeyB", Command::SelectBirdsEyeCamera),
        ];
        Self {
            bindings: table
                .iter()
                .map(|(key, command)| Binding {
                    key: (*key).to_owned(),
                    command: *command,
                })
                .collect(),
        }
    }
}

impl KeyBindings {
    /// First bound command whose key is held, in priority order.
    #[must_use]
    pub fn first_match(&self, keys: &KeySet) -> Option<Command> {
        self.bindings
            .iter()
            .find(|b| keys.is_held(&b.key))
            .map(|b| b.command)
    }

    /// The bindings in priority order.
    #[must_use]
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// Append a binding at the lowest priority.
    pub fn bind(&mut self, key: impl Into<String>, command: Command) {
        self.bindings.push(Binding {
            key: key.into(),
            command,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_held_binding_wins() {
        let bindings = KeyBindings::default();
        let mut keys = KeySet::new();
        keys.press("KeyW");
        keys.press("KeyQ");
        // Quit outranks the light rotation.
        assert_eq!(bindings.first_match(&keys), Some(Command::Quit));
    }

    #[test]
    fn at_most_one_command_per_frame() {
        let bindings = KeyBindings::default();
        let mut keys = KeySet::new();
        keys.press("KeyO");
        keys.press("KeyL");
        // Forward and backward are both held; only forward fires.
        assert_eq!(bindings.first_match(&keys), Some(Command::CameraForward));
    }

    #[test]
    fn reserved_keys_consume_the_slot() {
        let bindings = KeyBindings::default();
        let mut keys = KeySet::new();
        keys.press("Equal");
        keys.press("KeyW");
        assert_eq!(bindings.first_match(&keys), Some(Command::Noop));
    }

    #[test]
    fn nothing_held_means_no_command() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.first_match(&KeySet::new()), None);
    }

    #[test]
    fn duplicate_legacy_bindings_are_preserved() {
        let bindings = KeyBindings::default();
        let lookup = |key: &str| {
            let mut keys = KeySet::new();
            keys.press(key);
            bindings.first_match(&keys)
        };
        assert_eq!(lookup("KeyW"), lookup("KeyS"));
        assert_eq!(lookup("KeyA"), lookup("KeyD"));
        assert_eq!(lookup("KeyY"), lookup("KeyH"));
        assert_eq!(lookup("KeyG"), lookup("KeyJ"));
    }

    #[test]
    fn bind_appends_at_lowest_priority() {
        let mut bindings = KeyBindings::default();
        bindings.bind("KeyZ", Command::CameraForward);
        let mut keys = KeySet::new();
        keys.press("KeyZ");
        keys.press("KeyQ");
        assert_eq!(bindings.first_match(&keys), Some(Command::Quit));
        keys.release("KeyQ");
        assert_eq!(bindings.first_match(&keys), Some(Command::CameraForward));
    }
}
