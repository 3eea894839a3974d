//! The demo's complete interactive vocabulary.
//!
//! Every user-facing operation is a [`Command`]. The engine never cares
//! how a command was triggered; a key binding, a script, and a test all
//! look identical to [`execute`](super::TeaviewEngine::execute).

use serde::{Deserialize, Serialize};

/// A discrete operation the engine can perform.
///
/// All variants are parameterless so bindings serialize as plain strings
/// in TOML presets (`command = "light0_up"`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// Close the application.
    Quit,
    /// Reserved binding slot; consumes the frame's single command without
    /// acting.
    Noop,
    /// Restore cameras, rotation steps, lights, and the camera selector
    /// to their stock state.
    Reset,

    /// Orbit the main camera left around the world origin.
    CameraLeft,
    /// Orbit the main camera right around the world origin.
    CameraRight,
    /// Tilt the main camera up around its right axis.
    CameraUp,
    /// Tilt the main camera down around its origin-frame side axis.
    CameraDown,
    /// Dolly the main camera forward along its gaze.
    CameraForward,
    /// Dolly the main camera backward along its gaze.
    CameraBackward,
    /// Swing the main camera's look-at target left around the eye.
    CameraPanLeft,
    /// Swing the main camera's look-at target right around the eye.
    CameraPanRight,

    /// Orbit the first light up.
    Light0Up,
    /// Orbit the first light down.
    Light0Down,
    /// Orbit the first light left.
    Light0Left,
    /// Orbit the first light right.
    Light0Right,
    /// Roll the first light's tangent around its pivot direction.
    Light0Roll,
    /// Toggle the first light on or off.
    Light0Toggle,

    /// Orbit the second light up.
    Light1Up,
    /// Orbit the second light down.
    Light1Down,
    /// Orbit the second light left.
    Light1Left,
    /// Orbit the second light right.
    Light1Right,
    /// Roll the second light's tangent around its pivot direction.
    Light1Roll,
    /// Toggle the second light on or off.
    Light1Toggle,

    /// Draw the next frames through the first-person camera.
    SelectMainCamera,
    /// Draw the next frames through the overhead camera.
    SelectBirdsEyeCamera,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_serialize_as_snake_case_strings() {
        #[derive(Serialize, Deserialize)]
        struct Row {
            command: Command,
        }
        let row = Row {
            command: Command::Light0Up,
        };
        let toml_str = toml::to_string(&row).unwrap();
        assert_eq!(toml_str.trim(), r#"command = "light0_up""#);
        let back: Row = toml::from_str(&toml_str).unwrap();
        assert_eq!(back.command, Command::Light0Up);
    }
}
