// crates/batarong_core/src/input/defaults.rs

use batarong_shared::input_types::actions;
use winit::keyboard::KeyCode;

use crate::input::{ActionRegistry, InputMap};

/// Centralized defaults for input configuration.
/// This keeps App::new small and makes it easy to tweak or mod.
pub struct InputDefaults;

impl InputDefaults {
    /// Registers every gameplay action and its default key bindings.
    pub fn setup(registry: &mut ActionRegistry, input_map: &mut InputMap) {
        let move_left = registry.register(actions::MOVE_LEFT);
        let move_right = registry.register(actions::MOVE_RIGHT);
        let jump = registry.register(actions::JUMP);
        let sprint = registry.register(actions::SPRINT);
        let shoot = registry.register(actions::SHOOT);
        let interact = registry.register(actions::INTERACT);
        let back = registry.register(actions::BACK);
        let pause = registry.register(actions::PAUSE);
        let restart = registry.register(actions::RESTART);
        let talk = registry.register(actions::TALK);
        let bet_backspace = registry.register(actions::BET_BACKSPACE);

        input_map.bind(KeyCode::ArrowLeft, move_left);
        input_map.bind(KeyCode::ArrowRight, move_right);
        input_map.bind(KeyCode::ArrowUp, jump);
        input_map.bind(KeyCode::ShiftLeft, sprint);
        input_map.bind(KeyCode::Space, shoot);
        input_map.bind(KeyCode::KeyA, interact);
        input_map.bind(KeyCode::KeyB, back);
        input_map.bind(KeyCode::Escape, pause);
        input_map.bind(KeyCode::KeyR, restart);
        input_map.bind(KeyCode::KeyE, talk);
        input_map.bind(KeyCode::Backspace, bet_backspace);

        // Digits feed both the bet input and the shop item hotkeys.
        const TOP_ROW: [KeyCode; 10] = [
            KeyCode::Digit0,
            KeyCode::Digit1,
            KeyCode::Digit2,
            KeyCode::Digit3,
            KeyCode::Digit4,
            KeyCode::Digit5,
            KeyCode::Digit6,
            KeyCode::Digit7,
            KeyCode::Digit8,
            KeyCode::Digit9,
        ];
        const KEYPAD: [KeyCode; 10] = [
            KeyCode::Numpad0,
            KeyCode::Numpad1,
            KeyCode::Numpad2,
            KeyCode::Numpad3,
            KeyCode::Numpad4,
            KeyCode::Numpad5,
            KeyCode::Numpad6,
            KeyCode::Numpad7,
            KeyCode::Numpad8,
            KeyCode::Numpad9,
        ];
        for digit in 0..10 {
            let id = registry.register(actions::DIGITS[digit]);
            input_map.bind(TOP_ROW[digit], id);
            input_map.bind(KEYPAD[digit], id);
        }
    }
}
