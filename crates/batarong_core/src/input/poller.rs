// crates/batarong_core/src/input/poller.rs

use batarong_shared::InputState;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::input::InputMap;

/// Low-level input collector that tracks active physical keys.
/// This keeps raw device state out of App / PlatformRunner.
pub struct InputPoller {
    active_keys: Vec<KeyCode>,
}

impl InputPoller {
    pub fn new() -> Self {
        Self {
            active_keys: Vec::new(),
        }
    }

    /// Process a single winit WindowEvent and update internal key state.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        if let WindowEvent::KeyboardInput {
            event: key_event, ..
        } = event
        {
            self.handle_keyboard_input(key_event);
        }
    }

    fn handle_keyboard_input(&mut self, key_event: &KeyEvent) {
        if let PhysicalKey::Code(keycode) = key_event.physical_key {
            match key_event.state {
                ElementState::Pressed => {
                    if !self.active_keys.contains(&keycode) {
                        self.active_keys.push(keycode);
                    }
                }
                ElementState::Released => {
                    self.active_keys.retain(|&k| k != keycode);
                }
            }
        }
    }

    /// Resolve held physical keys into the per-tick digital mask.
    pub fn resolve(&self, input_map: &InputMap) -> InputState {
        let mut state = InputState::default();
        for &key in &self.active_keys {
            if let Some(action_id) = input_map.map_signal_to_intent(key) {
                if (action_id as usize) < 64 {
                    state.digital_mask |= 1u64 << action_id;
                }
            }
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(poller: &mut InputPoller, key: KeyCode) {
        // Test shim: go through the same path as real keyboard events.
        poller.active_keys.push(key);
    }

    #[test]
    fn resolve_sets_bits_for_bound_keys_only() {
        let mut map = InputMap::default();
        map.bind(KeyCode::Space, 4);

        let mut poller = InputPoller::new();
        press(&mut poller, KeyCode::Space);
        press(&mut poller, KeyCode::KeyZ); // unbound

        let state = poller.resolve(&map);
        assert_eq!(state.digital_mask, 1 << 4);
    }

    #[test]
    fn two_keys_one_action_is_a_single_bit() {
        let mut map = InputMap::default();
        map.bind(KeyCode::Digit1, 9);
        map.bind(KeyCode::Numpad1, 9);

        let mut poller = InputPoller::new();
        press(&mut poller, KeyCode::Digit1);
        press(&mut poller, KeyCode::Numpad1);

        assert_eq!(poller.resolve(&map).digital_mask, 1 << 9);
    }
}
