// crates/batarong_core/src/input/map.rs
use std::collections::HashMap;

use batarong_shared::ActionId;
use winit::keyboard::KeyCode;

/// Physical key -> action. Several keys may map to the same action
/// (top-row and keypad digits both feed the bet input).
#[derive(Default)]
pub struct InputMap {
    key_bindings: HashMap<KeyCode, ActionId>,
}

impl InputMap {
    pub fn bind(&mut self, key: KeyCode, action: ActionId) {
        self.key_bindings.insert(key, action);
    }

    pub fn map_signal_to_intent(&self, key: KeyCode) -> Option<ActionId> {
        self.key_bindings.get(&key).copied()
    }
}
