// crates/batarong_shared/src/input_types.rs
//! Compact input types shared between the host and the game.

/// Stable integer ID for actions.
pub type ActionId = u32;
pub const ACTION_NOT_FOUND: ActionId = u32::MAX;

/// Game-facing action names. The host registers these in order so the
/// numeric ids stay dense and below 64 (they index a u64 bitmask).
pub mod actions {
    pub const MOVE_LEFT: &str = "MoveLeft";
    pub const MOVE_RIGHT: &str = "MoveRight";
    pub const JUMP: &str = "Jump";
    pub const SPRINT: &str = "Sprint";
    pub const SHOOT: &str = "Shoot";
    pub const INTERACT: &str = "Interact";
    pub const BACK: &str = "Back";
    pub const PAUSE: &str = "Pause";
    pub const RESTART: &str = "Restart";
    pub const TALK: &str = "Talk";
    pub const BET_BACKSPACE: &str = "BetBackspace";

    /// Names for the ten digit actions, indexed by digit value.
    pub const DIGITS: [&str; 10] = [
        "Digit0", "Digit1", "Digit2", "Digit3", "Digit4", "Digit5", "Digit6", "Digit7", "Digit8",
        "Digit9",
    ];
}

/// Resolved per-tick input: a bitmask of up to 64 digital actions.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub digital_mask: u64,
}

impl InputState {
    /// Safe check; returns false for out-of-range ids (including ACTION_NOT_FOUND).
    pub fn is_active(&self, action_id: ActionId) -> bool {
        if (action_id as usize) >= 64 {
            return false;
        }
        (self.digital_mask & (1u64 << action_id)) != 0
    }
}

/// Current tick's input plus the edge mask against the previous tick,
/// so game code can ask both "held?" and "pressed this tick?".
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub state: InputState,
    pub pressed: u64,
}

impl FrameInput {
    pub fn new(current: InputState, previous: InputState) -> Self {
        Self {
            state: current,
            pressed: current.digital_mask & !previous.digital_mask,
        }
    }

    pub fn held(&self, action_id: ActionId) -> bool {
        self.state.is_active(action_id)
    }

    pub fn pressed(&self, action_id: ActionId) -> bool {
        if (action_id as usize) >= 64 {
            return false;
        }
        (self.pressed & (1u64 << action_id)) != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_active_rejects_out_of_range_ids() {
        let state = InputState { digital_mask: u64::MAX };
        assert!(state.is_active(63));
        assert!(!state.is_active(64));
        assert!(!state.is_active(ACTION_NOT_FOUND));
    }

    #[test]
    fn pressed_is_edge_triggered() {
        let prev = InputState { digital_mask: 0b0101 };
        let curr = InputState { digital_mask: 0b0110 };
        let frame = FrameInput::new(curr, prev);

        assert!(frame.pressed(1)); // newly down
        assert!(!frame.pressed(2)); // still held
        assert!(frame.held(2));
        assert!(!frame.held(0)); // released
    }
}
