// crates/batarong_game/src/systems/player.rs

use batarong_shared::CPlayer;
use glam::Vec2;

use crate::state::{BASE_SPEED, JUMP_FORCE, MAX_SPRINT_ENERGY, SPRINT_DRAIN_RATE, SPRINT_MULTIPLIER, SPRINT_REGEN_RATE};

/// Movement intent for one tick, already decoded from the action mask.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveIntent {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub sprint_held: bool,
    /// Dialog with freeze_movement set blocks walking and jumping, but
    /// sprint energy still drains/regenerates as usual.
    pub frozen: bool,
    /// The gambling screen suspends the sprint model entirely: no drain,
    /// no regen, no state changes.
    pub sprint_locked: bool,
}

/// Horizontal movement, jumping and the sprint energy model.
pub fn apply_movement(player: &mut CPlayer, pos: &mut Vec2, intent: MoveIntent) {
    if !intent.sprint_locked {
        // Releasing sprint stops it and lets energy regenerate.
        if !intent.sprint_held {
            player.sprint_key_released = true;
            player.is_sprinting = false;
            player.sprint_energy =
                (player.sprint_energy + SPRINT_REGEN_RATE).min(MAX_SPRINT_ENERGY);
        }

        // Sprinting needs energy, and the key must have been released since
        // the bar last hit empty.
        if player.sprint_energy <= 0.0 {
            player.is_sprinting = false;
        } else if intent.sprint_held && player.sprint_key_released {
            player.is_sprinting = true;
            player.sprint_key_released = false;
        }

        if player.is_sprinting && (intent.left || intent.right) {
            player.sprint_energy = (player.sprint_energy - SPRINT_DRAIN_RATE).max(0.0);
        }
    }

    let speed = BASE_SPEED * if player.is_sprinting { SPRINT_MULTIPLIER } else { 1.0 };

    if !intent.frozen {
        if intent.jump && player.on_ground {
            player.velocity_y = JUMP_FORCE;
            player.on_ground = false;
        }
        if intent.left {
            pos.x -= speed;
            player.facing_left = true;
        }
        if intent.right {
            pos.x += speed;
            player.facing_left = false;
        }
    }
}

/// Game-over restart: back to spawn with motion and sprint reset.
/// Piwo count, gun and shop purchases survive.
pub fn reset_after_game_over(player: &mut CPlayer, pos: &mut Vec2) {
    *pos = crate::state::PLAYER_SPAWN;
    player.velocity_y = 0.0;
    player.on_ground = true;
    player.sprint_energy = MAX_SPRINT_ENERGY;
    player.is_sprinting = false;
    player.sprint_key_released = true;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> CPlayer {
        CPlayer::default()
    }

    #[test]
    fn sprint_doubles_speed_and_drains_energy() {
        let mut p = player();
        let mut pos = Vec2::ZERO;

        apply_movement(
            &mut p,
            &mut pos,
            MoveIntent { right: true, sprint_held: true, ..Default::default() },
        );

        assert_eq!(pos.x, BASE_SPEED * SPRINT_MULTIPLIER);
        assert_eq!(p.sprint_energy, MAX_SPRINT_ENERGY - SPRINT_DRAIN_RATE);
        assert!(p.facing_left == false);
    }

    #[test]
    fn sprint_does_not_restart_while_key_is_held_through_empty() {
        let mut p = player();
        p.sprint_energy = 0.0;
        p.sprint_key_released = false;
        let mut pos = Vec2::ZERO;

        apply_movement(
            &mut p,
            &mut pos,
            MoveIntent { right: true, sprint_held: true, ..Default::default() },
        );

        assert!(!p.is_sprinting);
        assert_eq!(pos.x, BASE_SPEED);
    }

    #[test]
    fn releasing_sprint_regenerates_energy() {
        let mut p = player();
        p.sprint_energy = 50.0;
        let mut pos = Vec2::ZERO;

        apply_movement(&mut p, &mut pos, MoveIntent::default());

        assert_eq!(p.sprint_energy, 50.0 + SPRINT_REGEN_RATE);
        assert!(p.sprint_key_released);
    }

    #[test]
    fn jump_requires_ground() {
        let mut p = player();
        p.on_ground = false;
        let mut pos = Vec2::ZERO;

        apply_movement(&mut p, &mut pos, MoveIntent { jump: true, ..Default::default() });
        assert_eq!(p.velocity_y, 0.0);

        p.on_ground = true;
        apply_movement(&mut p, &mut pos, MoveIntent { jump: true, ..Default::default() });
        assert_eq!(p.velocity_y, JUMP_FORCE);
        assert!(!p.on_ground);
    }

    #[test]
    fn frozen_dialog_blocks_walking_but_not_regen() {
        let mut p = player();
        p.sprint_energy = 10.0;
        let mut pos = Vec2::ZERO;

        apply_movement(
            &mut p,
            &mut pos,
            MoveIntent { left: true, jump: true, frozen: true, ..Default::default() },
        );

        assert_eq!(pos, Vec2::ZERO);
        assert_eq!(p.velocity_y, 0.0);
        assert_eq!(p.sprint_energy, 10.0 + SPRINT_REGEN_RATE);
    }

    #[test]
    fn locked_sprint_neither_drains_nor_regenerates() {
        let mut p = player();
        p.sprint_energy = 10.0;
        let mut pos = Vec2::ZERO;

        // Held but locked: no drain.
        apply_movement(
            &mut p,
            &mut pos,
            MoveIntent { sprint_held: true, sprint_locked: true, ..Default::default() },
        );
        assert_eq!(p.sprint_energy, 10.0);
        assert!(!p.is_sprinting);

        // Released but locked: no regen either.
        apply_movement(
            &mut p,
            &mut pos,
            MoveIntent { sprint_locked: true, ..Default::default() },
        );
        assert_eq!(p.sprint_energy, 10.0);
    }
}
