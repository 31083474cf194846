// crates/batarong_game/src/systems/bullets.rs
//! Fixed-capacity bullet pool with a compacting active-index list, so the
//! per-tick update only touches live bullets.

use glam::Vec2;

use crate::state::{PLAYER_SIZE, SCREEN_MARGIN_BEHIND, SCREEN_MARGIN_AHEAD};

pub const MAX_BULLETS: usize = 10;
pub const BULLET_SPEED: f32 = 10.0;
pub const SHOOT_COOLDOWN: f32 = 0.25;

#[derive(Debug, Clone, Copy, Default)]
pub struct Bullet {
    pub pos: Vec2,
    pub active: bool,
    pub facing_left: bool,
}

pub struct BulletPool {
    bullets: [Bullet; MAX_BULLETS],
    active_indices: [usize; MAX_BULLETS],
    active_count: usize,
    cooldown: f32,
}

impl Default for BulletPool {
    fn default() -> Self {
        Self {
            bullets: [Bullet::default(); MAX_BULLETS],
            active_indices: [0; MAX_BULLETS],
            active_count: 0,
            cooldown: 0.0,
        }
    }
}

impl BulletPool {
    pub fn tick_cooldown(&mut self, dt: f32) {
        self.cooldown = (self.cooldown - dt).max(0.0);
    }

    /// Fire from the player's facing edge at mid-height. Returns false while
    /// the cooldown is running or the pool is exhausted.
    pub fn try_shoot(&mut self, player_pos: Vec2, facing_left: bool) -> bool {
        if self.cooldown > 0.0 {
            return false;
        }

        // Find first inactive slot
        let Some(slot) = self.bullets.iter().position(|b| !b.active) else {
            return false;
        };

        self.bullets[slot] = Bullet {
            pos: Vec2::new(
                player_pos.x + if facing_left { 0.0 } else { PLAYER_SIZE.x },
                player_pos.y + PLAYER_SIZE.y / 2.0,
            ),
            active: true,
            facing_left,
        };
        self.active_indices[self.active_count] = slot;
        self.active_count += 1;
        self.cooldown = SHOOT_COOLDOWN;
        true
    }

    /// Advance live bullets and cull the ones that left the camera window.
    /// Culling swap-removes from the index list, so the swapped-in entry is
    /// re-examined before the cursor advances.
    pub fn update(&mut self, camera_x: f32) {
        let mut i = 0;
        while i < self.active_count {
            let idx = self.active_indices[i];
            let bullet = &mut self.bullets[idx];

            bullet.pos.x += if bullet.facing_left { -BULLET_SPEED } else { BULLET_SPEED };

            if bullet.pos.x < camera_x - SCREEN_MARGIN_BEHIND
                || bullet.pos.x > camera_x + SCREEN_MARGIN_AHEAD
            {
                bullet.active = false;
                self.active_count -= 1;
                self.active_indices[i] = self.active_indices[self.active_count];
                continue;
            }
            i += 1;
        }
    }

    pub fn active_count(&self) -> usize {
        self.active_count
    }

    /// All slots, for syncing the render entities.
    pub fn slots(&self) -> &[Bullet; MAX_BULLETS] {
        &self.bullets
    }
}
