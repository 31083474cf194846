// crates/batarong_game/src/systems/physics.rs

use batarong_ecs::{Entity, World};
use batarong_shared::{CPiwo, CPlatform, CPlayer, CSprite, CTransform, SCREEN_HEIGHT};
use glam::Vec2;

use crate::state::{GRAVITY, PIWO_SIZE, PLATFORM_SIZE, PLAYER_SIZE};

/// Gravity only acts while airborne; landing zeroes the velocity.
pub fn apply_gravity(player: &mut CPlayer, pos: &mut Vec2) {
    if !player.on_ground {
        player.velocity_y += GRAVITY;
        pos.y += player.velocity_y;
    }
}

/// Landing test against the static platforms. Uses the predicted next y so a
/// fast fall cannot tunnel through a platform top; snaps onto the first hit.
/// Side and bottom contacts intentionally do not block.
pub fn resolve_platform_landing(player: &mut CPlayer, pos: &mut Vec2, platforms: &[Vec2]) {
    player.on_ground = false;
    let next_y = pos.y + player.velocity_y + GRAVITY;

    for platform in platforms {
        if pos.x < platform.x + PLATFORM_SIZE.x
            && pos.x + PLAYER_SIZE.x > platform.x
            && next_y + PLAYER_SIZE.y >= platform.y
            && next_y <= platform.y + PLATFORM_SIZE.y
        {
            pos.y = platform.y - PLAYER_SIZE.y;
            player.on_ground = true;
            player.velocity_y = 0.0;
            break;
        }
    }
}

pub fn fell_off_world(pos: Vec2) -> bool {
    pos.y > SCREEN_HEIGHT
}

/// Collect the platform top-left corners once per tick.
pub fn platform_positions(world: &World) -> Vec<Vec2> {
    let mut positions = Vec::new();
    if let Some(platforms) = world.query::<CPlatform>() {
        for (entity, _) in platforms.iter() {
            if let Some(transform) = world.get_component::<CTransform>(*entity) {
                positions.push(transform.pos);
            }
        }
    }
    positions
}

/// AABB pickup against every uncollected piwo. Marks them collected, hides
/// their sprite and returns how many were picked up this tick.
pub fn collect_piwo(world: &mut World, player_pos: Vec2) -> u64 {
    let mut hits: Vec<Entity> = Vec::new();

    if let Some(piwos) = world.query::<CPiwo>() {
        for (entity, piwo) in piwos.iter() {
            if piwo.collected {
                continue;
            }
            let Some(transform) = world.get_component::<CTransform>(*entity) else {
                continue;
            };
            let pos = transform.pos;
            if player_pos.x < pos.x + PIWO_SIZE.x
                && player_pos.x + PLAYER_SIZE.x > pos.x
                && player_pos.y < pos.y + PIWO_SIZE.y
                && player_pos.y + PLAYER_SIZE.y > pos.y
            {
                hits.push(*entity);
            }
        }
    }

    for entity in &hits {
        if let Some(piwo) = world.get_component_mut::<CPiwo>(*entity) {
            piwo.collected = true;
        }
        if let Some(sprite) = world.get_component_mut::<CSprite>(*entity) {
            sprite.visible = false;
        }
    }

    hits.len() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{setup_scene, JUMP_FORCE, PLAYER_SPAWN};

    #[test]
    fn gravity_accelerates_only_in_the_air() {
        let mut player = CPlayer { on_ground: true, ..Default::default() };
        let mut pos = Vec2::new(0.0, 100.0);

        apply_gravity(&mut player, &mut pos);
        assert_eq!(pos.y, 100.0);

        player.on_ground = false;
        apply_gravity(&mut player, &mut pos);
        apply_gravity(&mut player, &mut pos);
        // 1 then 2 px of fall
        assert_eq!(pos.y, 103.0);
        assert_eq!(player.velocity_y, 2.0);
    }

    #[test]
    fn falling_player_lands_on_platform_top() {
        let mut player = CPlayer {
            on_ground: false,
            velocity_y: 10.0,
            ..Default::default()
        };
        // Platform at (100, 500); player horizontally overlapping, just above.
        let mut pos = Vec2::new(120.0, 430.0);

        resolve_platform_landing(&mut player, &mut pos, &[Vec2::new(100.0, 500.0)]);

        assert!(player.on_ground);
        assert_eq!(player.velocity_y, 0.0);
        assert_eq!(pos.y, 500.0 - PLAYER_SIZE.y);
    }

    #[test]
    fn no_landing_without_horizontal_overlap() {
        let mut player = CPlayer {
            on_ground: false,
            velocity_y: 10.0,
            ..Default::default()
        };
        let mut pos = Vec2::new(300.0, 430.0);

        resolve_platform_landing(&mut player, &mut pos, &[Vec2::new(100.0, 500.0)]);

        assert!(!player.on_ground);
    }

    #[test]
    fn jump_arc_clears_and_returns_to_the_same_platform() {
        // Integrated mini-simulation: jump from a platform and land back.
        let platforms = [Vec2::new(100.0, 500.0)];
        let mut player = CPlayer::default();
        let mut pos = Vec2::new(120.0, 500.0 - PLAYER_SIZE.y);

        player.velocity_y = JUMP_FORCE;
        player.on_ground = false;

        for _ in 0..64 {
            apply_gravity(&mut player, &mut pos);
            resolve_platform_landing(&mut player, &mut pos, &platforms);
            if player.on_ground {
                break;
            }
        }

        assert!(player.on_ground);
        assert_eq!(pos.y, 500.0 - PLAYER_SIZE.y);
    }

    #[test]
    fn falling_below_the_window_is_game_over() {
        assert!(!fell_off_world(Vec2::new(0.0, 600.0)));
        assert!(fell_off_world(Vec2::new(0.0, 600.5)));
    }

    #[test]
    fn piwo_is_collected_once_and_hidden() {
        let mut world = batarong_ecs::World::new();
        setup_scene(&mut world);

        // First piwo sits at (150, 450); stand on it.
        let collected = collect_piwo(&mut world, Vec2::new(150.0, 440.0));
        assert_eq!(collected, 1);

        // Same spot again: already collected.
        let collected = collect_piwo(&mut world, Vec2::new(150.0, 440.0));
        assert_eq!(collected, 0);
    }

    #[test]
    fn player_spawn_overlaps_no_piwo() {
        let mut world = batarong_ecs::World::new();
        setup_scene(&mut world);
        assert_eq!(collect_piwo(&mut world, PLAYER_SPAWN), 0);
    }
}
