// crates/batarong_game/src/systems/npc.rs

use batarong_ecs::{Entity, World};
use batarong_shared::CTransform;
use glam::Vec2;

use crate::state::{INTERACT_RANGE, NPC_SIZE, PLAYER_SIZE};

/// Center-to-center proximity test used for every interaction prompt:
/// both axis deltas must be under the interact range.
pub fn is_near(player_pos: Vec2, npc_pos: Vec2) -> bool {
    let player_center = player_pos + PLAYER_SIZE / 2.0;
    let npc_center = npc_pos + NPC_SIZE / 2.0;
    let delta = (player_center - npc_center).abs();
    delta.x < INTERACT_RANGE && delta.y < INTERACT_RANGE
}

pub fn is_near_entity(world: &World, player_pos: Vec2, npc: Entity) -> bool {
    world
        .get_component::<CTransform>(npc)
        .map(|t| is_near(player_pos, t.pos))
        .unwrap_or(false)
}
