// crates/batarong_game/src/systems/camera.rs

use batarong_ecs::{Entity, World};
use batarong_shared::{CTransform, SCREEN_WIDTH};

/// Hard-follow scrolling camera: centered on the player's x, fixed in y.
pub fn follow_player(world: &mut World, camera: Entity, player: Entity) {
    let Some(player_x) = world.get_component::<CTransform>(player).map(|t| t.pos.x) else {
        return;
    };
    if let Some(cam) = world.get_component_mut::<CTransform>(camera) {
        cam.pos.x = player_x - SCREEN_WIDTH / 2.0;
    }
}
