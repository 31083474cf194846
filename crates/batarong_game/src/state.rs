// crates/batarong_game/src/state.rs
//! Scene layout, tuning constants and the mode machine.

use batarong_ecs::{Entity, World};
use batarong_shared::{CCamera, CNpc, CPiwo, CPlatform, CPlayer, CSprite, CTransform, NpcKind};
use glam::{Vec2, Vec4};

// Layout and physics constants. All speeds are per 30 Hz tick, in the
// y-down pixel space of the 800x600 logical screen.
pub const PLATFORM_SIZE: Vec2 = Vec2::new(100.0, 20.0);
pub const PLAYER_SIZE: Vec2 = Vec2::new(64.0, 64.0);
pub const PIWO_SIZE: Vec2 = Vec2::new(32.0, 32.0);
pub const NPC_SIZE: Vec2 = Vec2::new(64.0, 64.0);
pub const GUN_SIZE: Vec2 = Vec2::new(32.0, 32.0);
pub const BULLET_SIZE: Vec2 = Vec2::new(8.0, 4.0);

pub const GRAVITY: f32 = 1.0;
pub const JUMP_FORCE: f32 = -15.0;
pub const BASE_SPEED: f32 = 5.0;
pub const SPRINT_MULTIPLIER: f32 = 2.0;

pub const MAX_SPRINT_ENERGY: f32 = 100.0;
pub const SPRINT_DRAIN_RATE: f32 = 1.0;
pub const SPRINT_REGEN_RATE: f32 = 0.2;

pub const PLAYER_SPAWN: Vec2 = Vec2::new(300.0, 400.0);
pub const INTERACT_RANGE: f32 = 50.0;

// Bullets live a little past both screen edges before they are culled.
pub const SCREEN_MARGIN_BEHIND: f32 = 100.0;
pub const SCREEN_MARGIN_AHEAD: f32 = 900.0;

pub const PLATFORM_POSITIONS: [Vec2; 12] = [
    Vec2::new(100.0, 500.0),
    Vec2::new(300.0, 400.0),
    Vec2::new(500.0, 300.0),
    Vec2::new(200.0, 200.0),
    Vec2::new(300.0, 500.0),
    Vec2::new(400.0, 500.0),
    Vec2::new(500.0, 500.0),
    Vec2::new(500.0, 600.0),
    Vec2::new(500.0, 700.0),
    Vec2::new(600.0, 500.0),
    Vec2::new(700.0, 500.0),
    Vec2::new(400.0, 100.0),
];

pub const PIWO_POSITIONS: [Vec2; 10] = [
    Vec2::new(150.0, 450.0),
    Vec2::new(350.0, 350.0),
    Vec2::new(550.0, 250.0),
    Vec2::new(250.0, 150.0),
    Vec2::new(450.0, 50.0),
    Vec2::new(450.0, 51.0),
    Vec2::new(450.0, 52.0),
    Vec2::new(450.0, 53.0),
    Vec2::new(450.0, 54.0),
    Vec2::new(450.0, 55.0),
];

pub const GAMBLING_MACHINE_POS: Vec2 = Vec2::new(600.0, 430.0);
pub const RAY_POSITIONS: [Vec2; 3] = [
    Vec2::new(200.0, 430.0),
    Vec2::new(800.0, 430.0),
    Vec2::new(1200.0, 430.0),
];

/// Which screen owns this tick. Shopping remembers which Ray opened it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Playing,
    Paused,
    GameOver,
    Gambling,
    Shopping { ray: usize },
}

impl Mode {
    /// Physics, bullets and camera keep running behind the minigame screens;
    /// only pause and game over stop the world.
    pub fn simulates(&self) -> bool {
        !matches!(self, Mode::Paused | Mode::GameOver)
    }
}

/// Entities the game mutates every tick, captured at scene setup.
#[derive(Clone, Copy)]
pub struct SceneHandles {
    pub player: Entity,
    pub camera: Entity,
    pub gun: Entity,
    pub machine: Entity,
    pub rays: [Entity; 3],
    pub bullets: [Entity; crate::systems::bullets::MAX_BULLETS],
}

/// Spawns the whole level. Spawn order is draw order (back-to-front):
/// platforms, machine, piwo, NPCs, player, gun, bullets.
pub fn setup_scene(world: &mut World) -> SceneHandles {
    world.register_component::<CTransform>();
    world.register_component::<CSprite>();
    world.register_component::<CPlayer>();
    world.register_component::<CPlatform>();
    world.register_component::<CPiwo>();
    world.register_component::<CNpc>();
    world.register_component::<CCamera>();

    for pos in PLATFORM_POSITIONS {
        let platform = world.spawn();
        world.add_component(platform, CTransform { pos, ..Default::default() });
        world.add_component(
            platform,
            CSprite {
                color: Vec4::new(0.0, 1.0, 0.0, 1.0),
                size: PLATFORM_SIZE,
                visible: true,
            },
        );
        world.add_component(platform, CPlatform);
    }

    let machine = world.spawn();
    world.add_component(
        machine,
        CTransform { pos: GAMBLING_MACHINE_POS, ..Default::default() },
    );
    world.add_component(
        machine,
        CSprite {
            color: Vec4::new(0.6, 0.2, 0.8, 1.0),
            size: NPC_SIZE,
            visible: true,
        },
    );
    world.add_component(machine, CNpc { kind: NpcKind::GamblingMachine });

    for pos in PIWO_POSITIONS {
        let piwo = world.spawn();
        world.add_component(piwo, CTransform { pos, ..Default::default() });
        world.add_component(
            piwo,
            CSprite {
                color: Vec4::new(0.95, 0.75, 0.2, 1.0),
                size: PIWO_SIZE,
                visible: true,
            },
        );
        world.add_component(piwo, CPiwo::default());
    }

    let mut rays = [Entity::new(0, 0); 3];
    for (i, pos) in RAY_POSITIONS.iter().enumerate() {
        let ray = world.spawn();
        world.add_component(ray, CTransform { pos: *pos, ..Default::default() });
        world.add_component(
            ray,
            CSprite {
                color: Vec4::new(0.9, 0.45, 0.1, 1.0),
                size: NPC_SIZE,
                visible: true,
            },
        );
        world.add_component(ray, CNpc { kind: NpcKind::Ray });
        rays[i] = ray;
    }

    let player = world.spawn();
    world.add_component(player, CTransform { pos: PLAYER_SPAWN, ..Default::default() });
    world.add_component(
        player,
        CSprite {
            color: Vec4::new(0.85, 0.7, 0.5, 1.0),
            size: PLAYER_SIZE,
            visible: true,
        },
    );
    world.add_component(player, CPlayer::default());

    let gun = world.spawn();
    world.add_component(gun, CTransform::default());
    world.add_component(
        gun,
        CSprite {
            color: Vec4::new(0.3, 0.3, 0.3, 1.0),
            size: GUN_SIZE,
            visible: false,
        },
    );

    let mut bullets = [Entity::new(0, 0); crate::systems::bullets::MAX_BULLETS];
    for slot in bullets.iter_mut() {
        let bullet = world.spawn();
        world.add_component(bullet, CTransform::default());
        world.add_component(
            bullet,
            CSprite {
                color: Vec4::new(1.0, 1.0, 0.0, 1.0),
                size: BULLET_SIZE,
                visible: false,
            },
        );
        *slot = bullet;
    }

    let camera = world.spawn();
    world.add_component(camera, CTransform::default());
    world.add_component(camera, CCamera::default());

    SceneHandles {
        player,
        camera,
        gun,
        machine,
        rays,
        bullets,
    }
}
