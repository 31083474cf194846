// crates/batarong_game/src/lib.rs
//! Batarong gameplay: a side-scrolling platformer with piwo to collect, a
//! slot machine, a shop and Rays to talk to. The host engine drives this
//! through the `GameLogic` trait at a fixed 30 Hz.

pub mod config;
pub mod dialog;
pub mod minigames;
pub mod state;
pub mod systems;
pub mod ui;

use batarong_ecs::World;
use batarong_shared::{
    input_types::actions, ActionId, ActionLookup, CPlayer, CSprite, CTransform, FrameInput,
    GameLogic, ACTION_NOT_FOUND,
};
use glam::Vec2;
use rand::Rng;
use tracing::{info, warn};

use crate::config::CharacterBook;
use crate::dialog::{DialogRequest, DialogState};
use crate::minigames::gambling::GamblingState;
use crate::minigames::shop::{PurchaseOutcome, ShopState};
use crate::state::{Mode, SceneHandles, GUN_SIZE, PLAYER_SIZE};
use crate::systems::bullets::BulletPool;
use crate::systems::{camera, npc, physics, player};

const CONFIG_PATH: &str = "config/config.md";

const RAY_LINES: [&str; 4] = [
    "Hey Batarong, spare some piwo?",
    "The machine by the tree? Rigged. Obviously.",
    "I saw a guy win once. Never saw him again.",
    "Anyway. Jump around, collect piwo, stay alive.",
];

/// Action ids resolved once at load. Missing actions resolve to
/// `ACTION_NOT_FOUND`, which never matches a live bit.
#[derive(Clone, Copy)]
struct Actions {
    move_left: ActionId,
    move_right: ActionId,
    jump: ActionId,
    sprint: ActionId,
    shoot: ActionId,
    interact: ActionId,
    back: ActionId,
    pause: ActionId,
    restart: ActionId,
    talk: ActionId,
    bet_backspace: ActionId,
    digits: [ActionId; 10],
}

impl Actions {
    fn resolve(host: &dyn ActionLookup) -> Self {
        let id = |name: &str| {
            host.action_id(name).unwrap_or_else(|| {
                warn!(action = name, "action not registered");
                ACTION_NOT_FOUND
            })
        };
        let mut digits = [ACTION_NOT_FOUND; 10];
        for (i, name) in actions::DIGITS.iter().enumerate() {
            digits[i] = id(name);
        }
        Self {
            move_left: id(actions::MOVE_LEFT),
            move_right: id(actions::MOVE_RIGHT),
            jump: id(actions::JUMP),
            sprint: id(actions::SPRINT),
            shoot: id(actions::SHOOT),
            interact: id(actions::INTERACT),
            back: id(actions::BACK),
            pause: id(actions::PAUSE),
            restart: id(actions::RESTART),
            talk: id(actions::TALK),
            bet_backspace: id(actions::BET_BACKSPACE),
            digits,
        }
    }
}

pub struct BatarongGame {
    actions: Option<Actions>,
    scene: Option<SceneHandles>,
    mode: Mode,
    piwo_count: u64,
    has_gun: bool,
    bullets: BulletPool,
    gambling: GamblingState,
    shop: ShopState,
    dialog: DialogState,
    characters: CharacterBook,
}

impl Default for BatarongGame {
    fn default() -> Self {
        Self {
            actions: None,
            scene: None,
            mode: Mode::Playing,
            piwo_count: 0,
            has_gun: false,
            bullets: BulletPool::default(),
            gambling: GamblingState::default(),
            shop: ShopState::default(),
            dialog: DialogState::default(),
            characters: CharacterBook::default(),
        }
    }
}

impl BatarongGame {
    fn player_pos(&self, world: &World) -> Vec2 {
        self.scene
            .and_then(|scene| world.get_component::<CTransform>(scene.player))
            .map(|t| t.pos)
            .unwrap_or(Vec2::ZERO)
    }

    fn camera_x(&self, world: &World) -> f32 {
        self.scene
            .and_then(|scene| world.get_component::<CTransform>(scene.camera))
            .map(|t| t.pos.x)
            .unwrap_or(0.0)
    }

    /// Ray the player is standing next to, if any.
    fn nearby_ray(&self, world: &World, player_pos: Vec2) -> Option<usize> {
        let scene = self.scene?;
        scene
            .rays
            .iter()
            .position(|&ray| npc::is_near_entity(world, player_pos, ray))
    }

    fn start_ray_dialog(&mut self) {
        self.dialog.start(
            DialogRequest {
                lines: &RAY_LINES,
                speaker: Some("Ray"),
                portrait_key: Some("Ray"),
                freeze_movement: true,
                portrait_visible: true,
                speaker_visible: true,
            },
            &self.characters,
        );
    }

    fn handle_mode_input(&mut self, world: &World, input: &FrameInput) {
        let Some(scene) = self.scene else { return };
        let Some(a) = self.actions else { return };
        let player_pos = self.player_pos(world);

        match self.mode {
            Mode::Gambling => {
                for (digit, &id) in a.digits.iter().enumerate() {
                    if input.pressed(id) {
                        self.gambling.push_digit(digit as u8);
                    }
                }
                if input.pressed(a.bet_backspace) {
                    self.gambling.pop_digit();
                }
                if input.pressed(a.interact) {
                    self.gambling.try_start_spin(&mut self.piwo_count);
                }
                if input.pressed(a.back) {
                    self.gambling.close();
                    self.mode = Mode::Playing;
                }
            }
            Mode::Shopping { .. } => {
                for slot in 0..minigames::shop::SHOP_ITEM_COUNT {
                    if input.pressed(a.digits[slot + 1]) {
                        match self.shop.try_purchase(slot, &mut self.piwo_count) {
                            Some(PurchaseOutcome::Purchased { grants_gun }) => {
                                if grants_gun {
                                    self.has_gun = true;
                                }
                                info!(item = slot, "purchase");
                            }
                            Some(PurchaseOutcome::AlreadyOwned)
                            | Some(PurchaseOutcome::NotEnoughPiwo)
                            | None => {}
                        }
                    }
                }
                if input.pressed(a.back) {
                    self.mode = Mode::Playing;
                }
            }
            Mode::Playing => {
                if input.pressed(a.interact) {
                    if npc::is_near_entity(world, player_pos, scene.machine) {
                        self.mode = Mode::Gambling;
                    } else if let Some(ray) = self.nearby_ray(world, player_pos) {
                        self.mode = Mode::Shopping { ray };
                    }
                }
                if input.pressed(a.talk) {
                    if self.dialog.active() {
                        self.dialog.next();
                    } else if self.nearby_ray(world, player_pos).is_some() {
                        self.start_ray_dialog();
                    }
                }
                if input.held(a.shoot) && self.has_gun {
                    let facing_left = world
                        .get_component::<CPlayer>(scene.player)
                        .map(|p| p.facing_left)
                        .unwrap_or(false);
                    self.bullets.try_shoot(player_pos, facing_left);
                }
            }
            Mode::Paused | Mode::GameOver => {}
        }
    }

    fn step_player(&mut self, world: &mut World, input: &FrameInput) {
        let Some(scene) = self.scene else { return };
        let Some(a) = self.actions else { return };

        // The slot machine owns the keyboard; the shop does not stop you
        // from wandering off mid-browse.
        let movement_allowed = self.mode != Mode::Gambling;
        let intent = player::MoveIntent {
            left: movement_allowed && input.held(a.move_left),
            right: movement_allowed && input.held(a.move_right),
            jump: movement_allowed && input.held(a.jump),
            sprint_held: input.held(a.sprint),
            frozen: self.dialog.blocks_movement(),
            sprint_locked: !movement_allowed,
        };

        let Some(mut plr) = world.get_component::<CPlayer>(scene.player).copied() else {
            return;
        };
        let Some(mut pos) = world
            .get_component::<CTransform>(scene.player)
            .map(|t| t.pos)
        else {
            return;
        };

        player::apply_movement(&mut plr, &mut pos, intent);
        physics::apply_gravity(&mut plr, &mut pos);
        let platforms = physics::platform_positions(world);
        physics::resolve_platform_landing(&mut plr, &mut pos, &platforms);

        if let Some(stored) = world.get_component_mut::<CPlayer>(scene.player) {
            *stored = plr;
        }
        if let Some(stored) = world.get_component_mut::<CTransform>(scene.player) {
            stored.pos = pos;
        }

        if physics::fell_off_world(pos) {
            info!(piwo = self.piwo_count, "player fell, game over");
            self.mode = Mode::GameOver;
            return;
        }

        self.piwo_count += physics::collect_piwo(world, pos);
    }

    /// Mirror the gun and the bullet pool onto their render entities.
    fn sync_render_entities(&mut self, world: &mut World) {
        let Some(scene) = self.scene else { return };

        let player_pos = self.player_pos(world);
        let facing_left = world
            .get_component::<CPlayer>(scene.player)
            .map(|p| p.facing_left)
            .unwrap_or(false);

        let gun_x = if facing_left {
            player_pos.x - GUN_SIZE.x
        } else {
            player_pos.x + PLAYER_SIZE.x
        };
        if let Some(t) = world.get_component_mut::<CTransform>(scene.gun) {
            t.pos = Vec2::new(gun_x, player_pos.y + 20.0);
        }
        if let Some(s) = world.get_component_mut::<CSprite>(scene.gun) {
            s.visible = self.has_gun;
        }

        for (slot, &entity) in self.bullets.slots().iter().zip(scene.bullets.iter()) {
            if let Some(t) = world.get_component_mut::<CTransform>(entity) {
                t.pos = slot.pos;
            }
            if let Some(s) = world.get_component_mut::<CSprite>(entity) {
                s.visible = slot.active;
            }
        }
    }

    fn restart(&mut self, world: &mut World) {
        let Some(scene) = self.scene else { return };

        let Some(mut plr) = world.get_component::<CPlayer>(scene.player).copied() else {
            return;
        };
        let mut pos = self.player_pos(world);
        player::reset_after_game_over(&mut plr, &mut pos);
        if let Some(stored) = world.get_component_mut::<CPlayer>(scene.player) {
            *stored = plr;
        }
        if let Some(stored) = world.get_component_mut::<CTransform>(scene.player) {
            stored.pos = pos;
        }

        self.bullets = BulletPool::default();
        self.dialog.close();
        self.mode = Mode::Playing;
        info!("restart");
    }

    /// Contextual prompt for the HUD, or None away from everything.
    fn interaction_prompt(&self, world: &World) -> Option<&'static str> {
        if self.mode != Mode::Playing {
            return None;
        }
        let scene = self.scene?;
        let player_pos = self.player_pos(world);
        if npc::is_near_entity(world, player_pos, scene.machine) {
            Some("Press A to gamble")
        } else if self.nearby_ray(world, player_pos).is_some() {
            Some("Press A to shop, E to talk")
        } else {
            None
        }
    }
}

impl GameLogic for BatarongGame {
    fn on_load(&mut self, world: &mut World, host: &dyn ActionLookup) {
        self.actions = Some(Actions::resolve(host));
        self.scene = Some(state::setup_scene(world));

        self.characters = match CharacterBook::load(CONFIG_PATH) {
            Ok(book) => {
                info!(characters = book.len(), "character config loaded");
                book
            }
            Err(err) => {
                warn!(%err, path = CONFIG_PATH, "character config unavailable");
                CharacterBook::default()
            }
        };
    }

    fn update(&mut self, world: &mut World, input: &FrameInput, dt: f32) {
        let Some(a) = self.actions else { return };

        if input.pressed(a.pause) {
            match self.mode {
                Mode::Gambling => {
                    self.gambling.close();
                    self.mode = Mode::Playing;
                }
                Mode::Shopping { .. } => self.mode = Mode::Playing,
                Mode::Playing => self.mode = Mode::Paused,
                Mode::Paused => self.mode = Mode::Playing,
                Mode::GameOver => {}
            }
        }

        if self.mode == Mode::GameOver {
            if input.pressed(a.restart) {
                self.restart(world);
            }
            return;
        }
        if !self.mode.simulates() {
            return;
        }

        self.handle_mode_input(world, input);
        self.step_player(world, input);

        if let Some(scene) = self.scene {
            camera::follow_player(world, scene.camera, scene.player);
        }

        self.bullets.tick_cooldown(dt);
        self.bullets.update(self.camera_x(world));

        if self.mode == Mode::Gambling {
            self.gambling
                .tick(dt, &mut self.piwo_count, || {
                    rand::thread_rng().gen_range(1..=4)
                });
        }

        self.sync_render_entities(world);
    }

    fn draw_overlay(&self, ctx: &egui::Context, world: &World) {
        match self.mode {
            Mode::Gambling => ui::draw_gambling(ctx, &self.gambling, self.piwo_count),
            Mode::Shopping { .. } => ui::draw_shop(ctx, &self.shop, self.piwo_count),
            Mode::Paused => ui::draw_paused(ctx),
            Mode::GameOver => ui::draw_game_over(ctx, self.piwo_count),
            Mode::Playing => {
                let sprint_energy = self
                    .scene
                    .and_then(|scene| world.get_component::<CPlayer>(scene.player))
                    .map(|p| p.sprint_energy)
                    .unwrap_or(0.0);
                ui::draw_hud(
                    ctx,
                    self.piwo_count,
                    sprint_energy,
                    self.interaction_prompt(world),
                );
                ui::draw_dialog(ctx, &self.dialog);
            }
        }
    }
}
