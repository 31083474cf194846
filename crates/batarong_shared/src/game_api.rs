// crates/batarong_shared/src/game_api.rs
//! The seam between the platform host and the game.
//!
//! The host owns the window, the fixed-timestep loop, the renderer and the
//! raw input stack; the game is a `GameLogic` implementation it drives.

use batarong_ecs::World;

use crate::input_types::{ActionId, FrameInput};

/// Host-side action name resolution, handed to the game during `on_load`.
pub trait ActionLookup {
    fn action_id(&self, name: &str) -> Option<ActionId>;
}

pub trait GameLogic {
    /// Called once after the world exists. Register components, spawn the
    /// scene, resolve action ids.
    fn on_load(&mut self, world: &mut World, host: &dyn ActionLookup);

    /// One fixed simulation step.
    fn update(&mut self, world: &mut World, input: &FrameInput, dt: f32);

    /// Draw every overlay (HUD, modal screens, dialog) for the current frame.
    /// Runs inside the host's egui pass, after the sprite pass.
    fn draw_overlay(&self, ctx: &egui::Context, world: &World);
}
