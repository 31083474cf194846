// crates/batarong_shared/src/lib.rs

pub mod components;
pub mod game_api;
pub mod input_types;

pub use components::{CCamera, CNpc, CPiwo, CPlatform, CPlayer, CSprite, CTransform, NpcKind};
pub use game_api::{ActionLookup, GameLogic};
pub use input_types::{ActionId, FrameInput, InputState, ACTION_NOT_FOUND};

/// Logical screen size. The window, the sprite pass ortho projection and
/// every overlay coordinate all use this space.
pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 600.0;
