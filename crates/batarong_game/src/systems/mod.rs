// crates/batarong_game/src/systems/mod.rs
pub mod bullets;
pub mod camera;
pub mod npc;
pub mod physics;
pub mod player;
