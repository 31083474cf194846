// crates/batarong_game/src/minigames/mod.rs
pub mod gambling;
pub mod shop;
