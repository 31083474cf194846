// crates/batarong_ecs/src/lib.rs
//! Minimal sparse-set ECS used by the Batarong host and game crates.

mod entity;
mod storage;
mod world;

pub use entity::Entity;
pub use storage::SparseSet;
pub use world::World;
