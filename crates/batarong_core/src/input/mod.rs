// crates/batarong_core/src/input/mod.rs
pub mod defaults;
pub mod map;
pub mod poller;
pub mod registry;

// Re-export core types to keep the API `crate::input::ActionRegistry`
pub use map::InputMap;
pub use poller::InputPoller;
pub use registry::ActionRegistry;
