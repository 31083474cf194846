// crates/batarong_core/src/lib.rs

// Logic Modules
pub mod app;
pub mod input;
pub mod inspector;

// Internal Implementation Modules
mod engine_loop;
mod gui;
mod platform_runner;
mod renderer;

// Re-export App so the binary crate can find it easily
pub use app::App;
