//! Browser client for Pong
//!
//! Canvas 2D rendering, a DOM scoreboard and keyboard/pointer input wrapped
//! around the `game_core` simulation. The pure helpers build on any target;
//! the DOM wiring only on wasm32.

pub mod input;
pub mod scoreboard;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod renderer;

#[cfg(target_arch = "wasm32")]
pub use app::start;
#[cfg(target_arch = "wasm32")]
pub use renderer::CanvasRenderer;
