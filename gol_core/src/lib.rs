//! Conway's Game of Life as a decorative website backdrop.
//!
//! A small toroidal grid advances on a fixed cadence, reseeds itself whenever
//! it stagnates, and is painted through the [`Canvas`] trait in the colours of
//! the current [`Theme`]. Hosts drive the [`Renderer`] one frame at a time:
//! the eframe app in `gol_backdrop` does so from its update loop, and
//! [`FrameLoop`] does so from a tokio task.

pub mod canvas;
pub mod clock;
pub mod config;
pub mod frame_loop;
pub mod grid;
#[cfg(test)]
mod patterns;
pub mod prefs;
pub mod render;
pub mod renderer;
pub mod rules;
pub mod seed;
pub mod stagnation;
pub mod theme;
pub mod viewport;

pub use canvas::{Canvas, PixelCanvas, Rect, Segment};
pub use clock::AnimationClock;
pub use config::{BackdropConfig, ConfigError};
pub use frame_loop::{FrameHandle, FrameLoop, FrameLoopError, SignalSenders, Signals};
pub use grid::{Grid, GridError};
pub use prefs::{FileStore, MemoryStore, PreferenceError, PreferenceStore};
pub use render::render;
pub use renderer::{FrameOutcome, Renderer, RendererState, Transition};
pub use rules::step;
pub use seed::initialize;
pub use stagnation::{Advance, StagnationReason, advance_or_reseed};
pub use theme::{Palette, Rgb, Theme, ThemeError};
pub use viewport::ViewportPolicy;
