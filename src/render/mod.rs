//! Rendering abstraction layer
//!
//! The engine draws through [`RenderSink`]; the terminal frontend keeps a
//! [`Screen`] and paints it using a [`TileRenderer`] for the chosen mode.

pub mod display;
pub mod mode;
pub mod screen;
pub mod tilemap;

pub use display::{DisplayCode, NullSink, RecordingSink, RenderCall, RenderSink};
pub use mode::{RenderMode, detect_render_mode};
pub use screen::Screen;
pub use tilemap::TileRenderer;
