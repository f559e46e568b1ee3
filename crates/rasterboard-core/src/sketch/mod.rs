//! Click-driven shape accumulation.
//!
//! Responsibilities:
//! - buffer clicked points until the active shape is complete
//! - dispatch rasterize → map → submit for every edge of a completed shape
//! - keep the pending buffer and mode transitions consistent
//!
//! The GPU-facing side is abstracted behind [`PixelSink`]; the host owns the
//! concrete implementation and the current color.

mod sink;
mod state;

pub use sink::PixelSink;
pub use state::{ShapeMode, Sketch};
