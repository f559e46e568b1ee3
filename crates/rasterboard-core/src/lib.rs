//! Rasterization core for the rasterboard plotter.
//!
//! This crate owns the pieces that turn clicks into pixels:
//! - canvas-space / device-space coordinate types and the mapping between them
//! - the integer Bresenham line rasterizer
//! - the shape-accumulating interaction state machine
//!
//! It is deliberately free of GPU and windowing dependencies; the host feeds
//! it click coordinates and receives per-pixel draw requests through the
//! [`sketch::PixelSink`] seam.

pub mod coords;
pub mod error;
pub mod raster;
pub mod sketch;

pub use coords::{Canvas, DevicePoint, PixelPoint, Rgb};
pub use error::DimensionError;
pub use raster::line;
pub use sketch::{PixelSink, ShapeMode, Sketch};
