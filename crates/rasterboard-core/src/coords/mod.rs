//! Coordinate and color types shared across the rasterizer and its hosts.
//!
//! Canvas space:
//! - integer pixels
//! - origin top-left
//! - +X right, +Y down
//!
//! Device space:
//! - `[-1, 1]` on both axes
//! - origin center
//! - +Y up
//!
//! The [`Canvas`] type carries the pixel extent and performs the canvas→device
//! mapping on demand; device points are never stored.

mod canvas;
mod color;
mod device;
mod pixel;

pub use canvas::Canvas;
pub use color::Rgb;
pub use device::DevicePoint;
pub use pixel::PixelPoint;
