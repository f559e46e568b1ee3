//! GPU rendering subsystem.
//!
//! One renderer lives here: [`PointRenderer`], which draws a batch of
//! device-coordinate points in a single point-list draw call.
//!
//! Convention:
//! - vertex positions are normalized device coordinates, computed CPU-side
//! - colors are opaque RGB; the fragment shader forces alpha to one

mod ctx;
mod points;

pub use ctx::{RenderCtx, RenderTarget};
pub use points::{PointRenderer, PointVertex};
