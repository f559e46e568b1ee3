//! Rasterboard engine crate.
//!
//! Owns the platform + GPU runtime pieces the plotting core is insulated
//! from: the winit window loop, wgpu device/surface management, input
//! translation, and the point-list renderer that displays plotted pixels.

pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod render;
pub mod window;
