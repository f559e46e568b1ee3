/// Initialization parameters for the GPU layer.
///
/// Deliberately small: the point pipeline needs no optional features or
/// raised limits, so only surface behavior is configurable.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format when available.
    pub prefer_srgb: bool,

    /// Present mode (swap behavior). FIFO is broadly supported and right for
    /// an input-driven canvas.
    pub present_mode: wgpu::PresentMode,

    /// Desired maximum frame latency for the surface; a platform hint.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            desired_maximum_frame_latency: 2,
        }
    }
}
