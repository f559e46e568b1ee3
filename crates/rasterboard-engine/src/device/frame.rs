/// One acquired frame: the surface texture, a view onto it, and the encoder
/// commands for it are recorded into.
///
/// Keep it short-lived — an unreleased surface texture blocks the next
/// acquisition. Hand it back through [`super::Gpu::submit`].
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
