use winit::window::Window;

use rasterboard_core::Rgb;

use crate::device::{Gpu, GpuFrame, SurfaceErrorAction};
use crate::render::{RenderCtx, RenderTarget};

use super::app::AppControl;

/// Context for input callbacks.
///
/// Carries the drawable extent in physical pixels — the same space pointer
/// coordinates are reported in, and the extent the application should build
/// its canvas mapping from.
#[derive(Debug, Copy, Clone)]
pub struct EventCtx {
    pub surface_width: u32,
    pub surface_height: u32,
}

/// Per-frame context passed to [`super::App::on_frame`].
pub struct FrameCtx<'a, 'w> {
    pub(crate) window: &'a Window,
    pub(crate) gpu: &'a mut Gpu<'w>,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Renders one frame: wipes the target to `clear`, hands a ready
    /// [`RenderCtx`] and [`RenderTarget`] to `draw`, then presents.
    ///
    /// Surface trouble is triaged internally; only an unrecoverable failure
    /// propagates as [`AppControl::Exit`].
    pub fn render<F>(&mut self, clear: Rgb, draw: F) -> AppControl
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                return match self.gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => AppControl::Exit,
                    _ => AppControl::Continue,
                };
            }
        };

        clear_pass(&mut frame, clear);

        let rctx = RenderCtx {
            device: self.gpu.device(),
            queue: self.gpu.queue(),
            surface_format: self.gpu.surface_format(),
        };

        // The target borrows the frame's encoder; scoped so the frame can be
        // moved into submit() afterwards.
        {
            let mut target = RenderTarget {
                encoder: &mut frame.encoder,
                color_view: &frame.view,
            };
            draw(&rctx, &mut target);
        }

        self.window.pre_present_notify();
        self.gpu.submit(frame);

        AppControl::Continue
    }
}

/// Records a pass that clears the frame's color target.
fn clear_pass(frame: &mut GpuFrame, clear: Rgb) {
    let _rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some("rasterboard clear"),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: &frame.view,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(wgpu::Color {
                    r: clear.r as f64,
                    g: clear.g as f64,
                    b: clear.b as f64,
                    a: 1.0,
                }),
                store: wgpu::StoreOp::Store,
            },
            depth_slice: None,
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
        multiview_mask: None,
    });
}
