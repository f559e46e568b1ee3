use crate::coords::{Canvas, PixelPoint, Rgb};
use crate::raster::line;

use super::sink::PixelSink;

/// Shape being collected by the sketch.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShapeMode {
    Segment,
    Triangle,
}

impl ShapeMode {
    /// Number of clicks that complete a shape in this mode.
    #[inline]
    pub fn arity(self) -> usize {
        match self {
            ShapeMode::Segment => 2,
            ShapeMode::Triangle => 3,
        }
    }
}

/// Click-accumulating interaction state machine.
///
/// Invariant: between calls, `pending.len()` is below the active mode's
/// arity; the completing click drains the buffer before returning.
///
/// Until a mode is selected, clicks accumulate without bound and nothing is
/// rasterized — there is no implicit default shape.
#[derive(Debug, Default)]
pub struct Sketch {
    mode: Option<ShapeMode>,
    pending: Vec<PixelPoint>,
}

impl Sketch {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn mode(&self) -> Option<ShapeMode> {
        self.mode
    }

    #[inline]
    pub fn pending(&self) -> &[PixelPoint] {
        &self.pending
    }

    /// Switches the active shape mode.
    ///
    /// Partially collected points are discarded without emission, and the
    /// canvas is reset so the next shape starts clean.
    pub fn set_mode<S: PixelSink>(&mut self, mode: ShapeMode, sink: &mut S) {
        self.pending.clear();
        self.mode = Some(mode);
        sink.clear();
    }

    /// Feeds one clicked point into the sketch.
    ///
    /// The canvas is cleared before the point is processed, matching the
    /// interaction model where only the shape being completed is visible.
    /// When the click completes the active shape, every edge is rasterized,
    /// mapped through `canvas`, and pushed to `sink` in `color`.
    pub fn click<S: PixelSink>(
        &mut self,
        p: PixelPoint,
        canvas: Canvas,
        color: Rgb,
        sink: &mut S,
    ) {
        sink.clear();
        self.pending.push(p);

        let Some(mode) = self.mode else {
            return;
        };
        if self.pending.len() < mode.arity() {
            return;
        }

        match mode {
            ShapeMode::Segment => {
                emit_edge(self.pending[0], self.pending[1], canvas, color, sink);
            }
            ShapeMode::Triangle => {
                let [a, b, c] = [self.pending[0], self.pending[1], self.pending[2]];
                emit_edge(a, b, canvas, color, sink);
                emit_edge(a, c, canvas, color, sink);
                emit_edge(b, c, canvas, color, sink);
            }
        }

        self.pending.clear();
    }
}

/// Rasterizes one edge and streams every pixel to the sink.
///
/// Endpoints shared between adjacent edges are submitted once per edge; the
/// overdraw is invisible and keeps each edge self-contained.
fn emit_edge<S: PixelSink>(
    p0: PixelPoint,
    p1: PixelPoint,
    canvas: Canvas,
    color: Rgb,
    sink: &mut S,
) {
    for pixel in line(p0, p1) {
        sink.submit(canvas.to_device(pixel), color);
    }
}
