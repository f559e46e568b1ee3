use crate::coords::{DevicePoint, Rgb};

/// Receiver for plotted pixels.
///
/// Implemented by the host's display backend. Calls are infallible at this
/// layer; display-level failures are the host's concern.
pub trait PixelSink {
    /// Wipes the canvas back to its at-rest state (a single cursor marker).
    ///
    /// Requested on every click before any accumulation and on every mode
    /// switch, so at most one shape is ever visible.
    fn clear(&mut self);

    /// Draws one point at the given device coordinate.
    fn submit(&mut self, p: DevicePoint, color: Rgb);
}
