/// Outcome of triaging a failed frame acquisition.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// The surface was put back into a usable state; try again next frame.
    Recovered,
    /// Transient failure. Nothing to recover, nothing to present.
    SkipFrame,
    /// The GPU cannot continue (typically out of memory); shut down.
    Fatal,
}
