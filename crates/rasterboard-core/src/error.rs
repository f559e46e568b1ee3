use thiserror::Error;

/// Errors produced by this crate.
///
/// Rasterization itself is total: any pair of finite integer endpoints
/// terminates. The only failure mode is constructing a [`crate::Canvas`]
/// with a zero extent, which no live window can produce.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum DimensionError {
    #[error("canvas extent must be non-zero, got {width}x{height}")]
    ZeroExtent { width: u32, height: u32 },
}
