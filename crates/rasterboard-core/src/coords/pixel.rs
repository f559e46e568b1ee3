/// Point in canvas pixel space (origin top-left, +Y down).
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
