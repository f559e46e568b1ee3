use crate::error::DimensionError;

use super::{DevicePoint, PixelPoint};

/// Canvas pixel extent, validated non-zero at construction.
///
/// Negative extents are unrepresentable by the `u32` fields; a zero extent is
/// rejected because the canvas→device mapping divides by both dimensions.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Result<Self, DimensionError> {
        if width == 0 || height == 0 {
            return Err(DimensionError::ZeroExtent { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(self) -> u32 {
        self.height
    }

    /// Maps a canvas pixel to normalized device coordinates.
    ///
    /// Pixel (0, 0) maps to the top-left device corner (-1, 1); the Y axis
    /// flips because pixel space grows downward while device space grows
    /// upward.
    #[inline]
    pub fn to_device(self, p: PixelPoint) -> DevicePoint {
        DevicePoint::new(
            (2.0 / self.width as f32) * p.x as f32 - 1.0,
            (-2.0 / self.height as f32) * p.y as f32 + 1.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas(w: u32, h: u32) -> Canvas {
        Canvas::new(w, h).unwrap()
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn zero_width_is_rejected() {
        assert_eq!(
            Canvas::new(0, 600),
            Err(DimensionError::ZeroExtent { width: 0, height: 600 })
        );
    }

    #[test]
    fn zero_height_is_rejected() {
        assert!(Canvas::new(800, 0).is_err());
    }

    // ── mapping ───────────────────────────────────────────────────────────

    #[test]
    fn top_left_maps_to_upper_left_corner() {
        let d = canvas(800, 600).to_device(PixelPoint::new(0, 0));
        assert_close(d.x, -1.0);
        assert_close(d.y, 1.0);
    }

    #[test]
    fn center_maps_to_origin() {
        let d = canvas(800, 600).to_device(PixelPoint::new(400, 300));
        assert_close(d.x, 0.0);
        assert_close(d.y, 0.0);
    }

    #[test]
    fn last_column_of_first_row() {
        // 799 on an 800-wide canvas lands one pixel step short of +1.
        let d = canvas(800, 600).to_device(PixelPoint::new(799, 0));
        assert_close(d.x, 0.9975);
        assert_close(d.y, 1.0);
    }

    #[test]
    fn x_is_strictly_increasing() {
        let c = canvas(640, 480);
        let mut prev = c.to_device(PixelPoint::new(0, 10)).x;
        for x in 1..640 {
            let cur = c.to_device(PixelPoint::new(x, 10)).x;
            assert!(cur > prev);
            prev = cur;
        }
    }

    #[test]
    fn y_is_strictly_decreasing() {
        let c = canvas(640, 480);
        let mut prev = c.to_device(PixelPoint::new(10, 0)).y;
        for y in 1..480 {
            let cur = c.to_device(PixelPoint::new(10, y)).y;
            assert!(cur < prev);
            prev = cur;
        }
    }
}
