use rasterboard_core::{DevicePoint, PixelSink, Rgb};
use rasterboard_engine::render::PointVertex;

/// Retained point batch backing the canvas.
///
/// Implements [`PixelSink`]: rasterized pixels accumulate here and the whole
/// batch is uploaded and drawn in one call per frame, instead of one upload
/// and draw per pixel. `clear` resets the batch to the single at-rest cursor
/// marker at the device origin.
pub struct PointBatch {
    vertices: Vec<PointVertex>,
    marker_color: Rgb,
}

impl PointBatch {
    pub fn new() -> Self {
        let marker_color = Rgb::black();
        Self {
            vertices: vec![marker(marker_color)],
            marker_color,
        }
    }

    /// Recolors the at-rest marker (it always sits at index 0).
    pub fn set_marker_color(&mut self, color: Rgb) {
        self.marker_color = color;
        self.vertices[0] = marker(color);
    }

    pub fn vertices(&self) -> &[PointVertex] {
        &self.vertices
    }
}

impl PixelSink for PointBatch {
    fn clear(&mut self) {
        self.vertices.clear();
        self.vertices.push(marker(self.marker_color));
    }

    fn submit(&mut self, p: DevicePoint, color: Rgb) {
        self.vertices.push(PointVertex::new(p, color));
    }
}

fn marker(color: Rgb) -> PointVertex {
    PointVertex::new(DevicePoint::origin(), color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_a_black_marker_at_the_origin() {
        let batch = PointBatch::new();
        assert_eq!(batch.vertices().len(), 1);
        assert_eq!(batch.vertices()[0].position, [0.0, 0.0]);
        assert_eq!(batch.vertices()[0].color, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn clear_drops_submissions_but_keeps_the_marker() {
        let mut batch = PointBatch::new();
        batch.submit(DevicePoint::new(0.5, 0.5), Rgb::new(1.0, 0.0, 0.0));
        batch.submit(DevicePoint::new(-0.5, 0.5), Rgb::new(1.0, 0.0, 0.0));
        assert_eq!(batch.vertices().len(), 3);

        batch.clear();
        assert_eq!(batch.vertices().len(), 1);
        assert_eq!(batch.vertices()[0].position, [0.0, 0.0]);
    }

    #[test]
    fn marker_recolor_survives_clear() {
        let mut batch = PointBatch::new();
        batch.set_marker_color(Rgb::new(0.0, 0.0, 1.0));
        batch.clear();
        assert_eq!(batch.vertices()[0].color, [0.0, 0.0, 1.0]);
    }
}
