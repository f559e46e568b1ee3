use crate::coords::PixelPoint;

/// Returns the pixels of the line from `p0` to `p1`, in traversal order.
///
/// Midpoint Bresenham over both slope regimes. The sequence always starts at
/// `p0` and ends at `p1` (it is never normalized left-to-right), has exactly
/// `max(|Δx|, |Δy|) + 1` elements, and collapses to `[p0]` when the endpoints
/// coincide.
#[inline]
pub fn line(p0: PixelPoint, p1: PixelPoint) -> LinePixels {
    LinePixels::new(p0, p1)
}

/// Iterator over the pixels of a line segment.
///
/// Stepping state:
/// - the driving axis (the one with the larger absolute delta) advances by
///   ±1 every iteration
/// - the other axis advances only when the decision variable goes
///   non-negative
///
/// Decision arithmetic is widened to i64 so the full i32 coordinate range is
/// handled without overflow.
#[derive(Debug, Clone)]
pub struct LinePixels {
    x: i32,
    y: i32,
    x_step: i32,
    y_step: i32,
    /// Decision variable, initialized to `2*minor - major`.
    decision: i64,
    /// Added while the decision stays negative: `2*minor`.
    inc_keep: i64,
    /// Added on a minor-axis step: `2*(minor - major)`.
    inc_step: i64,
    x_drives: bool,
    /// Points left to emit, including the current one.
    remaining: u64,
}

impl LinePixels {
    fn new(p0: PixelPoint, p1: PixelPoint) -> Self {
        let dx = (p1.x as i64 - p0.x as i64).abs();
        let dy = (p1.y as i64 - p0.y as i64).abs();
        let x_drives = dx >= dy;
        let (major, minor) = if x_drives { (dx, dy) } else { (dy, dx) };

        Self {
            x: p0.x,
            y: p0.y,
            x_step: if p1.x > p0.x { 1 } else { -1 },
            y_step: if p1.y > p0.y { 1 } else { -1 },
            decision: 2 * minor - major,
            inc_keep: 2 * minor,
            inc_step: 2 * (minor - major),
            x_drives,
            remaining: major as u64 + 1,
        }
    }

    fn advance(&mut self) {
        if self.x_drives {
            self.x += self.x_step;
            if self.decision < 0 {
                self.decision += self.inc_keep;
            } else {
                self.y += self.y_step;
                self.decision += self.inc_step;
            }
        } else {
            self.y += self.y_step;
            if self.decision < 0 {
                self.decision += self.inc_keep;
            } else {
                self.x += self.x_step;
                self.decision += self.inc_step;
            }
        }
    }
}

impl Iterator for LinePixels {
    type Item = PixelPoint;

    fn next(&mut self) -> Option<PixelPoint> {
        if self.remaining == 0 {
            return None;
        }

        let out = PixelPoint::new(self.x, self.y);

        // Pre-step for the next call; the final point must not step past p1.
        if self.remaining > 1 {
            self.advance();
        }
        self.remaining -= 1;

        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (n, Some(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> PixelPoint {
        PixelPoint::new(x, y)
    }

    fn collect(p0: PixelPoint, p1: PixelPoint) -> Vec<PixelPoint> {
        line(p0, p1).collect()
    }

    // ── degenerate ────────────────────────────────────────────────────────

    #[test]
    fn coincident_endpoints_yield_single_point() {
        assert_eq!(collect(p(5, 7), p(5, 7)), vec![p(5, 7)]);
    }

    // ── axis-aligned ──────────────────────────────────────────────────────

    #[test]
    fn horizontal_line_covers_every_column() {
        let pixels = collect(p(0, 0), p(799, 0));
        assert_eq!(pixels.len(), 800);
        assert!(pixels.iter().all(|q| q.y == 0));
        assert_eq!(pixels[0], p(0, 0));
        assert_eq!(pixels[799], p(799, 0));
    }

    #[test]
    fn vertical_line_covers_every_row() {
        let pixels = collect(p(3, 10), p(3, 0));
        assert_eq!(pixels.len(), 11);
        assert!(pixels.iter().all(|q| q.x == 3));
        assert_eq!(pixels[0], p(3, 10));
        assert_eq!(pixels[10], p(3, 0));
    }

    // ── diagonals ─────────────────────────────────────────────────────────

    #[test]
    fn exact_diagonal_steps_both_axes_every_iteration() {
        assert_eq!(
            collect(p(10, 10), p(13, 13)),
            vec![p(10, 10), p(11, 11), p(12, 12), p(13, 13)]
        );
    }

    #[test]
    fn reverse_diagonal() {
        assert_eq!(
            collect(p(2, 2), p(0, 0)),
            vec![p(2, 2), p(1, 1), p(0, 0)]
        );
    }

    // ── endpoint and length laws ──────────────────────────────────────────

    #[test]
    fn first_is_p0_last_is_p1_in_every_octant() {
        let targets = [
            p(9, 4), p(4, 9), p(-4, 9), p(-9, 4),
            p(-9, -4), p(-4, -9), p(4, -9), p(9, -4),
        ];
        for p1 in targets {
            let pixels = collect(p(0, 0), p1);
            assert_eq!(pixels[0], p(0, 0), "start for {p1:?}");
            assert_eq!(*pixels.last().unwrap(), p1, "end for {p1:?}");
        }
    }

    #[test]
    fn length_is_major_delta_plus_one() {
        let cases = [
            (p(0, 0), p(10, 3)),
            (p(0, 0), p(3, 10)),
            (p(5, 5), p(-2, 9)),
            (p(-7, 2), p(4, -8)),
            (p(1, 1), p(1, 1)),
        ];
        for (a, b) in cases {
            let major = (b.x - a.x).abs().max((b.y - a.y).abs()) as usize;
            assert_eq!(line(a, b).count(), major + 1, "length for {a:?}->{b:?}");
        }
    }

    #[test]
    fn size_hint_matches_emitted_count() {
        let it = line(p(0, 0), p(6, 2));
        assert_eq!(it.size_hint(), (7, Some(7)));
        assert_eq!(it.count(), 7);
    }

    // ── traversal shape ───────────────────────────────────────────────────

    #[test]
    fn shallow_line_steps_x_every_iteration() {
        let pixels = collect(p(0, 0), p(7, 3));
        let xs: Vec<i32> = pixels.iter().map(|q| q.x).collect();
        assert_eq!(xs, (0..=7).collect::<Vec<_>>());
        // Minor axis never jumps by more than one row at a time.
        for w in pixels.windows(2) {
            assert!((w[1].y - w[0].y).abs() <= 1);
        }
    }

    #[test]
    fn steep_line_steps_y_every_iteration() {
        let pixels = collect(p(0, 0), p(3, 9));
        let ys: Vec<i32> = pixels.iter().map(|q| q.y).collect();
        assert_eq!(ys, (0..=9).collect::<Vec<_>>());
        for w in pixels.windows(2) {
            assert!((w[1].x - w[0].x).abs() <= 1);
        }
    }

    #[test]
    fn order_follows_click_direction() {
        // Right-to-left input stays right-to-left; no normalization.
        let pixels = collect(p(10, 2), p(2, 0));
        assert_eq!(pixels[0], p(10, 2));
        assert_eq!(*pixels.last().unwrap(), p(2, 0));
        assert!(pixels.windows(2).all(|w| w[1].x < w[0].x));
    }

    // ── direction symmetry ────────────────────────────────────────────────

    #[test]
    fn tie_free_lines_cover_the_same_pixels_both_ways() {
        // Odd major/minor ratios never hit a zero decision value, so the
        // reversed traversal selects exactly the same pixel set.
        for (a, b) in [(p(0, 0), p(7, 3)), (p(0, 0), p(3, 9)), (p(4, 1), p(-3, 6))] {
            let mut forward = collect(a, b);
            let mut backward = collect(b, a);
            forward.sort_by_key(|q| (q.x, q.y));
            backward.sort_by_key(|q| (q.x, q.y));
            assert_eq!(forward, backward, "pixel set for {a:?}<->{b:?}");
        }
    }
}
