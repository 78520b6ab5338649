use slotmap::SlotMap;
use tracing::warn;

use super::Renderer;
use crate::math::Point2;

slotmap::new_key_type! {
    /// Handle of a line drawn on a [`Canvas`].
    pub struct LineHandle;
}

/// A line currently drawn on a [`Canvas`], with the pixels it lit.
#[derive(Debug, Clone)]
pub struct DrawnLine {
    pub from: Point2,
    pub to: Point2,
    pub color: String,
    pub z_order: i32,
    /// Pixels in stepping order, starting at `from`.
    pub pixels: Vec<(i64, i64)>,
    sequence: u64,
}

/// In-memory renderer that keeps every drawn line as a set of 1×1 pixels.
///
/// Handles are generational keys, so a handle is never valid again once its
/// line has been erased.
#[derive(Debug, Default)]
pub struct Canvas {
    lines: SlotMap<LineHandle, DrawnLine>,
    next_sequence: u64,
}

impl Canvas {
    /// Creates a new, empty canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of lines currently drawn.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if no line is drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns `true` if `handle` refers to a line that is still drawn.
    #[must_use]
    pub fn contains(&self, handle: LineHandle) -> bool {
        self.lines.contains_key(handle)
    }

    /// The line behind `handle`, if it is still drawn.
    #[must_use]
    pub fn line(&self, handle: LineHandle) -> Option<&DrawnLine> {
        self.lines.get(handle)
    }

    /// Iterates over the drawn lines in draw order.
    pub fn lines(&self) -> impl Iterator<Item = (LineHandle, &DrawnLine)> {
        let mut lines: Vec<_> = self.lines.iter().collect();
        lines.sort_by_key(|(_, line)| line.sequence);
        lines.into_iter()
    }

    /// Colour shown at pixel `(x, y)`: the line with the highest z-order
    /// covering it, the most recently drawn one among equals.
    #[must_use]
    pub fn pixel(&self, x: i64, y: i64) -> Option<&str> {
        self.lines
            .values()
            .filter(|line| line.pixels.contains(&(x, y)))
            .max_by_key(|line| (line.z_order, line.sequence))
            .map(|line| line.color.as_str())
    }
}

/// Longest line, in pixels, that a [`Canvas`] will step through. Longer or
/// non-finite lines are kept but light no pixels.
pub const MAX_LINE_PIXELS: usize = 1 << 20;

/// Steps along the segment one unit at a time and rounds each sample to a
/// pixel. The end point itself is only lit when the length is fractional.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn step_pixels(from: &Point2, to: &Point2) -> Vec<(i64, i64)> {
    let delta = to - from;
    let length = delta.norm();
    if !length.is_finite() || length > MAX_LINE_PIXELS as f64 {
        warn!(length, "line too long to rasterize, drawing no pixels");
        return Vec::new();
    }
    let steps = length.ceil() as usize;
    (0..steps)
        .map(|i| {
            let t = i as f64 / length;
            let p = from + delta * t;
            (p.x.round() as i64, p.y.round() as i64)
        })
        .collect()
}

impl Renderer for Canvas {
    type Handle = LineHandle;

    fn draw_segment(&mut self, from: Point2, to: Point2, color: &str, z_order: i32) -> LineHandle {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.lines.insert(DrawnLine {
            from,
            to,
            color: color.to_owned(),
            z_order,
            pixels: step_pixels(&from, &to),
            sequence,
        })
    }

    fn erase_segment(&mut self, handle: LineHandle) {
        if self.lines.remove(handle).is_none() {
            warn!(?handle, "erase of a line that is not drawn");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_line_lights_one_pixel_per_unit() {
        let mut canvas = Canvas::new();
        let h = canvas.draw_segment(Point2::new(2.0, 3.0), Point2::new(6.0, 3.0), "Red", 1);
        let line = canvas.line(h).unwrap();
        assert_eq!(line.pixels, vec![(2, 3), (3, 3), (4, 3), (5, 3)]);
        assert_eq!(canvas.pixel(4, 3), Some("Red"));
        assert_eq!(canvas.pixel(6, 3), None);
    }

    #[test]
    fn fractional_length_reaches_end() {
        let mut canvas = Canvas::new();
        let h = canvas.draw_segment(Point2::new(0.0, 0.0), Point2::new(3.0, 3.0), "Red", 1);
        let pixels = &canvas.line(h).unwrap().pixels;
        // Length 3·√2 ≈ 4.24 gives five samples.
        assert_eq!(pixels.len(), 5);
        assert_eq!(pixels[0], (0, 0));
        assert_eq!(*pixels.last().unwrap(), (3, 3));
    }

    #[test]
    fn zero_length_line_has_no_pixels() {
        let mut canvas = Canvas::new();
        let h = canvas.draw_segment(Point2::new(1.0, 1.0), Point2::new(1.0, 1.0), "Red", 1);
        assert!(canvas.line(h).unwrap().pixels.is_empty());
        assert_eq!(canvas.len(), 1);
    }

    #[test]
    fn overlong_lines_are_kept_without_pixels() {
        let mut canvas = Canvas::new();
        let far = canvas.draw_segment(Point2::new(-1e308, 0.0), Point2::new(1e308, 0.0), "Red", 1);
        assert!(canvas.line(far).unwrap().pixels.is_empty());

        let long = canvas.draw_segment(Point2::new(0.0, 0.0), Point2::new(1e10, 0.0), "Red", 1);
        assert!(canvas.line(long).unwrap().pixels.is_empty());
        assert_eq!(canvas.len(), 2);

        canvas.erase_segment(far);
        canvas.erase_segment(long);
        assert!(canvas.is_empty());
    }

    #[test]
    fn line_at_pixel_cap_is_stepped() {
        let mut canvas = Canvas::new();
        #[allow(clippy::cast_precision_loss)]
        let end = Point2::new(MAX_LINE_PIXELS as f64, 0.0);
        let h = canvas.draw_segment(Point2::new(0.0, 0.0), end, "Red", 1);
        assert_eq!(canvas.line(h).unwrap().pixels.len(), MAX_LINE_PIXELS);
    }

    #[test]
    fn erased_handles_are_not_reused() {
        let mut canvas = Canvas::new();
        let a = canvas.draw_segment(Point2::new(0.0, 0.0), Point2::new(5.0, 0.0), "Red", 1);
        canvas.erase_segment(a);
        assert!(!canvas.contains(a));
        assert!(canvas.is_empty());

        let b = canvas.draw_segment(Point2::new(0.0, 0.0), Point2::new(5.0, 0.0), "Red", 1);
        assert_ne!(a, b);
        assert!(!canvas.contains(a));
        assert!(canvas.contains(b));

        // Stale erase leaves the live line alone.
        canvas.erase_segment(a);
        assert_eq!(canvas.len(), 1);
    }

    #[test]
    fn pixel_prefers_higher_z_then_latest() {
        let mut canvas = Canvas::new();
        let from = Point2::new(0.0, 0.0);
        let to = Point2::new(3.0, 0.0);
        canvas.draw_segment(from, to, "Blue", 5);
        canvas.draw_segment(from, to, "Green", 1);
        assert_eq!(canvas.pixel(1, 0), Some("Blue"));
        canvas.draw_segment(from, to, "Yellow", 5);
        assert_eq!(canvas.pixel(1, 0), Some("Yellow"));
    }

    #[test]
    fn lines_iterate_in_draw_order() {
        let mut canvas = Canvas::new();
        let a = canvas.draw_segment(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), "A", 1);
        let b = canvas.draw_segment(Point2::new(0.0, 1.0), Point2::new(1.0, 1.0), "B", 1);
        let c = canvas.draw_segment(Point2::new(0.0, 2.0), Point2::new(1.0, 2.0), "C", 1);
        canvas.erase_segment(b);
        let order: Vec<_> = canvas.lines().map(|(h, _)| h).collect();
        assert_eq!(order, vec![a, c]);
    }
}
