use tracing::warn;

use crate::math::{Point2, Vector2};
use crate::render::Renderer;

use super::style::PathStyle;

/// Cross arm length before the marked point, on each axis.
pub const CROSS_ARM_BEFORE: f64 = 4.0;

/// Cross arm length after the marked point, on each axis.
pub const CROSS_ARM_AFTER: f64 = 5.0;

/// Handle counts held by a path's drawing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawingSummary {
    /// The single-point cross marker is drawn.
    pub cross: bool,
    /// Number of segments between consecutive points.
    pub path_segments: usize,
    /// The segment closing the polygon from the last point to the first is drawn.
    pub closing: bool,
}

/// Lines currently drawn for a path, keyed by vertex count.
///
/// * `Empty`: no vertices.
/// * `Single`: one vertex, marked by a cross.
/// * `Chain`: `n >= 2` vertices, `n - 1` path segments, and a closing
///   segment iff `n >= 3`.
#[derive(Debug)]
pub(crate) enum Visuals<H> {
    Empty,
    Single { cross: [H; 2] },
    Chain { segments: Vec<H>, closing: Option<H> },
}

fn draw_cross<R: Renderer>(renderer: &mut R, style: &PathStyle, at: Point2) -> [R::Handle; 2] {
    let horizontal = renderer.draw_segment(
        at - Vector2::new(CROSS_ARM_BEFORE, 0.0),
        at + Vector2::new(CROSS_ARM_AFTER, 0.0),
        &style.virtual_color,
        style.z_order,
    );
    let vertical = renderer.draw_segment(
        at - Vector2::new(0.0, CROSS_ARM_BEFORE),
        at + Vector2::new(0.0, CROSS_ARM_AFTER),
        &style.virtual_color,
        style.z_order,
    );
    [horizontal, vertical]
}

fn erase_cross<R: Renderer>(renderer: &mut R, cross: [R::Handle; 2]) {
    let [horizontal, vertical] = cross;
    renderer.erase_segment(vertical);
    renderer.erase_segment(horizontal);
}

fn draw_path_segment<R: Renderer>(
    renderer: &mut R,
    style: &PathStyle,
    from: Point2,
    to: Point2,
) -> R::Handle {
    renderer.draw_segment(from, to, &style.path_color, style.z_order)
}

fn draw_closing<R: Renderer>(renderer: &mut R, style: &PathStyle, first: Point2, last: Point2) -> R::Handle {
    renderer.draw_segment(first, last, &style.virtual_color, style.z_order)
}

impl<H: Copy> Visuals<H> {
    /// Draws everything needed to show `vertices` from scratch.
    pub(crate) fn draw_all<R>(renderer: &mut R, style: &PathStyle, vertices: &[Point2]) -> Self
    where
        R: Renderer<Handle = H>,
    {
        match vertices {
            [] => Self::Empty,
            [only] => Self::Single {
                cross: draw_cross(renderer, style, *only),
            },
            [first, .., last] => {
                let segments = vertices
                    .windows(2)
                    .map(|pair| draw_path_segment(renderer, style, pair[0], pair[1]))
                    .collect();
                let closing =
                    (vertices.len() >= 3).then(|| draw_closing(renderer, style, *first, *last));
                Self::Chain { segments, closing }
            }
        }
    }

    /// Erases every line held.
    pub(crate) fn erase_all<R>(self, renderer: &mut R)
    where
        R: Renderer<Handle = H>,
    {
        match self {
            Self::Empty => {}
            Self::Single { cross } => erase_cross(renderer, cross),
            Self::Chain { segments, closing } => {
                if let Some(closing) = closing {
                    renderer.erase_segment(closing);
                }
                for segment in segments.into_iter().rev() {
                    renderer.erase_segment(segment);
                }
            }
        }
    }

    /// Updates the drawing after a point was appended; `vertices` already
    /// ends with the new point.
    pub(crate) fn after_push<R>(self, renderer: &mut R, style: &PathStyle, vertices: &[Point2]) -> Self
    where
        R: Renderer<Handle = H>,
    {
        match (self, vertices) {
            (Self::Empty, [only]) => Self::Single {
                cross: draw_cross(renderer, style, *only),
            },
            (Self::Single { cross }, [first, added]) => {
                erase_cross(renderer, cross);
                Self::Chain {
                    segments: vec![draw_path_segment(renderer, style, *first, *added)],
                    closing: None,
                }
            }
            (
                Self::Chain {
                    mut segments,
                    closing,
                },
                [first, .., previous, added],
            ) => {
                if let Some(closing) = closing {
                    renderer.erase_segment(closing);
                }
                let closing = draw_closing(renderer, style, *first, *added);
                segments.push(draw_path_segment(renderer, style, *previous, *added));
                Self::Chain {
                    segments,
                    closing: Some(closing),
                }
            }
            (out_of_step, _) => {
                warn!(vertices = vertices.len(), "drawing state out of step; redrawing path");
                out_of_step.erase_all(renderer);
                Self::draw_all(renderer, style, vertices)
            }
        }
    }

    /// Updates the drawing after the last point was removed; `vertices` no
    /// longer contains it.
    pub(crate) fn after_pop<R>(self, renderer: &mut R, style: &PathStyle, vertices: &[Point2]) -> Self
    where
        R: Renderer<Handle = H>,
    {
        match (self, vertices) {
            (Self::Single { cross }, []) => {
                erase_cross(renderer, cross);
                Self::Empty
            }
            (Self::Chain { segments, closing: None }, [only]) if segments.len() == 1 => {
                let cross = draw_cross(renderer, style, *only);
                for segment in segments {
                    renderer.erase_segment(segment);
                }
                Self::Single { cross }
            }
            (
                Self::Chain {
                    mut segments,
                    closing,
                },
                [first, .., last],
            ) => {
                if let Some(segment) = segments.pop() {
                    renderer.erase_segment(segment);
                }
                if let Some(closing) = closing {
                    renderer.erase_segment(closing);
                }
                let closing =
                    (vertices.len() >= 3).then(|| draw_closing(renderer, style, *first, *last));
                Self::Chain { segments, closing }
            }
            (out_of_step, _) => {
                warn!(vertices = vertices.len(), "drawing state out of step; redrawing path");
                out_of_step.erase_all(renderer);
                Self::draw_all(renderer, style, vertices)
            }
        }
    }

    pub(crate) fn summary(&self) -> DrawingSummary {
        match self {
            Self::Empty => DrawingSummary::default(),
            Self::Single { .. } => DrawingSummary {
                cross: true,
                ..DrawingSummary::default()
            },
            Self::Chain { segments, closing } => DrawingSummary {
                cross: false,
                path_segments: segments.len(),
                closing: closing.is_some(),
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::render::Canvas;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point2> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    #[test]
    fn cross_spans_four_before_five_after() {
        let mut canvas = Canvas::new();
        let style = PathStyle::default();
        let [h, v] = draw_cross(&mut canvas, &style, Point2::new(10.0, 20.0));

        let h = canvas.line(h).unwrap();
        assert_eq!((h.from, h.to), (Point2::new(6.0, 20.0), Point2::new(15.0, 20.0)));
        let v = canvas.line(v).unwrap();
        assert_eq!((v.from, v.to), (Point2::new(10.0, 16.0), Point2::new(10.0, 25.0)));
        assert_eq!(v.color, "Red");
    }

    #[test]
    fn draw_all_matches_vertex_count() {
        let style = PathStyle::default();
        let path = pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        for n in 0..=path.len() {
            let mut canvas = Canvas::new();
            let visuals = Visuals::draw_all(&mut canvas, &style, &path[..n]);
            let summary = visuals.summary();
            assert_eq!(summary.cross, n == 1);
            assert_eq!(summary.path_segments, n.saturating_sub(1));
            assert_eq!(summary.closing, n >= 3);

            let expected_lines = match n {
                0 => 0,
                1 => 2,
                2 => 1,
                _ => n,
            };
            assert_eq!(canvas.len(), expected_lines);

            visuals.erase_all(&mut canvas);
            assert!(canvas.is_empty());
        }
    }

    #[test]
    fn push_then_pop_through_every_state() {
        let style = PathStyle::default();
        let path = pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (-5.0, 5.0)]);
        let mut canvas = Canvas::new();
        let mut visuals = Visuals::Empty;

        for n in 1..=path.len() {
            visuals = visuals.after_push(&mut canvas, &style, &path[..n]);
            assert_eq!(visuals.summary(), Visuals::draw_all(&mut Canvas::new(), &style, &path[..n]).summary());
        }
        for n in (0..path.len()).rev() {
            visuals = visuals.after_pop(&mut canvas, &style, &path[..n]);
            assert_eq!(visuals.summary(), Visuals::draw_all(&mut Canvas::new(), &style, &path[..n]).summary());
        }
        assert!(matches!(visuals, Visuals::Empty));
        assert!(canvas.is_empty());
    }
}
