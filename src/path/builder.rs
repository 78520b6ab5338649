use std::{fmt, mem};

use tracing::debug;

use super::style::PathStyle;
use super::visuals::{DrawingSummary, Visuals};
use crate::error::{PathError, Result};
use crate::math::Point2;
use crate::operations::{CheckPolygon, Rasterize, ScanSegment, Validity};
use crate::render::Renderer;

/// Builds a polygon one point at a time while showing it on a renderer.
///
/// The first point is marked with a small cross. From the second point on,
/// consecutive points are joined by path segments, and once there are three or
/// more points a closing segment runs from the first point to the last.
///
/// ```
/// use region_tracer::math::Point2;
/// use region_tracer::operations::Validity;
/// use region_tracer::path::PathBuilder;
/// use region_tracer::render::Canvas;
///
/// let mut path = PathBuilder::new();
/// path.attach(Canvas::new());
/// for (x, y) in [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)] {
///     path.add_point(Point2::new(x, y))?;
/// }
/// assert_eq!(path.check_polygon(), Validity::Valid);
/// assert_eq!(path.rasterize()?.len(), 10);
/// # Ok::<(), region_tracer::TracerError>(())
/// ```
pub struct PathBuilder<R: Renderer> {
    renderer: Option<R>,
    vertices: Vec<Point2>,
    visuals: Visuals<R::Handle>,
    style: PathStyle,
}

impl<R: Renderer + fmt::Debug> fmt::Debug for PathBuilder<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathBuilder")
            .field("renderer", &self.renderer)
            .field("vertices", &self.vertices)
            .field("drawing", &self.visuals.summary())
            .field("style", &self.style)
            .finish()
    }
}

impl<R: Renderer> Default for PathBuilder<R> {
    fn default() -> Self {
        Self::with_style(PathStyle::default())
    }
}

impl<R: Renderer> PathBuilder<R> {
    /// Creates an empty, unattached builder with the default style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty, unattached builder drawing with `style`.
    #[must_use]
    pub fn with_style(style: PathStyle) -> Self {
        Self {
            renderer: None,
            vertices: Vec::new(),
            visuals: Visuals::Empty,
            style,
        }
    }

    /// Binds the builder to `renderer`, returning the previously bound one.
    ///
    /// When replacing a renderer, the path's lines are erased from the old
    /// renderer and redrawn on the new one.
    pub fn attach(&mut self, renderer: R) -> Option<R> {
        let mut previous = self.renderer.replace(renderer);
        let visuals = mem::replace(&mut self.visuals, Visuals::Empty);
        if let Some(old) = previous.as_mut() {
            visuals.erase_all(old);
        }
        if let Some(current) = self.renderer.as_mut() {
            self.visuals = Visuals::draw_all(current, &self.style, &self.vertices);
        }
        debug!(
            replaced = previous.is_some(),
            vertices = self.vertices.len(),
            "renderer attached"
        );
        previous
    }

    /// Returns `true` if a renderer is bound.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.renderer.is_some()
    }

    /// The bound renderer, if any.
    #[must_use]
    pub fn renderer(&self) -> Option<&R> {
        self.renderer.as_ref()
    }

    /// Mutable access to the bound renderer, for drawing decorations that are
    /// not part of the path.
    pub fn renderer_mut(&mut self) -> Option<&mut R> {
        self.renderer.as_mut()
    }

    /// Appends `point` to the path and updates the drawing.
    ///
    /// # Errors
    ///
    /// Returns `PathError::NotAttached` if no renderer is bound.
    pub fn add_point(&mut self, point: Point2) -> Result<()> {
        let renderer = self.renderer.as_mut().ok_or(PathError::NotAttached)?;
        self.vertices.push(point);
        let visuals = mem::replace(&mut self.visuals, Visuals::Empty);
        self.visuals = visuals.after_push(renderer, &self.style, &self.vertices);
        debug!(x = point.x, y = point.y, vertices = self.vertices.len(), "point added");
        Ok(())
    }

    /// Removes the most recently added point, undoing exactly the drawing
    /// changes its addition made, and returns it.
    ///
    /// # Errors
    ///
    /// Returns `PathError::NotAttached` if no renderer is bound, or
    /// `PathError::EmptyPath` if there is no point to remove.
    pub fn remove_last_point(&mut self) -> Result<Point2> {
        let renderer = self.renderer.as_mut().ok_or(PathError::NotAttached)?;
        let removed = self.vertices.pop().ok_or(PathError::EmptyPath)?;
        let visuals = mem::replace(&mut self.visuals, Visuals::Empty);
        self.visuals = visuals.after_pop(renderer, &self.style, &self.vertices);
        debug!(x = removed.x, y = removed.y, vertices = self.vertices.len(), "point removed");
        Ok(removed)
    }

    /// Sets the colour of segments between consecutive points.
    pub fn set_path_line_color(&mut self, color: impl Into<String>) {
        self.style.path_color = color.into();
    }

    /// Sets the colour of the first-point cross and the closing segment.
    pub fn set_virtual_line_color(&mut self, color: impl Into<String>) {
        self.style.virtual_color = color.into();
    }

    /// Sets the stacking order used for every line drawn from now on.
    pub fn set_z_order(&mut self, z_order: i32) {
        self.style.z_order = z_order;
    }

    /// The colours and z-order applied to newly drawn lines.
    #[must_use]
    pub fn style(&self) -> &PathStyle {
        &self.style
    }

    /// Returns a copy of the vertices in insertion order.
    #[must_use]
    pub fn vertices(&self) -> Vec<Point2> {
        self.vertices.clone()
    }

    /// Number of vertices in the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if no point has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Which lines the builder currently holds on the renderer.
    #[must_use]
    pub fn drawing(&self) -> DrawingSummary {
        self.visuals.summary()
    }

    /// Checks whether the closed path is a simple polygon.
    #[must_use]
    pub fn check_polygon(&self) -> Validity {
        CheckPolygon::new(&self.vertices).execute()
    }

    /// Converts the closed path into horizontal pixel runs.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidPolygon` with the reason
    /// [`PathBuilder::check_polygon`] reports if the path is not a simple
    /// polygon.
    pub fn rasterize(&self) -> Result<Vec<ScanSegment>> {
        Rasterize::new(&self.vertices).execute()
    }
}
