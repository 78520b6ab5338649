mod canvas;

pub use canvas::{Canvas, DrawnLine, LineHandle, MAX_LINE_PIXELS};

use std::fmt::Debug;

use crate::math::Point2;

/// A surface that can draw straight line segments and erase them again.
///
/// The path builder only ever erases handles it received from
/// [`Renderer::draw_segment`] on the same renderer, and erases each at most once.
pub trait Renderer {
    /// Opaque identifier of a drawn segment.
    type Handle: Copy + Eq + Debug;

    /// Draws a segment from `from` to `to` and returns its handle.
    fn draw_segment(&mut self, from: Point2, to: Point2, color: &str, z_order: i32) -> Self::Handle;

    /// Erases a previously drawn segment.
    fn erase_segment(&mut self, handle: Self::Handle);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    type Handle = R::Handle;

    fn draw_segment(&mut self, from: Point2, to: Point2, color: &str, z_order: i32) -> Self::Handle {
        (**self).draw_segment(from, to, color, z_order)
    }

    fn erase_segment(&mut self, handle: Self::Handle) {
        (**self).erase_segment(handle);
    }
}
