//! Display-to-backing coordinate conversion.
//!
//! A surface may be shown at a different size than its pixel buffer
//! (responsive layout, high-density displays). Pointer events arrive in
//! display units and must be scaled into backing pixels before they mean
//! anything to the region selector.

use framer_model::geometry::{Point, Size};

/// Where a surface sits on screen and how big it is on screen and in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceMetrics {
    /// Top-left corner of the displayed surface, in the event coordinate space.
    pub origin: Point,
    /// Displayed size of the surface.
    pub display: Size,
    /// Size of the pixel buffer.
    pub backing: Size,
}

impl SurfaceMetrics {
    pub fn new(origin: Point, display: Size, backing: Size) -> Self {
        Self {
            origin,
            display,
            backing,
        }
    }

    /// A surface shown 1:1 at the origin.
    pub fn unscaled(backing: Size) -> Self {
        Self::new(Point::ORIGIN, backing, backing)
    }

    /// False until the surface has a non-zero displayed size.
    pub fn is_laid_out(&self) -> bool {
        self.display.has_area()
    }

    /// Convert an event position (same space as `origin`) to backing pixels.
    ///
    /// Returns `None` when the surface is not laid out yet.
    pub fn to_backing(&self, event: Point) -> Option<Point> {
        to_backing_coords(event - self.origin, self.display, self.backing)
    }
}

/// Scale a surface-relative event position into backing pixels.
///
/// X and Y scale independently (`backing / display`). Returns `None` when
/// either display dimension is zero or not finite, meaning there is no
/// surface to draw on yet.
pub fn to_backing_coords(event: Point, display: Size, backing: Size) -> Option<Point> {
    if !display.has_area() {
        let surface = display;
        tracing::trace!(?surface, "Ignoring pointer event on unsized surface");
        return None;
    }
    let scale_x = backing.width / display.width;
    let scale_y = backing.height / display.height;
    Some(Point::new(event.x * scale_x, event.y * scale_y))
}
