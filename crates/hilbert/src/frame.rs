//! Geometry the drawing surface needs before any point is generated.

use crate::geometry::{Point, Vector};

/// Width and height of the area a curve occupies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    /// Horizontal size.
    pub width: f64,
    /// Vertical size.
    pub height: f64,
}

impl Extent {
    /// Integer pixel dimensions, truncating fractional sizes.
    pub fn pixel_size(&self) -> (u32, u32) {
        (self.width as u32, self.height as u32)
    }
}

/// First point of the rendered path: the centre of the smallest cell at `depth`.
///
/// Each coordinate is the largest absolute component of the matching vector
/// divided by `2^(depth + 1)`. For axis-aligned frames anchored at the origin
/// this is exactly the first point [`generate`](crate::curve::generate) emits,
/// so the path's move-to and its first vertex coincide.
pub fn starting_point(x_step: Vector, y_step: Vector, depth: u32) -> Point {
    let cells = 2f64.powf(f64::from(depth) + 1.0);
    Point::new(x_step.magnitude_max() / cells, y_step.magnitude_max() / cells)
}

/// Bounding size used to size the drawing surface.
pub fn canvas_extent(x_step: Vector, y_step: Vector) -> Extent {
    Extent {
        width: x_step.magnitude_max(),
        height: y_step.magnitude_max(),
    }
}
